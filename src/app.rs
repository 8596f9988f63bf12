// ============================================================================
// APP - Aplicación principal
// ============================================================================

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use web_sys::{console, Element};
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::dom::incremental::*;
use crate::services::CatalogService;
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let catalog = CatalogService::new().map_err(|e| JsValue::from_str(&e))?;
        log::info!(
            "📚 [APP] Catálogo cargado: {} operadores, {} tarifas",
            catalog.operators().len(),
            catalog.offers().len()
        );
        let state = AppState::new(catalog);

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Timeout 0 para batchear varios updates del mismo evento
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        let Some(root) = &self.root else {
            return Ok(());
        };

        // Cambio de pantalla: cancelar timers de la anterior antes de pintar
        if self.state.enter_screen() {
            let kind = self.state.screen_kind();
            log::debug!("🖼️ [APP] Nueva pantalla: {:?}", kind);
            if kind.has_live_clock() {
                self.start_clock_ticker();
            }
        }

        // Limpiar contenido anterior
        set_inner_html(root, "");

        let app_view = render_app(&self.state)?;
        append_child(root, &app_view)?;
        console::log_1(&JsValue::from_str("✅ [APP] Render completado"));
        Ok(())
    }

    /// Reloj de la pantalla actual; vive en el scope y muere con ella
    fn start_clock_ticker(&self) {
        let state = self.state.clone();
        let ticker = Interval::new(CONFIG.clock_tick_ms, move || {
            if let Err(e) = update_live_clock(&state) {
                log::warn!("⚠️ [CLOCK] Error actualizando reloj: {:?}", e);
            }
        });
        self.state.scope.borrow_mut().set_ticker(ticker);
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::LiveClock => update_live_clock(&self.state),
            IncrementalUpdate::TamperPanel => update_tamper_visibility(&self.state),
            IncrementalUpdate::HoldButton => update_hold_button(&self.state),
        }
    }
}
