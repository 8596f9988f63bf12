// ============================================================================
// TFI GO TICKET MOCKUP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI sobre el estado
// - Services: Catálogo estático embebido
// - State: State Management con Rc<RefCell>
// - Models: Operadores, tarifas y billetes
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 TFI Go mockup - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                let needs_full_render = match *app_cell.borrow() {
                    Some(ref app) => match app.update_incremental(inc_type) {
                        Ok(()) => false,
                        Err(e) => {
                            log::debug!("🔄 [UPDATE] {:?} requiere re-render completo: {:?}", inc_type, e);
                            true
                        }
                    },
                    None => {
                        log::warn!("⚠️ [UPDATE] App no está inicializada");
                        false
                    }
                };

                if needs_full_render {
                    if let Some(ref mut app) = *app_cell.borrow_mut() {
                        if let Err(e) = app.render() {
                            log::error!("❌ Error re-renderizando: {:?}", e);
                        }
                    }
                }
            }
            UpdateType::FullRender => {
                match *app_cell.borrow_mut() {
                    Some(ref mut app) => {
                        if let Err(e) = app.render() {
                            log::error!("❌ Error re-renderizando: {:?}", e);
                        }
                    }
                    None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
                }
            }
        }
    });
}

/// Función pública WASM para re-renderizar la app (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
