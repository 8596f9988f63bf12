// ============================================================================
// TICKET VIEWMODEL - LÓGICA DEL FLUJO DE COMPRA Y ACTIVACIÓN
// ============================================================================
// Traduce acciones de usuario en transiciones sobre AppState y notifica a los
// subscribers. No toca el DOM ni programa timers: eso lo hacen las vistas.
// ============================================================================

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use crate::config::CONFIG;
use crate::state::{
    AppState, NavError, PressOutcome, Screen, Tab, TamperError,
};
use crate::utils::generate_ticket_id;

/// Fuente de la hora actual
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reloj del sistema (Date.now() en WASM)
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// ViewModel del flujo de billetes
pub struct TicketViewModel<C: Clock = SystemClock> {
    state: AppState,
    clock: C,
    validity: Duration,
}

impl TicketViewModel<SystemClock> {
    pub fn new(state: AppState) -> Self {
        Self::with_clock(state, SystemClock, CONFIG.validity())
    }
}

impl<C: Clock> TicketViewModel<C> {
    pub fn with_clock(state: AppState, clock: C, validity: Duration) -> Self {
        Self {
            state,
            clock,
            validity,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Elegir operador por nombre
    pub fn select_operator(&self, name: &str) -> Result<(), NavError> {
        let operator = self
            .state
            .catalog
            .operator(name)
            .ok_or_else(|| NavError::UnsupportedOperator(name.to_string()))?;
        self.state.navigation.borrow_mut().select_operator(operator)?;
        self.state.notify_subscribers();
        Ok(())
    }

    /// Elegir tarifa por id; el billete queda pendiente de activación
    pub fn select_offer(&self, offer_id: &str) -> Result<(), NavError> {
        let offer = self
            .state
            .catalog
            .offer(offer_id)
            .ok_or_else(|| NavError::OfferUnavailable(offer_id.to_string()))?;
        {
            let mut navigation = self.state.navigation.borrow_mut();
            let ticket = navigation.select_offer(offer, generate_ticket_id(), self.clock.now())?;
            self.state.activation_ui.borrow_mut().bind(&ticket.id);
        }
        self.state.notify_subscribers();
        Ok(())
    }

    /// "Activate Now": pasar a la fase de confirmación
    pub fn start_activation(&self) {
        let changed = {
            let navigation = self.state.navigation.borrow();
            match navigation.screen() {
                Screen::Activation(ticket) => {
                    let mut ui = self.state.activation_ui.borrow_mut();
                    ui.bind(&ticket.id);
                    ui.confirm()
                }
                _ => false,
            }
        };
        if changed {
            log::info!("👆 [ACTIVATION] Fase de confirmación");
            self.state.notify_subscribers();
        }
    }

    /// Pulsar el botón de validación. Solo la primera pulsación cuenta hasta
    /// que termina la espera.
    pub fn press_hold(&self) -> PressOutcome {
        if self.state.navigation.borrow().pending_ticket().is_none() {
            return PressOutcome::Ignored;
        }
        let outcome = self.state.activation_ui.borrow_mut().button_mut().press();
        if outcome == PressOutcome::Started {
            log::debug!("👆 [ACTIVATION] Botón presionado");
        }
        outcome
    }

    /// Fin de la espera del botón: se confirma la activación
    pub fn complete_hold(&self) -> Result<(), NavError> {
        let was_pressed = self.state.activation_ui.borrow_mut().button_mut().complete();
        if !was_pressed {
            return Ok(());
        }
        self.activate()
    }

    /// Crear el ActiveTicketState a partir del billete pendiente
    pub fn activate(&self) -> Result<(), NavError> {
        self.state
            .navigation
            .borrow_mut()
            .activate(self.clock.now(), self.validity)?;
        self.state.notify_subscribers();
        Ok(())
    }

    pub fn back(&self) {
        let moved = self.state.navigation.borrow_mut().back();
        if moved {
            self.state.notify_subscribers();
        }
    }

    pub fn switch_tab(&self, tab: Tab) {
        let changed = {
            let mut navigation = self.state.navigation.borrow_mut();
            let before = navigation.tab();
            navigation.switch_tab(tab);
            before != tab
        };
        if changed {
            self.state.notify_subscribers();
        }
    }

    /// Abrir/cerrar el panel de manipulación
    pub fn toggle_tamper(&self) -> bool {
        let mut show = self.state.show_tamper.borrow_mut();
        *show = !*show;
        *self.state.tamper_error.borrow_mut() = None;
        *show
    }

    pub fn close_tamper(&self) {
        *self.state.show_tamper.borrow_mut() = false;
        *self.state.tamper_error.borrow_mut() = None;
    }

    /// Aplicar el formulario en la zona horaria local del navegador
    pub fn apply_tamper(&self) -> Result<(), TamperError> {
        self.apply_tamper_in(&Local)
    }

    pub fn apply_tamper_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<(), TamperError> {
        let result = {
            let navigation = self.state.navigation.borrow();
            let Some(ticket) = navigation.active_ticket() else {
                return Ok(());
            };
            let form = self.state.tamper_form.borrow();
            self.state
                .display_clock
                .borrow_mut()
                .apply(&form, tz, self.clock.now(), ticket)
        };

        match &result {
            Ok(()) => {
                *self.state.show_tamper.borrow_mut() = false;
                *self.state.tamper_error.borrow_mut() = None;
            }
            Err(e) => {
                log::warn!("⚠️ [TAMPER] Formulario rechazado: {}", e);
                *self.state.tamper_error.borrow_mut() = Some(e.to_string());
            }
        }
        self.state.notify_subscribers();
        result
    }

    /// Hora mostrada (con el desplazamiento del panel de manipulación)
    pub fn displayed_now(&self) -> DateTime<Utc> {
        self.state.display_clock.borrow().now(self.clock.now())
    }
}
