// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::CatalogService;
use crate::state::{ActivationUi, DisplayClock, Navigation, ScreenKind, ScreenScope, TamperForm};

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de pantalla, de fase, etc.)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Texto del reloj en vivo
    LiveClock,
    /// Visibilidad del panel de manipulación
    TamperPanel,
    /// Estado visual del botón de validación
    HoldButton,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub catalog: Rc<CatalogService>,
    pub navigation: Rc<RefCell<Navigation>>,

    // Estado local de pantallas
    pub activation_ui: Rc<RefCell<ActivationUi>>,
    pub display_clock: Rc<RefCell<DisplayClock>>,
    pub show_tamper: Rc<RefCell<bool>>,
    pub tamper_form: Rc<RefCell<TamperForm>>,
    pub tamper_error: Rc<RefCell<Option<String>>>,

    // Timers de la pantalla actual
    pub scope: Rc<RefCell<ScreenScope>>,

    // Reactivity: Callbacks para notificar cambios (usamos Rc para poder compartir)
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog: Rc::new(catalog),
            navigation: Rc::new(RefCell::new(Navigation::new())),
            activation_ui: Rc::new(RefCell::new(ActivationUi::default())),
            display_clock: Rc::new(RefCell::new(DisplayClock::default())),
            show_tamper: Rc::new(RefCell::new(false)),
            tamper_form: Rc::new(RefCell::new(TamperForm::default())),
            tamper_error: Rc::new(RefCell::new(None)),
            scope: Rc::new(RefCell::new(ScreenScope::default())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Pantalla actual (sin datos)
    pub fn screen_kind(&self) -> ScreenKind {
        self.navigation.borrow().screen().kind()
    }

    /// Sincronizar el scope con la pantalla actual. Al cambiar de pantalla se
    /// cancelan los timers y se descarta el estado local de la anterior.
    pub fn enter_screen(&self) -> bool {
        let kind = self.screen_kind();
        if !self.scope.borrow_mut().enter(kind) {
            return false;
        }
        self.activation_ui.borrow_mut().reset();
        self.display_clock.borrow_mut().reset();
        *self.show_tamper.borrow_mut() = false;
        *self.tamper_form.borrow_mut() = TamperForm::default();
        *self.tamper_error.borrow_mut() = None;
        true
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        // Copiar la lista: un callback puede volver a suscribirse
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn state() -> AppState {
        AppState::new(CatalogService::new().unwrap())
    }

    #[test]
    fn subscribers_are_notified() {
        let state = state();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));
        state.notify_subscribers();
        state.notify_subscribers();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn entering_a_new_screen_discards_local_state() {
        let state = state();
        assert!(state.enter_screen());
        assert_eq!(state.screen_kind(), ScreenKind::Operators);

        *state.show_tamper.borrow_mut() = true;
        state.tamper_form.borrow_mut().date = "2024-10-14".to_string();
        assert!(!state.enter_screen());
        assert!(*state.show_tamper.borrow());

        state.navigation.borrow_mut().switch_tab(crate::state::Tab::Profile);
        assert!(state.enter_screen());
        assert!(!*state.show_tamper.borrow());
        assert!(state.tamper_form.borrow().is_empty());
    }
}
