// ============================================================================
// SCREEN SCOPE - Timers ligados a la vida de una pantalla
// ============================================================================
// Interval/Timeout de gloo_timers se cancelan al soltarse (Drop). Al entrar en
// otra pantalla se reemplaza el scope y todos sus timers mueren con él.
// ============================================================================

use gloo_timers::callback::{Interval, Timeout};
use crate::state::navigation::ScreenKind;

#[derive(Default)]
pub struct ScreenScope {
    kind: Option<ScreenKind>,
    ticker: Option<Interval>,
    hold: Option<Timeout>,
}

impl ScreenScope {
    pub fn kind(&self) -> Option<ScreenKind> {
        self.kind
    }

    /// Entrar en una pantalla. Si es distinta de la actual, cancela los timers
    /// anteriores y devuelve true.
    pub fn enter(&mut self, kind: ScreenKind) -> bool {
        if self.kind == Some(kind) {
            return false;
        }
        log::debug!("⏱️ [SCOPE] {:?} → {:?}", self.kind, kind);
        *self = Self {
            kind: Some(kind),
            ..Self::default()
        };
        true
    }

    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Reloj repetitivo de la pantalla (reemplaza al anterior)
    pub fn set_ticker(&mut self, ticker: Interval) {
        self.ticker = Some(ticker);
    }

    pub fn has_hold(&self) -> bool {
        self.hold.is_some()
    }

    /// Espera de un solo disparo del botón de validación
    pub fn set_hold(&mut self, hold: Timeout) {
        self.hold = Some(hold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_same_screen_keeps_scope() {
        let mut scope = ScreenScope::default();
        assert_eq!(scope.kind(), None);
        assert!(scope.enter(ScreenKind::Activation));
        assert!(!scope.enter(ScreenKind::Activation));
        assert!(scope.enter(ScreenKind::ActiveTicket));
        assert_eq!(scope.kind(), Some(ScreenKind::ActiveTicket));
        assert!(!scope.has_ticker());
        assert!(!scope.has_hold());
    }
}
