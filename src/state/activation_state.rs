// ============================================================================
// ACTIVATION STATE - Estado local de la pantalla de activación
// ============================================================================

/// Fase de la pantalla de activación
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActivationPhase {
    /// Tarjeta del billete + botón "Activate Now"
    #[default]
    Overview,
    /// Botón circular de mantener pulsado
    Confirm,
}

/// Resultado de pulsar el botón de validación
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Primera pulsación: hay que programar el fin de la espera
    Started,
    /// Ya estaba pulsado, no hace nada
    Ignored,
}

/// Botón de mantener pulsado con espera de un solo disparo
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoldButton {
    pressed: bool,
}

impl HoldButton {
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Pulsar. Mientras está pulsado, las pulsaciones repetidas se ignoran.
    pub fn press(&mut self) -> PressOutcome {
        if self.pressed {
            return PressOutcome::Ignored;
        }
        self.pressed = true;
        PressOutcome::Started
    }

    /// Fin de la espera. Devuelve true solo si había una pulsación en curso.
    pub fn complete(&mut self) -> bool {
        std::mem::replace(&mut self.pressed, false)
    }
}

/// Estado de UI de la activación para el billete pendiente actual
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivationUi {
    phase: ActivationPhase,
    button: HoldButton,
    ticket_id: Option<String>,
}

impl ActivationUi {
    pub fn phase(&self) -> ActivationPhase {
        self.phase
    }

    pub fn button(&self) -> &HoldButton {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut HoldButton {
        &mut self.button
    }

    /// Asociar la UI al billete mostrado; si cambia el billete se reinicia
    pub fn bind(&mut self, ticket_id: &str) {
        if self.ticket_id.as_deref() != Some(ticket_id) {
            *self = Self {
                ticket_id: Some(ticket_id.to_string()),
                ..Self::default()
            };
        }
    }

    /// Overview → Confirm
    pub fn confirm(&mut self) -> bool {
        if self.phase == ActivationPhase::Confirm {
            return false;
        }
        self.phase = ActivationPhase::Confirm;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_presses_are_ignored_until_completion() {
        let mut button = HoldButton::default();
        assert_eq!(button.press(), PressOutcome::Started);
        assert_eq!(button.press(), PressOutcome::Ignored);
        assert_eq!(button.press(), PressOutcome::Ignored);
        assert!(button.is_pressed());

        assert!(button.complete());
        assert!(!button.is_pressed());
        // Una segunda finalización no vuelve a disparar
        assert!(!button.complete());

        assert_eq!(button.press(), PressOutcome::Started);
    }

    #[test]
    fn complete_without_press_does_nothing() {
        let mut button = HoldButton::default();
        assert!(!button.complete());
    }

    #[test]
    fn confirm_is_idempotent() {
        let mut ui = ActivationUi::default();
        assert_eq!(ui.phase(), ActivationPhase::Overview);
        assert!(ui.confirm());
        assert!(!ui.confirm());
        assert_eq!(ui.phase(), ActivationPhase::Confirm);
    }

    #[test]
    fn binding_a_new_ticket_resets_the_ui() {
        let mut ui = ActivationUi::default();
        ui.bind("aaa");
        ui.confirm();
        ui.button_mut().press();

        ui.bind("aaa");
        assert_eq!(ui.phase(), ActivationPhase::Confirm);
        assert!(ui.button().is_pressed());

        ui.bind("bbb");
        assert_eq!(ui.phase(), ActivationPhase::Overview);
        assert!(!ui.button().is_pressed());
    }
}
