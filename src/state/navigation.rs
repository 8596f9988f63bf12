// ============================================================================
// NAVIGATION - Máquina de estados de pestañas y flujo de compra
// ============================================================================
// El estado se separa en pestaña activa, paso de compra y cartera (billete
// pendiente o activo). La pantalla a renderizar se deriva como un único
// `Screen`, que solo enumera combinaciones alcanzables.
// ============================================================================

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use crate::models::{ActiveTicketState, Operator, TicketConfig, TicketOffer};

/// Pestaña de la barra inferior
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Buy,
    Tickets,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Buy, Tab::Tickets, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Buy => "Buy",
            Tab::Tickets => "Tickets",
            Tab::Profile => "Profile",
        }
    }

    /// Identificador estable para ids/clases CSS
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Buy => "buy",
            Tab::Tickets => "tickets",
            Tab::Profile => "profile",
        }
    }
}

/// Paso dentro de la pestaña de compra
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuyStep {
    Operators,
    TicketSelection,
}

/// Paso lógico del flujo (operators → ticket_selection → activation → active_ticket)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowStep {
    Operators,
    TicketSelection,
    Activation,
    ActiveTicket,
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowStep::Operators => "operators",
            FlowStep::TicketSelection => "ticket_selection",
            FlowStep::Activation => "activation",
            FlowStep::ActiveTicket => "active_ticket",
        };
        f.write_str(name)
    }
}

/// Cartera: como mucho un billete pendiente o uno activo
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Wallet {
    #[default]
    Empty,
    Pending(TicketConfig),
    Active(ActiveTicketState),
}

/// Pantalla a renderizar
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    Operators,
    TicketSelection,
    /// Pestaña de billetes sin nada que activar
    NoTicket,
    Activation(&'a TicketConfig),
    ActiveTicket(&'a ActiveTicketState),
    Profile,
}

/// Discriminante de `Screen`, sin datos (para scopes de timers)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Operators,
    TicketSelection,
    NoTicket,
    Activation,
    ActiveTicket,
    Profile,
}

impl ScreenKind {
    /// Pantallas con reloj en vivo
    pub fn has_live_clock(&self) -> bool {
        matches!(self, ScreenKind::Activation | ScreenKind::ActiveTicket)
    }
}

impl<'a> Screen<'a> {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Operators => ScreenKind::Operators,
            Screen::TicketSelection => ScreenKind::TicketSelection,
            Screen::NoTicket => ScreenKind::NoTicket,
            Screen::Activation(_) => ScreenKind::Activation,
            Screen::ActiveTicket(_) => ScreenKind::ActiveTicket,
            Screen::Profile => ScreenKind::Profile,
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Screen::Operators | Screen::TicketSelection => Tab::Buy,
            Screen::NoTicket | Screen::Activation(_) | Screen::ActiveTicket(_) => Tab::Tickets,
            Screen::Profile => Tab::Profile,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Operators | Screen::TicketSelection => "Buy Ticket",
            Screen::NoTicket | Screen::Activation(_) => "Ticket Activation",
            Screen::ActiveTicket(_) => "Active Ticket",
            Screen::Profile => "Profile",
        }
    }

    pub fn has_back(&self) -> bool {
        matches!(
            self,
            Screen::TicketSelection | Screen::Activation(_) | Screen::ActiveTicket(_)
        )
    }

    /// El billete activo ocupa la pantalla completa
    pub fn shows_bottom_nav(&self) -> bool {
        !matches!(self, Screen::ActiveTicket(_))
    }
}

/// Transición rechazada
#[derive(Clone, Debug, PartialEq)]
pub enum NavError {
    UnsupportedOperator(String),
    OfferUnavailable(String),
    NoPendingTicket,
    InvalidTransition { action: &'static str, step: FlowStep },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnsupportedOperator(_) => {
                write!(f, "Demo limited to Bus Éireann (Route 115)")
            }
            NavError::OfferUnavailable(label) => {
                write!(f, "{} tickets are not available in this demo", label)
            }
            NavError::NoPendingTicket => write!(f, "No ticket ready for activation"),
            NavError::InvalidTransition { action, step } => {
                write!(f, "Cannot {} while at step {}", action, step)
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Estado de navegación completo
#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    tab: Tab,
    buy_step: BuyStep,
    wallet: Wallet,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    /// Estado inicial: pestaña de compra, lista de operadores, sin billetes
    pub fn new() -> Self {
        Self {
            tab: Tab::Buy,
            buy_step: BuyStep::Operators,
            wallet: Wallet::Empty,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn buy_step(&self) -> BuyStep {
        self.buy_step
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn pending_ticket(&self) -> Option<&TicketConfig> {
        match &self.wallet {
            Wallet::Pending(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn active_ticket(&self) -> Option<&ActiveTicketState> {
        match &self.wallet {
            Wallet::Active(active) => Some(active),
            _ => None,
        }
    }

    /// Paso lógico visible actualmente
    pub fn step(&self) -> FlowStep {
        match (&self.wallet, self.tab) {
            (Wallet::Active(_), _) => FlowStep::ActiveTicket,
            (Wallet::Pending(_), Tab::Tickets) => FlowStep::Activation,
            _ => match self.buy_step {
                BuyStep::Operators => FlowStep::Operators,
                BuyStep::TicketSelection => FlowStep::TicketSelection,
            },
        }
    }

    /// Pantalla a renderizar para el estado actual
    pub fn screen(&self) -> Screen<'_> {
        match self.tab {
            Tab::Buy => match self.buy_step {
                BuyStep::Operators => Screen::Operators,
                BuyStep::TicketSelection => Screen::TicketSelection,
            },
            Tab::Tickets => match &self.wallet {
                Wallet::Empty => Screen::NoTicket,
                Wallet::Pending(ticket) => Screen::Activation(ticket),
                Wallet::Active(active) => Screen::ActiveTicket(active),
            },
            Tab::Profile => Screen::Profile,
        }
    }

    /// Elegir operador. Solo el operador de la demo avanza el flujo.
    pub fn select_operator(&mut self, operator: &Operator) -> Result<(), NavError> {
        if !operator.supported {
            log::warn!("🚫 [NAV] Operador no soportado: {}", operator.name);
            return Err(NavError::UnsupportedOperator(operator.name.clone()));
        }
        if self.screen() != Screen::Operators {
            return Err(self.invalid("select operator"));
        }
        self.buy_step = BuyStep::TicketSelection;
        log::info!("🚌 [NAV] Operador {} → ticket_selection", operator.name);
        Ok(())
    }

    /// Elegir tarifa: queda pendiente de activación y se pasa a la pestaña de billetes
    pub fn select_offer(
        &mut self,
        offer: &TicketOffer,
        id: String,
        now: DateTime<Utc>,
    ) -> Result<&TicketConfig, NavError> {
        if self.screen() != Screen::TicketSelection || self.active_ticket().is_some() {
            return Err(self.invalid("select ticket"));
        }
        if !offer.available {
            log::warn!("🚫 [NAV] Tarifa no disponible: {}", offer.id);
            return Err(NavError::OfferUnavailable(offer.label.clone()));
        }

        let ticket = TicketConfig::from_offer(offer, id, now);
        log::info!("🎫 [NAV] Billete {} pendiente ({}) → activation", ticket.id, ticket.journey());
        self.wallet = Wallet::Pending(ticket);
        // La próxima visita a Buy empieza de nuevo por los operadores
        self.buy_step = BuyStep::Operators;
        self.tab = Tab::Tickets;

        self.pending_ticket().ok_or(NavError::NoPendingTicket)
    }

    /// Activar el billete pendiente: validez desde `now` hasta `now + validity`
    pub fn activate(
        &mut self,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Result<&ActiveTicketState, NavError> {
        let ticket = match std::mem::take(&mut self.wallet) {
            Wallet::Pending(ticket) => ticket,
            other => {
                self.wallet = other;
                log::warn!("🚫 [NAV] Activación sin billete pendiente");
                return Err(NavError::NoPendingTicket);
            }
        };

        let active = ActiveTicketState::activate(ticket, now, validity);
        log::info!(
            "✅ [NAV] Billete {} activado hasta {}",
            active.ticket.id,
            active.expires_at.to_rfc3339()
        );
        self.wallet = Wallet::Active(active);

        self.active_ticket().ok_or(NavError::NoPendingTicket)
    }

    /// Volver atrás desde la pantalla actual. Devuelve false si no hay a dónde volver.
    pub fn back(&mut self) -> bool {
        let kind = self.screen().kind();
        match kind {
            ScreenKind::TicketSelection => {
                self.buy_step = BuyStep::Operators;
            }
            ScreenKind::Activation => {
                self.buy_step = BuyStep::Operators;
                self.tab = Tab::Buy;
            }
            ScreenKind::ActiveTicket => {
                // La activación se descarta; el billete vuelve a estar pendiente
                if let Wallet::Active(active) = std::mem::take(&mut self.wallet) {
                    self.wallet = Wallet::Pending(active.into_ticket());
                }
            }
            ScreenKind::Operators | ScreenKind::NoTicket | ScreenKind::Profile => {
                return false;
            }
        }
        log::info!("↩️ [NAV] back → {}", self.step());
        true
    }

    /// Cambiar de pestaña. No toca ni el paso de compra ni la cartera.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            log::debug!("🗂️ [NAV] Pestaña {} → {}", self.tab.key(), tab.key());
            self.tab = tab;
        }
    }

    fn invalid(&self, action: &'static str) -> NavError {
        let step = self.step();
        log::warn!("🚫 [NAV] Transición inválida: {} en {}", action, step);
        NavError::InvalidTransition { action, step }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CatalogService;
    use chrono::TimeZone;

    fn catalog() -> CatalogService {
        CatalogService::new().unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 13, 16, 0, 0).unwrap()
    }

    fn at_ticket_selection(catalog: &CatalogService) -> Navigation {
        let mut nav = Navigation::new();
        nav.select_operator(catalog.demo_operator().unwrap()).unwrap();
        nav
    }

    fn at_activation(catalog: &CatalogService) -> Navigation {
        let mut nav = at_ticket_selection(catalog);
        let offer = catalog.offer("115-single-adult").unwrap();
        nav.select_offer(offer, "abc123xyz".to_string(), now()).unwrap();
        nav
    }

    #[test]
    fn starts_on_buy_operators() {
        let nav = Navigation::new();
        assert_eq!(nav.tab(), Tab::Buy);
        assert_eq!(nav.step(), FlowStep::Operators);
        assert_eq!(nav.screen(), Screen::Operators);
        assert_eq!(nav.wallet(), &Wallet::Empty);
    }

    #[test]
    fn unsupported_operators_leave_state_unchanged() {
        let catalog = catalog();
        let others: Vec<_> = catalog.operators().iter().filter(|op| !op.supported).collect();
        assert_eq!(others.len(), 6);

        for operator in others {
            let mut nav = Navigation::new();
            let before = nav.clone();
            let err = nav.select_operator(operator).unwrap_err();
            assert_eq!(err, NavError::UnsupportedOperator(operator.name.clone()));
            assert_eq!(err.to_string(), "Demo limited to Bus Éireann (Route 115)");
            assert_eq!(nav, before);
        }
    }

    #[test]
    fn demo_operator_moves_to_ticket_selection() {
        let catalog = catalog();
        let nav = at_ticket_selection(&catalog);
        assert_eq!(nav.step(), FlowStep::TicketSelection);
        assert_eq!(nav.tab(), Tab::Buy);
        assert_eq!(nav.screen(), Screen::TicketSelection);
    }

    #[test]
    fn selecting_offer_sets_pending_and_switches_to_tickets() {
        let catalog = catalog();
        let nav = at_activation(&catalog);
        let offer = catalog.offer("115-single-adult").unwrap();

        let pending = nav.pending_ticket().unwrap();
        assert_eq!(pending.id, "abc123xyz");
        assert_eq!(pending.origin, offer.origin);
        assert_eq!(pending.destination, offer.destination);
        assert_eq!(pending.operator, offer.operator);
        assert_eq!(pending.route, offer.route);
        assert_eq!(pending.price, offer.price);
        assert_eq!(pending.ticket_type, offer.ticket_type);
        assert_eq!(pending.purchased_at, now());
        assert_eq!(nav.step(), FlowStep::Activation);
        assert_eq!(nav.tab(), Tab::Tickets);
        assert!(matches!(nav.screen(), Screen::Activation(_)));
    }

    #[test]
    fn unavailable_offer_is_rejected() {
        let catalog = catalog();
        let mut nav = at_ticket_selection(&catalog);
        let before = nav.clone();
        let student = catalog.offer("115-student-yac").unwrap();
        let err = nav.select_offer(student, "x".to_string(), now()).unwrap_err();
        assert_eq!(err, NavError::OfferUnavailable("Student / YAC".to_string()));
        assert_eq!(nav, before);
    }

    #[test]
    fn offer_outside_ticket_selection_is_rejected() {
        let catalog = catalog();
        let mut nav = Navigation::new();
        let offer = catalog.offer("115-single-adult").unwrap();
        let err = nav.select_offer(offer, "x".to_string(), now()).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidTransition { action: "select ticket", step: FlowStep::Operators }
        );
        assert!(nav.pending_ticket().is_none());
    }

    #[test]
    fn activation_window_is_exactly_ninety_minutes() {
        let catalog = catalog();
        let mut nav = at_activation(&catalog);
        let active = nav.activate(now(), Duration::minutes(90)).unwrap();
        assert_eq!(active.activated_at, now());
        assert_eq!(active.expires_at, now() + Duration::minutes(90));
        assert_eq!(nav.step(), FlowStep::ActiveTicket);
        assert!(nav.pending_ticket().is_none());
        assert!(!nav.screen().shows_bottom_nav());
    }

    #[test]
    fn activation_without_pending_ticket_fails() {
        let mut nav = Navigation::new();
        assert_eq!(nav.activate(now(), Duration::minutes(90)).unwrap_err(), NavError::NoPendingTicket);
        assert_eq!(nav, Navigation::new());
    }

    #[test]
    fn activation_is_one_way() {
        let catalog = catalog();
        let mut nav = at_activation(&catalog);
        nav.activate(now(), Duration::minutes(90)).unwrap();
        let before = nav.clone();
        let later = now() + Duration::minutes(5);
        assert_eq!(nav.activate(later, Duration::minutes(90)).unwrap_err(), NavError::NoPendingTicket);
        assert_eq!(nav, before);
    }

    #[test]
    fn back_from_ticket_selection_returns_to_operators() {
        let catalog = catalog();
        let mut nav = at_ticket_selection(&catalog);
        assert!(nav.back());
        assert_eq!(nav.step(), FlowStep::Operators);
        assert_eq!(nav.tab(), Tab::Buy);
    }

    #[test]
    fn back_from_activation_returns_to_buy_operators() {
        let catalog = catalog();
        let mut nav = at_activation(&catalog);
        assert!(nav.back());
        assert_eq!(nav.step(), FlowStep::Operators);
        assert_eq!(nav.tab(), Tab::Buy);
        // El billete sigue pendiente en la pestaña de billetes
        assert!(nav.pending_ticket().is_some());
        nav.switch_tab(Tab::Tickets);
        assert!(matches!(nav.screen(), Screen::Activation(_)));
    }

    #[test]
    fn back_from_active_ticket_discards_activation() {
        let catalog = catalog();
        let mut nav = at_activation(&catalog);
        nav.activate(now(), Duration::minutes(90)).unwrap();
        assert!(nav.back());
        assert!(nav.active_ticket().is_none());
        assert_eq!(nav.step(), FlowStep::Activation);
        assert_eq!(nav.pending_ticket().unwrap().id, "abc123xyz");

        // Una nueva activación crea un estado nuevo, no revive el anterior
        let later = now() + Duration::minutes(10);
        let active = nav.activate(later, Duration::minutes(90)).unwrap();
        assert_eq!(active.activated_at, later);
    }

    #[test]
    fn back_is_noop_on_root_screens() {
        let mut nav = Navigation::new();
        assert!(!nav.back());
        nav.switch_tab(Tab::Profile);
        assert!(!nav.back());
        nav.switch_tab(Tab::Tickets);
        assert_eq!(nav.screen(), Screen::NoTicket);
        assert!(!nav.back());
    }

    #[test]
    fn tab_switch_keeps_flow_state() {
        let catalog = catalog();
        let mut nav = at_ticket_selection(&catalog);
        nav.switch_tab(Tab::Tickets);
        assert_eq!(nav.screen(), Screen::NoTicket);
        nav.switch_tab(Tab::Profile);
        assert_eq!(nav.screen(), Screen::Profile);
        nav.switch_tab(Tab::Buy);
        assert_eq!(nav.screen(), Screen::TicketSelection);
    }

    #[test]
    fn every_screen_matches_its_tab() {
        let catalog = catalog();
        let mut states = vec![Navigation::new(), at_ticket_selection(&catalog), at_activation(&catalog)];
        let mut active = at_activation(&catalog);
        active.activate(now(), Duration::minutes(90)).unwrap();
        states.push(active);

        for state in states {
            for tab in Tab::ALL {
                let mut nav = state.clone();
                nav.switch_tab(tab);
                assert_eq!(nav.screen().tab(), tab);
            }
        }
    }

    #[test]
    fn full_purchase_scenario() {
        let catalog = catalog();
        let mut nav = Navigation::new();
        assert_eq!((nav.tab(), nav.step()), (Tab::Buy, FlowStep::Operators));

        nav.select_operator(catalog.demo_operator().unwrap()).unwrap();
        let offer = catalog
            .offers()
            .iter()
            .find(|o| o.origin == "Liffey Valley SC" && o.destination == "Maynooth" && o.price == 1.20)
            .unwrap();
        nav.select_offer(offer, "k3j9x0a1b".to_string(), now()).unwrap();
        nav.activate(now(), Duration::minutes(90)).unwrap();

        assert_eq!(nav.tab(), Tab::Tickets);
        assert_eq!(nav.step(), FlowStep::ActiveTicket);
        let active = nav.active_ticket().unwrap();
        assert_eq!((active.expires_at - active.activated_at).num_milliseconds(), 5_400_000);
    }
}
