use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    Single,
    Return,
}

impl TicketType {
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Single => "Single",
            TicketType::Return => "Return",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_available() -> bool {
    true
}

/// Tarifa comprable definida en el catálogo estático
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketOffer {
    pub id: String,
    pub operator: String,
    pub route: String,
    pub origin: String,
    pub destination: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub label: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Billete seleccionado, pendiente de activación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketConfig {
    pub id: String,
    pub operator: String,
    pub route: String,
    pub origin: String,
    pub destination: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub purchased_at: DateTime<Utc>,
}

impl TicketConfig {
    /// Sellar una oferta del catálogo con id y fecha de compra
    pub fn from_offer(offer: &TicketOffer, id: String, purchased_at: DateTime<Utc>) -> Self {
        Self {
            id,
            operator: offer.operator.clone(),
            route: offer.route.clone(),
            origin: offer.origin.clone(),
            destination: offer.destination.clone(),
            price: offer.price,
            ticket_type: offer.ticket_type,
            purchased_at,
        }
    }

    /// "Liffey Valley SC - Maynooth"
    pub fn journey(&self) -> String {
        format!("{} - {}", self.origin, self.destination)
    }
}

/// Billete activado. Se crea una sola vez, en el momento de la activación.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveTicketState {
    #[serde(flatten)]
    pub ticket: TicketConfig,
    pub activated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ActiveTicketState {
    pub fn activate(ticket: TicketConfig, now: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            ticket,
            activated_at: now,
            expires_at: now + validity,
        }
    }

    pub fn validity_window(&self) -> Duration {
        self.expires_at - self.activated_at
    }

    /// Devolver el billete sin activar (la activación se descarta)
    pub fn into_ticket(self) -> TicketConfig {
        self.ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offer() -> TicketOffer {
        TicketOffer {
            id: "115-single-adult".to_string(),
            operator: "Bus Éireann".to_string(),
            route: "115".to_string(),
            origin: "Liffey Valley SC".to_string(),
            destination: "Maynooth".to_string(),
            price: 1.20,
            ticket_type: TicketType::Single,
            label: "Single Adult".to_string(),
            note: None,
            available: true,
        }
    }

    #[test]
    fn config_copies_offer_fields() {
        let at = Utc.with_ymd_and_hms(2024, 10, 13, 16, 0, 0).unwrap();
        let config = TicketConfig::from_offer(&offer(), "abc123xyz".to_string(), at);
        assert_eq!(config.origin, "Liffey Valley SC");
        assert_eq!(config.destination, "Maynooth");
        assert_eq!(config.route, "115");
        assert_eq!(config.price, 1.20);
        assert_eq!(config.ticket_type, TicketType::Single);
        assert_eq!(config.purchased_at, at);
        assert_eq!(config.journey(), "Liffey Valley SC - Maynooth");
    }

    #[test]
    fn activation_sets_ninety_minute_window() {
        let at = Utc.with_ymd_and_hms(2024, 10, 13, 16, 0, 0).unwrap();
        let config = TicketConfig::from_offer(&offer(), "abc123xyz".to_string(), at);
        let active = ActiveTicketState::activate(config.clone(), at, Duration::minutes(90));
        assert_eq!(active.expires_at, Utc.with_ymd_and_hms(2024, 10, 13, 17, 30, 0).unwrap());
        assert_eq!(active.validity_window().num_milliseconds(), 5_400_000);
        assert_eq!(active.into_ticket(), config);
    }

    #[test]
    fn active_ticket_serializes_flat() {
        let at = Utc.with_ymd_and_hms(2024, 10, 13, 16, 0, 0).unwrap();
        let config = TicketConfig::from_offer(&offer(), "abc123xyz".to_string(), at);
        let active = ActiveTicketState::activate(config, at, Duration::minutes(90));
        let json = serde_json::to_value(&active).unwrap();
        assert_eq!(json["type"], "Single");
        assert_eq!(json["origin"], "Liffey Valley SC");
        assert!(json["expires_at"].as_str().unwrap().starts_with("2024-10-13T17:30:00"));
    }
}
