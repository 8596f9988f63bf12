// ============================================================================
// CLOCK STATE - Reloj mostrado y herramientas de manipulación (solo demo)
// ============================================================================
// Los overrides solo afectan a lo que se muestra. El ActiveTicketState
// guardado en la navegación nunca se modifica.
// ============================================================================

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use crate::models::ActiveTicketState;

/// Valores crudos del formulario (tal como llegan de los inputs date/time)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TamperForm {
    pub date: String,
    pub time: String,
    pub expiry: String,
}

impl TamperForm {
    pub fn is_empty(&self) -> bool {
        self.date.trim().is_empty() && self.time.trim().is_empty() && self.expiry.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TamperError {
    InvalidDate(String),
    InvalidTime(String),
    /// La hora local no existe o es ambigua (cambio de horario)
    AmbiguousLocalTime,
}

impl fmt::Display for TamperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TamperError::InvalidDate(value) => write!(f, "Invalid date: {}", value),
            TamperError::InvalidTime(value) => write!(f, "Invalid time: {}", value),
            TamperError::AmbiguousLocalTime => write!(f, "Local time does not exist or is ambiguous"),
        }
    }
}

impl std::error::Error for TamperError {}

/// Reloj mostrado: desplazamiento respecto al reloj real + expiración forzada
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayClock {
    offset: Duration,
    expiry_override: Option<DateTime<Utc>>,
}

impl Default for DisplayClock {
    fn default() -> Self {
        Self {
            offset: Duration::zero(),
            expiry_override: None,
        }
    }
}

impl DisplayClock {
    /// Hora mostrada. Sigue avanzando desde el punto forzado.
    pub fn now(&self, real_now: DateTime<Utc>) -> DateTime<Utc> {
        real_now + self.offset
    }

    pub fn is_tampered(&self) -> bool {
        self.offset != Duration::zero() || self.expiry_override.is_some()
    }

    /// Expiración mostrada para el billete activo
    pub fn expires_at(&self, ticket: &ActiveTicketState) -> DateTime<Utc> {
        self.expiry_override.unwrap_or(ticket.expires_at)
    }

    /// Aplicar el formulario. Todo o nada: si un campo no parsea no cambia nada.
    ///
    /// - fecha + hora: el reloj salta a ese instante local
    /// - expiración: se cambian horas/minutos de la expiración mostrada
    ///   (y la fecha, si se indicó una)
    pub fn apply<Tz: TimeZone>(
        &mut self,
        form: &TamperForm,
        tz: &Tz,
        real_now: DateTime<Utc>,
        ticket: &ActiveTicketState,
    ) -> Result<(), TamperError> {
        let date = parse_date(&form.date)?;
        let time = parse_time(&form.time)?;
        let expiry = parse_time(&form.expiry)?;

        let offset = match (date, time) {
            (Some(date), Some(time)) => {
                let target = tz
                    .from_local_datetime(&date.and_time(time))
                    .single()
                    .ok_or(TamperError::AmbiguousLocalTime)?;
                Some(target.with_timezone(&Utc) - real_now)
            }
            _ => None,
        };

        let expiry_override = match expiry {
            Some(expiry) => {
                let current = self.expires_at(ticket).with_timezone(tz).naive_local();
                let day = date.unwrap_or(current.date());
                let local = day
                    .and_hms_opt(expiry.hour(), expiry.minute(), current.second())
                    .ok_or_else(|| TamperError::InvalidTime(form.expiry.clone()))?;
                let moved = tz
                    .from_local_datetime(&local)
                    .single()
                    .ok_or(TamperError::AmbiguousLocalTime)?;
                Some(moved.with_timezone(&Utc))
            }
            None => None,
        };

        if let Some(offset) = offset {
            log::info!("🕒 [TAMPER] Reloj desplazado {} s", offset.num_seconds());
            self.offset = offset;
        }
        if let Some(expiry) = expiry_override {
            log::info!("🕒 [TAMPER] Expiración mostrada → {}", expiry.to_rfc3339());
            self.expiry_override = Some(expiry);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, TamperError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TamperError::InvalidDate(value.to_string()))
}

/// Los inputs type=time dan "HH:MM" o "HH:MM:SS"
fn parse_time(value: &str) -> Result<Option<NaiveTime>, TamperError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| TamperError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TicketConfig, TicketType};

    fn real_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 13, 16, 0, 0).unwrap()
    }

    fn ticket() -> ActiveTicketState {
        let config = TicketConfig {
            id: "abc123xyz".to_string(),
            operator: "Bus Éireann".to_string(),
            route: "115".to_string(),
            origin: "Liffey Valley SC".to_string(),
            destination: "Maynooth".to_string(),
            price: 1.20,
            ticket_type: TicketType::Single,
            purchased_at: real_now(),
        };
        ActiveTicketState::activate(config, real_now(), Duration::minutes(90))
    }

    fn form(date: &str, time: &str, expiry: &str) -> TamperForm {
        TamperForm {
            date: date.to_string(),
            time: time.to_string(),
            expiry: expiry.to_string(),
        }
    }

    #[test]
    fn untouched_clock_shows_real_time_and_expiry() {
        let clock = DisplayClock::default();
        assert_eq!(clock.now(real_now()), real_now());
        assert_eq!(clock.expires_at(&ticket()), ticket().expires_at);
        assert!(!clock.is_tampered());
    }

    #[test]
    fn clock_override_keeps_flowing() {
        let mut clock = DisplayClock::default();
        clock
            .apply(&form("2024-10-14", "09:30", ""), &Utc, real_now(), &ticket())
            .unwrap();

        let forced = Utc.with_ymd_and_hms(2024, 10, 14, 9, 30, 0).unwrap();
        assert_eq!(clock.now(real_now()), forced);
        assert_eq!(clock.now(real_now() + Duration::seconds(5)), forced + Duration::seconds(5));
        assert_eq!(clock.expires_at(&ticket()), ticket().expires_at);
        assert!(clock.is_tampered());
    }

    #[test]
    fn time_without_date_does_not_move_clock() {
        let mut clock = DisplayClock::default();
        clock.apply(&form("", "09:30", ""), &Utc, real_now(), &ticket()).unwrap();
        assert_eq!(clock.now(real_now()), real_now());
    }

    #[test]
    fn expiry_override_replaces_hours_and_minutes() {
        let mut clock = DisplayClock::default();
        let ticket = ticket();
        clock.apply(&form("", "", "18:05"), &Utc, real_now(), &ticket).unwrap();
        assert_eq!(
            clock.expires_at(&ticket),
            Utc.with_ymd_and_hms(2024, 10, 13, 18, 5, 0).unwrap()
        );
        // El billete guardado no cambia
        assert_eq!(ticket.expires_at, Utc.with_ymd_and_hms(2024, 10, 13, 17, 30, 0).unwrap());
    }

    #[test]
    fn expiry_override_takes_override_date() {
        let mut clock = DisplayClock::default();
        clock
            .apply(&form("2024-12-01", "", "07:15:00"), &Utc, real_now(), &ticket())
            .unwrap();
        assert_eq!(
            clock.expires_at(&ticket()),
            Utc.with_ymd_and_hms(2024, 12, 1, 7, 15, 0).unwrap()
        );
    }

    #[test]
    fn malformed_input_changes_nothing() {
        let mut clock = DisplayClock::default();
        let err = clock
            .apply(&form("2024-10-14", "09:30", "25:99"), &Utc, real_now(), &ticket())
            .unwrap_err();
        assert_eq!(err, TamperError::InvalidTime("25:99".to_string()));
        assert_eq!(clock, DisplayClock::default());

        let err = clock
            .apply(&form("14/10/2024", "09:30", ""), &Utc, real_now(), &ticket())
            .unwrap_err();
        assert_eq!(err, TamperError::InvalidDate("14/10/2024".to_string()));
    }

    #[test]
    fn reset_clears_overrides() {
        let mut clock = DisplayClock::default();
        clock
            .apply(&form("2024-10-14", "09:30", "10:00"), &Utc, real_now(), &ticket())
            .unwrap();
        clock.reset();
        assert!(!clock.is_tampered());
        assert!(form("", " ", "").is_empty());
    }
}
