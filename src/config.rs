use chrono::Duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    /// Ventana de validez tras la activación (minutos)
    pub ticket_validity_minutes: i64,
    /// Tiempo que el botón de validación queda presionado (ms)
    pub press_cooldown_ms: u32,
    /// Periodo del reloj en pantalla (ms)
    pub clock_tick_ms: u32,
    pub account_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            ticket_validity_minutes: 90,
            press_cooldown_ms: 3000,
            clock_tick_ms: 1000,
            account_email: "johnsmith@email.com".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("TICKET_VALIDITY_MINUTES"),
            option_env!("PRESS_COOLDOWN_MS"),
            option_env!("CLOCK_TICK_MS"),
            option_env!("ACCOUNT_EMAIL"),
        )
    }

    /// Construir desde valores crudos; lo que no parsea cae al valor por defecto
    fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        validity_minutes: Option<&str>,
        press_cooldown_ms: Option<&str>,
        clock_tick_ms: Option<&str>,
        account_email: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            ticket_validity_minutes: validity_minutes
                .and_then(|v| v.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(defaults.ticket_validity_minutes),
            press_cooldown_ms: press_cooldown_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.press_cooldown_ms),
            clock_tick_ms: clock_tick_ms
                .and_then(|v| v.parse().ok())
                .filter(|ms: &u32| *ms > 0)
                .unwrap_or(defaults.clock_tick_ms),
            account_email: account_email
                .map(str::to_string)
                .unwrap_or(defaults.account_email),
        }
    }

    /// Ventana de validez como Duration
    pub fn validity(&self) -> Duration {
        Duration::minutes(self.ticket_validity_minutes)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
