use serde::{Deserialize, Serialize};

/// Operador de transporte del catálogo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operator {
    pub name: String,
    pub logo_text: String,
    pub color_class: String,
    /// Solo un operador funciona en la demo
    #[serde(default)]
    pub supported: bool,
    #[serde(default)]
    pub route_badge: Option<String>,
}
