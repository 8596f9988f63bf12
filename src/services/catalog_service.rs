// ============================================================================
// CATALOG SERVICE - Catálogo estático de operadores y tarifas
// ============================================================================
// El catálogo va embebido en el binario (assets/catalog.json) y se decodifica
// una sola vez al arrancar. No hay red ni persistencia.
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::{Operator, TicketOffer};

const CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub operators: Vec<Operator>,
    pub offers: Vec<TicketOffer>,
}

/// Servicio de catálogo (solo lectura)
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    /// Cargar el catálogo embebido
    pub fn new() -> Result<Self, String> {
        Self::from_json(CATALOG_JSON)
    }

    /// Decodificar y validar un catálogo
    pub fn from_json(json: &str) -> Result<Self, String> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| format!("Error parseando catálogo: {}", e))?;

        let supported = catalog.operators.iter().filter(|op| op.supported).count();
        if supported != 1 {
            return Err(format!(
                "El catálogo debe tener exactamente un operador soportado (tiene {})",
                supported
            ));
        }

        for offer in &catalog.offers {
            if !catalog.operators.iter().any(|op| op.name == offer.operator) {
                return Err(format!(
                    "La tarifa {} referencia un operador desconocido: {}",
                    offer.id, offer.operator
                ));
            }
        }

        log::debug!(
            "📚 [CATALOG] {} operadores, {} tarifas",
            catalog.operators.len(),
            catalog.offers.len()
        );

        Ok(Self { catalog })
    }

    pub fn operators(&self) -> &[Operator] {
        &self.catalog.operators
    }

    pub fn offers(&self) -> &[TicketOffer] {
        &self.catalog.offers
    }

    pub fn operator(&self, name: &str) -> Option<&Operator> {
        self.catalog.operators.iter().find(|op| op.name == name)
    }

    pub fn offer(&self, id: &str) -> Option<&TicketOffer> {
        self.catalog.offers.iter().find(|offer| offer.id == id)
    }

    /// El único operador funcional de la demo
    pub fn demo_operator(&self) -> Option<&Operator> {
        self.catalog.operators.iter().find(|op| op.supported)
    }

    /// Tarifas de un operador, en el orden del catálogo
    pub fn offers_for<'a>(&'a self, operator: &'a str) -> impl Iterator<Item = &'a TicketOffer> + 'a {
        self.catalog
            .offers
            .iter()
            .filter(move |offer| offer.operator == operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketType;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = CatalogService::new().unwrap();
        assert_eq!(catalog.operators().len(), 7);
        assert_eq!(catalog.demo_operator().unwrap().name, "Bus Éireann");
        assert_eq!(
            catalog.demo_operator().unwrap().route_badge.as_deref(),
            Some("Route 115")
        );
    }

    #[test]
    fn demo_offer_matches_route_115() {
        let catalog = CatalogService::new().unwrap();
        let offer = catalog.offer("115-single-adult").unwrap();
        assert_eq!(offer.origin, "Liffey Valley SC");
        assert_eq!(offer.destination, "Maynooth");
        assert_eq!(offer.price, 1.20);
        assert_eq!(offer.ticket_type, TicketType::Single);
        assert!(offer.available);

        let student = catalog.offer("115-student-yac").unwrap();
        assert!(!student.available);
        assert_eq!(catalog.offers_for("Bus Éireann").count(), 2);
        assert_eq!(catalog.offers_for("City Direct").count(), 0);
    }

    #[test]
    fn rejects_catalog_without_single_supported_operator() {
        let json = r#"{
            "operators": [
                { "name": "A", "logo_text": "A", "color_class": "x" },
                { "name": "B", "logo_text": "B", "color_class": "x" }
            ],
            "offers": []
        }"#;
        let err = CatalogService::from_json(json).unwrap_err();
        assert!(err.contains("exactamente un operador"));
    }

    #[test]
    fn rejects_offer_with_unknown_operator() {
        let json = r#"{
            "operators": [
                { "name": "A", "logo_text": "A", "color_class": "x", "supported": true }
            ],
            "offers": [
                {
                    "id": "z", "operator": "Z", "route": "1", "origin": "o",
                    "destination": "d", "price": 1.0, "type": "Return", "label": "l"
                }
            ]
        }"#;
        let err = CatalogService::from_json(json).unwrap_err();
        assert!(err.contains("operador desconocido"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(CatalogService::from_json("{").is_err());
    }
}
