// Servicios: solo acceso a datos (aquí, el catálogo embebido)

pub mod catalog_service;

pub use catalog_service::{Catalog, CatalogService};
