//! Services module - Handler HTTP
//!
//! Un solo insieme di handler per la risorsa prodotto: validano path e body,
//! chiamano lo store e costruiscono l'envelope di risposta.

pub mod product;

// Re-exports per facilitare l'import
pub use product::{create_product, delete_product, get_product, list_products, update_product};
