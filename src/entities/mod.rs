//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod product;

pub use product::Product;
