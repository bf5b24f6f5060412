//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::{AppError, fatal};
pub use state::AppState;
