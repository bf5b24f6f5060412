//! Application State - Stato condiviso tra tutte le route

use crate::repositories::{ProductRepository, ProductStore};
use sqlx::MySqlPool;

/// Stato dell'applicazione condiviso tra tutte le route.
///
/// È generico sullo store così i test possono sostituire MySQL con
/// un'implementazione in memoria.
pub struct AppState<S = ProductRepository> {
    /// Repository per la gestione dei prodotti
    pub product: S,
}

impl AppState<ProductRepository> {
    /// Crea lo stato con il repository MySQL sul pool fornito
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni MySQL, creato una sola volta nel main
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            product: ProductRepository::new(pool),
        }
    }
}

impl<S: ProductStore> AppState<S> {
    /// Crea lo stato attorno a uno store qualsiasi
    pub fn with_store(product: S) -> Self {
        Self { product }
    }
}
