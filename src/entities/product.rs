//! Product entity - riga della tabella `products`

use serde::{Deserialize, Serialize};

/// Prodotto persistito. L'id è assegnato dal database (auto increment)
/// e non cambia più dopo l'inserimento.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}
