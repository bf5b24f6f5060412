//! Product DTOs - corpo delle richieste di creazione e aggiornamento

use crate::entities::Product;
use serde::{Deserialize, Serialize};

/// Body JSON accettato da POST e PATCH.
///
/// I campi mancanti valgono il loro zero (stringa vuota, 0). Un eventuale `id`
/// viene letto ma mai usato: in creazione lo assegna il database, in
/// aggiornamento vince quello del path.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProductDTO {
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i64,
}

impl ProductDTO {
    /// Costruisce il prodotto da aggiornare usando l'id preso dal path
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
        }
    }
}
