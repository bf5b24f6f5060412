//! Repositories module
//!
//! Tutto l'SQL del progetto vive qui. Le query sono scritte con le funzioni runtime di sqlx
//! (`Statement::query`, `query_as`) su statement preparati esplicitamente dentro la transazione,
//! quindi il crate compila anche senza un database raggiungibile.

pub mod product;
pub mod traits;

pub use product::ProductRepository;
pub use traits::ProductStore;
