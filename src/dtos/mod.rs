//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod product;
pub mod response;

pub use product::ProductDTO;
pub use response::{ApiResponse, ResponseStatus};
