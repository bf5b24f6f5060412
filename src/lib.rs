//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};

use axum::{Router, routing::get};
use repositories::ProductStore;
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router<S: ProductStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .nest("/api", configure_product_routes::<S>())
        .with_state(state)
}

/// Configura le routes CRUD dei prodotti
fn configure_product_routes<S: ProductStore>() -> Router<Arc<AppState<S>>> {
    use services::*;

    Router::new()
        .route(
            "/products",
            get(list_products::<S>).post(create_product::<S>),
        )
        // come "/products": la barra finale non cambia la risorsa
        .route(
            "/products/",
            get(list_products::<S>).post(create_product::<S>),
        )
        .route(
            "/products/{id}",
            get(get_product::<S>)
                .patch(update_product::<S>)
                .delete(delete_product::<S>),
        )
}
