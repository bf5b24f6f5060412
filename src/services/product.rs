//! Product services - CRUD dei prodotti

use crate::core::{AppError, AppState};
use crate::dtos::{ApiResponse, ProductDTO};
use crate::entities::Product;
use crate::repositories::ProductStore;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/* gli estrattori sono avvolti in Result: le rejection di axum hanno un body testuale,
   noi invece rispondiamo sempre con l'envelope JSON e con i nostri messaggi
*/

const INVALID_ID: &str = "Invalid product ID";
const PRODUCT_NOT_FOUND: &str = "Product not found";

fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            warn!("Rejected product id: {}", rejection.body_text());
            Err(AppError::bad_request(INVALID_ID))
        }
    }
}

fn parse_body(
    body: Result<Json<ProductDTO>, JsonRejection>,
    message: &'static str,
) -> Result<ProductDTO, AppError> {
    match body {
        Ok(Json(dto)) => Ok(dto),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(AppError::bad_request(message))
        }
    }
}

#[instrument(skip(state, path))]
pub async fn get_product<S: ProductStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<i64>, PathRejection>, // parametro dalla URL /api/products/{id}
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let id = parse_id(path)?;
    debug!("Fetching product {}", id);

    let product = state.product.find_by_id(id).await.map_err(|e| {
        warn!("Product {} not readable: {}", id, e);
        AppError::not_found(PRODUCT_NOT_FOUND)
    })?;

    info!("Product {} found", id);
    Ok(Json(ApiResponse::success(
        "Product retrieved successfully",
        product,
    )))
}

#[instrument(skip(state))]
pub async fn list_products<S: ProductStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    debug!("Listing products");
    let products = state.product.find_all().await.map_err(|e| {
        warn!("Products not readable: {}", e);
        AppError::not_found("Products not found")
    })?;

    info!("Found {} products", products.len());
    Ok(Json(ApiResponse::success(
        "Products retrieved successfully",
        products,
    )))
}

#[instrument(skip(state, body))]
pub async fn create_product<S: ProductStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<ProductDTO>, JsonRejection>, // il body va sempre per ultimo
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let data = parse_body(body, "Invalid request body")?;
    debug!("Creating product {:?}", data.name);

    // l'errore del database arriva al client così com'è
    let product = state.product.save(&data).await.map_err(|e| {
        error!("Failed to create product: {}", e);
        AppError::internal_server_error(e.to_string())
    })?;

    info!("Product {} created", product.id);
    Ok(Json(ApiResponse::success(
        "Product created successfully",
        product,
    )))
}

#[instrument(skip(state, path, body))]
pub async fn update_product<S: ProductStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductDTO>, JsonRejection>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let id = parse_id(path)?;
    let product = parse_body(body, "Invalid body request")?.into_product(id);
    debug!("Updating product {}", id);

    let product = state.product.update(&product).await.map_err(|e| {
        warn!("Product {} not updated: {}", id, e);
        AppError::not_found(PRODUCT_NOT_FOUND)
    })?;

    info!("Product {} updated", id);
    Ok(Json(ApiResponse::success(
        "Product updated successfully",
        product,
    )))
}

#[instrument(skip(state, path))]
pub async fn delete_product<S: ProductStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id = parse_id(path)?;
    debug!("Deleting product {}", id);

    state.product.delete(id).await.map_err(|e| {
        warn!("Product {} not deleted: {}", id, e);
        AppError::not_found(PRODUCT_NOT_FOUND)
    })?;

    info!("Product {} deleted", id);
    Ok(Json(ApiResponse::ok("Product deleted successfully")))
}
