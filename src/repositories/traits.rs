//! Repository traits
//!
//! This module defines the interface the HTTP layer uses to reach the products table.

use crate::dtos::ProductDTO;
use crate::entities::Product;
use std::future::Future;

/// Persistence operations on products.
///
/// Every operation is executed in its own transaction, committed on success and
/// rolled back on every error path. Errors are plain `sqlx::Error`s:
/// `sqlx::Error::RowNotFound` signals a missing product.
pub trait ProductStore: Send + Sync + 'static {
    /// Reads a product by its primary key
    ///
    /// # Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(sqlx::Error::RowNotFound)` - No product with that ID
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Product, sqlx::Error>> + Send;

    /// Reads every product, in the order the database returns them
    ///
    /// # Note
    /// Rows that cannot be decoded are skipped (and logged), they never fail the whole read.
    /// An empty table yields an empty Vec, not an error.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Product>, sqlx::Error>> + Send;

    /// Inserts a new product
    ///
    /// # Arguments
    /// * `data` - Name and quantity; any `id` in the DTO is ignored
    ///
    /// # Returns
    /// * `Ok(Product)` - Created product with the ID assigned by the database
    fn save(&self, data: &ProductDTO) -> impl Future<Output = Result<Product, sqlx::Error>> + Send;

    /// Overwrites name and quantity of an existing product
    ///
    /// # Returns
    /// * `Ok(Product)` - The same product that was passed in
    /// * `Err(sqlx::Error::RowNotFound)` - No product with that ID
    fn update(&self, product: &Product)
    -> impl Future<Output = Result<Product, sqlx::Error>> + Send;

    /// Deletes a product
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(sqlx::Error::RowNotFound)` - No product with that ID
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}
