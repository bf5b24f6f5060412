use axum_test::TestServer;
use product_server::AppState;
use product_server::dtos::ProductDTO;
use product_server::entities::Product;
use product_server::repositories::ProductStore;
use std::sync::{Arc, Mutex};

/// Store in memoria con la stessa semantica del repository MySQL
/// (id auto increment, RowNotFound sugli id mancanti)
pub struct MemoryStore {
    inner: Mutex<MemoryTable>,
}

struct MemoryTable {
    rows: Vec<Product>,
    next_id: i64,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(MemoryTable {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Stesso contenuto di fixtures/products.sql
    pub fn seeded() -> Self {
        Self {
            inner: Mutex::new(MemoryTable {
                rows: vec![Product {
                    id: 1,
                    name: "Book".to_string(),
                    quantity: 6,
                }],
                next_id: 2,
            }),
        }
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.inner.lock().unwrap().rows.clone()
    }
}

impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Product, sqlx::Error> {
        let table = self.inner.lock().unwrap();
        table
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.snapshot())
    }

    async fn save(&self, data: &ProductDTO) -> Result<Product, sqlx::Error> {
        let mut table = self.inner.lock().unwrap();
        let product = Product {
            id: table.next_id,
            name: data.name.clone(),
            quantity: data.quantity,
        };
        table.next_id += 1;
        table.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, sqlx::Error> {
        let mut table = self.inner.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(sqlx::Error::RowNotFound)?;
        *row = product.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        let mut table = self.inner.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        if table.rows.len() == before {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}

/// Store che fallisce ogni operazione, per verificare la mappatura degli errori
pub struct BrokenStore;

pub const BROKEN_STORE_ERROR: &str = "connection reset by peer";

fn broken() -> sqlx::Error {
    sqlx::Error::Protocol(BROKEN_STORE_ERROR.to_string())
}

impl ProductStore for BrokenStore {
    async fn find_by_id(&self, _id: i64) -> Result<Product, sqlx::Error> {
        Err(broken())
    }

    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        Err(broken())
    }

    async fn save(&self, _data: &ProductDTO) -> Result<Product, sqlx::Error> {
        Err(broken())
    }

    async fn update(&self, _product: &Product) -> Result<Product, sqlx::Error> {
        Err(broken())
    }

    async fn delete(&self, _id: i64) -> Result<(), sqlx::Error> {
        Err(broken())
    }
}

/// Crea lo stato attorno a uno store qualsiasi
pub fn create_test_state<S: ProductStore>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::with_store(store))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server<S: ProductStore>(state: Arc<AppState<S>>) -> TestServer {
    let app = product_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
