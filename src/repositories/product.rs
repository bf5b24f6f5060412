//! ProductRepository - Repository MySQL per la tabella `products`

use super::ProductStore;
use crate::core::fatal;
use crate::dtos::ProductDTO;
use crate::entities::Product;
use futures::TryStreamExt;
use sqlx::mysql::{MySqlConnection, MySqlStatement};
use sqlx::{Error, Executor, FromRow, MySql, MySqlPool, Statement, Transaction};
use tracing::{debug, warn};

const SELECT_BY_ID: &str = "SELECT id, name, quantity FROM products WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, quantity FROM products";
const INSERT: &str = "INSERT INTO products (name, quantity) VALUES (?, ?)";
const UPDATE: &str = "UPDATE products SET name = ?, quantity = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM products WHERE id = ?";
const LOCK_BY_ID: &str = "SELECT id FROM products WHERE id = ? FOR UPDATE";

pub struct ProductRepository {
    connection_pool: MySqlPool,
}

impl ProductRepository {
    pub fn new(connection_pool: MySqlPool) -> ProductRepository {
        Self { connection_pool }
    }

    /// Se non si riesce nemmeno ad aprire una transazione il database è andato: si termina
    async fn begin(&self) -> Transaction<'static, MySql> {
        match self.connection_pool.begin().await {
            Ok(tx) => tx,
            Err(e) => fatal("begin transaction", e),
        }
    }
}

async fn commit(tx: Transaction<'static, MySql>) {
    if let Err(e) = tx.commit().await {
        fatal("commit transaction", e);
    }
}

async fn prepare_or_die<'q>(conn: &mut MySqlConnection, sql: &'q str) -> MySqlStatement<'q> {
    match conn.prepare(sql).await {
        Ok(stmt) => stmt,
        Err(e) => fatal("prepare statement", e),
    }
}

/// Blocca la riga da modificare; RowNotFound se non esiste.
/// UPDATE e DELETE da soli non distinguono "nessuna riga" da "riga invariata".
async fn lock_existing(conn: &mut MySqlConnection, id: i64) -> Result<(), Error> {
    let stmt = prepare_or_die(&mut *conn, LOCK_BY_ID).await;
    stmt.query()
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(Error::RowNotFound)?;
    Ok(())
}

// Nei rami di errore la transazione viene droppata senza commit: sqlx fa il rollback.
impl ProductStore for ProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Product, Error> {
        let mut tx = self.begin().await;
        let stmt = prepare_or_die(&mut tx, SELECT_BY_ID).await;

        let product = stmt
            .query_as::<Product>()
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(Error::RowNotFound)?;

        commit(tx).await;
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, Error> {
        let mut tx = self.begin().await;
        let stmt = prepare_or_die(&mut tx, SELECT_ALL).await;

        let mut products = Vec::new();
        {
            let mut rows = stmt.query().fetch(&mut *tx);
            while let Some(row) = rows.try_next().await? {
                match Product::from_row(&row) {
                    Ok(product) => products.push(product),
                    Err(e) => warn!(error = %e, "Skipping product row that failed to decode"),
                }
            }
        }
        debug!("Read {} products", products.len());

        commit(tx).await;
        Ok(products)
    }

    async fn save(&self, data: &ProductDTO) -> Result<Product, Error> {
        let mut tx = self.begin().await;
        // qui un errore di prepare è un normale errore del database, torna al chiamante
        let stmt = (&mut *tx).prepare(INSERT).await?;

        let result = stmt
            .query()
            .bind(&data.name)
            .bind(data.quantity)
            .execute(&mut *tx)
            .await?;

        let new_id = result.last_insert_id() as i64;

        commit(tx).await;
        Ok(Product {
            id: new_id,
            name: data.name.clone(),
            quantity: data.quantity,
        })
    }

    async fn update(&self, product: &Product) -> Result<Product, Error> {
        let mut tx = self.begin().await;
        lock_existing(&mut tx, product.id).await?;

        let stmt = prepare_or_die(&mut tx, UPDATE).await;
        stmt.query()
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.id)
            .execute(&mut *tx)
            .await?;

        commit(tx).await;
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let mut tx = self.begin().await;
        lock_existing(&mut tx, id).await?;

        let stmt = prepare_or_die(&mut tx, DELETE).await;
        stmt.query().bind(id).execute(&mut *tx).await?;

        commit(tx).await;
        Ok(())
    }
}
