//! Persistence gateway
//!
//! Optional PostgreSQL access for the catalog. Every operation opens a
//! fresh connection, runs a single query, and drops the client before
//! returning; there is no pooling. A database that is down or misconfigured
//! is a normal, expected outcome for callers, never a crash.

use tokio_postgres::{Client, NoTls, Row};

use crate::catalog::StaticCatalog;
use crate::types::{Item, ItemId};
use crate::{Error, Result};

const CREATE_ITEMS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS items (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    description TEXT,
    price NUMERIC(10, 2)
)";

// price is NUMERIC in the table; select it back as float8 so it maps onto
// the same f64 the static catalog produces.
const SELECT_ALL: &str =
    "SELECT id::int8 AS id, name, description, price::float8 AS price FROM items ORDER BY id";
const SELECT_BY_ID: &str =
    "SELECT id::int8 AS id, name, description, price::float8 AS price FROM items WHERE id = $1::int8";
const INSERT_ITEM: &str =
    "INSERT INTO items (name, description, price) VALUES ($1, $2, $3::float8)";

/// Per-request gateway to the items table.
pub struct Database {
    dsn: String,
}

impl Database {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self { dsn: dsn.into() }
    }

    /// Open a fresh connection.
    ///
    /// Any failure (bad DSN, unreachable host, auth) is logged and maps to
    /// `None`; callers treat a missing connection as routine.
    pub async fn connect(&self) -> Option<Client> {
        match tokio_postgres::connect(&self.dsn, NoTls).await {
            Ok((client, connection)) => {
                tokio::spawn(async move {
                    if let Err(err) = connection.await {
                        tracing::warn!(error = %err, "Database connection terminated");
                    }
                });
                Some(client)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to connect to database");
                None
            }
        }
    }

    async fn client(&self) -> Result<Client> {
        self.connect()
            .await
            .ok_or_else(|| Error::source_unavailable("database unreachable"))
    }

    /// One-time bootstrap: ensure the table exists and seed it from the
    /// static catalog if and only if it is empty.
    ///
    /// Seeding commits once at the end and inserts only `name`,
    /// `description` and `price`; ids come from the sequence. A table that
    /// already holds rows is left untouched, so repeated startups never
    /// duplicate data.
    pub async fn initialize(&self, catalog: &StaticCatalog) -> Result<()> {
        let mut client = self.client().await?;

        client.batch_execute(CREATE_ITEMS_TABLE).await?;

        let count: i64 = client
            .query_one("SELECT COUNT(*) FROM items", &[])
            .await?
            .get(0);

        if !seeding_required(count) {
            tracing::debug!(count, "Items table already seeded");
            return Ok(());
        }

        let items = catalog.load_or_empty().await;
        let tx = client.transaction().await?;
        for item in &items {
            tx.execute(INSERT_ITEM, &[&item.name, &item.description, &item.price])
                .await?;
        }
        tx.commit().await?;
        tracing::info!(count = items.len(), "Seeded items table from static catalog");

        Ok(())
    }

    /// Fetch every row, in id order.
    pub async fn fetch_all(&self) -> Result<Vec<Item>> {
        let client = self.client().await?;
        let rows = client.query(SELECT_ALL, &[]).await?;
        Ok(rows.iter().map(row_to_item).collect())
    }

    /// Fetch a single row by id.
    pub async fn fetch_by_id(&self, id: ItemId) -> Result<Item> {
        let client = self.client().await?;
        let row = client.query_opt(SELECT_BY_ID, &[&id]).await?;
        row.as_ref().map(row_to_item).ok_or(Error::NotFound(id))
    }
}

// Seeding is a one-time bootstrap, not a sync: any existing row means the
// table is left untouched.
fn seeding_required(count: i64) -> bool {
    count == 0
}

fn row_to_item(row: &Row) -> Item {
    Item {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        price: row.get("price"),
    }
}
