//! SQLite repository implementation.
//!
//! Implements the repository trait from `pantry_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use pantry_core::item::{NewItem, PantryItem};
use pantry_core::storage::{ItemFilter, ItemRepository, RepositoryError, Result};

use super::conversions::{format_date, row_to_item};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage. Every operation runs as a
/// single closure on the connection worker, so each one is atomic at the
/// row level without extra locking.
pub struct SqliteItemRepository {
    conn: Connection,
}

impl SqliteItemRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list(&self, filter: &ItemFilter) -> Result<Vec<PantryItem>> {
        let (sql, params) = schema::build_list_query(filter);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params), row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get(&self, id: i64) -> Result<Option<PantryItem>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn create(&self, item: &NewItem) -> Result<PantryItem> {
        let name = item.name.clone();
        let quantity = item.quantity;
        let best_before = format_date(&item.best_before);
        let is_opened = item.is_opened;
        let notes = item.notes.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ITEM,
                    rusqlite::params![name, quantity, best_before, is_opened, notes],
                )
                .map_err(wrap_err)?;

                // Read the stored row back so the caller gets exactly what
                // the store holds, assigned id included.
                let id = conn.last_insert_rowid();
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                stmt.query_row([id], row_to_item).map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn toggle_opened(&self, id: i64) -> Result<Option<PantryItem>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                let item = match stmt.query_row([id], row_to_item) {
                    Ok(item) => item,
                    Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(wrap_err(e)),
                };

                let flipped = !item.is_opened;
                conn.execute(schema::UPDATE_ITEM_OPENED, rusqlite::params![flipped, id])
                    .map_err(wrap_err)?;

                Ok(Some(PantryItem {
                    is_opened: flipped,
                    ..item
                }))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_ITEM, [id]).map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn is_empty(&self) -> Result<bool> {
        self.conn
            .call(|conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_ITEMS, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(count == 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
