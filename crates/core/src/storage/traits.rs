use async_trait::async_trait;

use crate::item::{NewItem, PantryItem};

use super::{ItemFilter, Result};

/// Repository for pantry item operations.
///
/// Every operation is atomic at the single-row level; there are no
/// cross-item invariants to coordinate. Failures to reach the store surface
/// immediately as errors and are not retried.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists items matching the filter, ordered by ascending best-before
    /// date with insertion order breaking ties.
    async fn list(&self, filter: &ItemFilter) -> Result<Vec<PantryItem>>;

    /// Gets an item by its id.
    async fn get(&self, id: i64) -> Result<Option<PantryItem>>;

    /// Persists a new item and returns the stored row, including the
    /// assigned id.
    async fn create(&self, item: &NewItem) -> Result<PantryItem>;

    /// Flips the opened flag of an item in a single read-modify-write.
    /// Returns the updated item, or `None` when the id is unknown.
    async fn toggle_opened(&self, id: i64) -> Result<Option<PantryItem>>;

    /// Deletes an item by its id. Returns `false` when the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Whether the store holds no items at all. Used by startup seeding.
    async fn is_empty(&self) -> Result<bool>;
}
