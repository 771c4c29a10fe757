//! Development seed data.
//!
//! Populates an empty store with a fixed set of sample items so a fresh
//! checkout has something to look at.

use chrono::{Duration, NaiveDate, Utc};

use pantry_core::item::NewItem;
use pantry_core::storage::{ItemRepository, Result};

/// Generates the sample items used to populate an empty store.
///
/// Best-before dates are offsets from `today` at seed time, so the set
/// always contains a mix of fresh, soon-to-expire, and already-expired
/// items.
pub fn seed_items(today: NaiveDate) -> Vec<NewItem> {
    vec![
        NewItem::new("Organic Milk", 1, today + Duration::days(5))
            .opened()
            .with_notes("Open - use within 5 days"),
        NewItem::new("Cheddar Cheese", 2, today + Duration::days(45)).with_notes("Sealed block"),
        NewItem::new("Greek Yogurt", 3, today + Duration::days(10)),
        NewItem::new("Whole Eggs", 12, today - Duration::days(2)).with_notes("Expired - discard"),
        NewItem::new("Fresh Spinach", 1, today + Duration::days(3)),
        NewItem::new("Chicken Breast", 2, today + Duration::days(1))
            .with_notes("Freeze if not using"),
        NewItem::new("Canned Tomatoes", 5, today + Duration::days(365)).with_notes("Shelf stable"),
        NewItem::new("Olive Oil", 1, today + Duration::days(180))
            .opened()
            .with_notes("Store in cool place"),
        NewItem::new("Maple Syrup", 1, today + Duration::days(120)),
        NewItem::new("Fresh Strawberries", 2, today - Duration::days(1))
            .with_notes("Past prime - compost"),
    ]
}

/// Seeds the store with sample items if it holds nothing yet.
///
/// Returns the number of items inserted, zero when the store already has
/// data.
pub async fn seed_if_empty(repo: &dyn ItemRepository) -> Result<usize> {
    if !repo.is_empty().await? {
        return Ok(0);
    }

    let items = seed_items(Utc::now().date_naive());
    let count = items.len();
    for item in &items {
        repo.create(item).await?;
    }

    Ok(count)
}
