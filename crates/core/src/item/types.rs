use chrono::NaiveDate;

/// Maximum length of an item name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Maximum length of the optional notes field, in characters.
pub const MAX_NOTES_CHARS: usize = 500;

/// A pantry item as stored.
///
/// The `id` is assigned by the store on creation and never changes. Expiry
/// state is not stored; it is derived from `best_before` against the current
/// date at read time, so the same row reads differently as time passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub best_before: NaiveDate,
    pub is_opened: bool,
    pub notes: Option<String>,
}

impl PantryItem {
    /// Whole days until the best-before date, relative to `today`.
    /// Negative once the date has passed.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        self.best_before.signed_duration_since(today).num_days()
    }

    /// Whether the item is past its best-before date, relative to `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.days_until_expiry(today) < 0
    }
}

/// Field values for an item that has not been stored yet.
///
/// Produced by [`super::CreateItemRequest::validate`], so holders are known
/// to satisfy the field constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub best_before: NaiveDate,
    pub is_opened: bool,
    pub notes: Option<String>,
}

impl NewItem {
    /// Creates a new unstored item with the seal intact and no notes.
    pub fn new(name: impl Into<String>, quantity: i64, best_before: NaiveDate) -> Self {
        Self {
            name: name.into(),
            quantity,
            best_before,
            is_opened: false,
            notes: None,
        }
    }

    /// Marks the item as opened.
    pub fn opened(mut self) -> Self {
        self.is_opened = true;
        self
    }

    /// Sets the notes for this item.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(best_before: NaiveDate) -> PantryItem {
        PantryItem {
            id: 1,
            name: "Organic Milk".to_string(),
            quantity: 1,
            best_before,
            is_opened: false,
            notes: None,
        }
    }

    #[test]
    fn test_days_until_expiry_future_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let item = item(today + chrono::Duration::days(5));

        assert_eq!(item.days_until_expiry(today), 5);
        assert!(!item.is_expired(today));
    }

    #[test]
    fn test_days_until_expiry_past_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let item = item(today - chrono::Duration::days(3));

        assert_eq!(item.days_until_expiry(today), -3);
        assert!(item.is_expired(today));
    }

    #[test]
    fn test_item_expiring_today_is_not_expired() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let item = item(today);

        assert_eq!(item.days_until_expiry(today), 0);
        assert!(!item.is_expired(today));
    }

    #[test]
    fn test_derived_fields_change_with_the_reference_date() {
        let best_before = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let item = item(best_before);

        let before = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 6, 25).unwrap();

        assert_eq!(item.days_until_expiry(before), 5);
        assert_eq!(item.days_until_expiry(after), -5);
        assert!(!item.is_expired(before));
        assert!(item.is_expired(after));
    }

    #[test]
    fn test_new_item_builders() {
        let best_before = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let item = NewItem::new("Olive Oil", 1, best_before)
            .opened()
            .with_notes("Store in cool place");

        assert_eq!(item.name, "Olive Oil");
        assert_eq!(item.quantity, 1);
        assert!(item.is_opened);
        assert_eq!(item.notes.as_deref(), Some("Store in cool place"));
    }
}
