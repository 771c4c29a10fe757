//! Wire representations for item responses.

use chrono::NaiveDate;
use serde::Serialize;

use pantry_core::item::PantryItem;

/// JSON representation of a pantry item, including the derived expiry
/// fields.
///
/// Built fresh for every response so `daysUntilExpiry` and `isExpired`
/// reflect the date the request was served, not the date the row was
/// written.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub best_before: NaiveDate,
    pub is_opened: bool,
    pub notes: Option<String>,
    pub days_until_expiry: i64,
    pub is_expired: bool,
}

impl ItemResponse {
    /// Builds the response representation of an item, deriving the expiry
    /// fields against `today`.
    pub fn from_item(item: &PantryItem, today: NaiveDate) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            best_before: item.best_before,
            is_opened: item.is_opened,
            notes: item.notes.clone(),
            days_until_expiry: item.days_until_expiry(today),
            is_expired: item.is_expired(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_carries_derived_fields() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let item = PantryItem {
            id: 3,
            name: "Whole Eggs".to_string(),
            quantity: 12,
            best_before: today - chrono::Duration::days(2),
            is_opened: false,
            notes: Some("Expired - discard".to_string()),
        };

        let response = ItemResponse::from_item(&item, today);

        assert_eq!(response.days_until_expiry, -2);
        assert!(response.is_expired);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let item = PantryItem {
            id: 1,
            name: "Organic Milk".to_string(),
            quantity: 1,
            best_before: today + chrono::Duration::days(5),
            is_opened: true,
            notes: None,
        };

        let json = serde_json::to_value(ItemResponse::from_item(&item, today)).unwrap();

        assert_eq!(json["bestBefore"], "2024-06-20");
        assert_eq!(json["isOpened"], true);
        assert_eq!(json["daysUntilExpiry"], 5);
        assert_eq!(json["isExpired"], false);
        assert_eq!(json["notes"], serde_json::Value::Null);
    }
}
