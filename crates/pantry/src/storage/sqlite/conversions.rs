//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::NaiveDate;
use rusqlite::Row;

use pantry_core::item::PantryItem;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date for storage as ISO 8601 text.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored date column value.
pub fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Convert a SQLite row to a PantryItem.
///
/// Expected columns: id, name, quantity, best_before, is_opened, notes
pub fn row_to_item(row: &Row) -> rusqlite::Result<PantryItem> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let quantity: i64 = row.get(2)?;
    let best_before: String = row.get(3)?;
    let is_opened: bool = row.get(4)?;
    let notes: Option<String> = row.get(5)?;

    Ok(PantryItem {
        id,
        name,
        quantity,
        best_before: parse_date(&best_before)?,
        is_opened,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();

        let formatted = format_date(&date);

        assert_eq!(formatted, "2024-06-05");
        assert_eq!(parse_date(&formatted).unwrap(), date);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2024-13-45").is_err());
    }
}
