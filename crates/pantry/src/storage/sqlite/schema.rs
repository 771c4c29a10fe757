//! SQLite schema definitions and SQL query construction.
//!
//! This module contains all SQL used by the SQLite repository, following
//! the Functional Core pattern - pure data and pure functions, no I/O.

use rusqlite::types::Value;

use pantry_core::storage::ItemFilter;

use super::conversions::format_date;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Pantry items table
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    best_before TEXT NOT NULL,
    is_opened INTEGER NOT NULL,
    notes TEXT
);

-- Index for best-before ordering and range filters
CREATE INDEX IF NOT EXISTS idx_items_best_before ON items(best_before);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, quantity, best_before, is_opened, notes)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, quantity, best_before, is_opened, notes
FROM items
WHERE id = ?1
"#;

pub const UPDATE_ITEM_OPENED: &str = r#"
UPDATE items
SET is_opened = ?1
WHERE id = ?2
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

pub const COUNT_ITEMS: &str = r#"
SELECT COUNT(*) FROM items
"#;

const SELECT_ITEMS_BASE: &str =
    "SELECT id, name, quantity, best_before, is_opened, notes FROM items";

/// Builds the listing query for a filter.
///
/// Each supplied predicate becomes one AND-ed WHERE clause; the name match
/// uses `instr` for byte-wise (case-sensitive) containment so behavior does
/// not depend on the collation of `LIKE`. Results are ordered by ascending
/// best-before date, with the rowid (insertion order) breaking ties.
pub fn build_list_query(filter: &ItemFilter) -> (String, Vec<Value>) {
    let mut sql = String::from(SELECT_ITEMS_BASE);
    let mut conditions: Vec<&str> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(q) = &filter.q {
        conditions.push("instr(name, ?) > 0");
        params.push(Value::Text(q.clone()));
    }

    if let Some(opened) = filter.opened {
        conditions.push("is_opened = ?");
        params.push(Value::Integer(i64::from(opened)));
    }

    if let Some(expires_before) = filter.expires_before {
        conditions.push("best_before <= ?");
        params.push(Value::Text(format_date(&expires_before)));
    }

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    sql.push_str(" ORDER BY best_before ASC, id ASC");

    (sql, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS items"));
        assert!(CREATE_TABLES.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_ITEM.contains("INSERT"));
        assert!(SELECT_ITEM_BY_ID.contains("SELECT"));
        assert!(UPDATE_ITEM_OPENED.contains("UPDATE"));
        assert!(DELETE_ITEM.contains("DELETE"));
        assert!(COUNT_ITEMS.contains("COUNT(*)"));
    }

    #[test]
    fn test_unconstrained_filter_has_no_where_clause() {
        let (sql, params) = build_list_query(&ItemFilter::none());

        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY best_before ASC, id ASC"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_single_predicate_builds_one_clause() {
        let filter = ItemFilter::none().with_opened(true);

        let (sql, params) = build_list_query(&filter);

        assert!(sql.contains("WHERE is_opened = ?"));
        assert!(!sql.contains("AND"));
        assert_eq!(params, vec![Value::Integer(1)]);
    }

    #[test]
    fn test_all_predicates_compose_with_and() {
        let filter = ItemFilter::none()
            .with_name_containing("Milk")
            .with_opened(false)
            .with_expires_before(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());

        let (sql, params) = build_list_query(&filter);

        assert!(sql.contains("instr(name, ?) > 0"));
        assert!(sql.contains("is_opened = ?"));
        assert!(sql.contains("best_before <= ?"));
        assert_eq!(sql.matches(" AND ").count(), 2);
        assert_eq!(
            params,
            vec![
                Value::Text("Milk".to_string()),
                Value::Integer(0),
                Value::Text("2024-07-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_param_order_matches_clause_order() {
        let filter = ItemFilter::none()
            .with_name_containing("Egg")
            .with_expires_before(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());

        let (sql, params) = build_list_query(&filter);

        let name_pos = sql.find("instr").unwrap();
        let date_pos = sql.find("best_before <=").unwrap();
        assert!(name_pos < date_pos);
        assert_eq!(
            params,
            vec![
                Value::Text("Egg".to_string()),
                Value::Text("2024-06-20".to_string()),
            ]
        );
    }
}
