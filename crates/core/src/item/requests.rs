//! API request types for item operations.
//!
//! Every field is optional at the wire level so that a missing field shows
//! up as its own validation message rather than a single opaque
//! deserialization failure.

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::FieldViolation;
use super::types::{NewItem, MAX_NAME_CHARS, MAX_NOTES_CHARS};

/// Request payload for creating a new pantry item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub best_before: Option<NaiveDate>,
    pub is_opened: Option<bool>,
    pub notes: Option<String>,
}

impl CreateItemRequest {
    /// Checks every field constraint and returns either the validated item
    /// fields or the full list of violations.
    pub fn validate(self) -> Result<NewItem, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        match &self.name {
            None => violations.push(FieldViolation::NameRequired),
            Some(name) if name.trim().is_empty() => violations.push(FieldViolation::NameRequired),
            Some(name) if name.chars().count() > MAX_NAME_CHARS => {
                violations.push(FieldViolation::NameTooLong)
            }
            Some(_) => {}
        }

        match self.quantity {
            None => violations.push(FieldViolation::QuantityRequired),
            Some(quantity) if quantity < 0 => violations.push(FieldViolation::QuantityNegative),
            Some(_) => {}
        }

        if self.best_before.is_none() {
            violations.push(FieldViolation::BestBeforeRequired);
        }

        if self.is_opened.is_none() {
            violations.push(FieldViolation::IsOpenedRequired);
        }

        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_NOTES_CHARS {
                violations.push(FieldViolation::NotesTooLong);
            }
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        // All required fields were checked above.
        Ok(NewItem {
            name: self.name.unwrap(),
            quantity: self.quantity.unwrap(),
            best_before: self.best_before.unwrap(),
            is_opened: self.is_opened.unwrap(),
            notes: self.notes,
        })
    }
}
