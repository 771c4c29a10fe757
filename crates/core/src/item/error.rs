use thiserror::Error;

use super::types::{MAX_NAME_CHARS, MAX_NOTES_CHARS};

/// A single field-level constraint violation found while validating a
/// create request.
///
/// Validation collects every violation instead of stopping at the first,
/// so one response tells the client about all of its mistakes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("Name is required")]
    NameRequired,
    #[error("Name cannot exceed {MAX_NAME_CHARS} characters")]
    NameTooLong,
    #[error("Quantity is required")]
    QuantityRequired,
    #[error("Quantity must be greater than or equal to 0")]
    QuantityNegative,
    #[error("Best before date is required")]
    BestBeforeRequired,
    #[error("IsOpened is required")]
    IsOpenedRequired,
    #[error("Notes cannot exceed {MAX_NOTES_CHARS} characters")]
    NotesTooLong,
}
