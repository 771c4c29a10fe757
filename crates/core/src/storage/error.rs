use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Pantry item with id {id} not found")]
    NotFound { id: i64 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::NotFound { id: 42 };
        assert_eq!(error.to_string(), "Pantry item with id 42 not found");
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("malformed statement".to_string());
        assert_eq!(error.to_string(), "Query failed: malformed statement");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("date out of range".to_string());
        assert_eq!(error.to_string(), "Invalid data: date out of range");
    }
}
