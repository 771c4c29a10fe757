//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - everything else -> 500 (Internal Server Error); store failures are
///   reported to the client immediately rather than retried.
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound { id: 7 };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_connection_failed_maps_to_500() {
        let error = RepositoryError::ConnectionFailed("database unreachable".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("invalid query syntax".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::InvalidData("unparseable date".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
