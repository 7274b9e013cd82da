//! Error types for stock_sync

use thiserror::Error;

/// Unified error type for stock_sync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Marketplace answered with a non-success status
    #[error("HTTP error: {status} - {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Quantity cell is neither a special marker nor an integer
    #[error("Invalid quantity: '{0}'")]
    InvalidQuantity(String),
    /// Price cell has no digits before the decimal point
    #[error("Invalid price: '{0}'")]
    InvalidPrice(String),
    /// Required column not found in the stock sheet header
    #[error("Column not found in stock sheet: {0}")]
    MissingColumn(String),
    /// Stock sheet could not be read
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    /// Stock archive could not be opened
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Required environment variable is missing or blank
    #[error("Configuration error: {0} is not set")]
    MissingEnv(&'static str),
    /// Catalog kept returning pages past the iteration bound
    #[error("Pagination did not terminate after {pages} pages")]
    PaginationLimit { pages: usize },
}

/// Coarse failure classes callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request timed out waiting for the marketplace
    Timeout,
    /// Could not connect to the remote host
    Connection,
    /// Any other transport failure
    Transport,
    /// Non-success HTTP status
    HttpStatus,
    /// Malformed response or inventory value
    Parse,
    /// Missing configuration
    Config,
    /// Inventory archive or spreadsheet failure
    Inventory,
}

impl SyncError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::Transport(e) if e.is_timeout() => ErrorKind::Timeout,
            SyncError::Transport(e) if e.is_connect() => ErrorKind::Connection,
            SyncError::Transport(_) => ErrorKind::Transport,
            SyncError::HttpStatus { .. } => ErrorKind::HttpStatus,
            SyncError::Json(_)
            | SyncError::InvalidQuantity(_)
            | SyncError::InvalidPrice(_)
            | SyncError::PaginationLimit { .. } => ErrorKind::Parse,
            SyncError::MissingEnv(_) => ErrorKind::Config,
            SyncError::MissingColumn(_)
            | SyncError::Spreadsheet(_)
            | SyncError::Archive(_)
            | SyncError::Io(_) => ErrorKind::Inventory,
        }
    }
}

/// Result alias for stock_sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_non_transport_errors() {
        assert_eq!(SyncError::MissingEnv("CLIENT_ID").kind(), ErrorKind::Config);
        assert_eq!(
            SyncError::InvalidQuantity("abc".to_string()).kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            SyncError::PaginationLimit { pages: 1000 }.kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            SyncError::MissingColumn("Код".to_string()).kind(),
            ErrorKind::Inventory
        );
        assert_eq!(
            SyncError::HttpStatus {
                status: reqwest::StatusCode::BAD_REQUEST,
                body: String::new()
            }
            .kind(),
            ErrorKind::HttpStatus
        );
    }

    #[test]
    fn display_names_missing_key() {
        let err = SyncError::MissingEnv("SELLER_TOKEN");
        assert_eq!(err.to_string(), "Configuration error: SELLER_TOKEN is not set");
    }
}
