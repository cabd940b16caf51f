//! # Catalog Error Types
//!
//! Error types for catalog configuration and fetches.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  RequestFailed  │  │  DecodeFailed           │ │
//! │  │  InvalidUrl     │  │  Unexpected-    │  │                         │ │
//! │  │  ConfigLoad/    │  │    Status       │  │                         │ │
//! │  │    SaveFailed   │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No variant is retried anywhere: a failed fetch is reported once and the
//! caller decides what to show.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type covering config, transport and payload failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Invalid catalog URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the response could not be read.
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status.
    #[error("Catalog returned {status} for {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Response body was not the expected JSON.
    #[error("Failed to decode catalog response: {0}")]
    DecodeFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::DecodeFailed(err.to_string())
        } else {
            CatalogError::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::DecodeFailed(err.to_string())
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(err: toml::ser::Error) -> Self {
        CatalogError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CatalogError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfig(_)
                | CatalogError::InvalidUrl(_)
                | CatalogError::ConfigLoadFailed(_)
                | CatalogError::ConfigSaveFailed(_)
        )
    }

    /// Returns true if the catalog service could not be reached or refused
    /// the request.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            CatalogError::RequestFailed(_) | CatalogError::UnexpectedStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert!(CatalogError::InvalidUrl("nope".into()).is_config_error());
        assert!(CatalogError::ConfigLoadFailed("missing".into()).is_config_error());
        assert!(!CatalogError::DecodeFailed("bad json".into()).is_config_error());

        assert!(CatalogError::RequestFailed("refused".into()).is_transport_error());
        assert!(CatalogError::UnexpectedStatus {
            endpoint: "products".into(),
            status: 503
        }
        .is_transport_error());
        assert!(!CatalogError::DecodeFailed("bad json".into()).is_transport_error());
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::UnexpectedStatus {
            endpoint: "products/categories".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Catalog returned 404 for products/categories");
    }

    #[test]
    fn test_serde_error_is_decode_failure() {
        let err: CatalogError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
        assert!(matches!(err, CatalogError::DecodeFailed(_)));
    }
}
