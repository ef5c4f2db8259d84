//! Error types for the class catalog
//!
//! Provides error handling for:
//! - Loading class snapshots (IO, malformed documents)
//! - Detail lookups (missing or unknown ids)
//! - Parsing the `<day>-<time>` slot wire form

use std::path::PathBuf;

/// Errors raised by a [`ClassSource`](crate::ClassSource)
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Detail lookup without an id
    #[error("class id is required")]
    MissingId,

    /// No class with the requested id
    #[error("class not found: {0}")]
    NotFound(String),

    /// IO error reading a snapshot file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot document does not match the class schema
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors parsing a [`TimeSlot`](crate::TimeSlot) from its wire form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotParseError {
    /// No `-` between day and period
    #[error("expected <day>-<time>, got '{0}'")]
    MissingSeparator(String),

    /// Day token is empty
    #[error("day must not be empty")]
    EmptyDay,

    /// Day token contains whitespace
    #[error("invalid day token: '{0}'")]
    InvalidDay(String),

    /// Period is not a decimal integer
    #[error("invalid period number: '{0}'")]
    InvalidTime(String),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        assert_eq!(CatalogError::MissingId.to_string(), "class id is required");
        assert_eq!(
            CatalogError::NotFound("c9".to_string()).to_string(),
            "class not found: c9"
        );
    }

    #[test]
    fn io_error_carries_path() {
        let err = CatalogError::io_error(
            "/tmp/classes.json",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("/tmp/classes.json"));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn slot_parse_error_display() {
        let err = SlotParseError::InvalidTime("x".to_string());
        assert_eq!(err.to_string(), "invalid period number: 'x'");
    }
}
