// src/error.rs

use std::path::PathBuf;

use reqwest::StatusCode;

/// Why the page download failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not find table with id='{id}' ({other_tables} other tables on the page)")]
    TableNotFound { id: String, other_tables: usize },

    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// Per-row; the pipeline logs it and moves on.
    #[error("validation failed for row {row}: {message}")]
    SchemaValidation { row: String, message: String },

    #[error("failed to save CSV to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScrapeError {
    /// Only row validation is survivable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ScrapeError::SchemaValidation { .. })
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_schema_validation_is_recoverable() {
        let row = ScrapeError::SchemaValidation {
            row: "Apple".into(),
            message: "missing field `GI`".into(),
        };
        assert!(!row.is_fatal());

        let missing = ScrapeError::TableNotFound {
            id: "tablepress-1".into(),
            other_tables: 2,
        };
        assert!(missing.is_fatal());
        assert!(ScrapeError::MalformedTable("no thead".into()).is_fatal());
    }

    #[test]
    fn table_not_found_reports_other_tables() {
        let err = ScrapeError::TableNotFound {
            id: "tablepress-1".into(),
            other_tables: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("tablepress-1"));
        assert!(msg.contains("3 other tables"));
    }

    #[test]
    fn status_error_mentions_code() {
        let err: ScrapeError = FetchError::Status {
            url: "http://example.test/".into(),
            status: StatusCode::NOT_FOUND,
        }
        .into();
        assert!(err.to_string().contains("404"));
    }
}
