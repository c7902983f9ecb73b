use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can abort a run.
///
/// There is no partial-success model: the first error stops the current
/// stage and every stage after it.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("Failed to fetch data for {city}. Status code: {status}")]
    Status { city: String, status: StatusCode },

    #[error("Failed to send weather request for {city}")]
    Request {
        city: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read weather response body for {city}")]
    Body {
        city: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Weather response for {city} is not valid JSON")]
    Decode {
        city: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Weather reading for {city} is missing or has malformed fields")]
    Normalize {
        city: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Weather reading for {city} has an empty `weather` list")]
    MissingCondition { city: String },

    #[error("Weather reading for {city} has out-of-range {field} timestamp {value}")]
    Timestamp {
        city: String,
        field: &'static str,
        value: i64,
    },

    #[error(
        "Unsupported database URL '{url}'. Expected a postgres://, postgresql:// or sqlite: URL."
    )]
    UnsupportedDatabase { url: String },

    #[error("Database operation failed")]
    Storage(#[from] sqlx::Error),
}

impl EtlError {
    /// HTTP status of a rejected request, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            EtlError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type EtlResult<T> = Result<T, EtlError>;
