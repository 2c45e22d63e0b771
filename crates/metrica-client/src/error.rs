//! Client error types for the metrica SDK

use metrica_api::ApiVersion;

/// Error type for data service client operations
#[derive(Debug, thiserror::Error)]
pub enum DataServiceError {
    #[error(
        "{feature} is not supported by this server: requires interface version {min_version}, server reports {current_version}"
    )]
    OperationNotSupported {
        feature: &'static str,
        min_version: ApiVersion,
        current_version: ApiVersion,
    },

    #[error("server returned status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("split invariant violated: {0}")]
    SplitInvariant(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl DataServiceError {
    /// Whether this error is a server response with the given status code
    pub fn is_status(&self, status: u16) -> bool {
        matches!(self, DataServiceError::Server { status: s, .. } if *s == status)
    }
}

pub type Result<T> = std::result::Result<T, DataServiceError>;
