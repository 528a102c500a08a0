use crate::http;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse pull request event payload")]
    Decode {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Invalid event: {0}")]
    Validation(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("GitHub request failed while {operation}")]
    Remote {
        operation: &'static str,
        #[source]
        cause: http::Error,
    },
}
