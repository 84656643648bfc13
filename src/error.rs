use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json5::Error,
    },

    /// One entry per empty required field.
    #[error("missing required fields: {}", .0.join(", "))]
    ConfigValidation(Vec<String>),

    #[error("failed to marshal request body")]
    RequestBuild(#[source] serde_json::Error),

    #[error("failed to send HTTP request")]
    Send(#[from] TransportError),

    #[error("unexpected status code: {status}, response body: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Failures below the HTTP layer: nothing usable came back from the server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("connection error")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),
}
