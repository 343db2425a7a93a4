//! Error types for listing sources, filter criteria, the assistant and config.

use thiserror::Error;

/// Errors returned while fetching a listing collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("listing endpoint returned {0}")]
    Status(reqwest::StatusCode),
    /// Reading a local listing file failed.
    #[error("failed to read listings: {0}")]
    Io(#[from] std::io::Error),
    /// The payload was not valid JSON.
    #[error("failed to decode listings: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced when a host chooses to validate filter criteria.
#[derive(Debug, Error, PartialEq)]
pub enum CriteriaError {
    /// A bound of the `min-max` range is not a number.
    #[error("malformed range '{raw}': expected 'min-max'")]
    MalformedRange { raw: String },
    /// The lower bound is above the upper bound, so nothing can match.
    #[error("inverted range '{raw}': {min} is greater than {max}")]
    InvertedRange { raw: String, min: f64, max: f64 },
    /// The form input name does not map to any criteria field.
    #[error("unknown filter field: {0}")]
    UnknownField(String),
}

/// Errors raised by the assistant host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistantError {
    /// An intent rule was declared without any usable keyword.
    #[error("intent rule for {0} needs at least one non-empty keyword")]
    EmptyTrigger(String),
    /// A message was submitted while the chat window is closed.
    #[error("conversation is closed")]
    SessionClosed,
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] serde_json::Error),
}
