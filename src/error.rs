//! Error types for statuswire.

use thiserror::Error;

/// Main error type for all statuswire operations.
#[derive(Debug, Error)]
pub enum StatuswireError {
    /// I/O error while announcing registration metadata.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (registration advertisement only).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// MsgPack serialization error.
    #[error("MsgPack encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// MsgPack deserialization error.
    #[error("MsgPack decode error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    /// The inbound request carried no reply channel.
    #[error("request carries no reply channel")]
    MissingReplyChannel,

    /// Diagnostic tag exceeds the limit enforced by the logging channel.
    #[error("log tag must be under {max} characters: {0:?}", max = crate::protocol::schema::MAX_LOG_TAG_LEN)]
    LogTagTooLong(String),

    /// A setting was advertised more than once.
    #[error("setting already advertised: {0}")]
    DuplicateSetting(String),

    /// The service inbox or reply channel closed before a reply arrived.
    #[error("status service unavailable")]
    ServiceClosed,
}

/// Error raised by a reply sink when the envelope cannot be delivered.
///
/// This is the only error kind the handler recovers from locally.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The receiving endpoint is gone.
    #[error("reply endpoint disconnected")]
    Disconnected,

    /// The endpoint refused the envelope.
    #[error("reply endpoint rejected the envelope: {0}")]
    Rejected(String),
}

/// Result type alias using StatuswireError.
pub type Result<T> = std::result::Result<T, StatuswireError>;
