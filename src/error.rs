//! Error types for dapwire.

use std::fmt;

use thiserror::Error;

/// Main error type for all dapwire operations.
#[derive(Debug, Error)]
pub enum DapError {
    /// I/O error on the underlying source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON. The stream itself is still framed
    /// correctly and remains usable.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source ended cleanly at an envelope boundary, before any header
    /// byte of the next message. Normal shutdown.
    #[error("stream ended at an envelope boundary")]
    Eof,

    /// The source ended inside a header or payload. The stream is unusable.
    #[error("stream ended inside an envelope")]
    TruncatedMessage,

    /// The header block was not terminated by `\r\n\r\n`.
    #[error("header delimiter is not \\r\\n\\r\\n")]
    HeaderDelimiterNotCrLfCrLf,

    /// The header line is not a well-formed `Content-Length: <n>` header.
    #[error("header is not Content-Length")]
    HeaderNotContentLength,

    /// A discriminator field (`type`, `command` or `event`) carried a value
    /// that no codec table resolves.
    #[error("{category} {field} '{value}' is not supported")]
    UnsupportedMessage {
        /// `seq` of the offending message, as far as it could be parsed.
        seq: i64,
        /// Which level of the message hierarchy failed to resolve.
        category: MessageCategory,
        /// The discriminator field name.
        field: &'static str,
        /// The unresolvable value.
        value: String,
    },

    /// A command or event name was registered twice on the same codec.
    /// The first registration stays intact.
    #[error("'{0}' is already registered")]
    AlreadyRegistered(String),
}

/// The message-hierarchy level at which discriminator resolution failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    ProtocolMessage,
    Request,
    Response,
    Event,
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MessageCategory::ProtocolMessage => "ProtocolMessage",
            MessageCategory::Request => "Request",
            MessageCategory::Response => "Response",
            MessageCategory::Event => "Event",
        };
        f.write_str(s)
    }
}

/// Result type alias using DapError.
pub type Result<T> = std::result::Result<T, DapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_display() {
        let err = DapError::UnsupportedMessage {
            seq: 2,
            category: MessageCategory::ProtocolMessage,
            field: "type",
            value: "foo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ProtocolMessage type 'foo' is not supported"
        );
    }

    #[test]
    fn test_already_registered_display() {
        let err = DapError::AlreadyRegistered("launch".to_string());
        assert_eq!(err.to_string(), "'launch' is already registered");
    }
}
