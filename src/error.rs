//! Unified error handling for quipd.
//!
//! One error enum covers everything a command handler can fail with. The
//! dispatcher is the single boundary that turns these into user-visible
//! output: validation problems carry their own message, everything else is
//! reported generically and logged for operator visibility.

use crate::dispatch::Outbound;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// User input problem; the message is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// Nothing to operate on (empty input with no fallback text).
    #[error("no content")]
    NoContent,

    /// Upstream HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream response had an unexpected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Outbound channel closed.
    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<Outbound>),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NoContent => "no_content",
            Self::Http(_) => "http_error",
            Self::Decode(_) => "decode_error",
            Self::Send(_) => "send_error",
        }
    }

    /// The message shown to the user for this error.
    ///
    /// Returns `None` for errors that only warrant the generic failure
    /// notice (the dispatcher logs those at error level instead).
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(msg) => Some(msg.clone()),
            Self::NoContent => Some("No text".to_string()),
            Self::Http(_) | Self::Decode(_) | Self::Send(_) => None,
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
