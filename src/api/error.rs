//! Error types for the floof fetch.
//!
//! All three variants are caught at the controller's dispatch boundary and
//! handled identically: the failure goes to the log and the previous image
//! stays on screen.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not complete (DNS, refused connection, transport).
    Network(String),

    /// The server answered with a non-2xx status.
    BadStatus { status: u16, body: String },

    /// The body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::BadStatus { status, body } => write!(f, "HTTP {status}: {body}"),
            FetchError::Parse(msg) => write!(f, "parse failed: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
