//! Error handling for the message layer
//!
//! Building a message never fails; errors only arise at the JSON boundary
//! when a body is encoded for or decoded from the daemon.

use thiserror::Error;

/// Result type alias for the message layer
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the message layer
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
