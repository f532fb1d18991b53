use thiserror::Error;

use bridge_traits::BridgeError;

/// Terminal states of a bridged wait.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitError {
    /// The caller's cancellation token fired before the native callback. The
    /// native operation may still complete later; its result is discarded.
    #[error("Operation cancelled")]
    Cancelled,

    /// The native callback delivered an error; the description is preserved
    /// verbatim.
    #[error("Native operation failed: {0}")]
    Native(String),

    /// The native side dropped its completion handle without ever firing it.
    #[error("Native operation abandoned its completion handle")]
    Abandoned,
}

impl From<BridgeError> for WaitError {
    fn from(err: BridgeError) -> Self {
        match err {
            // Keep the native diagnostic text verbatim.
            BridgeError::Native(description) => WaitError::Native(description),
            other => WaitError::Native(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WaitError>;
