use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Native operation failed: {0}")]
    Native(String),
}

impl BridgeError {
    /// Wraps a native-side diagnostic, preserving its text verbatim.
    pub fn native(description: impl Into<String>) -> Self {
        BridgeError::Native(description.into())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
