use thiserror::Error;

use bridge_traits::BridgeError;
use core_bridge::WaitError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The HTTP method is outside the closed set the native engine supports.
    /// Raised at request construction, before any network activity.
    #[error("The native transport does not support the HTTP method '{0}'")]
    UnsupportedMethod(String),

    /// The account's concrete type lacks the transport-credential capability.
    #[error("Account type '{0}' is not supported by this transport")]
    UnsupportedAccountType(String),

    /// The platform store has no account type for the given identifier.
    #[error("Unknown account type '{0}'")]
    UnknownAccountType(String),

    /// The account currently holds no stored credential.
    #[error("No credential is stored for this account")]
    NoCredential,

    /// A native-side failure, description preserved verbatim.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The caller's cancellation token fired before the native operation
    /// completed. The operation itself may still finish; its result is
    /// discarded.
    #[error("Operation cancelled")]
    Cancelled,

    /// The operation is categorically unavailable on this service variant.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// The request has already started executing; its payload is frozen and
    /// its response is produced exactly once.
    #[error("Request execution has already started")]
    AlreadyExecuted,
}

impl From<WaitError> for ServiceError {
    fn from(err: WaitError) -> Self {
        match err {
            WaitError::Cancelled => ServiceError::Cancelled,
            WaitError::Native(description) => ServiceError::Transport(description),
            WaitError::Abandoned => {
                ServiceError::Transport("Native operation abandoned its completion handle".into())
            }
        }
    }
}

impl From<BridgeError> for ServiceError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Native(description) => ServiceError::Transport(description),
            BridgeError::NotAvailable(what) => ServiceError::NotSupported(what),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_errors_map_onto_the_service_taxonomy() {
        assert_eq!(
            ServiceError::from(WaitError::Cancelled),
            ServiceError::Cancelled
        );
        assert_eq!(
            ServiceError::from(WaitError::Native("timed out".into())),
            ServiceError::Transport("timed out".into())
        );
        assert!(matches!(
            ServiceError::from(WaitError::Abandoned),
            ServiceError::Transport(_)
        ));
    }
}
