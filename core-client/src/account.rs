//! Account model.
//!
//! Accounts are opaque credential bearers handed out by the resolver and held
//! by the application. Credential extraction is a *capability*: a concrete
//! account type either declares it by returning a [`CredentialBearer`], or it
//! does not, in which case binding it to a transport fails with a checked
//! error instead of a runtime downcast.

use std::fmt;
use std::sync::Arc;

use bridge_traits::{AccountStore, NativeAccount, NativeCredential};

/// An account usable with a social service.
///
/// Returned accounts were valid store entries at resolution time but may be
/// revoked by the platform afterwards; callers must tolerate later
/// authentication failures.
pub trait Account: Send + Sync + fmt::Debug {
    /// User-visible account name.
    fn username(&self) -> &str;

    /// Concrete-type name, used in diagnostics for unsupported bindings.
    fn kind(&self) -> &'static str;

    /// Transport-credential extraction capability. `None` means this account
    /// type cannot be attached to a native transport.
    fn credentials(&self) -> Option<&dyn CredentialBearer>;
}

/// Capability of yielding the credential the native transport requires.
pub trait CredentialBearer: Send + Sync {
    /// The currently stored credential, `None` when the store holds none.
    fn native_credential(&self) -> Option<NativeCredential>;

    /// The stored OAuth token, `None` when no credential is present.
    fn oauth_token(&self) -> Option<String> {
        self.native_credential().map(|c| c.oauth_token)
    }
}

/// An account backed by an entry in the platform account store.
///
/// Holds an `Arc` of the originating store: native accounts are only valid
/// while their store is alive, so every wrapper derived from a store keeps
/// that store reference for its own lifetime.
pub struct StoreAccount {
    native: NativeAccount,
    #[allow(dead_code)]
    store: Arc<dyn AccountStore>,
}

impl StoreAccount {
    pub fn new(native: NativeAccount, store: Arc<dyn AccountStore>) -> Self {
        Self { native, store }
    }

    /// Store-assigned identifier of the underlying entry.
    pub fn identifier(&self) -> &str {
        &self.native.identifier
    }
}

impl fmt::Debug for StoreAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreAccount")
            .field("identifier", &self.native.identifier)
            .field("username", &self.native.username)
            .field("has_credential", &self.native.credential.is_some())
            .finish()
    }
}

impl Account for StoreAccount {
    fn username(&self) -> &str {
        &self.native.username
    }

    fn kind(&self) -> &'static str {
        "StoreAccount"
    }

    fn credentials(&self) -> Option<&dyn CredentialBearer> {
        Some(self)
    }
}

impl CredentialBearer for StoreAccount {
    fn native_credential(&self) -> Option<NativeCredential> {
        self.native.credential.clone()
    }
}
