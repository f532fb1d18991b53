//! Native Account Store Abstraction
//!
//! Contract for the platform's account-permission store. The store owns the
//! user's social accounts and gates access behind an authorization prompt
//! whose outcome arrives through a one-shot callback.

use crate::error::BridgeError;

/// One-shot authorization callback: `(granted, error)`.
///
/// The store invokes this exactly once, possibly synchronously during
/// [`AccountStore::request_access`] and possibly from a thread other than the
/// caller's. A denial may carry a native diagnostic in `error`.
pub type AccessCallback = Box<dyn FnOnce(bool, Option<BridgeError>) + Send + 'static>;

/// Opaque handle to an account type registered with the platform store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountTypeHandle(pub String);

impl AccountTypeHandle {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }
}

/// Credential stored alongside a native account.
///
/// Credentials arrive already resolved by the platform; this layer never
/// negotiates or refreshes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCredential {
    /// Opaque token used to authenticate requests against the remote service.
    pub oauth_token: String,
}

impl NativeCredential {
    pub fn new(oauth_token: impl Into<String>) -> Self {
        Self {
            oauth_token: oauth_token.into(),
        }
    }
}

/// A stored account as the platform store represents it.
///
/// Only valid while the originating store is alive; wrappers built on top of
/// this type must retain their store reference.
#[derive(Debug, Clone)]
pub struct NativeAccount {
    /// Store-assigned identifier, stable across enumerations.
    pub identifier: String,
    /// User-visible account name.
    pub username: String,
    /// Stored credential, if the store currently holds one.
    pub credential: Option<NativeCredential>,
}

/// Options forwarded to the store's authorization prompt.
///
/// Some account types require extra context before the platform will grant
/// access (an application identifier, a permission list).
#[derive(Debug, Clone, Default)]
pub struct AccessOptions {
    pub app_id: Option<String>,
    pub permissions: Vec<String>,
}

impl AccessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }
}

/// Platform account store contract.
///
/// `request_access` is the only asynchronous primitive and it is
/// callback-shaped and non-cancellable: the prompt may block on user input
/// indefinitely, and abandoning the wait does not dismiss it.
pub trait AccountStore: Send + Sync {
    /// Looks up the handle for an account type identifier. `None` means the
    /// platform has no such type registered.
    fn find_account_type(&self, identifier: &str) -> Option<AccountTypeHandle>;

    /// Asks the platform for permission to use accounts of the given type.
    ///
    /// Invokes `on_done` exactly once with the grant outcome. The callback
    /// may fire synchronously or from an arbitrary thread.
    fn request_access(
        &self,
        handle: &AccountTypeHandle,
        options: &AccessOptions,
        on_done: AccessCallback,
    );

    /// Enumerates all stored accounts of the given type.
    ///
    /// Accounts returned here are bound to the lifetime of this store
    /// instance; enumeration must use the same live store that authorization
    /// was granted against.
    fn find_accounts(&self, handle: &AccountTypeHandle) -> Vec<NativeAccount>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_options_builder_accumulates_permissions() {
        let options = AccessOptions::new()
            .app_id("1234567890")
            .permission("email")
            .permission("publish_actions");

        assert_eq!(options.app_id.as_deref(), Some("1234567890"));
        assert_eq!(options.permissions, vec!["email", "publish_actions"]);
    }

    #[test]
    fn native_account_without_credential() {
        let account = NativeAccount {
            identifier: "acct-1".to_string(),
            username: "alice".to_string(),
            credential: None,
        };

        assert!(account.credential.is_none());
    }
}
