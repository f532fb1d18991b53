//! Static account store for hosts without a platform store.
//!
//! Desktop systems have no account-permission subsystem, so accounts and
//! their credentials are provisioned out of band (configuration, a settings
//! UI) and served from memory. The grant policy stands in for the platform's
//! authorization prompt.

use std::sync::Mutex;

use tracing::debug;

use bridge_traits::{
    AccessCallback, AccessOptions, AccountStore, AccountTypeHandle, NativeAccount,
};

/// In-memory [`AccountStore`] over a fixed account list.
pub struct StaticAccountStore {
    type_identifier: String,
    grant: bool,
    accounts: Mutex<Vec<NativeAccount>>,
}

impl StaticAccountStore {
    /// Creates a granting store for one account type.
    pub fn new(type_identifier: impl Into<String>) -> Self {
        Self {
            type_identifier: type_identifier.into(),
            grant: true,
            accounts: Mutex::new(Vec::new()),
        }
    }

    /// Adds a pre-provisioned account.
    pub fn account(self, account: NativeAccount) -> Self {
        self.accounts.lock().unwrap().push(account);
        self
    }

    /// Makes the store deny every access request, like a user declining the
    /// platform prompt.
    pub fn denying(mut self) -> Self {
        self.grant = false;
        self
    }
}

impl AccountStore for StaticAccountStore {
    fn find_account_type(&self, identifier: &str) -> Option<AccountTypeHandle> {
        (identifier == self.type_identifier).then(|| AccountTypeHandle::new(identifier))
    }

    fn request_access(
        &self,
        handle: &AccountTypeHandle,
        _options: &AccessOptions,
        on_done: AccessCallback,
    ) {
        debug!(account_type = %handle.0, granted = self.grant, "static access request");
        on_done(self.grant, None);
    }

    fn find_accounts(&self, _handle: &AccountTypeHandle) -> Vec<NativeAccount> {
        self.accounts.lock().unwrap().clone()
    }
}
