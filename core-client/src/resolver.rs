//! Account resolution against the platform store.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use bridge_traits::{AccessOptions, AccountStore};
use core_bridge::{await_callback, CancellationToken};

use crate::account::{Account, StoreAccount};
use crate::error::{Result, ServiceError};

/// Asks the platform store for authorization and returns the usable accounts.
///
/// The resolver retains its store handle for as long as it lives, and every
/// [`StoreAccount`] it hands out carries its own clone of that handle:
/// accounts are only valid while their originating store is alive, so the
/// store must outlive every account derived from it.
pub struct AccountResolver {
    store: Arc<dyn AccountStore>,
}

impl AccountResolver {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Requests authorization for the account type and, if granted,
    /// enumerates all stored accounts of that type.
    ///
    /// Denial is a valid terminal outcome, not an error: the result is an
    /// empty list. A missing account type (including an unavailable store
    /// handle) is [`ServiceError::UnknownAccountType`]. The authorization
    /// prompt may block on user input indefinitely; the wait has no timeout
    /// beyond the caller's cancellation token.
    #[instrument(skip(self, options, cancel), fields(account_type = type_identifier))]
    pub async fn request_accounts(
        &self,
        type_identifier: &str,
        options: &AccessOptions,
        cancel: &CancellationToken,
    ) -> Result<Vec<Arc<dyn Account>>> {
        let handle = self
            .store
            .find_account_type(type_identifier)
            .ok_or_else(|| ServiceError::UnknownAccountType(type_identifier.to_string()))?;

        let granted: bool = await_callback(
            |done| {
                self.store.request_access(
                    &handle,
                    options,
                    Box::new(move |granted, error| {
                        if let Some(error) = error {
                            // Denial diagnostics are logged, never surfaced:
                            // denial is silent for the caller.
                            warn!(%error, "account access not granted");
                        }
                        done.resolve(granted);
                    }),
                );
                Ok(())
            },
            cancel,
        )
        .await?;

        if !granted {
            debug!("authorization denied; returning no accounts");
            return Ok(Vec::new());
        }

        // Enumerate against the same live store that granted access.
        let accounts: Vec<Arc<dyn Account>> = self
            .store
            .find_accounts(&handle)
            .into_iter()
            .map(|native| {
                Arc::new(StoreAccount::new(native, Arc::clone(&self.store))) as Arc<dyn Account>
            })
            .collect();

        debug!(count = accounts.len(), "accounts resolved");
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{AccessCallback, AccountTypeHandle, NativeAccount, NativeCredential};
    use std::sync::Mutex;

    /// In-memory store in the shape of the platform one: a single account
    /// type with a configurable grant outcome.
    struct FakeStore {
        type_identifier: &'static str,
        grant: bool,
        deny_error: Option<&'static str>,
        accounts: Vec<NativeAccount>,
        access_requests: Mutex<u32>,
    }

    impl FakeStore {
        fn granting(accounts: Vec<NativeAccount>) -> Self {
            Self {
                type_identifier: "com.apple.twitter",
                grant: true,
                deny_error: None,
                accounts,
                access_requests: Mutex::new(0),
            }
        }

        fn denying(deny_error: Option<&'static str>) -> Self {
            Self {
                type_identifier: "com.apple.twitter",
                grant: false,
                deny_error,
                accounts: vec![native_account("alice")],
                access_requests: Mutex::new(0),
            }
        }
    }

    impl AccountStore for FakeStore {
        fn find_account_type(&self, identifier: &str) -> Option<AccountTypeHandle> {
            (identifier == self.type_identifier).then(|| AccountTypeHandle::new(identifier))
        }

        fn request_access(
            &self,
            _handle: &AccountTypeHandle,
            _options: &AccessOptions,
            on_done: AccessCallback,
        ) {
            *self.access_requests.lock().unwrap() += 1;
            let error = self.deny_error.map(bridge_traits::BridgeError::native);
            on_done(self.grant, error);
        }

        fn find_accounts(&self, _handle: &AccountTypeHandle) -> Vec<NativeAccount> {
            self.accounts.clone()
        }
    }

    fn native_account(username: &str) -> NativeAccount {
        NativeAccount {
            identifier: format!("id-{username}"),
            username: username.to_string(),
            credential: Some(NativeCredential::new("token")),
        }
    }

    #[tokio::test]
    async fn grant_returns_all_stored_accounts() {
        let store = Arc::new(FakeStore::granting(vec![
            native_account("alice"),
            native_account("bob"),
        ]));
        let resolver = AccountResolver::new(store.clone());

        let accounts = resolver
            .request_accounts(
                "com.apple.twitter",
                &AccessOptions::new(),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].username(), "alice");
        assert_eq!(accounts[1].username(), "bob");
        assert_eq!(*store.access_requests.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn denial_is_an_empty_list_not_an_error() {
        let resolver = AccountResolver::new(Arc::new(FakeStore::denying(None)));

        let accounts = resolver
            .request_accounts(
                "com.apple.twitter",
                &AccessOptions::new(),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn denial_with_native_diagnostic_stays_silent() {
        let resolver = AccountResolver::new(Arc::new(FakeStore::denying(Some(
            "Access to Twitter accounts has been restricted.",
        ))));

        let accounts = resolver
            .request_accounts(
                "com.apple.twitter",
                &AccessOptions::new(),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn unknown_account_type_fails_synchronously() {
        let store = Arc::new(FakeStore::granting(vec![]));
        let resolver = AccountResolver::new(store.clone());

        let err = resolver
            .request_accounts(
                "com.example.myspace",
                &AccessOptions::new(),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::UnknownAccountType("com.example.myspace".to_string())
        );
        // The authorization prompt was never reached.
        assert_eq!(*store.access_requests.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn cancellation_resolves_the_wait_as_cancelled() {
        /// Store whose prompt never answers, like a user who walks away.
        struct StalledStore;

        impl AccountStore for StalledStore {
            fn find_account_type(&self, identifier: &str) -> Option<AccountTypeHandle> {
                Some(AccountTypeHandle::new(identifier))
            }

            fn request_access(
                &self,
                _handle: &AccountTypeHandle,
                _options: &AccessOptions,
                on_done: AccessCallback,
            ) {
                // Keep the callback alive without ever firing it.
                std::thread::spawn(move || {
                    std::thread::sleep(std::time::Duration::from_secs(60));
                    on_done(false, None);
                });
            }

            fn find_accounts(&self, _handle: &AccountTypeHandle) -> Vec<NativeAccount> {
                Vec::new()
            }
        }

        let resolver = AccountResolver::new(Arc::new(StalledStore));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = resolver
            .request_accounts("com.apple.twitter", &AccessOptions::new(), &cancel)
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::Cancelled);
    }
}
