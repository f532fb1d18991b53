//! Service façade.
//!
//! [`SocialService`] composes the resolver, the request layer, and the share
//! coordinator behind the surface the application sees, and rejects the
//! operations a store-backed service variant does not have: headless sharing
//! and programmatic authentication.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use bridge_traits::{
    AccessOptions, AccountStore, ComposerFactory, ServiceKind, ShareComposer, TransportFactory,
};
use core_bridge::CancellationToken;

use crate::account::Account;
use crate::error::{Result, ServiceError};
use crate::item::Item;
use crate::request::Request;
use crate::resolver::AccountResolver;
use crate::share::{ShareCoordinator, ShareResult};

/// Static identity of one service variant.
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    /// Stable identifier, e.g. `"Twitter"`.
    pub service_id: String,
    /// User-visible title.
    pub title: String,
    /// The native service this variant binds to.
    pub kind: ServiceKind,
    /// Platform identifier of the backing account type.
    pub account_type_identifier: String,
    /// Options forwarded to the authorization prompt.
    pub access_options: AccessOptions,
}

/// An interactive credential-acquisition flow.
///
/// Store-backed services never provide one: the platform settings surface
/// owns credential management, and [`SocialService::authenticator`] fails
/// with [`ServiceError::NotSupported`].
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, cancel: &CancellationToken) -> Result<Arc<dyn Account>>;
}

impl std::fmt::Debug for dyn Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Authenticator")
    }
}

/// A social service backed by the platform account store and transport.
pub struct SocialService {
    descriptor: ServiceDescriptor,
    resolver: AccountResolver,
    transports: Arc<dyn TransportFactory>,
    share: ShareCoordinator,
}

impl SocialService {
    pub fn new(
        descriptor: ServiceDescriptor,
        store: Arc<dyn AccountStore>,
        transports: Arc<dyn TransportFactory>,
        composers: Arc<dyn ComposerFactory>,
    ) -> Self {
        let share = ShareCoordinator::new(descriptor.kind, composers);
        Self {
            descriptor,
            resolver: AccountResolver::new(store),
            transports,
            share,
        }
    }

    /// Twitter over the platform store.
    pub fn twitter(
        store: Arc<dyn AccountStore>,
        transports: Arc<dyn TransportFactory>,
        composers: Arc<dyn ComposerFactory>,
    ) -> Self {
        Self::new(
            ServiceDescriptor {
                service_id: "Twitter".into(),
                title: "Twitter".into(),
                kind: ServiceKind::Twitter,
                account_type_identifier: "com.apple.twitter".into(),
                access_options: AccessOptions::new(),
            },
            store,
            transports,
            composers,
        )
    }

    /// Facebook over the platform store. The platform prompt requires the
    /// application identifier and the requested permissions.
    pub fn facebook(
        app_id: impl Into<String>,
        permissions: Vec<String>,
        store: Arc<dyn AccountStore>,
        transports: Arc<dyn TransportFactory>,
        composers: Arc<dyn ComposerFactory>,
    ) -> Self {
        let mut access_options = AccessOptions::new().app_id(app_id);
        for permission in permissions {
            access_options = access_options.permission(permission);
        }
        Self::new(
            ServiceDescriptor {
                service_id: "Facebook".into(),
                title: "Facebook".into(),
                kind: ServiceKind::Facebook,
                account_type_identifier: "com.apple.facebook".into(),
                access_options,
            },
            store,
            transports,
            composers,
        )
    }

    /// Sina Weibo over the platform store.
    pub fn sina_weibo(
        store: Arc<dyn AccountStore>,
        transports: Arc<dyn TransportFactory>,
        composers: Arc<dyn ComposerFactory>,
    ) -> Self {
        Self::new(
            ServiceDescriptor {
                service_id: "SinaWeibo".into(),
                title: "Sina Weibo".into(),
                kind: ServiceKind::SinaWeibo,
                account_type_identifier: "com.apple.sinaweibo".into(),
                access_options: AccessOptions::new(),
            },
            store,
            transports,
            composers,
        )
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    /// The accounts currently usable with this service.
    ///
    /// Authorization denial yields an empty list, never an error.
    #[instrument(skip(self, cancel), fields(service = %self.descriptor.service_id))]
    pub async fn accounts(&self, cancel: &CancellationToken) -> Result<Vec<Arc<dyn Account>>> {
        self.resolver
            .request_accounts(
                &self.descriptor.account_type_identifier,
                &self.descriptor.access_options,
                cancel,
            )
            .await
    }

    /// Builds an executable request bound to this service.
    ///
    /// Fails synchronously for an unsupported method or an account type the
    /// transport cannot carry.
    pub fn create_request(
        &self,
        method: &str,
        url: Url,
        parameters: HashMap<String, String>,
        account: Option<Arc<dyn Account>>,
    ) -> Result<Request> {
        Request::new(
            self.descriptor.kind,
            method,
            url,
            parameters,
            account,
            self.transports.as_ref(),
        )
    }

    /// Builds the interactive share surface for `item`.
    pub fn share_ui(
        &self,
        item: &Item,
        on_complete: impl FnOnce(ShareResult) + Send + 'static,
    ) -> Result<Box<dyn ShareComposer>> {
        self.share.build_share_surface(item, on_complete)
    }

    /// Headless sharing is categorically unavailable: the composer requires
    /// interactive presentation. Use [`share_ui`](Self::share_ui).
    pub async fn share_item(
        &self,
        _item: &Item,
        _account: Option<Arc<dyn Account>>,
        _cancel: &CancellationToken,
    ) -> Result<()> {
        Err(ServiceError::NotSupported(
            "Sharing items without a UI is not supported. Use share_ui instead.".into(),
        ))
    }

    /// Extracts the stored OAuth token from an account.
    pub async fn oauth_token(&self, account: &dyn Account) -> Result<String> {
        let bearer = account
            .credentials()
            .ok_or_else(|| ServiceError::UnsupportedAccountType(account.kind().to_string()))?;
        bearer.oauth_token().ok_or(ServiceError::NoCredential)
    }

    /// Whether this service variant can authenticate users itself.
    ///
    /// Store-backed services cannot; credentials are managed through the
    /// platform settings surface.
    pub fn supports_authentication(&self) -> bool {
        false
    }

    /// The authentication flow for this service.
    ///
    /// Always [`ServiceError::NotSupported`] while
    /// [`supports_authentication`](Self::supports_authentication) is false.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>> {
        Err(ServiceError::NotSupported(
            "This service does not authenticate users. Direct them to the platform settings."
                .into(),
        ))
    }
}
