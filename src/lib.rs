//! Social Kit - a client layer for posting to social-network services whose
//! transport and account storage live in a platform-provided subsystem.
//!
//! This crate re-exports the workspace surface so hosts depend on one crate:
//!
//! - [`core_client`] - accounts, requests, share surfaces, the
//!   [`SocialService`] façade
//! - [`core_bridge`] - callback-to-future bridging and [`CancellationToken`]
//! - [`bridge_traits`] - the contracts a host platform implements
//! - `bridge_desktop` (feature `desktop-shims`, on by default) - reqwest
//!   transport and static account store for desktop hosts
//!
//! # Example
//!
//! ```no_run
//! use social_kit::logging::{init_logging, LoggingConfig};
//! use social_kit::{CancellationToken, SocialService};
//! use std::sync::Arc;
//! # async fn example(composers: Arc<dyn social_kit::bridge_traits::ComposerFactory>) {
//! use social_kit::bridge_desktop::{ReqwestTransportFactory, StaticAccountStore};
//!
//! init_logging(LoggingConfig::default()).expect("logging");
//!
//! let store = Arc::new(StaticAccountStore::new("com.apple.twitter"));
//! let transports = Arc::new(ReqwestTransportFactory::new());
//! let twitter = SocialService::twitter(store, transports, composers);
//!
//! let accounts = twitter.accounts(&CancellationToken::new()).await;
//! # let _ = accounts;
//! # }
//! ```

pub mod logging;

pub use bridge_traits;
pub use core_bridge;
pub use core_client;

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop;

// The types hosts touch on every call path.
pub use core_bridge::CancellationToken;
pub use core_client::{
    Account, Item, Method, Request, Response, ServiceError, ShareResult, SocialService,
};
