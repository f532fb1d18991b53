//! Social client core.
//!
//! A uniform interface for posting to, and reading from, a social-network
//! service whose transport and account storage live in a platform-provided
//! subsystem. The platform side is reached exclusively through the
//! `bridge-traits` contracts; its callback-shaped primitives are converted to
//! async results by `core-bridge`.
//!
//! # Modules
//!
//! - `account`: the [`Account`] capability trait and the store-backed
//!   [`StoreAccount`]
//! - `item`: shareable content
//! - `request`: the transport-agnostic [`Request`]/[`Response`] model
//! - `resolver`: account authorization and enumeration
//! - `share`: share surface construction and the [`ShareResult`] mapping
//! - `service`: the [`SocialService`] façade
//! - `error`: the [`ServiceError`] taxonomy
//!
//! # Example
//!
//! ```no_run
//! use core_client::SocialService;
//! use core_bridge::CancellationToken;
//! # use std::sync::Arc;
//! # async fn example(
//! #     store: Arc<dyn bridge_traits::AccountStore>,
//! #     transports: Arc<dyn bridge_traits::TransportFactory>,
//! #     composers: Arc<dyn bridge_traits::ComposerFactory>,
//! # ) -> core_client::error::Result<()> {
//! let twitter = SocialService::twitter(store, transports, composers);
//!
//! let cancel = CancellationToken::new();
//! let accounts = twitter.accounts(&cancel).await?;
//! if let Some(account) = accounts.first() {
//!     let mut request = twitter.create_request(
//!         "POST",
//!         url::Url::parse("https://api.twitter.com/1.1/statuses/update.json").unwrap(),
//!         [("status".to_string(), "hello".to_string())].into(),
//!         Some(account.clone()),
//!     )?;
//!     let response = request.response(&cancel).await?;
//!     println!("{}", response.status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod error;
pub mod item;
pub mod request;
pub mod resolver;
pub mod service;
pub mod share;

pub use account::{Account, CredentialBearer, StoreAccount};
pub use error::ServiceError;
pub use item::Item;
pub use request::{Method, Request, Response};
pub use resolver::AccountResolver;
pub use service::{Authenticator, ServiceDescriptor, SocialService};
pub use share::{ShareCoordinator, ShareResult};
