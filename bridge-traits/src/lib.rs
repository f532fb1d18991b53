//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the social client core and the
//! platform-provided subsystems it delegates to. Every primitive here is
//! deliberately narrow and callback-shaped, because that is all the native
//! side offers: one-shot completion handlers that may fire synchronously or
//! from an arbitrary thread, with no cancellation support.
//!
//! ## Traits
//!
//! ### Accounts
//! - [`AccountStore`](account::AccountStore) - Account permission prompt and
//!   stored-account enumeration
//!
//! ### Networking
//! - [`NativeTransport`](transport::NativeTransport) /
//!   [`TransportFactory`](transport::TransportFactory) - Single-use HTTP
//!   execution objects with multipart payloads and credential attachment
//!
//! ### Share UI
//! - [`ShareComposer`](composer::ShareComposer) /
//!   [`ComposerFactory`](composer::ComposerFactory) - Interactive share
//!   surface construction and dismissal reporting
//!
//! ## Callback Contract
//!
//! Every callback type in this crate (`AccessCallback`, `PerformCallback`,
//! `ComposerCallback`) is invoked exactly once. Implementations must not
//! assume the callback runs on the thread that registered it, and must not
//! assume the waiter is still listening when it fires: the core layer applies
//! best-effort cancellation and discards late completions.
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Platform
//! implementations should preserve the native diagnostic text verbatim in
//! [`BridgeError::Native`] so it can be surfaced to the application.
//!
//! ## Thread Safety
//!
//! Factories and stores are `Send + Sync`; per-request objects
//! (`NativeTransport`, `ShareComposer`) are `Send` only, since they are owned
//! by a single in-flight operation.

pub mod account;
pub mod composer;
pub mod error;
pub mod transport;

pub use error::BridgeError;

// Re-export commonly used types
pub use account::{
    AccessCallback, AccessOptions, AccountStore, AccountTypeHandle, NativeAccount,
    NativeCredential,
};
pub use composer::{ComposerCallback, ComposerFactory, ComposerOutcome, ShareComposer};
pub use transport::{
    NativeTransport, PerformCallback, ResponseMeta, ServiceKind, TransportFactory,
    TransportMethod,
};
