//! Async bridging layer for the social client core.
//!
//! The platform subsystems this core delegates to expose only single-shot,
//! callback-invoked, non-cancellable primitives: account permission grants,
//! network request completion, share-surface dismissal. This crate converts
//! those into a consistent async-result contract with best-effort
//! cancellation.
//!
//! # Modules
//!
//! - `bridge`: [`await_callback`] and the [`Completion`] handle
//! - `error`: [`WaitError`], the terminal states of a bridged wait
//!
//! Cancellation uses [`tokio_util::sync::CancellationToken`], re-exported
//! here so downstream crates never depend on tokio-util directly.

pub mod bridge;
pub mod error;

pub use bridge::{await_callback, Completion};
pub use error::WaitError;

// Cancellation primitive used by every bridged contract.
pub use tokio_util::sync::CancellationToken;
