//! Desktop implementations of the host bridge traits.
//!
//! Desktop hosts have neither a platform account store nor a native HTTP
//! engine, so this crate supplies stand-ins that honor the same callback
//! contracts:
//!
//! - [`ReqwestTransportFactory`] / [`ReqwestTransport`] - request execution
//!   over a shared reqwest client, completion delivered from a runtime worker
//! - [`StaticAccountStore`] - pre-provisioned accounts with a configurable
//!   grant policy, for hosts that resolve credentials out of band
//!
//! No [`ComposerFactory`](bridge_traits::ComposerFactory) ships here: a share
//! surface is a host-UI concern, and UI hosts provide their own.

pub mod accounts;
pub mod transport;

pub use accounts::StaticAccountStore;
pub use transport::{ReqwestTransport, ReqwestTransportFactory};
