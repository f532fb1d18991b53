//! Native Share Surface Abstraction
//!
//! Contract for the platform's share composer: an interactive surface the
//! host presents to the user, pre-populated with text, images, and links.
//! Dismissal is reported through a one-shot callback carrying the platform's
//! own outcome value.

use bytes::Bytes;
use url::Url;

use crate::error::Result;
use crate::transport::ServiceKind;

/// The platform's own dismissal outcome.
///
/// Only [`Posted`](ComposerOutcome::Posted) signals a completed post; callers
/// must treat every other value, including ones added by future platform
/// versions, as a cancellation.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerOutcome {
    /// The user posted the content.
    Posted,
    /// The user dismissed the surface without posting.
    Cancelled,
    /// The surface was torn down by the platform before completion.
    Failed,
}

/// One-shot dismissal callback, possibly fired from a non-caller thread.
pub type ComposerCallback = Box<dyn FnOnce(ComposerOutcome) + Send + 'static>;

/// A native share composer instance.
///
/// Population order is observable: images and links appear on the surface in
/// the order they were added.
pub trait ShareComposer: Send {
    fn set_initial_text(&mut self, text: &str);

    fn add_image(&mut self, image: Bytes);

    fn add_url(&mut self, url: &Url);

    /// Registers the dismissal callback, replacing any earlier registration.
    fn set_completion(&mut self, on_done: ComposerCallback);
}

impl std::fmt::Debug for dyn ShareComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn ShareComposer")
    }
}

/// Factory for share composers. Fails when the platform cannot present a
/// surface for the given service (service disabled, no UI session).
pub trait ComposerFactory: Send + Sync {
    fn from_service(&self, kind: ServiceKind) -> Result<Box<dyn ShareComposer>>;
}
