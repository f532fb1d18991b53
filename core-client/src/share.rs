//! Share surface coordination.
//!
//! Builds the platform composer from an [`Item`] and maps the platform's own
//! dismissal value onto the two terminal outcomes this layer exposes.

use std::sync::Arc;

use tracing::{debug, instrument};

use bridge_traits::{ComposerFactory, ComposerOutcome, ServiceKind, ShareComposer};

use crate::error::Result;
use crate::item::Item;

/// Terminal outcome of a share interaction. No partial states: anything the
/// platform reports other than an explicit post is a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareResult {
    Done,
    Cancelled,
}

impl From<ComposerOutcome> for ShareResult {
    fn from(outcome: ComposerOutcome) -> Self {
        match outcome {
            ComposerOutcome::Posted => ShareResult::Done,
            _ => ShareResult::Cancelled,
        }
    }
}

/// Builds pre-populated share surfaces for one service kind.
pub struct ShareCoordinator {
    kind: ServiceKind,
    composers: Arc<dyn ComposerFactory>,
}

impl ShareCoordinator {
    pub fn new(kind: ServiceKind, composers: Arc<dyn ComposerFactory>) -> Self {
        Self { kind, composers }
    }

    /// Builds a composer seeded from `item` and registers `on_complete` for
    /// its dismissal.
    ///
    /// Construction is synchronous; completion arrives later through the
    /// handler, possibly from a non-caller thread. The returned handle is the
    /// surface the host must present - sharing never happens without it.
    #[instrument(skip(self, item, on_complete), fields(kind = self.kind.title()))]
    pub fn build_share_surface(
        &self,
        item: &Item,
        on_complete: impl FnOnce(ShareResult) + Send + 'static,
    ) -> Result<Box<dyn ShareComposer>> {
        let mut composer = self.composers.from_service(self.kind)?;

        composer.set_initial_text(&item.text);
        for image in &item.images {
            composer.add_image(image.clone());
        }
        for link in &item.links {
            composer.add_url(link);
        }

        composer.set_completion(Box::new(move |outcome| {
            debug!(?outcome, "share surface dismissed");
            on_complete(ShareResult::from(outcome));
        }));

        Ok(composer)
    }
}
