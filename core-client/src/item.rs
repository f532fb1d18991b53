//! Content to share.

use bytes::Bytes;
use url::Url;

/// A piece of content handed to the share surface.
///
/// Images and links keep their insertion order; the order is observable on
/// the composed surface. Immutable once handed to the coordinator.
#[derive(Debug, Clone, Default)]
pub struct Item {
    pub text: String,
    pub images: Vec<Bytes>,
    pub links: Vec<Url>,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            images: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn image(mut self, image: Bytes) -> Self {
        self.images.push(image);
        self
    }

    pub fn link(mut self, link: Url) -> Self {
        self.links.push(link);
        self
    }
}
