//! Native Transport Abstraction
//!
//! Contract for the platform's HTTP execution engine. A transport object is
//! created per request, carries the fixed method and target, and performs the
//! network call exactly once, reporting completion through a one-shot
//! callback.

use std::collections::HashMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::account::NativeCredential;
use crate::error::{BridgeError, Result};

/// The concrete service a transport or composer is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Twitter,
    Facebook,
    SinaWeibo,
}

impl ServiceKind {
    /// Human-readable service title.
    pub fn title(&self) -> &'static str {
        match self {
            ServiceKind::Twitter => "Twitter",
            ServiceKind::Facebook => "Facebook",
            ServiceKind::SinaWeibo => "Sina Weibo",
        }
    }
}

/// HTTP methods the native engine supports. A closed set: anything else is
/// rejected before a transport object is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMethod {
    Get,
    Post,
    Delete,
}

/// Transport-level metadata of a completed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, last value wins for repeated names.
    pub headers: HashMap<String, String>,
    /// Final URL after any redirects the engine followed.
    pub url: String,
}

/// One-shot completion callback for [`NativeTransport::perform`].
///
/// Delivered exactly once, possibly from a thread other than the caller's,
/// with either the response payload and metadata or the native error.
pub type PerformCallback =
    Box<dyn FnOnce(std::result::Result<(Bytes, ResponseMeta), BridgeError>) + Send + 'static>;

/// A single-use native request execution object.
///
/// The method and target URL are fixed at construction through
/// [`TransportFactory::create`]; only the credential may change afterwards.
pub trait NativeTransport: Send {
    /// Appends a named binary part to the request body.
    fn add_multipart(&mut self, data: Bytes, name: &str, mime_type: &str, filename: &str);

    /// Attaches or clears the credential used to sign the request.
    fn set_credential(&mut self, credential: Option<NativeCredential>);

    /// Executes the request. Invokes `on_done` exactly once; the call is not
    /// cancellable once started.
    fn perform(&mut self, on_done: PerformCallback);
}

/// Factory for native transport objects.
pub trait TransportFactory: Send + Sync {
    /// Builds a transport for one request. `params` become query parameters
    /// for GET/DELETE and body parameters for POST, per the engine's rules.
    fn create(
        &self,
        kind: ServiceKind,
        method: TransportMethod,
        url: &Url,
        params: &HashMap<String, String>,
    ) -> Result<Box<dyn NativeTransport>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_kind_titles() {
        assert_eq!(ServiceKind::Twitter.title(), "Twitter");
        assert_eq!(ServiceKind::SinaWeibo.title(), "Sina Weibo");
    }

    #[test]
    fn response_meta_round_trips_through_serde() {
        let meta = ResponseMeta {
            status: 200,
            headers: HashMap::from([("content-type".to_string(), "text/plain".to_string())]),
            url: "https://api.example.com/1.1/update.json".to_string(),
        };

        let json = serde_json::to_string(&meta).unwrap();
        let back: ResponseMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, 200);
        assert_eq!(back.headers.get("content-type").unwrap(), "text/plain");
    }
}
