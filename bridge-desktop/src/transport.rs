//! Native transport implementation using Reqwest
//!
//! Desktop hosts have no platform HTTP engine, so the transport contract is
//! fulfilled with reqwest: one client shared across transports, one transport
//! object per request, completion reported through the callback the contract
//! prescribes.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

use bridge_traits::{
    error::Result, BridgeError, NativeCredential, NativeTransport, PerformCallback, ResponseMeta,
    ServiceKind, TransportFactory, TransportMethod,
};

/// One buffered multipart payload, kept in insertion order.
#[derive(Debug, Clone)]
struct PartSpec {
    name: String,
    data: Bytes,
    mime_type: String,
    filename: String,
}

/// Reqwest-backed [`TransportFactory`].
///
/// Holds the shared HTTP client and the runtime handle the completion
/// callback is driven from. Construct it inside a Tokio runtime, or pass a
/// handle explicitly with [`with_handle`](Self::with_handle).
pub struct ReqwestTransportFactory {
    client: Client,
    handle: Handle,
}

impl ReqwestTransportFactory {
    /// Creates a factory with default client configuration.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Creates a factory with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent("social-kit/0.1.0")
            .build()
            .expect("Failed to build HTTP client");
        Self::with_handle(client, Handle::current())
    }

    /// Creates a factory over an existing client and runtime handle.
    pub fn with_handle(client: Client, handle: Handle) -> Self {
        Self { client, handle }
    }
}

impl TransportFactory for ReqwestTransportFactory {
    fn create(
        &self,
        kind: ServiceKind,
        method: TransportMethod,
        url: &Url,
        params: &HashMap<String, String>,
    ) -> Result<Box<dyn NativeTransport>> {
        debug!(service = kind.title(), ?method, url = %url, "creating transport");
        Ok(Box::new(ReqwestTransport {
            client: self.client.clone(),
            handle: self.handle.clone(),
            method,
            url: url.clone(),
            params: params.clone(),
            parts: Vec::new(),
            credential: None,
        }))
    }
}

/// A single-use reqwest-backed transport object.
pub struct ReqwestTransport {
    client: Client,
    handle: Handle,
    method: TransportMethod,
    url: Url,
    params: HashMap<String, String>,
    parts: Vec<PartSpec>,
    credential: Option<NativeCredential>,
}

impl ReqwestTransport {
    /// Assembles the reqwest request. Parameters ride in the query string for
    /// GET/DELETE and in the body for POST; buffered multipart payloads turn
    /// a POST body into a multipart form with the parameters as text parts.
    fn build_request(&self) -> Result<reqwest::RequestBuilder> {
        let mut builder = match self.method {
            TransportMethod::Get => self.client.get(self.url.clone()).query(&self.params),
            TransportMethod::Delete => self.client.delete(self.url.clone()).query(&self.params),
            TransportMethod::Post => {
                let builder = self.client.post(self.url.clone());
                if self.parts.is_empty() {
                    builder.form(&self.params)
                } else {
                    let mut form = reqwest::multipart::Form::new();
                    for (key, value) in &self.params {
                        form = form.text(key.clone(), value.clone());
                    }
                    for part in &self.parts {
                        let mut item = reqwest::multipart::Part::bytes(part.data.to_vec())
                            .mime_str(&part.mime_type)
                            .map_err(|e| {
                                BridgeError::native(format!(
                                    "Invalid MIME type '{}': {e}",
                                    part.mime_type
                                ))
                            })?;
                        if !part.filename.is_empty() {
                            item = item.file_name(part.filename.clone());
                        }
                        form = form.part(part.name.clone(), item);
                    }
                    builder.multipart(form)
                }
            }
        };

        if let Some(credential) = &self.credential {
            builder = builder.bearer_auth(&credential.oauth_token);
        }

        Ok(builder)
    }
}

impl NativeTransport for ReqwestTransport {
    fn add_multipart(&mut self, data: Bytes, name: &str, mime_type: &str, filename: &str) {
        self.parts.push(PartSpec {
            name: name.to_string(),
            data,
            mime_type: mime_type.to_string(),
            filename: filename.to_string(),
        });
    }

    fn set_credential(&mut self, credential: Option<NativeCredential>) {
        self.credential = credential;
    }

    fn perform(&mut self, on_done: PerformCallback) {
        let builder = match self.build_request() {
            Ok(builder) => builder,
            Err(err) => {
                on_done(Err(err));
                return;
            }
        };

        // The network call runs on the runtime; the callback fires from
        // whichever worker completes it, exactly like a platform engine.
        self.handle.spawn(async move {
            let outcome = async {
                let response = builder
                    .send()
                    .await
                    .map_err(|e| BridgeError::native(e.to_string()))?;

                let status = response.status().as_u16();
                let url = response.url().to_string();
                let headers = response
                    .headers()
                    .iter()
                    .map(|(name, value)| {
                        (
                            name.to_string(),
                            value.to_str().unwrap_or_default().to_string(),
                        )
                    })
                    .collect();
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| BridgeError::native(e.to_string()))?;

                Ok((
                    body,
                    ResponseMeta {
                        status,
                        headers,
                        url,
                    },
                ))
            }
            .await;

            if let Err(err) = &outcome {
                warn!(%err, "transport request failed");
            }
            on_done(outcome);
        });
    }
}
