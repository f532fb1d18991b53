//! Transport-agnostic request model.
//!
//! A [`Request`] describes one HTTP-shaped operation - method, target,
//! parameters, multipart payloads, bound account - independently of the
//! engine that executes it. The concrete transport object is built at
//! construction time, which is also where all validation happens: an
//! unsupported method never reaches the network.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use bridge_traits::{
    NativeTransport, ResponseMeta, ServiceKind, TransportFactory, TransportMethod,
};
use core_bridge::{await_callback, CancellationToken};

use crate::account::Account;
use crate::error::{Result, ServiceError};

/// HTTP methods the request layer accepts. Closed set; parsing anything else
/// fails construction with [`ServiceError::UnsupportedMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Case-insensitive parse. Fail-fast: runs before any transport work.
    pub fn parse(method: &str) -> Result<Self> {
        match method.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "delete" => Ok(Method::Delete),
            _ => Err(ServiceError::UnsupportedMethod(method.to_string())),
        }
    }
}

impl From<Method> for TransportMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => TransportMethod::Get,
            Method::Post => TransportMethod::Post,
            Method::Delete => TransportMethod::Delete,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One executable request against a social service.
///
/// The method is fixed once the transport object exists; only the bound
/// account may change afterwards, and rebinding propagates the translated
/// credential to the transport or fails loudly.
pub struct Request {
    method: Method,
    url: Url,
    parameters: HashMap<String, String>,
    account: Option<Arc<dyn Account>>,
    transport: Box<dyn NativeTransport>,
    started: bool,
}

impl Request {
    /// Builds a request and its backing transport object.
    ///
    /// Validation order matters: the method parse and the account capability
    /// check are synchronous and happen here, never deferred to execution.
    pub fn new(
        kind: ServiceKind,
        method: &str,
        url: Url,
        parameters: HashMap<String, String>,
        account: Option<Arc<dyn Account>>,
        transports: &dyn TransportFactory,
    ) -> Result<Self> {
        let method = Method::parse(method)?;
        let transport = transports
            .create(kind, method.into(), &url, &parameters)
            .map_err(ServiceError::from)?;

        let mut request = Self {
            method,
            url,
            parameters,
            account: None,
            transport,
            started: false,
        };
        request.set_account(account)?;
        Ok(request)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    pub fn account(&self) -> Option<&Arc<dyn Account>> {
        self.account.as_ref()
    }

    /// Rebinds the account, translating it into the credential representation
    /// the transport requires.
    ///
    /// `None` clears the credential and the request goes out unauthenticated.
    /// An account type without the credential capability is rejected with
    /// [`ServiceError::UnsupportedAccountType`] rather than silently sending
    /// an unauthenticated request.
    pub fn set_account(&mut self, account: Option<Arc<dyn Account>>) -> Result<()> {
        match &account {
            None => self.transport.set_credential(None),
            Some(acc) => {
                let bearer = acc
                    .credentials()
                    .ok_or_else(|| ServiceError::UnsupportedAccountType(acc.kind().to_string()))?;
                self.transport.set_credential(bearer.native_credential());
            }
        }
        self.account = account;
        Ok(())
    }

    /// Appends a named binary part to the request body.
    ///
    /// Multipart additions happen-before execution; once [`response`]
    /// (Request::response) has been called the payload is frozen.
    pub fn add_multipart(
        &mut self,
        name: &str,
        data: Bytes,
        mime_type: &str,
        filename: &str,
    ) -> Result<()> {
        if self.started {
            return Err(ServiceError::AlreadyExecuted);
        }
        self.transport.add_multipart(data, name, mime_type, filename);
        Ok(())
    }

    /// Executes the request and waits for the transport to complete.
    ///
    /// Performs exactly one native call; a second invocation fails with
    /// [`ServiceError::AlreadyExecuted`]. Cancellation is best-effort: the
    /// native call is not stopped, its late completion is discarded.
    #[instrument(skip(self, cancel), fields(method = %self.method, url = %self.url))]
    pub async fn response(&mut self, cancel: &CancellationToken) -> Result<Response> {
        if self.started {
            return Err(ServiceError::AlreadyExecuted);
        }
        self.started = true;

        debug!("performing native request");
        let (body, meta) = await_callback(
            |done| {
                self.transport.perform(Box::new(move |result| done.deliver(result)));
                Ok(())
            },
            cancel,
        )
        .await?;

        debug!(status = meta.status, "native request completed");
        Ok(Response::new(body, meta))
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("parameters", &self.parameters)
            .field("account", &self.account)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

/// Result of one completed request: raw body bytes plus transport metadata.
/// Produced exactly once per execution.
#[derive(Debug, Clone)]
pub struct Response {
    body: Bytes,
    meta: ResponseMeta,
}

impl Response {
    pub fn new(body: Bytes, meta: ResponseMeta) -> Self {
        Self { body, meta }
    }

    pub fn status(&self) -> u16 {
        self.meta.status
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.meta.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Response body as UTF-8 text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| ServiceError::Transport(format!("Invalid UTF-8 in response body: {e}")))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ServiceError::Transport(format!("JSON deserialization failed: {e}")))
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.meta.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parse_is_case_insensitive() {
        for supported in ["get", "GET", "Get", "post", "POST", "delete", "DeLeTe"] {
            assert!(Method::parse(supported).is_ok(), "{supported} should parse");
        }
    }

    #[test]
    fn method_parse_rejects_everything_else() {
        for unsupported in ["put", "PATCH", "head", "options", ""] {
            assert_eq!(
                Method::parse(unsupported).unwrap_err(),
                ServiceError::UnsupportedMethod(unsupported.to_string())
            );
        }
    }

    #[test]
    fn response_helpers() {
        let response = Response::new(
            Bytes::from_static(b"{\"id\": 42}"),
            ResponseMeta {
                status: 200,
                headers: HashMap::from([(
                    "content-type".to_string(),
                    "application/json".to_string(),
                )]),
                url: "https://api.example.com/item".to_string(),
            },
        );

        assert!(response.is_success());
        assert_eq!(response.text().unwrap(), "{\"id\": 42}");
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], 42);
    }
}
