//! HTTP transport abstraction
//!
//! The gateway talks to the backend through this trait so tests can run
//! against a scripted transport instead of a live server. The default
//! implementation uses reqwest's blocking client with a cookie store, since
//! the backend authenticates requests via session cookies.

use std::time::Duration;

use serde_json::Value;

use crate::error::{BoardError, BoardResult};

/// HTTP methods the backend API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A backend response: status plus raw body bytes
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON
    pub fn json(&self) -> BoardResult<Value> {
        serde_json::from_slice(&self.body).map_err(BoardError::from)
    }
}

/// Issues a single HTTP request against a backend path
///
/// Implementations resolve the path against their configured base URL. One
/// call, one resolution; retries are not part of the contract.
pub trait HttpTransport {
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> BoardResult<Response>;
}

/// Default transport backed by reqwest's blocking client
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport for the given backend base URL
    pub fn new(base_url: impl Into<String>) -> BoardResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .user_agent(concat!("ledgerboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> BoardResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = method.as_str(), %url, "backend request");

        let builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        let builder = match body {
            Some(json) => builder.json(json),
            None => builder,
        };

        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        let ok = Response {
            status: 204,
            body: vec![],
        };
        assert!(ok.is_success());

        let not_found = Response {
            status: 404,
            body: vec![],
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn test_response_json() {
        let resp = Response {
            status: 200,
            body: br#"{"ok": true}"#.to_vec(),
        };
        let value = resp.json().unwrap();
        assert_eq!(value["ok"], serde_json::json!(true));

        let bad = Response {
            status: 200,
            body: b"not json".to_vec(),
        };
        assert!(bad.json().is_err());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
