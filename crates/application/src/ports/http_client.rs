//! HTTP Client port

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// HTTP methods used by the sync layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
}

/// A JSON API request to be executed by an adapter.
///
/// Every request is a JSON exchange: adapters set
/// `Content-Type: application/json` unconditionally and attach
/// `Authorization: Bearer <token>` whenever `bearer_token` is present.
/// An absent token does not suppress the request; the backend rejects
/// it instead (the read path guards before building a request, the
/// write path deliberately does not).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// The HTTP method.
    pub method: ApiMethod,
    /// Absolute request URL.
    pub url: String,
    /// Bearer access token, if credentials have resolved.
    pub bearer_token: Option<String>,
    /// JSON body, for POST requests.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Builds an authenticated GET request.
    #[must_use]
    pub fn get(url: String, bearer_token: Option<String>) -> Self {
        Self {
            method: ApiMethod::Get,
            url,
            bearer_token,
            body: None,
        }
    }

    /// Builds an authenticated POST request with a JSON body.
    #[must_use]
    pub fn post(url: String, bearer_token: Option<String>, body: Value) -> Self {
        Self {
            method: ApiMethod::Post,
            url,
            bearer_token,
            body: Some(body),
        }
    }
}

/// A raw API response: status plus undecoded body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decodes the body as JSON.
    ///
    /// The status code is intentionally not consulted here: the sync
    /// layer decodes bodies unconditionally, so a backend error payload
    /// surfaces as a decode failure. The status is kept on the struct
    /// for callers that want to gate on it.
    ///
    /// # Errors
    /// Returns the underlying decoder error if the body is not valid
    /// JSON of the expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level errors reported by HTTP adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS resolution failed.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error message.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Remote host.
        host: String,
        /// Remote port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport error.
    #[error("HTTP client error: {0}")]
    Other(String),
}

/// Port for executing JSON API requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// synchronization core to be independent of specific HTTP libraries
/// and to be driven by an in-memory double in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes a request and returns the raw response.
    ///
    /// # Errors
    /// Returns an error only for transport-level failures; non-success
    /// HTTP statuses are returned as ordinary responses.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, HttpClientError>;
}
