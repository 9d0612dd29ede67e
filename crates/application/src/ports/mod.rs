//! Ports consumed by the synchronization core.

mod http_client;

pub use http_client::{ApiMethod, ApiRequest, ApiResponse, HttpClient, HttpClientError};
