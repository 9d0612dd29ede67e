//! Sync layer configuration.

use serde::{Deserialize, Serialize};

use modelmatch_domain::{DomainResult, PromptsEndpoint};

/// Path of the prompt collection under the API base URL.
pub const PROMPTS_PATH: &str = "/api/v1/model_match_app/prompts/";

/// Environment variable consulted by [`SyncConfig::from_env`].
pub const API_URL_VAR: &str = "MODELMATCH_API_URL";

/// Configuration for the synchronization layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Base URL of the backend API, without the collection path.
    pub api_base_url: String,
}

impl SyncConfig {
    /// Creates a config from an explicit base URL.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Reads the base URL from `MODELMATCH_API_URL`.
    ///
    /// Returns `None` when the variable is unset, mirroring the absent
    /// credentials case: the caller decides whether that is fatal.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var(API_URL_VAR).ok().map(Self::new)
    }

    /// Builds the prompt collection endpoint for this config.
    ///
    /// # Errors
    /// Returns a domain error if the configured base URL is malformed.
    pub fn prompts_endpoint(&self) -> DomainResult<PromptsEndpoint> {
        let base = self.api_base_url.trim_end_matches('/');
        PromptsEndpoint::parse(&format!("{base}{PROMPTS_PATH}"))
    }
}
