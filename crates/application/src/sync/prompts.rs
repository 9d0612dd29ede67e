//! Prompt synchronizer.
//!
//! `PromptSync` keeps a cached view of the remote prompt collection,
//! revalidating when the `(endpoint, token)` key changes, and runs the
//! two-phase create protocol. All I/O goes through the injected
//! [`HttpClient`] port; no ambient state is consulted.

use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error};

use modelmatch_domain::{AuthSession, Credentials, Prompt, PromptDraft, PromptsEndpoint};

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::ports::{ApiRequest, HttpClient};
use crate::sync::{CacheKey, PromptCache};

/// The state exposed to application/UI code.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptsView {
    /// The cached prompt collection for the current credentials.
    pub prompts: Vec<Prompt>,
    /// The last read-path failure, if any. Write-path failures are
    /// never reflected here; they are log-only.
    pub error: Option<SyncError>,
    /// True while credentials are present, no read error has occurred,
    /// and nothing has been cached yet for the current key.
    pub loading: bool,
}

/// Client-side cache-and-mutation layer over the prompt collection.
///
/// Reads are served from a revalidating cache keyed by
/// `(endpoint URL, access token)`; a cached snapshot stays authoritative
/// until the key changes or [`PromptSync::revalidate`] is called.
/// Writes run the two-phase create protocol and intentionally do not
/// refresh the cache.
pub struct PromptSync<C: HttpClient> {
    client: C,
    endpoint: PromptsEndpoint,
    cache: RwLock<PromptCache>,
    read_error: RwLock<Option<SyncError>>,
    /// Serializes revalidations so concurrent observers of one key
    /// share a single fetch instead of each hitting the network.
    revalidation: Mutex<()>,
}

impl<C: HttpClient> PromptSync<C> {
    /// Creates a synchronizer over the given client and endpoint.
    #[must_use]
    pub fn new(client: C, endpoint: PromptsEndpoint) -> Self {
        Self {
            client,
            endpoint,
            cache: RwLock::new(PromptCache::default()),
            read_error: RwLock::new(None),
            revalidation: Mutex::new(()),
        }
    }

    /// Creates a synchronizer from a [`SyncConfig`].
    ///
    /// # Errors
    /// Returns a domain error if the configured base URL is malformed.
    pub fn from_config(client: C, config: &SyncConfig) -> modelmatch_domain::DomainResult<Self> {
        Ok(Self::new(client, config.prompts_endpoint()?))
    }

    /// Returns the prompt collection for the session's credentials,
    /// fetching it if nothing fresh is cached for the current key.
    ///
    /// Without tokens this is a guarded no-op: no request is issued and
    /// the collection reads as empty. Fetch failures are logged,
    /// recorded in the `error` observable, and the last snapshot for
    /// the key (if any) is returned instead.
    pub async fn list(&self, session: &AuthSession) -> Vec<Prompt> {
        let Some(credentials) = session.credentials() else {
            error!(
                operation = "fetch_prompts",
                error = %SyncError::MissingCredentials,
                "prompt fetch skipped"
            );
            return Vec::new();
        };
        let key = self.cache_key(&credentials);

        if let Some(prompts) = self.cache.read().await.fresh(&key) {
            return prompts.clone();
        }

        let _guard = self.revalidation.lock().await;
        // Another caller may have revalidated while we waited.
        if let Some(prompts) = self.cache.read().await.fresh(&key) {
            return prompts.clone();
        }

        match self.fetch_prompts(&credentials).await {
            Ok(prompts) => {
                self.cache.write().await.replace(key, prompts.clone());
                *self.read_error.write().await = None;
                prompts
            }
            Err(err) => {
                error!(operation = "fetch_prompts", error = %err, "prompt fetch failed");
                *self.read_error.write().await = Some(err);
                self.cache
                    .read()
                    .await
                    .any(&key)
                    .cloned()
                    .unwrap_or_default()
            }
        }
    }

    /// Marks the current key stale and refetches the collection.
    ///
    /// This is the explicit opt-in refresh that `create` deliberately
    /// skips; callers that need the backend's latest state invoke it
    /// themselves.
    pub async fn revalidate(&self, session: &AuthSession) -> Vec<Prompt> {
        if let Some(credentials) = session.credentials() {
            let key = self.cache_key(&credentials);
            self.cache.write().await.mark_stale(&key);
        }
        self.list(session).await
    }

    /// Creates a prompt and fetches its generated responses.
    ///
    /// Phase 1 POSTs the draft merged with the session's user id; Phase 2
    /// GETs the responses sub-collection addressed by the offset lookup
    /// id derived from Phase 1's result. The responses are logged and
    /// discarded, and the cached collection is left untouched.
    ///
    /// Never fails from the caller's perspective: any failure in either
    /// phase is logged under the `create_prompt` operation and swallowed.
    /// The shared `error` observable is read-path-only and is not set
    /// here.
    pub async fn create(&self, session: &AuthSession, draft: &PromptDraft) {
        if let Err(err) = self.try_create(session, draft).await {
            error!(operation = "create_prompt", error = %err, "prompt creation failed");
        }
    }

    /// Snapshot of the state exposed to consumers.
    pub async fn view(&self, session: &AuthSession) -> PromptsView {
        let error = self.read_error.read().await.clone();
        let Some(credentials) = session.credentials() else {
            return PromptsView {
                prompts: Vec::new(),
                error,
                loading: false,
            };
        };
        let key = self.cache_key(&credentials);
        let cache = self.cache.read().await;
        PromptsView {
            prompts: cache.any(&key).cloned().unwrap_or_default(),
            loading: error.is_none() && !cache.contains(&key),
            error,
        }
    }

    fn cache_key(&self, credentials: &Credentials) -> CacheKey {
        CacheKey::new(self.endpoint.collection_url(), credentials)
    }

    async fn fetch_prompts(&self, credentials: &Credentials) -> SyncResult<Vec<Prompt>> {
        let request = ApiRequest::get(
            self.endpoint.collection_url(),
            Some(credentials.access_token.clone()),
        );
        let response = self.client.execute(request).await?;
        response.json().map_err(|e| SyncError::Decode {
            operation: "fetch_prompts",
            message: e.to_string(),
        })
    }

    async fn try_create(&self, session: &AuthSession, draft: &PromptDraft) -> SyncResult<()> {
        // Unlike the read path, a missing token does not guard the write:
        // the request goes out unauthenticated and the backend rejects it.
        let bearer = session.bearer().map(str::to_owned);

        let request = ApiRequest::post(
            self.endpoint.collection_url(),
            bearer.clone(),
            draft.to_request_body(session.user.id),
        );
        let response = self.client.execute(request).await?;
        let prompt: Prompt = response.json().map_err(|e| SyncError::Decode {
            operation: "create_prompt",
            message: e.to_string(),
        })?;
        debug!(operation = "create_prompt", prompt_id = prompt.id, "prompt created");

        let request = ApiRequest::get(self.endpoint.responses_url(prompt.id), bearer);
        let response = self.client.execute(request).await?;
        let responses: Vec<Value> = response.json().map_err(|e| SyncError::Decode {
            operation: "create_prompt",
            message: e.to_string(),
        })?;
        debug!(
            operation = "create_prompt",
            prompt_id = prompt.id,
            count = responses.len(),
            "fetched responses for new prompt"
        );

        // A full collection refetch after every create is too expensive;
        // callers that need the new prompt use `revalidate` explicitly.
        Ok(())
    }
}
