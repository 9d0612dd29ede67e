//! Collection cache keyed by `(endpoint URL, access token)`.
//!
//! A cache entry stays valid until its key changes (token rotation or
//! logout produces a different key) or it is explicitly marked stale.
//! Entries are replaced whole, never merged in place, so readers only
//! ever observe a complete snapshot.

use std::collections::HashMap;

use modelmatch_domain::{Credentials, Prompt};

/// Cache key: the collection URL plus the access token it was fetched with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    endpoint_url: String,
    access_token: String,
}

impl CacheKey {
    pub(crate) fn new(endpoint_url: String, credentials: &Credentials) -> Self {
        Self {
            endpoint_url,
            access_token: credentials.access_token.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    prompts: Vec<Prompt>,
    stale: bool,
}

/// Last-known prompt collections by cache key.
#[derive(Debug, Default)]
pub(crate) struct PromptCache {
    entries: HashMap<CacheKey, CacheEntry>,
}

impl PromptCache {
    /// Returns the cached collection for `key` only if it is fresh.
    pub(crate) fn fresh(&self, key: &CacheKey) -> Option<&Vec<Prompt>> {
        self.entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| &entry.prompts)
    }

    /// Returns the cached collection for `key`, fresh or stale.
    pub(crate) fn any(&self, key: &CacheKey) -> Option<&Vec<Prompt>> {
        self.entries.get(key).map(|entry| &entry.prompts)
    }

    /// Whether any entry (fresh or stale) exists for `key`.
    pub(crate) fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Replaces the entry for `key` with a fresh snapshot.
    pub(crate) fn replace(&mut self, key: CacheKey, prompts: Vec<Prompt>) {
        self.entries.insert(
            key,
            CacheEntry {
                prompts,
                stale: false,
            },
        );
    }

    /// Marks the entry for `key` stale, forcing the next read to refetch.
    pub(crate) fn mark_stale(&mut self, key: &CacheKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stale = true;
        }
    }
}
