//! Prompt collection endpoint URLs.

use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::id::response_lookup_id;

/// A validated base URL for the prompt collection.
///
/// The base is normalized to end with a trailing slash so that
/// sub-resource paths append cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptsEndpoint {
    base: String,
}

impl PromptsEndpoint {
    /// Parses and normalizes a collection base URL.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidEndpoint`] if the URL is malformed
    /// or cannot serve as a base (e.g. `mailto:`).
    pub fn parse(url: &str) -> DomainResult<Self> {
        let parsed =
            Url::parse(url).map_err(|e| DomainError::InvalidEndpoint(format!("{e}: {url}")))?;
        if parsed.cannot_be_a_base() {
            return Err(DomainError::InvalidEndpoint(url.to_string()));
        }
        let mut base = parsed.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self { base })
    }

    /// The collection URL, used for both listing and creating prompts.
    #[must_use]
    pub fn collection_url(&self) -> String {
        self.base.clone()
    }

    /// The URL of the responses sub-collection for a prompt.
    ///
    /// Takes the prompt's backend-assigned id and applies the
    /// [`response_lookup_id`] offset before building the path.
    #[must_use]
    pub fn responses_url(&self, prompt_id: i64) -> String {
        format!("{}{}/responses/", self.base, response_lookup_id(prompt_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_gains_trailing_slash() {
        let endpoint =
            PromptsEndpoint::parse("https://api.example.com/api/v1/model_match_app/prompts")
                .unwrap();
        assert_eq!(
            endpoint.collection_url(),
            "https://api.example.com/api/v1/model_match_app/prompts/"
        );
    }

    #[test]
    fn test_responses_url_applies_lookup_offset() {
        let endpoint =
            PromptsEndpoint::parse("https://api.example.com/api/v1/model_match_app/prompts/")
                .unwrap();
        assert_eq!(
            endpoint.responses_url(42),
            "https://api.example.com/api/v1/model_match_app/prompts/43/responses/"
        );
    }

    #[test]
    fn test_rejects_malformed_url() {
        assert!(matches!(
            PromptsEndpoint::parse("not a url"),
            Err(DomainError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            PromptsEndpoint::parse("mailto:a@b.c"),
            Err(DomainError::InvalidEndpoint(_))
        ));
    }
}
