//! Authentication session types.
//!
//! The auth supplier (login flow, token refresh) lives outside this
//! workspace; these types model the snapshot it hands to the sync layer.

use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the auth supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned user identifier.
    pub id: i64,
}

/// Access tokens issued by the auth supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// The bearer access token.
    pub access: String,
}

/// A snapshot of the auth supplier's state: a user plus, once login has
/// completed, the tokens for that user.
///
/// `tokens` is `None` before login resolves and after logout; the sync
/// layer treats that as "do not issue authenticated reads".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The current user.
    pub user: User,
    /// Access tokens, absent while logged out or still resolving.
    pub tokens: Option<AuthTokens>,
}

/// Concrete credentials derived from an [`AuthSession`] with tokens present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Identifier of the owning user.
    pub user_id: i64,
    /// Bearer access token for request authorization.
    pub access_token: String,
}

impl AuthSession {
    /// Creates a session with tokens present.
    #[must_use]
    pub fn authenticated(user_id: i64, access_token: impl Into<String>) -> Self {
        Self {
            user: User { id: user_id },
            tokens: Some(AuthTokens {
                access: access_token.into(),
            }),
        }
    }

    /// Creates a session whose tokens have not resolved (or were cleared).
    #[must_use]
    pub const fn unauthenticated(user_id: i64) -> Self {
        Self {
            user: User { id: user_id },
            tokens: None,
        }
    }

    /// The bearer token, if tokens are present.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access.as_str())
    }

    /// Resolves the session into concrete credentials, or `None` while
    /// tokens are absent.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        self.tokens.as_ref().map(|t| Credentials {
            user_id: self.user.id,
            access_token: t.access.clone(),
        })
    }
}
