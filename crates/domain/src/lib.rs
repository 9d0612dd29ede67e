//! ModelMatch Domain - Core types for the client sync layer
//!
//! This crate defines the domain model for the ModelMatch client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod id;
pub mod prompt;

pub use auth::{AuthSession, AuthTokens, Credentials, User};
pub use endpoint::PromptsEndpoint;
pub use error::{DomainError, DomainResult};
pub use id::response_lookup_id;
pub use prompt::{Prompt, PromptDraft};
