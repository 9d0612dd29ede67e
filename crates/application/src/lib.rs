//! ModelMatch Application - Prompt synchronization core
//!
//! This crate owns the revalidating prompt cache and the two-phase
//! create protocol. I/O goes through the [`ports::HttpClient`] port;
//! concrete adapters live in the infrastructure crate.

pub mod config;
pub mod error;
pub mod ports;
pub mod sync;

pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use sync::{PromptSync, PromptsView};
