//! The prompt synchronizer: revalidating read cache plus the two-phase
//! create protocol.

mod cache;
mod prompts;

pub(crate) use cache::{CacheKey, PromptCache};
pub use prompts::{PromptSync, PromptsView};
