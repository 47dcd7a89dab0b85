//! Core trait definitions for catalog storage and mutation.
//!
//! The collection is read and written as a single document; there are no
//! per-record operations at this seam.

use crate::core::data::{NewPrompt, Prompt, PromptCollection};
use crate::utils::error::AppResult;

/// Storage operations for the prompt collection.
pub trait PromptStorage {
    /// Load the persisted collection. An absent data file yields an empty
    /// collection; a present but unparsable file is an error.
    fn load_prompts(&self) -> AppResult<PromptCollection>;

    /// Overwrite the persisted collection in full.
    fn save_prompts(&self, collection: &PromptCollection) -> AppResult<()>;

    /// Create the directory holding the data file if it is missing.
    fn ensure_storage_exists(&self) -> AppResult<()>;
}

/// Collection mutations. Each one is a whole load-modify-save cycle.
pub trait PromptMutation: PromptStorage {
    /// Validate and append a submission, returning the stored record.
    fn add_prompt(&self, submission: NewPrompt) -> AppResult<Prompt>;

    /// Bump a record's usage counter. Returns false when the id is
    /// unknown; usage tracking is best-effort and a miss is not an error.
    fn record_usage(&self, id: u64) -> AppResult<bool>;

    /// Fold a rating into a record's running mean. Returns false when the
    /// id is unknown. `rating` must be within 1..=5, enforced at the CLI
    /// boundary.
    fn rate_prompt(&self, id: u64, rating: u8) -> AppResult<bool>;
}
