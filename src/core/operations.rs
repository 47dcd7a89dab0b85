//! Central implementation of storage and mutation operations.
//!
//! Every user-facing action is one synchronous load, mutate, save cycle
//! against the whole data file. Concurrent invocations are not serialized;
//! the last writer wins.

use std::path::Path;

use crate::config::Config;
use crate::core::data::{NewPrompt, Prompt, PromptCollection};
use crate::core::traits::{PromptMutation, PromptStorage};
use crate::utils::error::{AppError, AppResult};

pub struct CatalogOperations {
    config: Config,
}

impl CatalogOperations {
    /// Create a new CatalogOperations instance with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn data_file(&self) -> &Path {
        &self.config.general.data_file
    }
}

impl PromptStorage for CatalogOperations {
    fn load_prompts(&self) -> AppResult<PromptCollection> {
        let path = self.data_file();

        // An absent file means an empty library, not an error.
        if !path.exists() {
            return Ok(PromptCollection::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Failed to read data file {}: {}", path.display(), e))
        })?;

        // A zero-byte file is treated like an absent one.
        if content.trim().is_empty() {
            return Ok(PromptCollection::default());
        }

        serde_json::from_str(&content).map_err(|e| AppError::Corrupt {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn save_prompts(&self, collection: &PromptCollection) -> AppResult<()> {
        self.ensure_storage_exists()?;

        let content = serde_json::to_string_pretty(collection).map_err(|e| {
            AppError::System(format!("Failed to serialize prompt collection: {}", e))
        })?;

        std::fs::write(self.data_file(), content).map_err(|e| {
            AppError::Io(format!(
                "Failed to write data file {}: {}",
                self.data_file().display(),
                e
            ))
        })?;

        Ok(())
    }

    fn ensure_storage_exists(&self) -> AppResult<()> {
        if let Some(parent) = self.data_file().parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

impl PromptMutation for CatalogOperations {
    fn add_prompt(&self, submission: NewPrompt) -> AppResult<Prompt> {
        submission.validate()?;

        let mut collection = self.load_prompts()?;
        let prompt = submission.into_prompt(collection.next_id());
        collection.prompts.push(prompt.clone());
        self.save_prompts(&collection)?;

        Ok(prompt)
    }

    fn record_usage(&self, id: u64) -> AppResult<bool> {
        let mut collection = self.load_prompts()?;

        let found = match collection.find_by_id_mut(id) {
            Some(prompt) => {
                prompt.record_usage();
                true
            }
            None => false,
        };

        if found {
            self.save_prompts(&collection)?;
        }

        Ok(found)
    }

    fn rate_prompt(&self, id: u64, rating: u8) -> AppResult<bool> {
        let mut collection = self.load_prompts()?;

        let found = match collection.find_by_id_mut(id) {
            Some(prompt) => {
                prompt.apply_rating(rating);
                true
            }
            None => false,
        };

        if found {
            self.save_prompts(&collection)?;
        }

        Ok(found)
    }
}
