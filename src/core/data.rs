//! Core data structures for the prompt catalog.
//!
//! The catalog is a flat collection of [`Prompt`] records; the collection
//! as a whole is the unit of persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};
use crate::utils::format;

/// Categories accepted at the submission boundary. Loaded data may carry
/// anything; readers treat the field as an opaque string.
pub const CATEGORIES: &[&str] = &[
    "API Development",
    "Testing",
    "Documentation",
    "Refactoring",
    "Data Processing",
    "DevOps/CI-CD",
    "Architecture",
    "Debugging",
    "Code Review",
    "Other",
];

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

/// A single catalog entry: one reusable prompt plus its community metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub prompt: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Running mean of all submitted ratings. 0.0 with zero votes means
    /// "no data yet", not an actual score.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(with = "format")]
    pub created_at: DateTime<Utc>,
    /// Reserved. Stored and written back verbatim.
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
}

impl Prompt {
    /// Fold one rating value into the running mean and bump the vote count.
    ///
    /// `value` must already be within 1..=5; the argument parser at the
    /// CLI boundary enforces the range.
    pub fn apply_rating(&mut self, value: u8) {
        let votes = f64::from(self.votes);
        self.rating = (self.rating * votes + f64::from(value)) / (votes + 1.0);
        self.votes += 1;
    }

    pub fn record_usage(&mut self) {
        self.usage_count += 1;
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.title, self.category)
    }
}

/// A submission, one validation step short of a catalog entry.
#[derive(Debug, Clone)]
pub struct NewPrompt {
    pub title: String,
    pub category: String,
    pub prompt: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl NewPrompt {
    /// All required fields non-empty and the category inside the fixed
    /// enumeration. Runs before any file access, so a rejected submission
    /// leaves no partial write behind.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("title", &self.title),
            ("category", &self.category),
            ("prompt", &self.prompt),
            ("author", &self.author),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} must not be empty")));
            }
        }

        if !is_known_category(&self.category) {
            return Err(AppError::Validation(format!(
                "unknown category '{}' (expected one of: {})",
                self.category,
                CATEGORIES.join(", ")
            )));
        }

        Ok(())
    }

    /// Turn the submission into a full record under the given id.
    pub fn into_prompt(self, id: u64) -> Prompt {
        Prompt {
            id,
            title: self.title,
            category: self.category,
            prompt: self.prompt,
            author: self.author,
            tags: self.tags,
            rating: 0.0,
            votes: 0,
            usage_count: 0,
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }
}

/// The full ordered set of prompt records.
///
/// Serializes as a bare JSON array, which is the on-disk document layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptCollection {
    pub prompts: Vec<Prompt>,
}

impl PromptCollection {
    /// Create a new empty prompt collection
    pub fn new() -> Self {
        Self {
            prompts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Identifier for the next submission: one past the highest id
    /// present, or 1 for an empty collection.
    pub fn next_id(&self) -> u64 {
        self.prompts.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut Prompt> {
        self.prompts.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64) -> Prompt {
        NewPrompt {
            title: format!("prompt {id}"),
            category: "Testing".to_string(),
            prompt: "body".to_string(),
            author: "tester".to_string(),
            tags: Vec::new(),
        }
        .into_prompt(id)
    }

    #[test]
    fn ratings_converge_to_the_running_mean() {
        let mut prompt = sample(1);
        prompt.apply_rating(5);
        prompt.apply_rating(3);
        assert_eq!(prompt.votes, 2);
        assert!((prompt.rating - 4.0).abs() < 1e-9);

        let mut prompt = sample(2);
        for value in [1, 2, 3, 4, 5] {
            prompt.apply_rating(value);
        }
        assert_eq!(prompt.votes, 5);
        assert!((prompt.rating - 3.0).abs() < 1e-9);
    }

    #[test]
    fn next_id_is_one_past_the_highest() {
        let mut collection = PromptCollection::new();
        assert_eq!(collection.next_id(), 1);

        collection.prompts.push(sample(1));
        collection.prompts.push(sample(5));
        assert_eq!(collection.next_id(), 6);
    }

    #[test]
    fn new_records_start_with_zeroed_counters() {
        let prompt = sample(7);
        assert_eq!(prompt.id, 7);
        assert_eq!(prompt.rating, 0.0);
        assert_eq!(prompt.votes, 0);
        assert_eq!(prompt.usage_count, 0);
        assert!(prompt.comments.is_empty());
    }

    #[test]
    fn submissions_require_all_fields_and_a_known_category() {
        let valid = NewPrompt {
            title: "T".to_string(),
            category: "Testing".to_string(),
            prompt: "body".to_string(),
            author: "Alice".to_string(),
            tags: Vec::new(),
        };
        assert!(valid.validate().is_ok());

        let mut blank_author = valid.clone();
        blank_author.author = "   ".to_string();
        assert!(matches!(
            blank_author.validate().unwrap_err(),
            AppError::Validation(_)
        ));

        let mut odd_category = valid.clone();
        odd_category.category = "Nonsense".to_string();
        assert!(matches!(
            odd_category.validate().unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
