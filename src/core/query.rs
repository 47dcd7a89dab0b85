//! Stateless filter and sort logic over a loaded collection.
//!
//! Browsing composes the two filters first and sorts last; the filters
//! commute, the sort does not.

use crate::config::SortKey;
use crate::core::data::{ALL_CATEGORIES, Prompt};

pub struct QueryEngine;

impl QueryEngine {
    /// Exact-match category filter. The "All" sentinel returns the input
    /// unchanged; unknown category strings from drifted files match as-is.
    pub fn filter_by_category(prompts: &[Prompt], category: &str) -> Vec<Prompt> {
        if category == ALL_CATEGORIES {
            return prompts.to_vec();
        }

        prompts
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over title, body and tags. An
    /// empty term passes everything through.
    pub fn search(prompts: &[Prompt], term: &str) -> Vec<Prompt> {
        if term.is_empty() {
            return prompts.to_vec();
        }

        let needle = term.to_lowercase();
        prompts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.prompt.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Descending sort by the given key. The sort is stable: records with
    /// equal keys keep their original relative order.
    pub fn sort(prompts: &mut [Prompt], key: SortKey) {
        match key {
            SortKey::Recent => prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Usage => prompts.sort_by(|a, b| b.usage_count.cmp(&a.usage_count)),
            SortKey::Rating => prompts.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }

    /// Browse composition: category filter, then search, then sort.
    pub fn browse(prompts: &[Prompt], category: &str, term: &str, key: SortKey) -> Vec<Prompt> {
        let mut results = Self::search(&Self::filter_by_category(prompts, category), term);
        Self::sort(&mut results, key);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::starter_collection;
    use chrono::{Duration, Utc};

    fn prompt(id: u64, title: &str, category: &str, usage: u64, rating: f64, votes: u32) -> Prompt {
        Prompt {
            id,
            title: title.to_string(),
            category: category.to_string(),
            prompt: format!("{} body", title),
            author: "tester".to_string(),
            tags: vec!["alpha".to_string()],
            rating,
            votes,
            usage_count: usage,
            created_at: Utc::now() + Duration::seconds(id as i64),
            comments: Vec::new(),
        }
    }

    #[test]
    fn all_sentinel_returns_input_unchanged() {
        let prompts = vec![
            prompt(1, "a", "Testing", 0, 0.0, 0),
            prompt(2, "b", "Other", 0, 0.0, 0),
        ];

        let filtered = QueryEngine::filter_by_category(&prompts, ALL_CATEGORIES);
        let ids: Vec<u64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn category_filter_matches_literal_strings() {
        let prompts = vec![
            prompt(1, "a", "Testing", 0, 0.0, 0),
            prompt(2, "b", "Legacy Stuff", 0, 0.0, 0),
        ];

        assert_eq!(QueryEngine::filter_by_category(&prompts, "Testing").len(), 1);

        // Unknown categories from drifted files still filter as opaque strings.
        let legacy = QueryEngine::filter_by_category(&prompts, "Legacy Stuff");
        assert_eq!(legacy.len(), 1);
        assert_eq!(legacy[0].id, 2);
    }

    #[test]
    fn search_is_case_insensitive_over_title_body_and_tags() {
        let mut haystack = prompt(1, "REST Client", "Testing", 0, 0.0, 0);
        haystack.prompt = "Retry logic included".to_string();
        haystack.tags = vec!["backoff".to_string()];
        let prompts = vec![haystack];

        assert_eq!(QueryEngine::search(&prompts, "rest").len(), 1);
        assert_eq!(QueryEngine::search(&prompts, "RETRY").len(), 1);
        assert_eq!(QueryEngine::search(&prompts, "BackOff").len(), 1);
        assert!(QueryEngine::search(&prompts, "missing").is_empty());
    }

    #[test]
    fn empty_term_passes_everything_through() {
        let prompts = vec![
            prompt(1, "a", "Testing", 0, 0.0, 0),
            prompt(2, "b", "Other", 0, 0.0, 0),
        ];

        let results = QueryEngine::search(&prompts, "");
        let ids: Vec<u64> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn usage_sort_is_stable_and_idempotent() {
        // Records with equal usage keep their original relative order.
        let prompts = vec![
            prompt(1, "a", "Testing", 3, 0.0, 0),
            prompt(2, "b", "Testing", 7, 0.0, 0),
            prompt(3, "c", "Testing", 3, 0.0, 0),
        ];

        let mut once = prompts.clone();
        QueryEngine::sort(&mut once, SortKey::Usage);
        let ids: Vec<u64> = once.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        let mut twice = once.clone();
        QueryEngine::sort(&mut twice, SortKey::Usage);
        let ids_again: Vec<u64> = twice.iter().map(|p| p.id).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn rating_sort_descends() {
        let mut prompts = vec![
            prompt(1, "a", "Testing", 0, 2.5, 2),
            prompt(2, "b", "Testing", 0, 4.8, 5),
            prompt(3, "c", "Testing", 0, 3.0, 1),
        ];

        QueryEngine::sort(&mut prompts, SortKey::Rating);
        let ids: Vec<u64> = prompts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn recent_sort_puts_newest_first() {
        let mut prompts = vec![
            prompt(1, "a", "Testing", 0, 0.0, 0),
            prompt(3, "c", "Testing", 0, 0.0, 0),
            prompt(2, "b", "Testing", 0, 0.0, 0),
        ];

        QueryEngine::sort(&mut prompts, SortKey::Recent);
        let ids: Vec<u64> = prompts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn browse_finds_the_seeded_testing_prompt() {
        let collection = starter_collection();

        let testing = QueryEngine::filter_by_category(&collection.prompts, "Testing");
        assert_eq!(testing.len(), 1);
        assert_eq!(testing[0].title, "Pytest Test Suite Generator");

        let results = QueryEngine::browse(&collection.prompts, "Testing", "mock", SortKey::Rating);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Pytest Test Suite Generator");
    }
}
