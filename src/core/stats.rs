//! Aggregate statistics over the prompt collection.

use std::collections::HashSet;

use crate::config::SortKey;
use crate::core::data::Prompt;
use crate::core::query::QueryEngine;

/// Snapshot of library-wide statistics, shaped for the stats screen.
#[derive(Debug, Clone)]
pub struct LibraryStats {
    pub total_prompts: usize,
    pub total_usage: u64,
    pub contributor_count: usize,
    pub average_rating: f64,
    pub top_used: Vec<Prompt>,
    pub top_rated: Vec<Prompt>,
    pub category_counts: Vec<(String, usize)>,
    pub top_contributors: Vec<(String, usize)>,
}

pub struct Aggregator;

impl Aggregator {
    pub fn total_usage(prompts: &[Prompt]) -> u64 {
        prompts.iter().map(|p| p.usage_count).sum()
    }

    pub fn contributor_count(prompts: &[Prompt]) -> usize {
        prompts
            .iter()
            .map(|p| p.author.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Mean of the running ratings over records that have votes; 0.0 when
    /// nothing has been voted on yet.
    pub fn average_rating(prompts: &[Prompt]) -> f64 {
        let rated: Vec<f64> = prompts
            .iter()
            .filter(|p| p.votes > 0)
            .map(|p| p.rating)
            .collect();

        if rated.is_empty() {
            0.0
        } else {
            rated.iter().sum::<f64>() / rated.len() as f64
        }
    }

    pub fn top_by_usage(prompts: &[Prompt], n: usize) -> Vec<Prompt> {
        let mut sorted = prompts.to_vec();
        QueryEngine::sort(&mut sorted, SortKey::Usage);
        sorted.truncate(n);
        sorted
    }

    /// Top rated records. Records nobody has voted on are excluded; their
    /// 0.0 rating is a "no data" marker, not a score.
    pub fn top_by_rating(prompts: &[Prompt], n: usize) -> Vec<Prompt> {
        let mut rated: Vec<Prompt> = prompts.iter().filter(|p| p.votes > 0).cloned().collect();
        QueryEngine::sort(&mut rated, SortKey::Rating);
        rated.truncate(n);
        rated
    }

    /// Count per literal category string, most common first. Unknown
    /// categories keep their own bucket.
    pub fn category_distribution(prompts: &[Prompt]) -> Vec<(String, usize)> {
        let mut counts = ordered_counts(prompts.iter().map(|p| p.category.clone()));
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Prompt count per author, most prolific first, capped at `n`. Equal
    /// counts keep first-submission order.
    pub fn top_contributors(prompts: &[Prompt], n: usize) -> Vec<(String, usize)> {
        let mut counts = ordered_counts(prompts.iter().map(|p| p.author.clone()));
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }

    /// Everything the stats screen needs in one pass.
    pub fn collect(prompts: &[Prompt], top_n: usize) -> LibraryStats {
        LibraryStats {
            total_prompts: prompts.len(),
            total_usage: Self::total_usage(prompts),
            contributor_count: Self::contributor_count(prompts),
            average_rating: Self::average_rating(prompts),
            top_used: Self::top_by_usage(prompts, top_n),
            top_rated: Self::top_by_rating(prompts, top_n),
            category_counts: Self::category_distribution(prompts),
            top_contributors: Self::top_contributors(prompts, top_n),
        }
    }
}

// Occurrence counts preserving first-encounter order, so the stable sort
// afterwards keeps ties in that order.
fn ordered_counts(keys: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn prompt(id: u64, author: &str, category: &str, usage: u64, rating: f64, votes: u32) -> Prompt {
        Prompt {
            id,
            title: format!("prompt {id}"),
            category: category.to_string(),
            prompt: "body".to_string(),
            author: author.to_string(),
            tags: Vec::new(),
            rating,
            votes,
            usage_count: usage,
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn average_rating_ignores_unvoted_records() {
        let prompts = vec![
            prompt(1, "a", "Testing", 0, 4.0, 2),
            prompt(2, "b", "Testing", 0, 0.0, 0),
            prompt(3, "c", "Testing", 0, 2.0, 1),
        ];

        assert!((Aggregator::average_rating(&prompts) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn average_rating_is_zero_without_votes() {
        assert_eq!(Aggregator::average_rating(&[]), 0.0);

        let unvoted = vec![prompt(1, "a", "Testing", 5, 0.0, 0)];
        assert_eq!(Aggregator::average_rating(&unvoted), 0.0);
    }

    #[test]
    fn top_by_rating_excludes_unvoted_records() {
        let prompts = vec![
            prompt(1, "a", "Testing", 0, 0.0, 0),
            prompt(2, "b", "Testing", 0, 3.5, 2),
            prompt(3, "c", "Testing", 0, 4.5, 1),
        ];

        let top = Aggregator::top_by_rating(&prompts, 5);
        let ids: Vec<u64> = top.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn top_contributors_break_ties_by_first_seen() {
        let prompts = vec![
            prompt(1, "bob", "Testing", 0, 0.0, 0),
            prompt(2, "alice", "Testing", 0, 0.0, 0),
            prompt(3, "bob", "Testing", 0, 0.0, 0),
            prompt(4, "alice", "Testing", 0, 0.0, 0),
            prompt(5, "carol", "Testing", 0, 0.0, 0),
        ];

        let top = Aggregator::top_contributors(&prompts, 3);
        assert_eq!(
            top,
            vec![
                ("bob".to_string(), 2),
                ("alice".to_string(), 2),
                ("carol".to_string(), 1),
            ]
        );
    }

    #[test]
    fn unknown_categories_get_their_own_bucket() {
        let prompts = vec![
            prompt(1, "a", "Testing", 0, 0.0, 0),
            prompt(2, "b", "Weird", 0, 0.0, 0),
            prompt(3, "c", "Testing", 0, 0.0, 0),
        ];

        assert_eq!(
            Aggregator::category_distribution(&prompts),
            vec![("Testing".to_string(), 2), ("Weird".to_string(), 1)]
        );
    }

    #[test]
    fn totals_sum_usage_and_count_distinct_authors() {
        let prompts = vec![
            prompt(1, "a", "Testing", 5, 0.0, 0),
            prompt(2, "b", "Testing", 8, 0.0, 0),
            prompt(3, "a", "Testing", 2, 0.0, 0),
        ];

        assert_eq!(Aggregator::total_usage(&prompts), 15);
        assert_eq!(Aggregator::contributor_count(&prompts), 2);
    }

    #[test]
    fn collect_caps_top_lists() {
        let prompts = vec![
            prompt(1, "a", "Testing", 5, 4.0, 1),
            prompt(2, "b", "Testing", 8, 3.0, 1),
            prompt(3, "c", "Testing", 2, 5.0, 1),
        ];

        let stats = Aggregator::collect(&prompts, 2);
        assert_eq!(stats.total_prompts, 3);
        assert_eq!(stats.top_used.len(), 2);
        assert_eq!(stats.top_rated.len(), 2);
        assert_eq!(stats.top_used[0].id, 2);
        assert_eq!(stats.top_rated[0].id, 3);
    }
}
