use crate::core::stats::LibraryStats;
use crate::utils::output::OutputStyle;

/// Renders library statistics for the terminal.
pub struct StatsCalculator;

impl StatsCalculator {
    pub fn print_stats(stats: &LibraryStats) {
        OutputStyle::print_header("📊 Library Statistics");

        OutputStyle::print_field_colored(
            "Prompts",
            &stats.total_prompts.to_string(),
            OutputStyle::info,
        );
        OutputStyle::print_field_colored(
            "Total usage",
            &stats.total_usage.to_string(),
            OutputStyle::info,
        );
        OutputStyle::print_field_colored(
            "Avg rating",
            &format!("{:.1}", stats.average_rating),
            OutputStyle::info,
        );
        OutputStyle::print_field_colored(
            "Contributors",
            &stats.contributor_count.to_string(),
            OutputStyle::info,
        );

        if !stats.top_used.is_empty() {
            println!("\n🔥 {}:", OutputStyle::header("Most used"));
            for (i, prompt) in stats.top_used.iter().enumerate() {
                println!(
                    "  {}. {} - {} uses",
                    i + 1,
                    OutputStyle::prompt_title(&prompt.title),
                    OutputStyle::info(&prompt.usage_count.to_string())
                );
            }
        }

        if !stats.top_rated.is_empty() {
            println!("\n⭐ {}:", OutputStyle::header("Highest rated"));
            for (i, prompt) in stats.top_rated.iter().enumerate() {
                println!(
                    "  {}. {} - {:.1} ({} votes)",
                    i + 1,
                    OutputStyle::prompt_title(&prompt.title),
                    prompt.rating,
                    prompt.votes
                );
            }
        }

        if !stats.category_counts.is_empty() {
            println!("\n📁 {}:", OutputStyle::header("Categories"));
            for (category, count) in &stats.category_counts {
                println!(
                    "  {}: {}",
                    OutputStyle::tag(category),
                    OutputStyle::info(&count.to_string())
                );
            }
        }

        if !stats.top_contributors.is_empty() {
            println!("\n👥 {}:", OutputStyle::header("Top contributors"));
            for (author, count) in &stats.top_contributors {
                println!(
                    "  {}: {}",
                    OutputStyle::content(author),
                    OutputStyle::info(&count.to_string())
                );
            }
        }
    }
}
