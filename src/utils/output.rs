use colored::*;

use crate::cli::ListFormat;
use crate::core::data::Prompt;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_datetime, format_rating, format_tags_comma, truncate_string};

pub struct OutputStyle;

impl OutputStyle {
    // Primary colors for different field types
    pub fn prompt_title(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn tags(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn tag(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    // Formatting helpers
    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// One-line list entry: id, title, category, rating, usage.
    pub fn format_prompt_line(prompt: &Prompt) -> String {
        format!(
            "{:>4}. {} {} ★ {}  used {}x",
            prompt.id,
            Self::prompt_title(&prompt.title),
            Self::tag(&format!("[{}]", prompt.category)),
            Self::info(&format_rating(prompt.rating, prompt.votes)),
            prompt.usage_count,
        )
    }

    pub fn print_prompt_line(prompt: &Prompt) {
        println!("{}", Self::format_prompt_line(prompt));
    }

    pub fn print_prompt_detailed(prompt: &Prompt) {
        Self::print_header("📝 Prompt Details");

        Self::print_field_colored("Id", &prompt.id.to_string(), Self::muted);
        Self::print_field_colored("Title", &prompt.title, Self::prompt_title);
        Self::print_field_colored("Category", &prompt.category, Self::tag);
        Self::print_field_colored("Author", &prompt.author, Self::content);
        if !prompt.tags.is_empty() {
            Self::print_field_colored("Tags", &format_tags_comma(&prompt.tags), Self::tags);
        }
        Self::print_field_colored(
            "Rating",
            &format_rating(prompt.rating, prompt.votes),
            Self::info,
        );
        Self::print_field_colored("Used", &format!("{}x", prompt.usage_count), Self::info);
        Self::print_field_colored("Created", &format_datetime(&prompt.created_at), Self::muted);

        println!("\n{}:", Self::title("📄 Content"));
        println!("{}", Self::content(&prompt.prompt));
    }

    pub fn print_prompt_body(prompt: &Prompt) {
        println!("{}", Self::content(&prompt.prompt));
    }
}

pub fn print_success(msg: &str) {
    println!("✅ {}", OutputStyle::success(msg));
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {}", OutputStyle::warning(msg));
}

/// List rendering for the `list` command.
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn format_list(prompts: &[Prompt], format: &ListFormat) -> AppResult<()> {
        match format {
            ListFormat::Simple => {
                for prompt in prompts {
                    OutputStyle::print_prompt_line(prompt);
                }
            }
            ListFormat::Detailed => {
                for prompt in prompts {
                    OutputStyle::print_prompt_line(prompt);
                    println!(
                        "      {}",
                        OutputStyle::muted(&truncate_string(&prompt.prompt, 100))
                    );
                    if !prompt.tags.is_empty() {
                        println!(
                            "      {}",
                            OutputStyle::tags(&format_tags_comma(&prompt.tags))
                        );
                    }
                    println!(
                        "      {} · {}",
                        OutputStyle::content(&prompt.author),
                        OutputStyle::muted(&format_datetime(&prompt.created_at))
                    );
                }
            }
            ListFormat::Json => {
                let rendered = serde_json::to_string_pretty(prompts)
                    .map_err(|e| AppError::System(format!("Failed to render prompt list: {}", e)))?;
                println!("{}", rendered);
            }
        }
        Ok(())
    }

    pub fn print_categories(categories: &[&str]) {
        OutputStyle::print_header("📁 Categories");
        for category in categories {
            println!("  {}", OutputStyle::tag(category));
        }
    }
}
