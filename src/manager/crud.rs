// Mutation commands - add, rate, use, seed

use anyhow::Result;

use crate::cli::{AddArgs, RateArgs, SeedArgs, UseArgs};
use crate::config::Config;
use crate::core::data::NewPrompt;
use crate::core::operations::CatalogOperations;
use crate::core::seed;
use crate::core::traits::{PromptMutation, PromptStorage};
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::output::{OutputStyle, print_success, print_warning};

pub fn handle_add_command(config: Config, args: &AddArgs) -> Result<()> {
    let ops = CatalogOperations::new(config);

    let submission = NewPrompt {
        title: args.title.clone(),
        category: args.category.clone(),
        prompt: args.content.clone(),
        author: args.author.clone(),
        tags: args.tags.as_deref().map(parse_tags).unwrap_or_default(),
    };

    let prompt = ops.add_prompt(submission)?;
    print_success(&format!(
        "Prompt '{}' submitted with id {}",
        prompt.title, prompt.id
    ));

    Ok(())
}

/// Comma-separated, whitespace-trimmed, empty entries dropped.
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

pub fn handle_use_command(config: Config, args: &UseArgs) -> Result<()> {
    let ops = CatalogOperations::new(config);

    if ops.record_usage(args.id)? {
        let collection = ops.load_prompts()?;
        if let Some(prompt) = collection.find_by_id(args.id) {
            OutputStyle::print_prompt_body(prompt);
        }
    } else {
        // Usage tracking is best-effort; an unknown id is a notice, not an error.
        handle_flow(FlowResult::NotFound {
            item_type: "Prompt".to_string(),
            search_term: args.id.to_string(),
        });
    }

    Ok(())
}

pub fn handle_rate_command(config: Config, args: &RateArgs) -> Result<()> {
    let ops = CatalogOperations::new(config);

    if ops.rate_prompt(args.id, args.rating)? {
        let collection = ops.load_prompts()?;
        if let Some(prompt) = collection.find_by_id(args.id) {
            print_success(&format!(
                "Rated '{}': now {:.1} over {} vote{}",
                prompt.title,
                prompt.rating,
                prompt.votes,
                if prompt.votes == 1 { "" } else { "s" }
            ));
        }
    } else {
        handle_flow(FlowResult::NotFound {
            item_type: "Prompt".to_string(),
            search_term: args.id.to_string(),
        });
    }

    Ok(())
}

pub fn handle_seed_command(config: Config, args: &SeedArgs) -> Result<()> {
    let ops = CatalogOperations::new(config);

    if ops.config().general.data_file.exists() && !args.force {
        print_warning("Data file already exists; pass --force to overwrite it");
        return Ok(());
    }

    let collection = seed::starter_collection();
    ops.save_prompts(&collection)?;
    handle_flow(FlowResult::Success(format!(
        "Seeded {} prompts to {}",
        collection.len(),
        ops.config().general.data_file.display()
    )));

    Ok(())
}
