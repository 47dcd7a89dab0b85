// Read-only commands - list, show, stats

use crate::cli::{ListArgs, ListFormat, ShowArgs, StatsArgs};
use crate::config::Config;
use crate::core::data::{ALL_CATEGORIES, CATEGORIES};
use crate::core::operations::CatalogOperations;
use crate::core::query::QueryEngine;
use crate::core::stats::Aggregator;
use crate::core::traits::PromptStorage;
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use crate::utils::output::{DisplayFormatter, OutputStyle};
use crate::utils::stats::StatsCalculator;

pub fn handle_list_command(config: Config, args: &ListArgs) -> AppResult<()> {
    if args.categories {
        DisplayFormatter::print_categories(CATEGORIES);
        return Ok(());
    }

    let ops = CatalogOperations::new(config);
    let collection = ops.load_prompts()?;

    let category = args.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let term = args.query.as_deref().unwrap_or("");
    let sort = args.sort.unwrap_or(ops.config().general.sort_by);

    let results = QueryEngine::browse(&collection.prompts, category, term, sort);

    if results.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "prompts matching your criteria".to_string(),
        });
        return Ok(());
    }

    let format = args.format.clone().unwrap_or(ListFormat::Simple);
    DisplayFormatter::format_list(&results, &format)
}

pub fn handle_show_command(config: Config, args: &ShowArgs) -> AppResult<()> {
    let ops = CatalogOperations::new(config);
    let collection = ops.load_prompts()?;

    match collection.find_by_id(args.id) {
        Some(prompt) => OutputStyle::print_prompt_detailed(prompt),
        None => handle_flow(FlowResult::NotFound {
            item_type: "Prompt".to_string(),
            search_term: args.id.to_string(),
        }),
    }

    Ok(())
}

pub fn handle_stats_command(config: Config, args: &StatsArgs) -> AppResult<()> {
    let ops = CatalogOperations::new(config);
    let collection = ops.load_prompts()?;

    if collection.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "prompts".to_string(),
        });
        return Ok(());
    }

    let top_n = args.top.unwrap_or(ops.config().general.top_limit);
    let stats = Aggregator::collect(&collection.prompts, top_n);
    StatsCalculator::print_stats(&stats);

    Ok(())
}
