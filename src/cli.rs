use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, SortKey};
use crate::manager;

#[derive(Parser)]
#[command(name = "promptarium")]
#[command(about = "A prompt catalog with ratings and usage tracking")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Add(args) => {
                manager::handle_add_command(config, &args)?;
            }
            Commands::List(args) => {
                manager::handle_list_command(config, &args)?;
            }
            Commands::Show(args) => {
                manager::handle_show_command(config, &args)?;
            }
            Commands::Use(args) => {
                manager::handle_use_command(config, &args)?;
            }
            Commands::Rate(args) => {
                manager::handle_rate_command(config, &args)?;
            }
            Commands::Stats(args) => {
                manager::handle_stats_command(config, &args)?;
            }
            Commands::Seed(args) => {
                manager::handle_seed_command(config, &args)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new prompt to the catalog
    Add(AddArgs),

    /// Browse prompts with filtering, search and sorting
    List(ListArgs),

    /// Show one prompt in full
    Show(ShowArgs),

    /// Print a prompt body and count the usage
    Use(UseArgs),

    /// Rate a prompt from 1 to 5
    Rate(RateArgs),

    /// Library-wide statistics
    Stats(StatsArgs),

    /// Install the starter collection
    Seed(SeedArgs),
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short = 'T', long)]
    pub title: String,

    #[arg(
        short = 'c',
        long,
        help = "One of the fixed categories (see `list --categories`)"
    )]
    pub category: String,

    #[arg(long, help = "The prompt body")]
    pub content: String,

    #[arg(short = 'a', long)]
    pub author: String,

    #[arg(short = 't', long, help = "Comma-separated tags")]
    pub tags: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(
        short = 'c',
        long,
        help = "Filter by category; \"All\" disables the filter"
    )]
    pub category: Option<String>,

    #[arg(
        short = 'q',
        long,
        help = "Case-insensitive search over title, body and tags"
    )]
    pub query: Option<String>,

    #[arg(
        short = 's',
        long,
        value_enum,
        help = "Sort order (defaults to the configured one)"
    )]
    pub sort: Option<SortKey>,

    #[arg(short = 'f', long, value_enum)]
    pub format: Option<ListFormat>,

    #[arg(long, help = "Show the fixed category list")]
    pub categories: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Prompt id")]
    pub id: u64,
}

#[derive(Args)]
pub struct UseArgs {
    #[arg(help = "Prompt id")]
    pub id: u64,
}

#[derive(Args)]
pub struct RateArgs {
    #[arg(help = "Prompt id")]
    pub id: u64,

    #[arg(help = "Rating value", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: u8,
}

#[derive(Args)]
pub struct StatsArgs {
    #[arg(
        short = 'n',
        long,
        help = "Entries per top list (defaults to the configured limit)"
    )]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct SeedArgs {
    #[arg(short, long, help = "Overwrite an existing data file")]
    pub force: bool,
}

#[derive(clap::ValueEnum, Clone)]
pub enum ListFormat {
    Simple,
    Detailed,
    Json,
}
