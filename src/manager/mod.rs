// Command handling modules
pub mod crud; // submission and mutation commands
pub mod query; // browse, show, stats

// Re-export handlers for the CLI dispatcher
pub use crud::{handle_add_command, handle_rate_command, handle_seed_command, handle_use_command};
pub use query::{handle_list_command, handle_show_command, handle_stats_command};
