use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "prodcat", version, long_version = LONG_VERSION)]
#[command(about = "Browse and filter a product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding users.json, categories.json and products.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only products whose name contains this text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only products in categories owned by this user (name, id or "all")
    #[arg(short, long)]
    pub user: Option<String>,

    /// Toggle a category id in the selection (repeatable)
    #[arg(short, long = "category", value_name = "ID")]
    pub categories: Vec<String>,

    /// Clear the category selection after toggling
    #[arg(long)]
    pub all_categories: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching the filters
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Show the user filter tabs
    Users(FilterArgs),

    /// Show the category buttons
    #[command(alias = "cats")]
    Categories(FilterArgs),

    /// Check that every product and category reference resolves
    Doctor,

    /// Interactive filtering session reading commands from stdin
    Browse,

    /// Get or set configuration
    Config {
        /// Configuration key (data-dir, line-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
