use crate::types::{LogLevel, OutputFormat, SortArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gamelist")]
#[command(
    about = "Browse a game catalog with search, genre filter, sorting and pagination",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Catalog JSON file (defaults to the built-in catalog)")]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true, help = "Config file (defaults to $GAMELIST_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of the catalog
    List {
        #[arg(long, help = "Case-insensitive title search")]
        search: Option<String>,

        #[arg(long, help = "Genre to filter by, or 'all'")]
        genre: Option<String>,

        #[arg(long)]
        sort: Option<SortArg>,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Items per page: a positive number or 'all'"
        )]
        per_page: Option<String>,

        #[arg(long, allow_negative_numbers = true, help = "1-based page number")]
        page: Option<i64>,

        #[arg(long, help = "Show the last page instead of an empty one when --page is too large")]
        clamp: bool,
    },

    /// List the genre filter options
    Genres,

    /// Interactive session: read one command per line from stdin
    Browse,
}
