use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for worldfacets
#[derive(Debug, Parser)]
#[command(
    name = "worldfacets",
    version,
    about = "Filter, cross-count and summarize a country dataset from the terminal"
)]
pub struct CliArgs {
    /// Snapshot to load (.json, .json.gz or .bin); defaults to the bundled dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Facet selections. Every list flag is repeatable and also accepts
/// comma-separated values (e.g. `--language English,French`).
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive substring of the country name
    #[arg(short = 's', long = "search", global = true)]
    pub search: Option<String>,

    /// Continent code(s), e.g. EU,AS
    #[arg(short = 'c', long = "continent", value_delimiter = ',', global = true)]
    pub continents: Vec<String>,

    /// Language name(s), e.g. English,French
    #[arg(short = 'l', long = "language", value_delimiter = ',', global = true)]
    pub languages: Vec<String>,

    /// Currency code(s), e.g. EUR
    #[arg(short = 'm', long = "currency", value_delimiter = ',', global = true)]
    pub currencies: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List the filtered countries, revealed in batches
    Countries {
        /// Rows revealed per batch
        #[arg(long, default_value_t = worldfacets_core::DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// How many batches to reveal
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Option counts for each facet, cross-filtered by the other facets
    Facets,

    /// Per-continent statistics over the filtered countries
    Continents,

    /// Top languages by share of country-language pairings
    Languages,

    /// Currency diversity over the filtered countries
    Currencies {
        /// List every currency code grouped by first letter instead
        #[arg(long)]
        by_letter: bool,
    },

    /// Countries with the most spoken languages
    Multilingual,

    /// Countries speaking two or more of the selected languages
    Overlap,

    /// Describe the active filters
    Summary,

    /// Convert the input snapshot into a binary snapshot
    Build {
        /// Output path (.bin)
        out: PathBuf,
    },
}
