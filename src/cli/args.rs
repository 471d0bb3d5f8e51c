//! CLI argument definitions using clap
//!
//! Commands:
//! - tallydb --input <dataset> search --where field=value ...
//! - tallydb --input <dataset> explain --where field=value ...
//! - tallydb --input <dataset> range --from <date> --to <date>
//! - tallydb --input <dataset> top --field <field> --count <n>
//! - tallydb --input <dataset> totals --by <group>
//! - tallydb --input <dataset> stats --vendor <name>
//! - tallydb --input <dataset> get --id <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tallydb - indexed queries and aggregates over a sales dataset
#[derive(Parser, Debug)]
#[command(name = "tallydb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the dataset (JSON array of records)
    #[arg(long, global = true, default_value = "./sales.json")]
    pub input: PathBuf,

    /// Path to an engine configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Records matching every criterion
    Search {
        /// Equality constraint, repeatable
        #[arg(long = "where", value_name = "FIELD=VALUE")]
        criteria: Vec<String>,
    },

    /// Show how a search would be answered, without running it
    Explain {
        /// Equality constraint, repeatable
        #[arg(long = "where", value_name = "FIELD=VALUE")]
        criteria: Vec<String>,
    },

    /// Records dated within an inclusive range
    Range {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },

    /// Most frequent values of a field
    Top {
        #[arg(long, default_value = "product")]
        field: String,
        #[arg(long, default_value_t = 3)]
        count: usize,
    },

    /// Price totals per group
    Totals {
        /// product, category, vendor or month
        #[arg(long, default_value = "category")]
        by: String,
    },

    /// Price statistics for one vendor
    Stats {
        #[arg(long)]
        vendor: String,
    },

    /// One record by id
    Get {
        #[arg(long)]
        id: u64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
