//! CLI module for tallydb
//!
//! Every subcommand loads a dataset, builds an engine and prints one JSON
//! response:
//! - search: records matching equality criteria
//! - explain: the plan a search would use
//! - range: records within an inclusive date range
//! - top: most frequent values of a field
//! - totals: price sums per group
//! - stats: price statistics for one vendor
//! - get: one record by id

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{execute, run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
