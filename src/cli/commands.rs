//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Load configuration (defaults when `--config` is absent)
//! 2. Load the dataset
//! 3. Build the engine
//! 4. Answer one request and write one JSON response to stdout
//!
//! Log lines go to stderr so stdout carries only the response.

use std::io;
use std::path::Path;

use serde_json::{json, Value};

use crate::engine::{Engine, EngineConfig};
use crate::grouping::GroupBy;
use crate::observability::{log_event_with_fields, Event};
use crate::planner::{Criteria, Criterion};
use crate::store::{load_dataset, Field, RecordId};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments, run the command, and print the response
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let mut stdout = io::stdout().lock();

    match execute(&cli) {
        Ok(data) => write_response(&mut stdout, data),
        Err(e) => {
            write_error(&mut stdout, e.code(), &e.to_string())?;
            Err(e)
        }
    }
}

/// Build the engine for `cli` and answer its command
pub fn execute(cli: &Cli) -> CliResult<Value> {
    let config = load_config(cli.config.as_deref())?;
    let engine = build_engine(&cli.input, config)?;
    run_command(&engine, &cli.command)
}

/// Answer one command against a built engine
pub fn run_command(engine: &Engine, command: &Command) -> CliResult<Value> {
    match command {
        Command::Search { criteria } => search(engine, criteria),
        Command::Explain { criteria } => explain(engine, criteria),
        Command::Range { from, to } => range(engine, from, to),
        Command::Top { field, count } => top(engine, field, *count),
        Command::Totals { by } => totals(engine, by),
        Command::Stats { vendor } => stats(engine, vendor),
        Command::Get { id } => get(engine, *id),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(&config.logger(), Event::ConfigLoaded, &[("source", source.as_str())]);
    Ok(config)
}

fn build_engine(input: &Path, config: EngineConfig) -> CliResult<Engine> {
    let raw = load_dataset(input)?;

    let path = input.display().to_string();
    let records = raw.len().to_string();
    log_event_with_fields(
        &config.logger(),
        Event::DatasetLoaded,
        &[("path", path.as_str()), ("records", records.as_str())],
    );

    Ok(Engine::with_config(raw, config)?)
}

/// Parse repeated `--where field=value` arguments
fn parse_criteria(assignments: &[String]) -> CliResult<Criteria> {
    assignments
        .iter()
        .map(|a| {
            Criterion::from_assignment(a).ok_or_else(|| {
                CliError::InvalidArgument(format!(
                    "Expected FIELD=VALUE in --where, got '{}'",
                    a
                ))
            })
        })
        .collect()
}

fn parse_field(name: &str) -> CliResult<Field> {
    Field::parse(name).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "Unknown field '{}'. Fields: id, product, category, price, date, vendor.",
            name
        ))
    })
}

fn parse_group_by(name: &str) -> CliResult<GroupBy> {
    GroupBy::parse(name).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "Unknown grouping '{}'. Groupings: product, category, vendor, month.",
            name
        ))
    })
}

fn search(engine: &Engine, assignments: &[String]) -> CliResult<Value> {
    let criteria = parse_criteria(assignments)?;
    let result = engine.search(&criteria);
    Ok(json!({
        "scan_type": result.scan_type,
        "count": result.len(),
        "records": serde_json::to_value(&result.records)?,
    }))
}

fn explain(engine: &Engine, assignments: &[String]) -> CliResult<Value> {
    let criteria = parse_criteria(assignments)?;
    Ok(serde_json::to_value(engine.explain(&criteria))?)
}

fn range(engine: &Engine, from: &str, to: &str) -> CliResult<Value> {
    let records = engine.search_by_date_range(from, to)?;
    Ok(json!({
        "count": records.len(),
        "records": serde_json::to_value(&records)?,
    }))
}

fn top(engine: &Engine, field: &str, count: usize) -> CliResult<Value> {
    let field = parse_field(field)?;
    let entries: Vec<Value> = engine
        .most_frequent(field, count)
        .into_iter()
        .map(|(value, count)| json!({ "value": value, "count": count }))
        .collect();
    Ok(Value::Array(entries))
}

fn totals(engine: &Engine, by: &str) -> CliResult<Value> {
    let group_by = parse_group_by(by)?;
    Ok(serde_json::to_value(engine.sum_by(group_by))?)
}

fn stats(engine: &Engine, vendor: &str) -> CliResult<Value> {
    Ok(serde_json::to_value(engine.vendor_statistics(vendor))?)
}

fn get(engine: &Engine, id: u64) -> CliResult<Value> {
    let record = engine.get(RecordId(id))?;
    Ok(serde_json::to_value(record)?)
}
