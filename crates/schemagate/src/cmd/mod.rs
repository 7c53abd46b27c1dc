use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use schemagate_sink::{FsSink, HttpSink, SchemaSink};

use crate::exit::{sink_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod check;
pub mod get;
pub mod put;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish a schema document to one or more sinks.
    Put(PutArgs),
    /// Fetch a schema document from a sink.
    Get(GetArgs),
    /// Validate a JSON payload against a stored schema.
    Check(CheckArgs),
}

pub async fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Put(args) => put::run(args, format).await,
        Command::Get(args) => get::run(args, format).await,
        Command::Check(args) => check::run(args, format).await,
    }
}

#[derive(Args, Debug)]
pub struct PutArgs {
    /// Schema file to publish.
    pub file: PathBuf,

    /// Relative schema path key, e.g. v1/default.json.
    #[arg(long)]
    pub path: String,

    /// Filesystem sink base directory (repeatable).
    #[arg(long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// HTTP sink base URL (repeatable).
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Relative schema path key.
    #[arg(long)]
    pub path: String,

    /// Filesystem sink base directory.
    #[arg(long, value_name = "DIR", conflicts_with = "url")]
    pub dir: Option<PathBuf>,

    /// HTTP sink base URL.
    #[arg(long, value_name = "URL", conflicts_with = "dir")]
    pub url: Option<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Payload file to validate.
    pub file: PathBuf,

    /// Relative schema path key.
    #[arg(long)]
    pub path: String,

    /// Filesystem sink base directory.
    #[arg(long, value_name = "DIR", conflicts_with = "url")]
    pub dir: Option<PathBuf>,

    /// HTTP sink base URL.
    #[arg(long, value_name = "URL", conflicts_with = "dir")]
    pub url: Option<String>,
}

/// Build the single sink a read-side command addresses.
pub fn single_sink(dir: &Option<PathBuf>, url: &Option<String>) -> CliResult<Arc<dyn SchemaSink>> {
    match (dir, url) {
        (Some(dir), None) => {
            let sink = FsSink::new(dir.display().to_string())
                .map_err(|err| sink_error("configuring sink", err))?;
            Ok(Arc::new(sink))
        }
        (None, Some(url)) => {
            let sink =
                HttpSink::new(url.clone()).map_err(|err| sink_error("configuring sink", err))?;
            Ok(Arc::new(sink))
        }
        _ => Err(CliError::new(USAGE, "exactly one of --dir or --url is required")),
    }
}
