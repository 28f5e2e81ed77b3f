//! Command-line front end for the tasklane tracker.
//!
//! Usage:
//!
//! ```text
//! tasklane init
//! tasklane project create <NAME> [--description <TEXT>]
//! tasklane project list [--json]
//! tasklane task create <PROJECT_ID> <TITLE> [--deadline YYYY-MM-DD]
//! tasklane task status <TASK_ID> <todo|doing|done>
//! ```
//!
//! Settings are read from the environment after loading an optional `.env`
//! file. Every tracker command runs in one database transaction, committed
//! only when the command succeeds.

mod cli;
mod commands;
mod error;
mod render;

use clap::Parser;
use cli::{Cli, Command, TrackerCommand};
use commands::Tracker;
use error::CliError;
use mockable::DefaultClock;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tasklane::{
    config::Settings,
    tracker::{
        adapters::postgres::{PostgresTrackerStore, TrackerPgPool, apply_schema, connect_pool},
        services::CapacityLimits,
    },
};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// A single command never needs more than one connection at a time.
const POOL_SIZE: u32 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv_result = dotenvy::dotenv();
    init_tracing();
    match dotenv_result {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "ignoring unreadable environment file"),
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => return report_failure(&CliError::from(err)),
        // `--help` and `--version` arrive as errors but are ordinary output.
        Err(err) => {
            return if err.print().is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };
    let mut stdout = std::io::stdout().lock();
    match run(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

/// Writes `Error: …` to stderr. Every failure exits with status 1.
fn report_failure(err: &CliError) -> ExitCode {
    let mut stderr = std::io::stderr().lock();
    if writeln!(stderr, "Error: {err}").is_err() {
        warn!(error = %err, "command failed and stderr is unavailable");
    }
    ExitCode::FAILURE
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "tasklane=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let settings = Settings::from_env()?;
    let pool = connect_pool(&settings.database_url, POOL_SIZE).await?;
    match cli.command {
        Command::Init => {
            apply_schema(&pool).await?;
            writeln!(out, "Schema applied.")?;
            Ok(())
        }
        Command::Tracker(command) => run_unit_of_work(&pool, settings.limits, command, out).await,
    }
}

/// Runs one tracker command inside a transaction.
///
/// Output is buffered until the commit succeeds so nothing is reported for
/// work that was rolled back.
async fn run_unit_of_work(
    pool: &TrackerPgPool,
    limits: CapacityLimits,
    command: TrackerCommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let store = Arc::new(PostgresTrackerStore::begin(pool).await?);
    let tracker = Tracker::new(Arc::clone(&store), Arc::new(DefaultClock), limits);

    let mut buffer = Vec::new();
    match tracker.execute(command, &mut buffer).await {
        Ok(()) => {
            store.commit().await?;
            out.write_all(&buffer)?;
            Ok(())
        }
        Err(err) => {
            if let Err(rollback_err) = store.rollback().await {
                warn!(error = %rollback_err, "rollback after failed command did not complete");
            }
            Err(err)
        }
    }
}
