//! Errors surfaced by the `tasklane` binary.

use tasklane::{
    config::ConfigError,
    tracker::{ports::RepositoryError, services::TrackerError},
};
use thiserror::Error;

/// Any failure that ends a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments did not match any command.
    #[error("{}", usage_message(.0))]
    Usage(#[from] clap::Error),

    /// Settings could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A tracker rule or lookup failed.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// The database could not be reached or the unit of work failed.
    #[error(transparent)]
    Storage(#[from] RepositoryError),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Output could not be encoded as JSON.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Clap's rendering without its own `error:` prefix or trailing newlines.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .strip_prefix("error: ")
        .unwrap_or(&rendered)
        .trim_end()
        .to_owned()
}
