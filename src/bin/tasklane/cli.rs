//! Argument definitions for the `tasklane` binary.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use tasklane::tracker::domain::{ParseTaskStatusError, TaskStatus};

/// Track projects and the tasks inside them.
#[derive(Debug, Parser)]
#[command(name = "tasklane", version)]
pub struct Cli {
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the tracker tables if they do not exist.
    Init,
    /// Commands that read or change tracked data.
    #[command(flatten)]
    Tracker(TrackerCommand),
}

/// Commands that run inside a single unit of work.
#[derive(Debug, Subcommand)]
pub enum TrackerCommand {
    /// Manage projects.
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Manage tasks.
    #[command(subcommand)]
    Task(TaskCommand),
}

/// Project subcommands.
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Create a project.
    Create(ProjectCreateArgs),
    /// List every project.
    List(ListArgs),
    /// Replace a project's name and description.
    Rename(ProjectRenameArgs),
    /// Delete a project and all of its tasks.
    Delete(ProjectDeleteArgs),
}

/// Task subcommands.
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a task to a project.
    Create(TaskCreateArgs),
    /// List the tasks of a project.
    List(TaskListArgs),
    /// Move a task to another status.
    Status(TaskStatusArgs),
}

#[derive(Debug, Args)]
pub struct ProjectCreateArgs {
    /// Unique project name.
    pub name: String,
    /// Optional project description.
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output as JSON.
    #[arg(long, short = 'j')]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ProjectRenameArgs {
    /// Project identifier.
    pub id: i64,
    /// New project name.
    pub name: String,
    /// New description. Omitting it clears the stored one.
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProjectDeleteArgs {
    /// Project identifier.
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct TaskCreateArgs {
    /// Identifier of the owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Optional task description.
    #[arg(long, short = 'd')]
    pub description: Option<String>,
    /// Optional deadline as `YYYY-MM-DD`, taken as midnight UTC.
    #[arg(long, value_parser = parse_deadline)]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Args)]
pub struct TaskListArgs {
    /// Identifier of the owning project.
    pub project_id: i64,
    /// Output as JSON.
    #[arg(long, short = 'j')]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TaskStatusArgs {
    /// Task identifier.
    pub id: i64,
    /// New status: todo, doing, or done.
    #[arg(value_parser = parse_status)]
    pub status: TaskStatus,
}

fn parse_deadline(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_status(value: &str) -> Result<TaskStatus, ParseTaskStatusError> {
    value.parse()
}
