//! Plain-text and JSON rendering of projects and tasks.

use chrono::{DateTime, Utc};
use tasklane::tracker::domain::{Project, Task};

const COLUMN_GAP: &str = "  ";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders projects as an aligned table.
pub fn project_table(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects.\n".to_owned();
    }
    let rows: Vec<[String; 4]> = projects
        .iter()
        .map(|project| {
            [
                project.id().to_string(),
                project.name().to_string(),
                project
                    .description()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                project.created_at().format(TIMESTAMP_FORMAT).to_string(),
            ]
        })
        .collect();
    render_table(["ID", "NAME", "DESCRIPTION", "CREATED"], &rows)
}

/// Renders the tasks of `project` under a heading naming it.
pub fn task_table(project: &Project, tasks: &[Task]) -> String {
    let heading = format!("Tasks for Project: {}\n", project.name());
    if tasks.is_empty() {
        return heading + "No tasks.\n";
    }
    let rows: Vec<[String; 5]> = tasks
        .iter()
        .map(|task| {
            [
                task.id().to_string(),
                task.title().to_string(),
                task.status().to_string(),
                optional_time(task.deadline(), DATE_FORMAT),
                optional_time(task.closed_at(), TIMESTAMP_FORMAT),
            ]
        })
        .collect();
    heading + &render_table(["ID", "TITLE", "STATUS", "DEADLINE", "CLOSED"], &rows)
}

fn optional_time(value: Option<DateTime<Utc>>, format: &str) -> String {
    value.map_or_else(|| "-".to_owned(), |time| time.format(format).to_string())
}

fn render_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, headers.iter().copied(), &widths);
    for row in rows {
        push_row(&mut output, row.iter().map(String::as_str), &widths);
    }
    output
}

fn push_row<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    output.push_str(line.trim_end());
    output.push('\n');
}
