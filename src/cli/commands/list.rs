//! List command: the dashboard views.
//!
//! - `hh list` - everything, clinical first
//! - `hh list --type Symptoms` - clinical records of one type
//! - `hh list --kind wellness` - habits only
//! - `hh list --kind wellness --type sleep` - habits in one category

use crate::cli::ListArgs;
use crate::cli::commands::{invalid, open_store};
use crate::error::Result;
use crate::model::{Record, RecordKind, Severity};
use crate::validate::{normalize_kind, normalize_wellness_category};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Output for list.
#[derive(Serialize)]
struct ListOutput {
    records: Vec<Record>,
    count: usize,
}

/// Execute the list command.
pub fn execute(args: &ListArgs, data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let kind = args
        .kind
        .as_deref()
        .map(normalize_kind)
        .transpose()
        .map_err(|r| invalid("kind", r))?;

    let store = open_store(data_dir)?;

    let records = match (kind, args.category.as_deref()) {
        (None, None) => store.list_all(),
        (Some(kind), None) => store.list_kind(kind),
        (Some(RecordKind::Wellness), Some(category)) => {
            let category =
                normalize_wellness_category(category).map_err(|r| invalid("category", r))?;
            store.list_by_category(RecordKind::Wellness, category.as_str())
        }
        (_, Some(category)) => store.list_by_category(RecordKind::Clinical, category),
    };
    debug!(count = records.len(), ?kind, "Listing records");

    if crate::is_csv() {
        println!("kind,id,label,type,description,datetime,severity_freq");
        for r in &records {
            println!(
                "{},{},{},{},{},{},{}",
                r.kind(),
                r.id(),
                crate::csv_escape(r.label()),
                crate::csv_escape(&r.type_display()),
                crate::csv_escape(r.description()),
                crate::csv_escape(r.timestamp()),
                r.level_display()
            );
        }
    } else if json {
        let output = ListOutput {
            count: records.len(),
            records,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if records.is_empty() {
        println!("No records found.");
    } else {
        print_table(&records);
    }

    Ok(())
}

/// Truncate to `max` characters, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    if first_line.chars().count() > max || s.lines().nth(1).is_some() {
        let cut: String = first_line.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}

fn print_table(records: &[Record]) {
    println!(
        "{}",
        format!(
            "{:<6} {:<18} {:<26} {:<30} {:<18} {}",
            "ID No.", "Label", "Type", "Description", "Date/Time", "Severity/Freq"
        )
        .bold()
    );

    for r in records {
        let level = match r {
            Record::Clinical(c) => match c.severity {
                Severity::Critical => c.severity.as_str().red().to_string(),
                Severity::Moderate => c.severity.as_str().yellow().to_string(),
                Severity::Mild => c.severity.as_str().green().to_string(),
            },
            Record::Wellness(w) => w.frequency.as_str().cyan().to_string(),
        };
        println!(
            "{:<6} {:<18} {:<26} {:<30} {:<18} {}",
            r.id(),
            truncate(r.label(), 18),
            truncate(&r.type_display(), 26),
            truncate(r.description(), 30),
            truncate(r.timestamp(), 18),
            level
        );
    }

    println!();
    println!("{} record(s)", records.len());
}
