//! Status command: record counts, next ids and data files.

use crate::cli::commands::open_store;
use crate::error::Result;
use crate::model::RecordKind;
use crate::storage::file_size;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct CollectionStatus {
    kind: RecordKind,
    count: usize,
    next_id: u64,
    file: String,
    file_exists: bool,
    file_size: u64,
}

#[derive(Serialize)]
struct StatusOutput {
    collections: Vec<CollectionStatus>,
    total: usize,
}

fn collection_status(kind: RecordKind, count: usize, next_id: u64, path: &Path) -> CollectionStatus {
    CollectionStatus {
        kind,
        count,
        next_id,
        file: path.display().to_string(),
        file_exists: path.exists(),
        file_size: file_size(path),
    }
}

/// Execute the status command.
pub fn execute(data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = open_store(data_dir)?;
    let storage = store.persistence();

    let collections = vec![
        collection_status(
            RecordKind::Clinical,
            store.len(RecordKind::Clinical),
            store.next_id(RecordKind::Clinical),
            storage.clinical_path(),
        ),
        collection_status(
            RecordKind::Wellness,
            store.len(RecordKind::Wellness),
            store.next_id(RecordKind::Wellness),
            storage.wellness_path(),
        ),
    ];
    let total: usize = collections.iter().map(|c| c.count).sum();

    if json {
        let output = StatusOutput { collections, total };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("{}", "HealthHub Status".bold().underline());
    println!();
    for c in &collections {
        let title = match c.kind {
            RecordKind::Clinical => "Clinical records:",
            RecordKind::Wellness => "Wellness habits:",
        };
        println!("{}", title.blue().bold());
        println!("  Count:   {}", c.count);
        println!("  Next ID: {}", c.next_id);
        if c.file_exists {
            println!("  File:    {} ({} bytes)", c.file, c.file_size);
        } else {
            println!("  File:    {} {}", c.file, "(not yet written)".dimmed());
        }
        println!();
    }
    println!("Total: {total}");

    Ok(())
}
