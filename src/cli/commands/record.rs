//! Clinical record commands.
//!
//! - `hh record add <label> --type <type>` - Create a record
//! - `hh record update <id>` - Change selected fields
//! - `hh record delete <id>` - Delete a record (no-op if absent)
//! - `hh record show <id>` - Show one record

use crate::cli::{RecordAddArgs, RecordCommands, RecordUpdateArgs};
use crate::cli::commands::{invalid, now_datetime, open_store, print_record};
use crate::error::{Error, Result};
use crate::model::{ClinicalPatch, NewClinical, NewRecord, RecordKind, RecordPatch};
use crate::storage::Persistence;
use crate::store::RecordStore;
use crate::validate::normalize_severity;
use serde::Serialize;
use std::path::PathBuf;

const KIND: RecordKind = RecordKind::Clinical;

/// Output for create.
#[derive(Serialize)]
pub(crate) struct CreatedOutput {
    pub kind: RecordKind,
    pub id: u64,
}

/// Output for delete.
#[derive(Serialize)]
pub(crate) struct DeletedOutput {
    pub kind: RecordKind,
    pub id: u64,
    pub deleted: bool,
}

/// Execute clinical record commands.
pub fn execute(command: &RecordCommands, data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = open_store(data_dir)?;

    match command {
        RecordCommands::Add(args) => add(&mut store, args, json),
        RecordCommands::Update(args) => update(&mut store, args, json),
        RecordCommands::Delete { id } => delete(&mut store, KIND, *id, json),
        RecordCommands::Show { id } => show(&store, KIND, *id, json),
    }
}

fn add<P: Persistence>(store: &mut RecordStore<P>, args: &RecordAddArgs, json: bool) -> Result<()> {
    let severity = normalize_severity(&args.severity).map_err(|r| invalid("severity", r))?;

    let id = store.create(NewRecord::Clinical(NewClinical {
        label: args.label.trim().to_string(),
        category: args.record_type.trim().to_string(),
        description: args.description.trim().to_string(),
        timestamp: args
            .datetime
            .as_deref()
            .map_or_else(now_datetime, |d| d.trim().to_string()),
        severity,
    }))?;

    if crate::is_silent() {
        println!("{id}");
        return Ok(());
    }

    if json {
        let output = CreatedOutput { kind: KIND, id };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Added {} record #{id}: {} [{severity}]", args.record_type.trim(), args.label.trim());
    }

    Ok(())
}

fn update<P: Persistence>(
    store: &mut RecordStore<P>,
    args: &RecordUpdateArgs,
    json: bool,
) -> Result<()> {
    let severity = args
        .severity
        .as_deref()
        .map(normalize_severity)
        .transpose()
        .map_err(|r| invalid("severity", r))?;

    let patch = ClinicalPatch {
        label: args.label.as_deref().map(|s| s.trim().to_string()),
        category: args.record_type.as_deref().map(|s| s.trim().to_string()),
        description: args.description.as_deref().map(|s| s.trim().to_string()),
        timestamp: args.datetime.as_deref().map(|s| s.trim().to_string()),
        severity,
    };

    if patch.is_empty() {
        return Err(Error::InvalidArgument(
            "Nothing to update; pass at least one field flag (see --help)".to_string(),
        ));
    }

    let record = store
        .update(KIND, args.id, RecordPatch::Clinical(patch))?
        .ok_or(Error::RecordNotFound { kind: KIND, id: args.id })?;

    if crate::is_silent() {
        println!("{}", record.id());
    } else if json {
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("Updated clinical record #{}", record.id());
        print_record(&record);
    }

    Ok(())
}

/// Delete a record of either kind. Missing ids are reported, not errors.
pub(crate) fn delete<P: Persistence>(
    store: &mut RecordStore<P>,
    kind: RecordKind,
    id: u64,
    json: bool,
) -> Result<()> {
    let removed = store.delete(kind, id)?;
    let deleted = removed.is_some();

    if crate::is_silent() {
        if deleted {
            println!("{id}");
        }
        return Ok(());
    }

    if json {
        let output = DeletedOutput { kind, id, deleted };
        println!("{}", serde_json::to_string(&output)?);
    } else if let Some(record) = removed {
        println!("Deleted {kind} record #{id}: {}", record.label());
    } else {
        println!("No {kind} record #{id}; nothing deleted.");
    }

    Ok(())
}

/// Show a record of either kind.
pub(crate) fn show<P: Persistence>(
    store: &RecordStore<P>,
    kind: RecordKind,
    id: u64,
    json: bool,
) -> Result<()> {
    let record = store
        .get(kind, id)
        .ok_or(Error::RecordNotFound { kind, id })?;

    if json {
        println!("{}", serde_json::to_string(&record)?);
    } else {
        print_record(&record);
    }

    Ok(())
}
