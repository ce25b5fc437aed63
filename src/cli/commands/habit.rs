//! Wellness habit commands.

use crate::cli::commands::record::{CreatedOutput, delete, show};
use crate::cli::commands::{invalid, now_datetime, open_store, print_record};
use crate::cli::{HabitAddArgs, HabitCommands, HabitUpdateArgs};
use crate::error::{Error, Result};
use crate::model::{NewRecord, NewWellness, RecordKind, RecordPatch, WellnessPatch};
use crate::storage::Persistence;
use crate::store::RecordStore;
use crate::validate::{normalize_frequency, normalize_wellness_category};
use std::path::PathBuf;

const KIND: RecordKind = RecordKind::Wellness;

/// Execute wellness habit commands.
pub fn execute(command: &HabitCommands, data_dir: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = open_store(data_dir)?;

    match command {
        HabitCommands::Add(args) => add(&mut store, args, json),
        HabitCommands::Update(args) => update(&mut store, args, json),
        HabitCommands::Delete { id } => delete(&mut store, KIND, *id, json),
        HabitCommands::Show { id } => show(&store, KIND, *id, json),
    }
}

fn add<P: Persistence>(store: &mut RecordStore<P>, args: &HabitAddArgs, json: bool) -> Result<()> {
    let wellness_category =
        normalize_wellness_category(&args.category).map_err(|r| invalid("wellness category", r))?;
    let frequency = normalize_frequency(&args.frequency).map_err(|r| invalid("frequency", r))?;

    let id = store.create(NewRecord::Wellness(NewWellness {
        label: args.label.trim().to_string(),
        wellness_category,
        frequency,
        description: args.description.trim().to_string(),
        timestamp: args
            .datetime
            .as_deref()
            .map_or_else(now_datetime, |d| d.trim().to_string()),
    }))?;

    if crate::is_silent() {
        println!("{id}");
        return Ok(());
    }

    if json {
        let output = CreatedOutput { kind: KIND, id };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "Added wellness habit #{id}: {} [{wellness_category}, {frequency}]",
            args.label.trim()
        );
    }

    Ok(())
}

fn update<P: Persistence>(
    store: &mut RecordStore<P>,
    args: &HabitUpdateArgs,
    json: bool,
) -> Result<()> {
    let wellness_category = args
        .category
        .as_deref()
        .map(normalize_wellness_category)
        .transpose()
        .map_err(|r| invalid("wellness category", r))?;
    let frequency = args
        .frequency
        .as_deref()
        .map(normalize_frequency)
        .transpose()
        .map_err(|r| invalid("frequency", r))?;

    let patch = WellnessPatch {
        label: args.label.as_deref().map(|s| s.trim().to_string()),
        wellness_category,
        frequency,
        description: args.description.as_deref().map(|s| s.trim().to_string()),
        timestamp: args.datetime.as_deref().map(|s| s.trim().to_string()),
    };

    if patch.is_empty() {
        return Err(Error::InvalidArgument(
            "Nothing to update; pass at least one field flag (see --help)".to_string(),
        ));
    }

    let record = store
        .update(KIND, args.id, RecordPatch::Wellness(patch))?
        .ok_or(Error::RecordNotFound { kind: KIND, id: args.id })?;

    if crate::is_silent() {
        println!("{}", record.id());
    } else if json {
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("Updated wellness habit #{}", record.id());
        print_record(&record);
    }

    Ok(())
}
