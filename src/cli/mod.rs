//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for list/query commands.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;

/// HealthHub - track symptoms, medicine, appointments and wellness habits
#[derive(Parser, Debug)]
#[command(name = "hh", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (default: ~/.healthhub/data)
    #[arg(long, global = true, env = "HH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Output only the record ID (for scripting)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clinical records (symptoms, medicine, appointments)
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Wellness habits
    Habit {
        #[command(subcommand)]
        command: HabitCommands,
    },

    /// List records (clinical first, then habits)
    List(ListArgs),

    /// Show record counts and data file locations
    Status,

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Clinical Record Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add a clinical record
    Add(RecordAddArgs),

    /// Update fields of a clinical record
    Update(RecordUpdateArgs),

    /// Delete a clinical record
    Delete {
        /// Record ID
        id: u64,
    },

    /// Show a clinical record
    Show {
        /// Record ID
        id: u64,
    },
}

#[derive(Args, Debug)]
pub struct RecordAddArgs {
    /// Short label (e.g. "Fever")
    pub label: String,

    /// Record type (Symptoms, Medicine, Appointment, or your own)
    #[arg(short = 't', long = "type")]
    pub record_type: String,

    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Date/time (default: now)
    #[arg(long)]
    pub datetime: Option<String>,

    /// Severity (Mild, Moderate, Critical)
    #[arg(short, long, default_value = "Mild")]
    pub severity: String,
}

#[derive(Args, Debug)]
pub struct RecordUpdateArgs {
    /// Record ID
    pub id: u64,

    /// New label
    #[arg(long)]
    pub label: Option<String>,

    /// New type
    #[arg(short = 't', long = "type")]
    pub record_type: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New date/time
    #[arg(long)]
    pub datetime: Option<String>,

    /// New severity
    #[arg(short, long)]
    pub severity: Option<String>,
}

// ============================================================================
// Wellness Habit Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum HabitCommands {
    /// Add a wellness habit
    Add(HabitAddArgs),

    /// Update fields of a wellness habit
    Update(HabitUpdateArgs),

    /// Delete a wellness habit
    Delete {
        /// Habit ID
        id: u64,
    },

    /// Show a wellness habit
    Show {
        /// Habit ID
        id: u64,
    },
}

#[derive(Args, Debug)]
pub struct HabitAddArgs {
    /// Short label
    #[arg(default_value = "Wellness Habit")]
    pub label: String,

    /// Category (Exercise, Nutrition, Sleep, Self-Care, Mental Wellness, Hygiene)
    #[arg(short, long)]
    pub category: String,

    /// Frequency (Daily, Weekly, Routine, Sometimes)
    #[arg(short, long, default_value = "Daily")]
    pub frequency: String,

    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Date/time (default: now)
    #[arg(long)]
    pub datetime: Option<String>,
}

#[derive(Args, Debug)]
pub struct HabitUpdateArgs {
    /// Habit ID
    pub id: u64,

    /// New label
    #[arg(long)]
    pub label: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New frequency
    #[arg(short, long)]
    pub frequency: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New date/time
    #[arg(long)]
    pub datetime: Option<String>,
}

// ============================================================================
// List
// ============================================================================

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only this kind (clinical, wellness)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Only this type/category (case-insensitive); implies clinical unless --kind is given
    #[arg(short = 't', long = "type")]
    pub category: Option<String>,
}
