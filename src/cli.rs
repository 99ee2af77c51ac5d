//! CLI interface for questlog.
//!
//! Each subcommand is non-interactive: arguments in, text out. Every
//! invocation loads the ledger from the save file (when present), applies
//! one operation, and writes the ledger back if it changed.
//!
//! The save file is resolved through the chain in [`crate::config`]; pass
//! `--file` to override it per command.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config;
use crate::ledger::Ledger;
use crate::model::Goal;
use crate::storage::Storage;

/// questlog — track goals, earn points, level up.
#[derive(Debug, Parser)]
#[command(name = "questlog", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Save file to operate on (overrides QUESTLOG_FILE and config).
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: tracking a goal
  1. questlog add checklist "Temple" "Attend weekly" --points 5 --target 3 --bonus 50
  2. questlog list
     → 1. [ ] Temple - Attend weekly (Completed 0/3) +5/event
  3. questlog record 1
     → You received 5 points. Total score: 5
  4. questlog status
     → Score: 5 pts | Level: 1 | Title: Apprentice

Progress goals take their units at record time:
  questlog add progress "Marathon" "Train up to 42 km" --points 10 --target-units 42
  questlog record 1 --units 5.5"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a goal to the ledger.
    Add {
        #[command(subcommand)]
        goal: AddGoal,
    },

    /// List all goals in order, with completion markers.
    List,

    /// Record an event against a goal by its list position.
    Record {
        /// Goal position as shown by `list` (starting at 1).
        number: usize,

        /// Units progressed (progress goals only, e.g. km).
        #[arg(long)]
        units: Option<f64>,
    },

    /// Show score, level, and title.
    Status,

    /// Replace the ledger with the contents of another save file.
    Import {
        /// Save file to read.
        path: PathBuf,
    },

    /// Write the current ledger to another file.
    Export {
        /// Destination file.
        path: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum AddGoal {
    /// A one-shot goal, completed on its first recording.
    Simple {
        name: String,
        description: String,

        /// Points awarded when completed.
        #[arg(long)]
        points: i64,
    },

    /// A goal that never completes and rewards every recording.
    Eternal {
        name: String,
        description: String,

        /// Points per recording.
        #[arg(long)]
        points: i64,
    },

    /// A goal requiring a number of recordings, with a completion bonus.
    Checklist {
        name: String,
        description: String,

        /// Points per recording.
        #[arg(long)]
        points: i64,

        /// Recordings needed to complete.
        #[arg(long)]
        target: u32,

        /// Bonus awarded on the completing recording.
        #[arg(long)]
        bonus: i64,
    },

    /// A penalty goal: recording it subtracts points.
    Negative {
        name: String,
        description: String,

        /// Penalty points (sign is ignored; recording always subtracts).
        #[arg(long)]
        points: i64,
    },

    /// A goal accumulating units toward a target.
    Progress {
        name: String,
        description: String,

        /// Points per unit (e.g. points per km).
        #[arg(long)]
        points: i64,

        /// Units needed to complete.
        #[arg(long)]
        target_units: f64,
    },
}

impl AddGoal {
    fn into_goal(self) -> Goal {
        match self {
            Self::Simple { name, description, points } => Goal::simple(name, description, points),
            Self::Eternal { name, description, points } => Goal::eternal(name, description, points),
            Self::Checklist { name, description, points, target, bonus } => {
                Goal::checklist(name, description, points, target, bonus)
            }
            Self::Negative { name, description, points } => {
                Goal::negative(name, description, points)
            }
            Self::Progress { name, description, points, target_units } => {
                Goal::progress(name, description, points, target_units)
            }
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let path = config::resolve_save_path(cli.file)?;
    let storage = Storage::new(path);

    match cli.command {
        Command::Add { goal } => cmd_add(&storage, goal.into_goal()),
        Command::List => cmd_list(&storage),
        Command::Record { number, units } => cmd_record(&storage, number, units),
        Command::Status => cmd_status(&storage),
        Command::Import { path } => cmd_import(&storage, path),
        Command::Export { path } => cmd_export(&storage, &path),
    }
}

/// Load the ledger from the save file, or start fresh when none exists yet.
fn load_or_new(storage: &Storage) -> Result<Ledger, String> {
    let mut ledger = Ledger::new();
    if storage.exists() {
        storage
            .load(&mut ledger)
            .map_err(|e| format!("failed to load {}: {e}", storage.path().display()))?;
    }
    Ok(ledger)
}

fn save(storage: &Storage, ledger: &Ledger) -> Result<(), String> {
    storage
        .save(ledger)
        .map_err(|e| format!("failed to save {}: {e}", storage.path().display()))
}

fn cmd_add(storage: &Storage, goal: Goal) -> Result<(), String> {
    let mut ledger = load_or_new(storage)?;
    ledger.add_goal(goal);
    save(storage, &ledger)?;

    // The new goal is always last; show it with its position.
    let position = ledger.goals().len();
    println!("{position}. {}", ledger.goals()[position - 1].details());
    Ok(())
}

fn cmd_list(storage: &Storage) -> Result<(), String> {
    let ledger = load_or_new(storage)?;
    for line in ledger.list_goals() {
        println!("{line}");
    }
    Ok(())
}

fn cmd_record(storage: &Storage, number: usize, units: Option<f64>) -> Result<(), String> {
    let mut ledger = load_or_new(storage)?;

    // Positions are 1-based on the command line, 0-based in the ledger.
    let index = number
        .checked_sub(1)
        .ok_or_else(|| "goal positions start at 1".to_string())?;
    // Report the position the user typed, not the internal index.
    let outcome = ledger
        .record_event(index, units)
        .map_err(|_| format!("no goal at position {number}"))?;
    save(storage, &ledger)?;

    println!(
        "You received {} points. Total score: {}",
        outcome.awarded, outcome.total
    );
    Ok(())
}

fn cmd_status(storage: &Storage) -> Result<(), String> {
    let ledger = load_or_new(storage)?;
    println!(
        "Score: {} pts | Level: {} | Title: {}",
        ledger.score(),
        ledger.level(),
        ledger.title()
    );
    Ok(())
}

fn cmd_import(storage: &Storage, path: PathBuf) -> Result<(), String> {
    // A missing or unreadable source fails before the save file is touched.
    let mut ledger = Ledger::new();
    let summary = Storage::new(path)
        .load(&mut ledger)
        .map_err(|e| e.to_string())?;
    save(storage, &ledger)?;

    println!("Loaded {} goals. Score: {}", summary.goals_loaded, summary.score);
    Ok(())
}

fn cmd_export(storage: &Storage, path: &Path) -> Result<(), String> {
    let ledger = load_or_new(storage)?;
    Storage::new(path)
        .save(&ledger)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))?;

    println!("Saved to {}", path.display());
    Ok(())
}
