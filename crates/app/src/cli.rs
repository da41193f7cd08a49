use std::path::PathBuf;

use clap::{Parser, Subcommand};
use study_core::Locale;
use study_core::model::DateKey;

/// Study dashboard: a day-by-day plan with completion tracking
#[derive(Debug, Parser)]
#[command(name = "study-dashboard", version)]
#[command(about = "Day-by-day study plan with progress tracking", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "DASHBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database URL or path (overrides config)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Display language, `fr` or `en` (overrides config)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open the desktop dashboard (default)
    Ui,
    /// Print every planned day with its progress
    Status,
    /// Mark one task of one day as completed
    Complete {
        /// Day of the task, as YYYY-MM-DD
        #[arg(long)]
        date: DateKey,

        /// Zero-based position of the task within the day
        #[arg(long)]
        task: usize,
    },
}
