pub mod builtin;
pub mod calendar_file;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "semester-calendar")]
#[command(about = "Load and validate a semester calendar")]
pub struct CliConfig {
    /// Path to the calendar file (TOML, or JSON with a .json extension)
    #[arg(short, long, default_value = "semester.toml", conflicts_with = "builtin")]
    pub config: String,

    /// Use the bundled Spring 2022 calendar instead of a file
    #[arg(long)]
    pub builtin: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Treat advisories (vacations outside the semester) as failures
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
