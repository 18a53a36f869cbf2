use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::{ColorMode, OutputFormat};
use crate::state::{CONFIG_FILENAME, WORKSPACE_FILENAME};
use crate::transfer::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "geomech-guard")]
#[command(author, version, about = "Validate geomechanical drill-core logging records")]
#[command(long_about = "Checks geomech interval records of drill holes against the \
    consistency rules of core logging, and moves holes between workspaces as \
    CSV or JSON.\n\n\
    Exit codes:\n  \
    0 - All records passed\n  \
    1 - Rule failures found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output (overrides config)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate geomech records of exported packs or of a workspace hole
    Check(CheckArgs),

    /// Import an exported drill hole pack into a workspace
    Import(ImportArgs),

    /// Export a drill hole from a workspace as CSV or JSON
    Export(ExportArgs),

    /// List the rule catalog, or explain one rule
    Rules(RulesArgs),

    /// Print the standard core-size table
    CoreSizes(CoreSizesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Exported drill hole packs (JSON) to validate
    #[arg(required_unless_present = "workspace", conflicts_with = "workspace")]
    pub packs: Vec<PathBuf>,

    /// Workspace file to validate a hole from
    #[arg(long, requires = "hole")]
    pub workspace: Option<PathBuf>,

    /// Drill hole id or name inside the workspace
    #[arg(long)]
    pub hole: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail records that carry no project context instead of warning
    #[arg(long)]
    pub strict_context: bool,

    /// Validate blank rows too
    #[arg(long)]
    pub include_blank: bool,
}

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Exported drill hole pack (JSON)
    pub pack: PathBuf,

    /// Workspace file to import into (created if missing)
    #[arg(long, default_value = WORKSPACE_FILENAME)]
    pub workspace: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Workspace file to export from
    #[arg(long, default_value = WORKSPACE_FILENAME)]
    pub workspace: PathBuf,

    /// Drill hole id or name
    #[arg(long)]
    pub hole: String,

    /// Export format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file; defaults to a name derived from the hole
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Rule code to explain (1-53)
    pub code: Option<u8>,
}

#[derive(Parser, Debug)]
pub struct CoreSizesArgs {
    /// Show metric sizes (mm, m) instead of US (in, ft)
    #[arg(long)]
    pub metric: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
