use std::path::PathBuf;

use chrono::Local;

use crate::cli::{Cli, ExportArgs};
use crate::config::Config;
use crate::store::Workspace;
use crate::transfer::{ExportFormat, export_csv, export_file_name, export_json};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GeomechGuardError, Result};

use super::context::{load_config, report_error, write_output};

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    let result = load_config(cli.config.as_deref(), cli.no_config)
        .and_then(|loaded| run_export_impl(args, &loaded.config));
    match result {
        Ok(Some(path)) => {
            if !cli.quiet {
                println!("Exported {} to {}", args.hole, path.display());
            }
            EXIT_SUCCESS
        }
        Ok(None) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Export one hole. Returns the file written, or `None` when printed to stdout.
///
/// # Errors
/// Returns an error if the workspace cannot be loaded, the hole is unknown, or
/// the output cannot be written.
pub fn run_export_impl(args: &ExportArgs, config: &Config) -> Result<Option<PathBuf>> {
    let ws = Workspace::load(&args.workspace)?;
    let hole = ws
        .resolve_hole(&args.hole)
        .ok_or_else(|| GeomechGuardError::NotFound {
            kind: "Drill hole",
            id: args.hole.clone(),
        })?;
    let hole_id = hole.id.clone().unwrap_or_default();

    let format = args.format.unwrap_or(config.export.format);
    let content = match format {
        ExportFormat::Csv => export_csv(&ws, &hole_id)?,
        ExportFormat::Json => export_json(&ws, &hole_id)?,
    };

    if args.stdout {
        write_output(None, &content, false)?;
        return Ok(None);
    }

    let path = args.output.clone().unwrap_or_else(|| {
        let date = config.export.date_suffix.then(|| Local::now().date_naive());
        PathBuf::from(export_file_name(hole, format.extension(), date))
    });
    write_output(Some(&path), &content, true)?;
    Ok(Some(path))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
