use std::path::Path;

use crate::cli::{Cli, ImportArgs};
use crate::output::print_warning;
use crate::state::SaveOutcome;
use crate::store::Workspace;
use crate::transfer::{HolePack, ImportOutcome, import_pack};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GeomechGuardError, Result};

use super::context::report_error;

#[must_use]
pub fn run_import(args: &ImportArgs, cli: &Cli) -> i32 {
    match run_import_impl(args) {
        Ok(outcome) => {
            if !cli.quiet {
                if !outcome.created_hole {
                    print_warning(&format!(
                        "Geomech data of drill hole \"{}\" was overwritten",
                        outcome.hole_name
                    ));
                }
                println!("{outcome}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Import a pack file and save the workspace.
///
/// # Errors
/// Returns an error if either file cannot be read, the pack conflicts with the
/// workspace, or the workspace cannot be saved.
pub fn run_import_impl(args: &ImportArgs) -> Result<ImportOutcome> {
    let content =
        std::fs::read_to_string(&args.pack).map_err(|source| GeomechGuardError::FileRead {
            path: args.pack.clone(),
            source,
        })?;
    let pack = HolePack::parse(&content)?;

    let mut ws = open_or_create(&args.workspace)?;
    let outcome = import_pack(&mut ws, pack)?;

    match ws.save(&args.workspace)? {
        SaveOutcome::Saved => Ok(outcome),
        SaveOutcome::Skipped => Err(GeomechGuardError::Config(format!(
            "Workspace {} is locked by another process; import was not saved",
            args.workspace.display()
        ))),
    }
}

/// Load the workspace, or start an empty one if the file does not exist yet.
pub(crate) fn open_or_create(path: &Path) -> Result<Workspace> {
    if path.exists() {
        Workspace::load(path)
    } else {
        tracing::info!(path = %path.display(), "creating new workspace");
        Ok(Workspace::new())
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
