use std::path::Path;

use serde_json::Value;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::error::ImportError;
use crate::model::GeomechInterval;
use crate::output::{CheckedHole, formatter_for};
use crate::rules::{ContextPolicy, Validator};
use crate::store::Workspace;
use crate::transfer::HolePack;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, GeomechGuardError, Result};

use super::context::{color_mode, load_config, report_error, write_output};

/// What a file handed to `check` can hold.
#[derive(Debug)]
pub enum CheckInput {
    /// An exported hole: records are checked against the project it carries.
    Pack(HolePack),
    /// Bare geomech records: each is checked against the context it carries.
    Records(Vec<GeomechInterval>),
}

impl CheckInput {
    /// # Errors
    /// Returns `ImportError::InvalidFile` if `json` is neither a pack nor an array of records.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| ImportError::InvalidFile { source })?;
        if value.is_array() {
            let records = serde_json::from_value(value)
                .map_err(|source| ImportError::InvalidFile { source })?;
            return Ok(Self::Records(records));
        }
        let pack = serde_json::from_value(value).map_err(|source| ImportError::InvalidFile { source })?;
        Ok(Self::Pack(pack))
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    let validator = build_validator(args, &config);

    let holes = match (&args.workspace, &args.hole) {
        (Some(workspace), Some(hole)) => vec![check_workspace_hole(workspace, hole, &validator)?],
        _ => args
            .packs
            .iter()
            .map(|path| check_file(path, &validator))
            .collect::<Result<Vec<_>>>()?,
    };

    let format = args.format.unwrap_or(config.output.format);
    let formatter = formatter_for(format, color_mode(cli.color, &config), cli.verbose);
    let output = formatter.format(&holes)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if holes.iter().any(|h| h.report.has_failures()) {
        Ok(EXIT_VALIDATION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Command-line flags override the config file.
pub(crate) fn build_validator(args: &CheckArgs, config: &Config) -> Validator {
    let policy = if args.strict_context {
        ContextPolicy::Strict
    } else {
        config.validation.context_policy
    };
    Validator::new()
        .with_policy(policy)
        .skip_blank(config.validation.skip_blank && !args.include_blank)
}

/// Validate every record of a pack or record file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if a record lacks
/// context under the strict policy.
pub fn check_file(path: &Path, validator: &Validator) -> Result<CheckedHole> {
    let content = std::fs::read_to_string(path).map_err(|source| GeomechGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    match CheckInput::parse(&content)? {
        CheckInput::Pack(pack) => {
            let report = validator.validate_batch(&pack.geomech_data, &pack.project.context());
            Ok(CheckedHole::new(
                format!("{} [{}]", pack.hole.name, path.display()),
                report,
            ))
        }
        CheckInput::Records(records) => {
            let report = validator.validate_batch_with_policy(&records)?;
            Ok(CheckedHole::new(path.display().to_string(), report))
        }
    }
}

/// Validate the working set of one hole of a workspace.
///
/// # Errors
/// Returns an error if the workspace cannot be loaded or the hole is unknown or ambiguous.
pub fn check_workspace_hole(path: &Path, key: &str, validator: &Validator) -> Result<CheckedHole> {
    let ws = Workspace::load(path)?;
    let hole = ws
        .resolve_hole(key)
        .ok_or_else(|| GeomechGuardError::NotFound {
            kind: "Drill hole",
            id: key.to_string(),
        })?;
    let hole_id = hole.id.clone().unwrap_or_default();
    let report = ws.validate_hole(&hole_id, validator)?;
    Ok(CheckedHole::new(hole.name.clone(), report))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
