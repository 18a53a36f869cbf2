use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GeomechGuardError, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Write a default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(GeomechGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# geomech-guard configuration file
version = "1"

[validation]
# Records with no project context: "lenient" warns and validates with no
# variable lengths and default margins, "strict" stops with an error.
context_policy = "lenient"

# Leave rows with nothing but interval bounds and core size out of checks
skip_blank = true

[output]
# Report format for `check`: "text" or "json"
format = "text"

# "auto", "always" or "never"
color = "auto"

[export]
# Default format for `export`: "csv" or "json"
format = "csv"

# Append -YYYY-MM-DD to generated export file names
date_suffix = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
