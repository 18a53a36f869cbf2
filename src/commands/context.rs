use std::fs;
use std::path::Path;

use crate::GeomechGuardError;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::{ColorMode, print_error_full};

/// Load configuration unless `--no-config` was given.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// `--color` wins over the config file.
pub(crate) fn color_mode(cli_choice: Option<ColorMode>, config: &Config) -> ColorMode {
    cli_choice.unwrap_or(config.output.color)
}

/// Write output to a file or stdout.
///
/// `quiet` only suppresses stdout; file writes always happen.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Print an error with its category, cause and fix hint on stderr.
pub(crate) fn report_error(err: &GeomechGuardError) {
    let detail = err.detail();
    print_error_full(
        err.error_type(),
        &err.to_string(),
        detail.as_deref(),
        err.suggestion(),
    );
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
