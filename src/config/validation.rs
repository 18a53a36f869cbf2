//! Checks a parsed configuration for values serde cannot reject on its own.

use crate::config::{CONFIG_VERSION, Config};
use crate::{GeomechGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the config declares a version this build does not support.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if let Some(version) = config.version.as_deref()
        && version != CONFIG_VERSION
    {
        return Err(GeomechGuardError::Config(format!(
            "Unsupported config version '{version}'. Only version '{CONFIG_VERSION}' is supported."
        )));
    }
    Ok(())
}
