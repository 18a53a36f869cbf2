use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while importing an exported drill-hole file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import failed. The file selected does not appear to be a valid drill hole export file.")]
    InvalidFile {
        #[source]
        source: serde_json::Error,
    },

    #[error("Your project {name} differs from the imported project. Import can't continue.")]
    ProjectMismatch {
        name: String,
        fields: Vec<String>,
        template_differs: bool,
    },

    #[error("Your drill hole {name} differs from the imported file. Import can't continue.")]
    HoleMismatch { name: String, fields: Vec<String> },
}

impl ImportError {
    /// Field names that block the import, in a stable order.
    #[must_use]
    pub fn differing_fields(&self) -> Vec<String> {
        match self {
            Self::InvalidFile { .. } => Vec::new(),
            Self::ProjectMismatch {
                fields,
                template_differs,
                ..
            } => {
                let mut out = fields.clone();
                if *template_differs {
                    out.push("geomechTemplate".to_string());
                }
                out
            }
            Self::HoleMismatch { fields, .. } => fields.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum GeomechGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No project context for geomech record {record}")]
    MissingContext { record: String },

    #[error("Unknown geomech field: {0}")]
    UnknownField(String),

    #[error("Unknown rule code: {0}")]
    UnknownRule(u8),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{entity} requires a value for {field}")]
    Presence {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Import(#[from] ImportError),
}

impl GeomechGuardError {
    /// Short category name used in error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::MissingContext { .. } => "Context",
            Self::UnknownField(_) | Self::UnknownRule(_) => "Lookup",
            Self::NotFound { .. } => "NotFound",
            Self::Presence { .. } => "Presence",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::Import(_) => "Import",
        }
    }

    /// Extra detail drawn from the underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::Import(ImportError::InvalidFile { source }) => Some(source.to_string()),
            Self::Import(err) => {
                let fields = err.differing_fields();
                (!fields.is_empty()).then(|| format!("Differing fields: {}", fields.join(", ")))
            }
            _ => None,
        }
    }

    /// A hint for fixing the error, where one is known.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the .geomech-guard.toml file format")
            }
            Self::MissingContext { .. } => {
                Some("Assign the record to a drill hole whose project exists")
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            Self::Import(ImportError::ProjectMismatch { .. } | ImportError::HoleMismatch { .. }) => {
                Some("Edit the local project or drill hole to match the file, or rename it")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeomechGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
