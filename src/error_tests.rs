use std::path::PathBuf;

use super::*;

fn json_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
}

#[test]
fn error_display_config() {
    let err = GeomechGuardError::Config("invalid policy".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid policy");
}

#[test]
fn error_display_missing_context() {
    let err = GeomechGuardError::MissingContext {
        record: "gm-7".to_string(),
    };
    assert_eq!(err.to_string(), "No project context for geomech record gm-7");
}

#[test]
fn error_display_file_read() {
    let err = GeomechGuardError::FileRead {
        path: PathBuf::from("hole.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("hole.json"));
}

#[test]
fn error_display_not_found() {
    let err = GeomechGuardError::NotFound {
        kind: "Drill hole",
        id: "DH-01".to_string(),
    };
    assert_eq!(err.to_string(), "Drill hole not found: DH-01");
}

#[test]
fn import_error_is_transparent() {
    let err = GeomechGuardError::from(ImportError::HoleMismatch {
        name: "DH-01".to_string(),
        fields: vec!["mineArea".to_string()],
    });
    assert_eq!(
        err.to_string(),
        "Your drill hole DH-01 differs from the imported file. Import can't continue."
    );
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        GeomechGuardError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(GeomechGuardError::UnknownRule(99).error_type(), "Lookup");
    assert_eq!(
        GeomechGuardError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
    assert_eq!(GeomechGuardError::Json(json_error()).error_type(), "JSON");
    assert_eq!(
        GeomechGuardError::from(ImportError::InvalidFile {
            source: json_error()
        })
        .error_type(),
        "Import"
    );
}

#[test]
fn project_mismatch_lists_template_last() {
    let err = ImportError::ProjectMismatch {
        name: "Copper Hill".to_string(),
        fields: vec!["isMetricUnits".to_string(), "varLen1".to_string()],
        template_differs: true,
    };
    assert_eq!(
        err.differing_fields(),
        vec!["isMetricUnits", "varLen1", "geomechTemplate"]
    );
}

#[test]
fn detail_for_mismatch_names_fields() {
    let err = GeomechGuardError::from(ImportError::ProjectMismatch {
        name: "Copper Hill".to_string(),
        fields: vec!["varLen2".to_string()],
        template_differs: false,
    });
    assert_eq!(err.detail().unwrap(), "Differing fields: varLen2");
}

#[test]
fn detail_is_none_for_plain_config_error() {
    assert!(GeomechGuardError::Config("x".to_string()).detail().is_none());
}

#[test]
fn suggestion_file_read_not_found() {
    let err = GeomechGuardError::FileRead {
        path: PathBuf::from("missing.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.suggestion().unwrap().contains("file path exists"));
}

#[test]
fn suggestion_file_read_other_error_has_none() {
    let err = GeomechGuardError::FileRead {
        path: PathBuf::from("odd.json"),
        source: std::io::Error::other("unknown error"),
    };
    assert!(err.suggestion().is_none());
}
