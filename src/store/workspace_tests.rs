use tempfile::TempDir;

use super::*;
use crate::rules::Validator;

fn seeded() -> (Workspace, String, String) {
    let mut ws = Workspace::new();
    let project = Project::new("Red Lake", true).with_var_lengths(Some(0.5), None, None);
    let project_id = ws.create_project(project).unwrap();
    let hole_id = ws
        .create_drill_hole(&project_id, DrillHole::new("North Pit", "DH-01"))
        .unwrap();
    (ws, project_id, hole_id)
}

fn logged(from: f64, to: f64) -> GeomechInterval {
    GeomechInterval {
        interval_from: Some(from),
        interval_to: Some(to),
        recovery_len: Some(to - from),
        core_size: Some("HQ".to_string()),
        ..GeomechInterval::default()
    }
}

#[test]
fn create_project_requires_name() {
    let mut ws = Workspace::new();
    let err = ws.create_project(Project::new("  ", false)).unwrap_err();
    assert!(matches!(err, GeomechGuardError::Presence { field: "minePropertyName", .. }));
}

#[test]
fn create_drill_hole_requires_existing_project() {
    let mut ws = Workspace::new();
    let err = ws
        .create_drill_hole("missing", DrillHole::new("North Pit", "DH-01"))
        .unwrap_err();
    assert!(matches!(err, GeomechGuardError::NotFound { kind: "Project", .. }));
}

#[test]
fn working_set_carries_project_context() {
    let (mut ws, _, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();

    let set = ws.working_set(&hole_id).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].drill_hole_id.as_deref(), Some(hole_id.as_str()));
    assert_eq!(set[0].is_metric_units, Some(true));
    assert_eq!(set[0].var_lengths, Some([Some(0.5), None, None]));
}

#[test]
fn added_row_inherits_previous_core_size_and_stays_clean() {
    let (mut ws, _, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();
    ws.save_without_validation();

    let id = ws.add_interval(&hole_id, GeomechInterval::new()).unwrap();
    let row = ws.intervals.read(&id).unwrap();
    assert_eq!(row.core_size.as_deref(), Some("HQ"));
    assert!(!ws.intervals.is_dirty(&id));
    assert!(!ws.has_unsaved_changes());
}

#[test]
fn grow_working_set_keeps_one_trailing_blank() {
    let (mut ws, _, hole_id) = seeded();
    assert!(ws.grow_working_set(&hole_id).unwrap().is_some());
    assert!(ws.grow_working_set(&hole_id).unwrap().is_none());
    assert_eq!(ws.working_set(&hole_id).unwrap().len(), 1);
}

#[test]
fn save_drops_blank_rows() {
    let (mut ws, _, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();
    let blank = ws.intervals.create(GeomechInterval {
        drill_hole_id: Some(hole_id.clone()),
        core_size: Some("NQ".to_string()),
        ..GeomechInterval::default()
    });

    let persisted = ws.save_without_validation();

    assert_eq!(persisted, 1);
    assert!(ws.intervals.read(&blank).is_none());
    assert!(!ws.has_unsaved_changes());
}

#[test]
fn discard_changes_restores_last_save() {
    let (mut ws, _, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();
    ws.save_without_validation();

    ws.add_interval(&hole_id, logged(1.5, 3.0)).unwrap();
    assert!(ws.has_unsaved_changes());

    ws.discard_changes();
    assert!(!ws.has_unsaved_changes());
    assert_eq!(ws.working_set(&hole_id).unwrap().len(), 1);
}

#[test]
fn validate_hole_reports_one_based_rows() {
    let (mut ws, _, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();
    ws.add_interval(&hole_id, logged(3.0, 1.5)).unwrap();

    let report = ws.validate_hole(&hole_id, &Validator::new()).unwrap();
    assert!(report.failing_rows().contains(&2));
    assert!(report.blocking_count() >= 1);
}

#[test]
fn delete_drill_hole_cascades() {
    let (mut ws, _, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();
    ws.add_interval(&hole_id, logged(1.5, 3.0)).unwrap();

    assert_eq!(ws.delete_drill_hole(&hole_id).unwrap(), 2);
    assert!(ws.intervals.is_empty());
    assert!(ws.drill_hole(&hole_id).is_err());
}

#[test]
fn delete_project_cascades() {
    let (mut ws, project_id, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();

    ws.delete_project(&project_id).unwrap();

    assert!(ws.projects.is_empty());
    assert!(ws.drill_holes.is_empty());
    assert!(ws.intervals.is_empty());
}

#[test]
fn resolve_hole_by_id_or_unique_name() {
    let (mut ws, project_id, hole_id) = seeded();
    assert_eq!(ws.resolve_hole(&hole_id).map(|h| h.name.as_str()), Some("DH-01"));
    assert!(ws.resolve_hole("DH-01").is_some());

    ws.create_drill_hole(&project_id, DrillHole::new("South Pit", "DH-01"))
        .unwrap();
    assert!(ws.resolve_hole("DH-01").is_none());
}

#[test]
fn save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("geomech.json");
    let (mut ws, project_id, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();

    assert_eq!(ws.save(&path).unwrap(), SaveOutcome::Saved);

    let loaded = Workspace::load(&path).unwrap();
    assert!(!loaded.has_unsaved_changes());
    assert_eq!(
        loaded.project(&project_id).unwrap().mine_property_name,
        "Red Lake"
    );
    let set = loaded.working_set(&hole_id).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].recovery_len, Some(1.5));
}

#[test]
fn failed_save_keeps_pending_changes() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let (mut ws, _, hole_id) = seeded();
    ws.save_without_validation();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();
    let blank = ws.intervals.create(GeomechInterval {
        drill_hole_id: Some(hole_id.clone()),
        ..GeomechInterval::default()
    });

    assert!(ws.save(&blocker.join("geomech.json")).is_err());

    assert!(ws.has_unsaved_changes());
    assert!(ws.intervals.read(&blank).is_some());
    ws.discard_changes();
    assert!(ws.working_set(&hole_id).unwrap().is_empty());
}

#[test]
fn save_leaves_blank_rows_out_of_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("geomech.json");
    let (mut ws, _, hole_id) = seeded();
    ws.add_interval(&hole_id, logged(0.0, 1.5)).unwrap();
    let blank = ws.intervals.create(GeomechInterval {
        drill_hole_id: Some(hole_id.clone()),
        ..GeomechInterval::default()
    });

    assert_eq!(ws.save(&path).unwrap(), SaveOutcome::Saved);

    assert!(!ws.has_unsaved_changes());
    assert!(ws.intervals.read(&blank).is_none());
    let loaded = Workspace::load(&path).unwrap();
    assert_eq!(loaded.intervals.all().len(), 1);
}

#[test]
fn load_missing_file_is_file_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Workspace::load(&temp_dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, GeomechGuardError::FileRead { .. }));
}

#[test]
fn load_rejects_newer_version() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("geomech.json");
    std::fs::write(&path, r#"{"version": 99}"#).unwrap();
    assert!(matches!(
        Workspace::load(&path).unwrap_err(),
        GeomechGuardError::Config(_)
    ));
}
