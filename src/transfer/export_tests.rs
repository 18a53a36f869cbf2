use super::*;
use crate::model::Project;

fn workspace_with_hole() -> (Workspace, String) {
    let mut ws = Workspace::new();
    let mut project = Project::new("Red Lake", true).with_var_lengths(Some(0.5), None, None);
    project.gm_list_template = Some(vec![
        "comments".to_string(),
        "varLen1".to_string(),
        "intervalFrom".to_string(),
        "bogus".to_string(),
    ]);
    let project_id = ws.create_project(project).unwrap();
    let hole_id = ws
        .create_drill_hole(&project_id, DrillHole::new("North Pit", "DH 01/a"))
        .unwrap();
    ws.add_interval(
        &hole_id,
        GeomechInterval {
            interval_from: Some(0.0),
            interval_to: Some(1.5),
            var_len1: Some(1.2),
            comments: Some("sheared, \"wet\"".to_string()),
            ..GeomechInterval::default()
        },
    )
    .unwrap();
    ws.add_interval(&hole_id, GeomechInterval::new()).unwrap();
    (ws, hole_id)
}

#[test]
fn csv_uses_canonical_template_order_and_var_length_headers() {
    let (ws, hole_id) = workspace_with_hole();
    let csv = export_csv(&ws, &hole_id).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("intervalFrom,varLen1_0.5,comments"));
    assert_eq!(lines.next(), Some("0,1.2,\"sheared, \"\"wet\"\"\""));
    assert_eq!(lines.next(), None);
}

#[test]
fn csv_without_template_exports_public_fields() {
    let (mut ws, hole_id) = workspace_with_hole();
    let project_id = ws.project_for_hole(&hole_id).unwrap().id.clone().unwrap();
    let mut project = ws.project(&project_id).unwrap().clone();
    project.gm_list_template = None;
    crate::store::RecordStore::update(&mut ws.projects, &project_id, project).unwrap();

    let csv = export_csv(&ws, &hole_id).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("id,intervalFrom,intervalTo,recoveryLen"));
    assert!(!header.contains("drillHoleID"));
}

#[test]
fn json_pack_nests_project_and_data() {
    let (ws, hole_id) = workspace_with_hole();
    let json = export_json(&ws, &hole_id).unwrap();
    assert!(json.contains("\n    \"project\": {"));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "DH 01/a");
    assert_eq!(value["project"]["minePropertyName"], "Red Lake");
    assert_eq!(value["geomechData"].as_array().map(Vec::len), Some(1));
}

#[test]
fn file_name_replaces_non_word_characters() {
    let hole = DrillHole::new("North Pit", "DH 01/a");
    let date = NaiveDate::from_ymd_opt(2024, 3, 9);
    assert_eq!(export_file_name(&hole, "csv", date), "DH_01_a-2024-03-09.csv");
    assert_eq!(export_file_name(&hole, "json", None), "DH_01_a.json");
}

#[test]
fn export_of_unknown_hole_fails() {
    let ws = Workspace::new();
    assert!(export_csv(&ws, "missing").is_err());
}
