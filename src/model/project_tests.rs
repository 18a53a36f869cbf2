use super::*;

#[test]
fn new_us_project_uses_us_margins() {
    let project = Project::new("Copper Hill", false);
    assert_eq!(project.interval_margin_ratio, Some(1.2));
    assert_eq!(project.interval_margin_constant, Some(0.8));
}

#[test]
fn new_metric_project_uses_metric_margins() {
    let project = Project::new("Cerro Azul", true);
    assert_eq!(project.interval_margin_ratio, Some(1.2));
    assert_eq!(project.interval_margin_constant, Some(0.2));
}

#[test]
fn switching_units_swaps_default_margins() {
    let mut project = Project::new("Copper Hill", false);
    project.set_metric_units(true);
    assert!(project.is_metric_units);
    assert_eq!(project.interval_margin_constant, Some(0.2));

    project.set_metric_units(false);
    assert_eq!(project.interval_margin_constant, Some(0.8));
}

#[test]
fn switching_units_keeps_custom_margins() {
    let mut project = Project::new("Copper Hill", false);
    project.interval_margin_constant = Some(0.5);
    project.set_metric_units(true);
    assert!(project.is_metric_units);
    assert_eq!(project.interval_margin_ratio, Some(1.2));
    assert_eq!(project.interval_margin_constant, Some(0.5));
}

#[test]
fn presence_requires_mine_property_name() {
    let err = Project::new("   ", false).validate_presence().unwrap_err();
    assert!(matches!(
        err,
        GeomechGuardError::Presence {
            field: "minePropertyName",
            ..
        }
    ));
    assert!(Project::new("Copper Hill", false).validate_presence().is_ok());
}

#[test]
fn context_carries_var_lengths_and_margins() {
    let project = Project::new("Copper Hill", true).with_var_lengths(Some(0.5), None, Some(2.0));
    let ctx = project.context();
    assert!(ctx.is_metric_units);
    assert_eq!(ctx.var_lengths, [Some(0.5), None, Some(2.0)]);
    assert_eq!(ctx.interval_margin_constant, Some(0.2));
}

#[test]
fn column_header_suffixes_var_lengths() {
    let project = Project::new("Copper Hill", false).with_var_lengths(Some(0.5), None, None);
    assert_eq!(project.column_header("varLen1"), "varLen1_0.5");
    assert_eq!(project.column_header("varLen2"), "varLen2_");
    assert_eq!(project.column_header("rqdLen"), "rqdLen");
}

#[test]
fn deserializes_exported_project() {
    let project: Project = serde_json::from_str(
        r#"{
            "id": 1,
            "minePropertyName": "Copper Hill",
            "isMetricUnits": false,
            "varLen1": "0.5",
            "varLen2": "",
            "intervalMarginRatio": 1.2,
            "intervalMarginConstant": 0.8,
            "gmListTemplate": ["intervalFrom", "intervalTo", "recoveryLen"]
        }"#,
    )
    .unwrap();
    assert_eq!(project.id.as_deref(), Some("1"));
    assert_eq!(project.var_len1, Some(0.5));
    assert_eq!(project.var_len2, None);
    assert_eq!(project.gm_list_template.as_ref().map(Vec::len), Some(3));
}
