use super::*;

#[test]
fn defaults_are_lenient_and_skip_blank_rows() {
    let config = Config::default();
    assert_eq!(config.validation.context_policy, ContextPolicy::Lenient);
    assert!(config.validation.skip_blank);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.export.format, ExportFormat::Csv);
    assert!(config.export.date_suffix);
}

#[test]
fn empty_document_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn deserialize_all_sections() {
    let toml_str = r#"
        version = "1"

        [validation]
        context_policy = "strict"
        skip_blank = false

        [output]
        format = "json"
        color = "never"

        [export]
        format = "json"
        date_suffix = false
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.validation.context_policy, ContextPolicy::Strict);
    assert!(!config.validation.skip_blank);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.export.format, ExportFormat::Json);
    assert!(!config.export.date_suffix);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[validation]\ncontext_policy = \"strict\"\n").unwrap();
    assert!(config.validation.skip_blank);
}

#[test]
fn unknown_policy_is_rejected() {
    let result: std::result::Result<Config, _> =
        toml::from_str("[validation]\ncontext_policy = \"loose\"\n");
    assert!(result.is_err());
}

#[test]
fn serialized_default_round_trips() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert!(text.contains("[validation]"));
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back, Config::default());
}
