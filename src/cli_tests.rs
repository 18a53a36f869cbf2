use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn cli_check_with_packs() {
    let cli = Cli::parse_from(["geomech-guard", "check", "a.json", "b.json"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.packs,
                vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
            );
            assert!(args.format.is_none());
            assert!(!args.strict_context);
            assert!(!args.include_blank);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_workspace_hole() {
    let cli = Cli::parse_from([
        "geomech-guard",
        "check",
        "--workspace",
        "ws.json",
        "--hole",
        "DH-01",
        "--format",
        "json",
        "--strict-context",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.packs.is_empty());
            assert_eq!(args.workspace, Some(PathBuf::from("ws.json")));
            assert_eq!(args.hole.as_deref(), Some("DH-01"));
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert!(args.strict_context);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_requires_input() {
    assert!(Cli::try_parse_from(["geomech-guard", "check"]).is_err());
}

#[test]
fn cli_check_workspace_requires_hole() {
    assert!(Cli::try_parse_from(["geomech-guard", "check", "--workspace", "ws.json"]).is_err());
}

#[test]
fn cli_import_defaults_workspace() {
    let cli = Cli::parse_from(["geomech-guard", "import", "dh.json"]);
    match cli.command {
        Commands::Import(args) => {
            assert_eq!(args.pack, PathBuf::from("dh.json"));
            assert_eq!(args.workspace, PathBuf::from("geomech.json"));
        }
        _ => panic!("Expected Import command"),
    }
}

#[test]
fn cli_export_format() {
    let cli = Cli::parse_from([
        "geomech-guard",
        "export",
        "--hole",
        "DH-01",
        "--format",
        "csv",
        "--stdout",
    ]);
    match cli.command {
        Commands::Export(args) => {
            assert_eq!(args.hole, "DH-01");
            assert_eq!(args.format, Some(ExportFormat::Csv));
            assert!(args.stdout);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn cli_export_stdout_conflicts_with_output() {
    let result = Cli::try_parse_from([
        "geomech-guard",
        "export",
        "--hole",
        "DH-01",
        "--stdout",
        "--output",
        "x.csv",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_rules_with_code() {
    let cli = Cli::parse_from(["geomech-guard", "rules", "39"]);
    match cli.command {
        Commands::Rules(args) => assert_eq!(args.code, Some(39)),
        _ => panic!("Expected Rules command"),
    }
}

#[test]
fn cli_core_sizes_metric() {
    let cli = Cli::parse_from(["geomech-guard", "core-sizes", "--metric"]);
    match cli.command {
        Commands::CoreSizes(args) => assert!(args.metric),
        _ => panic!("Expected CoreSizes command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["geomech-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".geomech-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from([
        "geomech-guard",
        "rules",
        "-vv",
        "--color",
        "never",
        "--no-config",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, Some(ColorMode::Never));
    assert!(cli.no_config);
    assert!(!cli.quiet);
}

#[test]
fn cli_no_config_conflicts_with_config() {
    let result = Cli::try_parse_from([
        "geomech-guard",
        "--no-config",
        "--config",
        "x.toml",
        "rules",
    ]);
    assert!(result.is_err());
}
