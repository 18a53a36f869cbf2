use clap::Parser;
use tracing_subscriber::EnvFilter;

use geomech_guard::cli::{Cli, Commands};
use geomech_guard::commands::{
    run_check, run_core_sizes, run_export, run_import, run_init, run_rules,
};

/// Default log level when `RUST_LOG` is unset.
const fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cli.verbose, cli.quiet)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Import(args) => run_import(args, &cli),
        Commands::Export(args) => run_export(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::CoreSizes(args) => run_core_sizes(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
