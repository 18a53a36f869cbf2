mod check;
mod context;
mod core_sizes;
mod export;
mod import;
mod init;
mod rules;

pub use check::{CheckInput, check_file, check_workspace_hole, run_check};
pub use core_sizes::{format_core_sizes, run_core_sizes};
pub use export::{run_export, run_export_impl};
pub use import::{run_import, run_import_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{run_rules, run_rules_impl};
