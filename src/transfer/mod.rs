//! Moving drill holes in and out of a workspace.

mod export;
mod import;
mod pack;

pub use export::{ExportFormat, build_pack, export_csv, export_file_name, export_json};
pub use import::{ImportOutcome, import_pack};
pub use pack::HolePack;
