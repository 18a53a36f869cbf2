mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LoadResult};
pub use model::{CONFIG_VERSION, Config, ExportConfig, OutputConfig, ValidationConfig};
pub use validation::validate_config_semantics;
