//! Record persistence: per-entity stores and the workspace that holds them.

mod memory;
mod record;
mod workspace;

pub use memory::{MemoryStore, RecordStore};
pub use record::Record;
pub use workspace::Workspace;
