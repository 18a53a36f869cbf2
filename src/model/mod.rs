//! Geomechanical logging entities: projects, drill holes and core intervals.

pub mod core_size;
mod drill_hole;
mod interval;
mod project;
mod value;

pub use core_size::{CoreSize, UnitSystem};
pub use drill_hole::DrillHole;
pub use interval::{
    BLANK_CHECK_IGNORED, FIELD_NAMES, GeomechInterval, PRIVATE_FIELDS, canonical_field_sort,
    public_fields,
};
pub use project::Project;
pub use value::{FieldValue, lenient_number, lenient_text};
