//! Data-consistency rules for geomech records and the engine that runs them.

mod batch;
mod catalog;
mod engine;
mod numeric;
mod result;
mod rule;

pub use batch::{BatchEntry, BatchReport, RecordRef};
pub use catalog::{RULES, find};
pub use engine::{ContextPolicy, RuleOutcome, Validator};
pub use result::{RuleFailure, RuleId, Severity};
pub use rule::{Predicate, Rule, RuleContext, RuleMessage};
