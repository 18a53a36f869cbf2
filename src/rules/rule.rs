use std::fmt;

use crate::context::ValidationContext;
use crate::model::GeomechInterval;

use super::result::{RuleId, Severity};

/// Returns `true` when the record is consistent with the rule.
pub type Predicate = fn(&GeomechInterval, &RuleContext<'_>) -> bool;

/// Context resolved once per record and shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    context: &'a ValidationContext,
    core_size_cutoff: Option<f64>,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn new(context: &'a ValidationContext, record: &GeomechInterval) -> Self {
        Self {
            context,
            core_size_cutoff: context.core_size_cutoff(record.core_size.as_deref()),
        }
    }

    #[must_use]
    pub const fn context(&self) -> &'a ValidationContext {
        self.context
    }

    #[must_use]
    pub const fn core_size_cutoff(&self) -> Option<f64> {
        self.core_size_cutoff
    }

    /// Configured threshold `k`. Only read by rules that require it.
    #[must_use]
    pub fn vl(&self, k: usize) -> f64 {
        self.context.var_length(k).unwrap_or(f64::NAN)
    }

    /// Resolved RQD cutoff. Only read by rules that require it.
    #[must_use]
    pub fn cutoff(&self) -> f64 {
        self.core_size_cutoff.unwrap_or(f64::NAN)
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.context.interval_margin_ratio()
    }

    #[must_use]
    pub fn constant(&self) -> f64 {
        self.context.interval_margin_constant()
    }

    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.context.tolerance()
    }
}

#[derive(Clone, Copy)]
pub enum RuleMessage {
    Static(&'static str),
    /// Message that quotes configured parameters.
    Dynamic(fn(&RuleContext<'_>) -> String),
}

/// A declarative rule descriptor.
#[derive(Clone, Copy)]
pub struct Rule {
    id: RuleId,
    severity: Severity,
    message: RuleMessage,
    requires_vls: &'static [usize],
    requires_core_size: bool,
    predicate: Predicate,
}

impl Rule {
    #[must_use]
    pub const fn structural(message: &'static str, predicate: Predicate) -> Self {
        Self {
            id: RuleId::IntervalOrder,
            severity: Severity::Blocking,
            message: RuleMessage::Static(message),
            requires_vls: &[],
            requires_core_size: false,
            predicate,
        }
    }

    #[must_use]
    pub const fn coded(code: u8, message: &'static str, predicate: Predicate) -> Self {
        Self {
            id: RuleId::Code(code),
            severity: Severity::Error,
            message: RuleMessage::Static(message),
            requires_vls: &[],
            requires_core_size: false,
            predicate,
        }
    }

    #[must_use]
    pub const fn coded_dynamic(
        code: u8,
        message: fn(&RuleContext<'_>) -> String,
        predicate: Predicate,
    ) -> Self {
        Self {
            id: RuleId::Code(code),
            severity: Severity::Error,
            message: RuleMessage::Dynamic(message),
            requires_vls: &[],
            requires_core_size: false,
            predicate,
        }
    }

    /// Only applies when every listed variable length (1-based) is configured.
    #[must_use]
    pub const fn requires_vls(mut self, vls: &'static [usize]) -> Self {
        self.requires_vls = vls;
        self
    }

    /// Only applies when the record's core size resolves to a cutoff.
    #[must_use]
    pub const fn requires_core_size(mut self) -> Self {
        self.requires_core_size = true;
        self
    }

    #[must_use]
    pub const fn id(&self) -> RuleId {
        self.id
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub const fn required_vls(&self) -> &'static [usize] {
        self.requires_vls
    }

    #[must_use]
    pub const fn needs_core_size(&self) -> bool {
        self.requires_core_size
    }

    #[must_use]
    pub fn message(&self, rc: &RuleContext<'_>) -> String {
        match self.message {
            RuleMessage::Static(text) => text.to_string(),
            RuleMessage::Dynamic(render) => render(rc),
        }
    }

    #[must_use]
    pub fn is_applicable(&self, rc: &RuleContext<'_>) -> bool {
        self.requires_vls
            .iter()
            .all(|k| rc.context().has_var_length(*k))
            && (!self.requires_core_size || rc.core_size_cutoff().is_some())
    }

    #[must_use]
    pub fn passes(&self, record: &GeomechInterval, rc: &RuleContext<'_>) -> bool {
        (self.predicate)(record, rc)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("requires_vls", &self.requires_vls)
            .field("requires_core_size", &self.requires_core_size)
            .finish_non_exhaustive()
    }
}
