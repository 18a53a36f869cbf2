use serde::{Deserialize, Serialize};

use crate::context::ValidationContext;
use crate::model::GeomechInterval;
use crate::{GeomechGuardError, Result};

use super::batch::{BatchEntry, BatchReport, RecordRef};
use super::catalog::{self, RULES};
use super::result::RuleFailure;
use super::rule::{Rule, RuleContext};

/// What to do when a record is validated without project context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextPolicy {
    /// Warn and fall back to the unconfigured context.
    #[default]
    Lenient,
    /// Refuse with `MissingContext`.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Passed,
    Failed(RuleFailure),
    /// The rule needs a variable length or core size that is not configured.
    Skipped,
}

impl RuleOutcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Runs the rule catalog against geomech records.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    rules: &'static [Rule],
    policy: ContextPolicy,
    skip_blank: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: &RULES,
            policy: ContextPolicy::Lenient,
            skip_blank: true,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: ContextPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Exempt blank records from batch validation.
    #[must_use]
    pub const fn skip_blank(mut self, skip: bool) -> Self {
        self.skip_blank = skip;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> ContextPolicy {
        self.policy
    }

    #[must_use]
    pub const fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Evaluate a single rule.
    #[must_use]
    pub fn evaluate(
        &self,
        rule: &Rule,
        record: &GeomechInterval,
        context: &ValidationContext,
    ) -> RuleOutcome {
        let rc = RuleContext::new(context, record);
        Self::evaluate_in(rule, record, &rc)
    }

    fn evaluate_in(rule: &Rule, record: &GeomechInterval, rc: &RuleContext<'_>) -> RuleOutcome {
        if !rule.is_applicable(rc) {
            tracing::trace!(rule = %rule.id(), "rule not applicable");
            return RuleOutcome::Skipped;
        }
        if rule.passes(record, rc) {
            RuleOutcome::Passed
        } else {
            RuleOutcome::Failed(RuleFailure {
                rule: rule.id(),
                severity: rule.severity(),
                message: rule.message(rc),
            })
        }
    }

    /// Evaluate one numbered rule by code.
    ///
    /// # Errors
    /// Returns `UnknownRule` if no rule carries `code`.
    pub fn check_rule(
        &self,
        code: u8,
        record: &GeomechInterval,
        context: &ValidationContext,
    ) -> Result<RuleOutcome> {
        let rule = catalog::find(code).ok_or(GeomechGuardError::UnknownRule(code))?;
        Ok(self.evaluate(rule, record, context))
    }

    /// Every failing applicable rule, in catalog order.
    #[must_use]
    pub fn validate(&self, record: &GeomechInterval, context: &ValidationContext) -> Vec<RuleFailure> {
        let rc = RuleContext::new(context, record);
        self.rules
            .iter()
            .filter_map(|rule| match Self::evaluate_in(rule, record, &rc) {
                RuleOutcome::Failed(failure) => Some(failure),
                RuleOutcome::Passed | RuleOutcome::Skipped => None,
            })
            .collect()
    }

    /// Validate with an optional context, applying the context policy when it is absent.
    ///
    /// # Errors
    /// Returns `MissingContext` under [`ContextPolicy::Strict`] when `context` is `None`.
    pub fn validate_with_policy(
        &self,
        record: &GeomechInterval,
        context: Option<&ValidationContext>,
    ) -> Result<Vec<RuleFailure>> {
        let context = self.resolve(record, context.copied())?;
        Ok(self.validate(record, &context))
    }

    /// Validate a working set against one shared context.
    #[must_use]
    pub fn validate_batch(
        &self,
        records: &[GeomechInterval],
        context: &ValidationContext,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for (index, record) in records.iter().enumerate() {
            if self.skip_blank && record.is_blank() {
                report.records_skipped += 1;
                continue;
            }
            self.collect(&mut report, index, record, context);
        }
        tracing::debug!(
            checked = report.records_checked,
            skipped = report.records_skipped,
            failures = report.entries.len(),
            "batch validated"
        );
        report
    }

    /// Validate a working set using the context each record carries.
    ///
    /// # Errors
    /// Returns `MissingContext` under [`ContextPolicy::Strict`] for the first
    /// non-blank record that was never assigned to a hole.
    pub fn validate_batch_with_policy(&self, records: &[GeomechInterval]) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        for (index, record) in records.iter().enumerate() {
            if self.skip_blank && record.is_blank() {
                report.records_skipped += 1;
                continue;
            }
            let context = self.resolve(record, ValidationContext::from_record(record))?;
            self.collect(&mut report, index, record, &context);
        }
        Ok(report)
    }

    fn collect(
        &self,
        report: &mut BatchReport,
        index: usize,
        record: &GeomechInterval,
        context: &ValidationContext,
    ) {
        report.records_checked += 1;
        let source = RecordRef {
            index,
            id: record.id.clone(),
        };
        report.entries.extend(
            self.validate(record, context)
                .into_iter()
                .map(|failure| BatchEntry::new(source.clone(), failure)),
        );
    }

    fn resolve(
        &self,
        record: &GeomechInterval,
        context: Option<ValidationContext>,
    ) -> Result<ValidationContext> {
        if let Some(context) = context {
            return Ok(context);
        }
        let label = record.id.clone().unwrap_or_else(|| "<unsaved>".to_string());
        match self.policy {
            ContextPolicy::Strict => Err(GeomechGuardError::MissingContext { record: label }),
            ContextPolicy::Lenient => {
                tracing::warn!(record = %label, "no project context, using unconfigured defaults");
                Ok(ValidationContext::unconfigured())
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
