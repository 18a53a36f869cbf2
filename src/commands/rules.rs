use std::fmt::Write;

use crate::cli::{Cli, RulesArgs};
use crate::context::ValidationContext;
use crate::model::GeomechInterval;
use crate::rules::{RULES, Rule, RuleContext, find};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GeomechGuardError, Result};

use super::context::report_error;

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args) {
        Ok(text) => {
            if !cli.quiet {
                print!("{text}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns `UnknownRule` if `args.code` names no rule.
pub fn run_rules_impl(args: &RulesArgs) -> Result<String> {
    let context = ValidationContext::unconfigured();
    let record = GeomechInterval::default();
    let rc = RuleContext::new(&context, &record);

    match args.code {
        Some(code) => {
            let rule = find(code).ok_or(GeomechGuardError::UnknownRule(code))?;
            Ok(explain_rule(rule, &rc))
        }
        None => Ok(format_catalog(&rc)),
    }
}

/// One line per rule, in evaluation order.
pub(crate) fn format_catalog(rc: &RuleContext<'_>) -> String {
    let mut out = String::new();
    for rule in &RULES {
        let _ = write!(out, "{:>4}  {}", rule.id().to_string(), rule.message(rc));
        if let Some(needs) = requirements(rule) {
            let _ = write!(out, "  (needs {needs})");
        }
        out.push('\n');
    }
    out
}

pub(crate) fn explain_rule(rule: &Rule, rc: &RuleContext<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rule:     {}", rule.id());
    let _ = writeln!(out, "Severity: {}", rule.severity().as_str());
    let _ = writeln!(out, "Message:  {}", rule.message(rc));
    let _ = writeln!(
        out,
        "Applies:  {}",
        requirements(rule).unwrap_or_else(|| "always".to_string())
    );
    out
}

/// What must be configured for a rule to run.
fn requirements(rule: &Rule) -> Option<String> {
    let mut needs: Vec<String> = rule
        .required_vls()
        .iter()
        .map(|k| format!("VL{k}"))
        .collect();
    if rule.needs_core_size() {
        needs.push("known core size".to_string());
    }
    (!needs.is_empty()).then(|| needs.join(", "))
}
