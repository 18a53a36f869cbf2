use std::fmt::Write;

use crate::cli::{Cli, CoreSizesArgs};
use crate::model::UnitSystem;
use crate::model::core_size::table;
use crate::EXIT_SUCCESS;

#[must_use]
pub fn run_core_sizes(args: &CoreSizesArgs, cli: &Cli) -> i32 {
    if !cli.quiet {
        print!("{}", format_core_sizes(UnitSystem::from_metric(args.metric)));
    }
    EXIT_SUCCESS
}

/// The core-size table with diameters and RQD cutoffs in the system's units.
#[must_use]
pub fn format_core_sizes(units: UnitSystem) -> String {
    let mut out = format!(
        "{:<6} {:>10} {:>12}\n",
        "Size",
        format!("Dia ({})", units.diameter_unit()),
        format!("Cutoff ({})", units.length_unit())
    );
    for size in table(units) {
        let _ = writeln!(
            out,
            "{:<6} {:>10} {:>12}",
            size.code, size.diameter, size.rqd_cutoff
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_table_uses_millimeters_and_meters() {
        let text = format_core_sizes(UnitSystem::Metric);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Size     Dia (mm)   Cutoff (m)"));
        assert!(text.lines().any(|l| l.starts_with("HQ ") && l.ends_with("0.13")));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn us_table_uses_inches_and_feet() {
        let text = format_core_sizes(UnitSystem::Us);
        assert!(text.starts_with("Size     Dia (in)  Cutoff (ft)"));
        assert!(text.lines().any(|l| l.starts_with("NQ-3") && l.ends_with("0.3")));
    }
}
