//! The rule table.
//!
//! Order matters: reports list failures in table order. Each predicate
//! returns `true` when the record passes.

use super::numeric::{absent_or_negative, is_exactly, n};
use super::result::RuleId;
use super::rule::{Rule, RuleContext};

/// Slack allowed when comparing two measured lengths.
const SLACK: f64 = 0.01;

fn recovery_margin_message(rc: &RuleContext<'_>) -> String {
    format!(
        "Recovery is > Interval * {} and Recovery > Interval + {}",
        rc.ratio(),
        rc.constant()
    )
}

fn zone_sum_message(rc: &RuleContext<'_>) -> String {
    format!(
        "Length of Whole Core + Length of Broken + Length of Rubble is not within Recovery \u{b1} {}",
        rc.tolerance()
    )
}

/// Every rule, structural check first, then codes 1 through 53.
pub static RULES: [Rule; 54] = [
    Rule::structural(
        "Drill Interval \"From\" must be less than \"To\".",
        |r, _| n(r.interval_from) < n(r.interval_to),
    ),
    Rule::coded_dynamic(1, recovery_margin_message, |r, rc| {
        let interval = r.interval_len();
        let recovery = n(r.recovery_len);
        !(recovery > interval * rc.ratio() && recovery > interval + rc.constant())
    }),
    Rule::coded(2, "Recovery is < 0 or Null", |r, _| {
        !absent_or_negative(r.recovery_len)
    }),
    Rule::coded(3, "Length of 2X Core is > Recovery + .01", |r, _| {
        n(r.rqd_len) < n(r.recovery_len) + SLACK
    }),
    Rule::coded(4, "Length of 2X Core is < 0 or Null", |r, _| {
        !absent_or_negative(r.rqd_len)
    }),
    Rule::coded(5, "Number of Whole Pieces is < 0 or Null", |r, _| {
        !absent_or_negative(r.whole_piece_count)
    }),
    Rule::coded(
        6,
        "Number of Whole Pieces = 1 and the Length of Longest Piece does not equal the Length of Whole Core",
        |r, _| !is_exactly(r.whole_piece_count, 1.0) || r.longest_piece_len == r.whole_core_len,
    ),
    Rule::coded(
        7,
        "Number of Whole Pieces = 0 and Length of Whole Core > 0",
        |r, _| !(is_exactly(r.whole_piece_count, 0.0) && n(r.whole_core_len) > 0.0),
    ),
    Rule::coded(8, "Length of Broken is > Recovery + .01", |r, _| {
        n(r.broken_zone_len) < n(r.recovery_len) + SLACK
    }),
    Rule::coded(9, "Length of Longest Piece < 0 or Null", |r, _| {
        !absent_or_negative(r.longest_piece_len)
    }),
    Rule::coded(
        10,
        "Length of Longest Piece <= 0 and Length of 2X Core > 0",
        |r, _| !(n(r.longest_piece_len) <= 0.0 && n(r.rqd_len) > 0.0),
    ),
    Rule::coded(
        11,
        "Length of Longest Piece <= 0 and Length of Whole Core > 0",
        |r, _| !(n(r.longest_piece_len) <= 0.0 && n(r.whole_core_len) > 0.0),
    ),
    Rule::coded(
        12,
        "Length of Longest Piece > Length of Whole Core + .01",
        |r, _| n(r.longest_piece_len) <= n(r.whole_core_len) + SLACK,
    ),
    Rule::coded(
        13,
        "Length of Longest Piece - 0.1 > Recovery - Length of Broken - Length of Rubble",
        |r, _| {
            let intact = n(r.recovery_len) - n(r.broken_zone_len) - n(r.rubble_zone_len);
            n(r.longest_piece_len) - 0.1 <= intact
        },
    ),
    Rule::coded(
        14,
        "Length of Longest Piece > Length of 2X Core + .01 and Length of 2X Core > 0",
        |r, _| !(n(r.longest_piece_len) > n(r.rqd_len) + SLACK && n(r.rqd_len) > 0.0),
    ),
    // Length greater than VL1.
    Rule::coded(15, "Length Greater Than VL1 < 0 or Null", |r, _| {
        !absent_or_negative(r.var_len1)
    })
    .requires_vls(&[1]),
    Rule::coded(16, "Length Greater Than VL1 > Length of 2X Core", |r, _| {
        n(r.var_len1) <= n(r.rqd_len)
    })
    .requires_vls(&[1]),
    Rule::coded(
        17,
        "Length Greater Than VL1 > Length of Whole Core + .01",
        |r, _| n(r.var_len1) <= n(r.whole_core_len) + SLACK,
    )
    .requires_vls(&[1]),
    Rule::coded(18, "Length Greater Than VL1 > Recovery + .01", |r, _| {
        n(r.var_len1) <= n(r.recovery_len) + SLACK
    })
    .requires_vls(&[1]),
    Rule::coded(
        19,
        "Length Greater Than VL1 > 0 and Length of Longest Piece < VL1",
        |r, rc| !(n(r.var_len1) > 0.0 && n(r.longest_piece_len) < rc.vl(1)),
    )
    .requires_vls(&[1]),
    Rule::coded(
        20,
        "Length Greater Than VL1 = 0 and Length of Longest Piece > VL1",
        |r, rc| !(is_exactly(r.var_len1, 0.0) && n(r.longest_piece_len) > rc.vl(1)),
    )
    .requires_vls(&[1]),
    // Length greater than VL2.
    Rule::coded(21, "Length Greater Than VL2 < 0 or Null", |r, _| {
        !absent_or_negative(r.var_len2)
    })
    .requires_vls(&[2]),
    Rule::coded(
        22,
        "Length Greater Than VL2 < Length Greater Than VL1",
        |r, _| n(r.var_len2) >= n(r.var_len1),
    )
    .requires_vls(&[1, 2]),
    Rule::coded(23, "Length Greater Than VL2 > Length of 2X Core", |r, _| {
        n(r.var_len2) <= n(r.rqd_len)
    })
    .requires_vls(&[2]),
    Rule::coded(
        24,
        "Length Greater Than VL2 > Length of Whole Core + .01",
        |r, _| n(r.var_len2) <= n(r.whole_core_len) + SLACK,
    )
    .requires_vls(&[2]),
    Rule::coded(25, "Length Greater Than VL2 > Recovery + .01", |r, _| {
        n(r.var_len2) <= n(r.recovery_len) + SLACK
    })
    .requires_vls(&[2]),
    Rule::coded(
        26,
        "Length Greater Than VL2 > 0 and Length of Longest Piece < VL2",
        |r, rc| !(n(r.var_len2) > 0.0 && n(r.longest_piece_len) < rc.vl(2)),
    )
    .requires_vls(&[2]),
    Rule::coded(
        27,
        "Length Greater Than VL2 = 0 and Length of Longest Piece > VL2",
        |r, rc| !(is_exactly(r.var_len2, 0.0) && n(r.longest_piece_len) > rc.vl(2)),
    )
    .requires_vls(&[2]),
    // Length greater than VL3.
    Rule::coded(28, "Length Greater Than VL3 < 0 or Null", |r, _| {
        !absent_or_negative(r.var_len3)
    })
    .requires_vls(&[3]),
    Rule::coded(
        29,
        "Length Greater Than VL3 < Length Greater Than VL2",
        |r, _| n(r.var_len3) >= n(r.var_len2),
    )
    .requires_vls(&[2, 3]),
    Rule::coded(
        30,
        "Length Greater Than VL3 < Length Greater Than VL1",
        |r, _| n(r.var_len3) >= n(r.var_len1),
    )
    .requires_vls(&[1, 3]),
    Rule::coded(31, "Length Greater Than VL3 < Length of 2X Core", |r, _| {
        n(r.var_len3) >= n(r.rqd_len)
    })
    .requires_vls(&[3]),
    Rule::coded(
        32,
        "Length Greater Than VL3 > Length of Whole Core + .01",
        |r, _| n(r.var_len3) <= n(r.whole_core_len) + SLACK,
    )
    .requires_vls(&[3]),
    Rule::coded(33, "Length Greater Than VL3 > Recovery + .01", |r, _| {
        n(r.var_len3) <= n(r.recovery_len) + SLACK
    })
    .requires_vls(&[3]),
    Rule::coded(
        34,
        "Length Greater Than VL3 > 0 and Length of Longest Piece < VL3",
        |r, rc| !(n(r.var_len3) > 0.0 && n(r.longest_piece_len) < rc.vl(3)),
    )
    .requires_vls(&[3]),
    Rule::coded(
        35,
        "Length Greater Than VL3 = 0 and Length of Longest Piece > VL3",
        |r, rc| !(is_exactly(r.var_len3, 0.0) && n(r.longest_piece_len) > rc.vl(3)),
    )
    .requires_vls(&[3]),
    Rule::coded(36, "Length of Whole Core > Recovery + .01", |r, _| {
        n(r.whole_core_len) <= n(r.recovery_len) + SLACK
    }),
    Rule::coded(37, "Length of Whole Core < 0 or Null", |r, _| {
        !absent_or_negative(r.whole_core_len)
    }),
    Rule::coded_dynamic(38, zone_sum_message, |r, rc| {
        let sum = n(r.whole_core_len) + n(r.broken_zone_len) + n(r.rubble_zone_len);
        let recovery = n(r.recovery_len);
        sum >= recovery - rc.tolerance() && sum <= recovery + rc.tolerance()
    }),
    // RQD cutoff for the record's core size.
    Rule::coded(
        39,
        "Length of Longest Piece > RQD Cutoff and Length of 2X Core = 0",
        |r, rc| !(n(r.longest_piece_len) > rc.cutoff() && is_exactly(r.rqd_len, 0.0)),
    )
    .requires_core_size(),
    Rule::coded(
        40,
        "Length of Longest Piece < RQD Cutoff and Length of 2X Core > 0",
        |r, rc| !(n(r.longest_piece_len) < rc.cutoff() && n(r.rqd_len) > 0.0),
    )
    .requires_core_size(),
    Rule::coded(
        41,
        "Length of 2X Core > Recovery - Length of Broken - Length of Rubble + .01",
        |r, _| {
            let intact = n(r.recovery_len) - n(r.broken_zone_len) - n(r.rubble_zone_len);
            n(r.rqd_len) <= intact + SLACK
        },
    ),
    Rule::coded(42, "Length of 2X Core > Length of Whole Core + .01", |r, _| {
        n(r.rqd_len) <= n(r.whole_core_len) + SLACK
    }),
    Rule::coded(
        43,
        "Length of 2X Core > Length of Longest Piece and Length of 2X Core - Length of Longest Piece + 0.01 < RQD Cutoff",
        |r, rc| {
            let rqd = n(r.rqd_len);
            let longest = n(r.longest_piece_len);
            !(rqd > longest && rqd - longest + SLACK < rc.cutoff())
        },
    )
    .requires_core_size(),
    Rule::coded(
        44,
        "Length Greater Than VL1 > Length of Longest Piece and Length Greater Than VL1 - Length of Longest Piece <  VL1 - .01",
        |r, rc| {
            let over = n(r.var_len1);
            let longest = n(r.longest_piece_len);
            !(over > longest && over - longest < rc.vl(1) - SLACK)
        },
    )
    .requires_vls(&[1]),
    Rule::coded(
        45,
        "Length Greater Than VL2 > Length of Longest Piece and Length Greater Than VL2 - Length of Longest Piece <  VL2 - .01",
        |r, rc| {
            let over = n(r.var_len2);
            let longest = n(r.longest_piece_len);
            !(over > longest && over - longest < rc.vl(2) - SLACK)
        },
    )
    .requires_vls(&[2]),
    Rule::coded(
        46,
        "Length Greater Than VL3 > Length of Longest Piece and Length Greater Than VL3 - Length of Longest Piece <  VL3 - .01",
        |r, rc| {
            let over = n(r.var_len3);
            let longest = n(r.longest_piece_len);
            !(over > longest && over - longest < rc.vl(3) - SLACK)
        },
    )
    .requires_vls(&[3]),
    // Fails when the measured difference lies inside the band.
    Rule::coded(
        47,
        "0.1 <= Length Greater Than VL2 - Length Greater Than VL1 <= (VL2-VL1-.01)",
        |r, rc| !within_band(n(r.var_len2) - n(r.var_len1), rc.vl(2) - rc.vl(1)),
    )
    .requires_vls(&[1, 2]),
    Rule::coded(
        48,
        "0.1 <= Length Greater Than VL3 - Length Greater Than VL1 <= (VL3-VL1-.01)",
        |r, rc| !within_band(n(r.var_len3) - n(r.var_len1), rc.vl(3) - rc.vl(1)),
    )
    .requires_vls(&[1, 3]),
    Rule::coded(
        49,
        "0.1 <= Length Greater Than VL3 - Length Greater Than VL2 <= (VL3-VL2-.01)",
        |r, rc| !within_band(n(r.var_len3) - n(r.var_len2), rc.vl(3) - rc.vl(2)),
    )
    .requires_vls(&[2, 3]),
    Rule::coded(
        50,
        "Length of Longest Piece > VL1 and Length of Longest Piece > Length Greater Than VL1",
        |r, rc| {
            let longest = n(r.longest_piece_len);
            !(longest > rc.vl(1) && longest > n(r.var_len1))
        },
    )
    .requires_vls(&[1]),
    Rule::coded(
        51,
        "Length of Longest Piece > VL2 and Length of Longest Piece > Length Greater Than VL2",
        |r, rc| {
            let longest = n(r.longest_piece_len);
            !(longest > rc.vl(2) && longest > n(r.var_len2))
        },
    )
    .requires_vls(&[2]),
    Rule::coded(
        52,
        "Length of Longest Piece > VL3 and Length of Longest Piece > Length Greater Than VL3",
        |r, rc| {
            let longest = n(r.longest_piece_len);
            !(longest > rc.vl(3) && longest > n(r.var_len3))
        },
    )
    .requires_vls(&[3]),
    Rule::coded(
        53,
        "Length of 2X Core > 0 and Length of 2X Core < RQD Cutoff",
        |r, rc| !(n(r.rqd_len) > 0.0 && n(r.rqd_len) < rc.cutoff()),
    )
    .requires_core_size(),
];

fn within_band(diff: f64, threshold_gap: f64) -> bool {
    (0.1..=threshold_gap - SLACK).contains(&diff)
}

/// Look up a numbered rule.
#[must_use]
pub fn find(code: u8) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.id() == RuleId::Code(code))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
