//! Aero tab template-duplication check
//!
//! The template ships with each pair below holding identical values; a
//! student who filled in the tab will have made them differ.

use crate::fmt_msg;
use crate::messages::STRINGS;
use crate::types::{RuleResult, Workbook};

const PAIRS: [(&str, &str); 3] = [("G3", "G4"), ("G10", "G11"), ("A15", "A16")];

const MAX_DEDUCTION: i32 = 2;

pub fn run(workbook: &Workbook) -> RuleResult {
    let aero = workbook.aero();
    let mut result = RuleResult::new();

    // Raw equality: two empty cells match, NaN never does
    let failures = PAIRS
        .iter()
        .filter(|(a, b)| aero.cell(a) == aero.cell(b))
        .count() as i32;

    if failures > 0 {
        let points = failures.min(MAX_DEDUCTION);
        result.note(fmt_msg!(STRINGS.aero_mismatch, points));
        result.deduct(points);
    }

    result
}
