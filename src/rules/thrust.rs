//! Thrust vs drag on every mission leg, then takeoff roll

use crate::core::numeric::{number, Check};
use crate::messages::STRINGS;
use crate::types::{RuleResult, Workbook};

/// Miss tab leg columns C..N
const LEG_COLUMNS: [&str; 12] = ["C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N"];
/// Thrust required (drag) per leg
const REQUIRED_ROW: u32 = 48;
/// Thrust available per leg
const AVAILABLE_ROW: u32 = 49;

const TAKEOFF_DISTANCE: &str = "K38";
const TAKEOFF_REQUIRED: &str = "X12";

pub fn run(workbook: &Workbook) -> RuleResult {
    let miss = workbook.miss();
    let main = workbook.main();
    let mut result = RuleResult::new();

    let thrust_short = LEG_COLUMNS.iter().any(|col| {
        let required = number(miss, &format!("{col}{REQUIRED_ROW}"));
        let available = number(miss, &format!("{col}{AVAILABLE_ROW}"));
        Check::of(&[required, available], || required <= available).failed()
    });

    if thrust_short {
        result.note(STRINGS.thrust_leg);
        result.deduct(1);
        return result;
    }

    let distance = number(main, TAKEOFF_DISTANCE);
    let required = number(main, TAKEOFF_REQUIRED);
    if Check::of(&[distance, required], || distance <= required).failed() {
        result.note(STRINGS.takeoff_roll);
        result.deduct(1);
    }

    result
}
