//! Fuel quantity and internal volume

use crate::core::numeric::{number, Check};
use crate::fmt_msg;
use crate::messages::STRINGS;
use crate::types::{RuleResult, Workbook};

const FUEL_AVAILABLE: &str = "O18";
const FUEL_REQUIRED: &str = "X40";
const VOLUME_REMAINING: &str = "Q23";

pub fn run(workbook: &Workbook) -> RuleResult {
    let main = workbook.main();
    let mut result = RuleResult::new();

    let available = number(main, FUEL_AVAILABLE);
    let required = number(main, FUEL_REQUIRED);
    if Check::of(&[available, required], || available >= required).failed() {
        result.note(fmt_msg!(STRINGS.fuel.shortage, available, required));
        result.deduct(1);
    }

    // Volume must be shown to be positive
    let volume = number(main, VOLUME_REMAINING);
    if Check::required(&[volume], || volume > 0.0).failed() {
        result.note(fmt_msg!(STRINGS.fuel.volume, volume));
        result.deduct(1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sheet;

    #[test]
    fn test_enough_fuel_and_volume() {
        let wb = Workbook::builder()
            .cell(Sheet::Main, FUEL_AVAILABLE, 12000)
            .cell(Sheet::Main, FUEL_REQUIRED, 11000)
            .cell(Sheet::Main, VOLUME_REMAINING, 3.2)
            .build();
        assert_eq!(run(&wb), RuleResult::default());
    }

    #[test]
    fn test_both_checks_fail() {
        let wb = Workbook::builder()
            .cell(Sheet::Main, FUEL_AVAILABLE, 9000)
            .cell(Sheet::Main, FUEL_REQUIRED, 11000)
            .cell(Sheet::Main, VOLUME_REMAINING, 0)
            .build();
        let result = run(&wb);
        assert_eq!(result.delta, -2);
        assert_eq!(
            result.feedback,
            vec![
                "-1: Fuel available (9000 lb) is less than fuel required (11000 lb).",
                "-1: Remaining internal volume (0.0 ft^3) must be positive.",
            ]
        );
    }

    #[test]
    fn test_missing_fuel_skips_but_missing_volume_fails() {
        let wb = Workbook::builder()
            .cell(Sheet::Main, FUEL_REQUIRED, 11000)
            .build();
        let result = run(&wb);
        assert_eq!(result.delta, -1);
        assert_eq!(
            result.feedback,
            vec!["-1: Remaining internal volume (NaN ft^3) must be positive."]
        );
    }
}
