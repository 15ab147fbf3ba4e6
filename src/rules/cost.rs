//! Recurring cost against the fleet-size ceiling

use crate::core::numeric::{number, Check};
use crate::fmt_msg;
use crate::messages::STRINGS;
use crate::rubric::{CostCeiling, COST_CEILINGS};
use crate::types::{RuleResult, Workbook};

const RECURRING_COST: &str = "Q31";
const FLEET_SIZE: &str = "N31";

#[allow(clippy::float_cmp)]
fn ceiling_for(fleet_size: f64) -> Option<(usize, &'static CostCeiling)> {
    COST_CEILINGS
        .iter()
        .enumerate()
        .find(|(_, c)| c.fleet_size == fleet_size)
}

pub fn run(workbook: &Workbook) -> RuleResult {
    let main = workbook.main();
    let text = &STRINGS.cost;
    let mut result = RuleResult::new();

    let cost = number(main, RECURRING_COST);
    let fleet_size = number(main, FLEET_SIZE);

    let Some((index, tier)) = ceiling_for(fleet_size) else {
        result.note(fmt_msg!(text.invalid, fleet_size));
        result.deduct(1);
        return result;
    };

    let (over, objective) = [
        (text.over_187, text.obj_187),
        (text.over_800, text.obj_800),
    ][index];

    if Check::of(&[cost], || cost <= tier.ceiling).failed() {
        result.note(fmt_msg!(over, cost));
        result.deduct(1);
    } else if Check::of(&[cost], || cost <= tier.objective).passed() {
        result.note(fmt_msg!(objective, cost));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sheet;

    fn graded(fleet: impl Into<crate::types::CellValue>, cost: f64) -> RuleResult {
        let wb = Workbook::builder()
            .cell(Sheet::Main, FLEET_SIZE, fleet)
            .cell(Sheet::Main, RECURRING_COST, cost)
            .build();
        run(&wb)
    }

    #[test]
    fn test_187_over_ceiling() {
        let result = graded(187, 120.0);
        assert_eq!(result.delta, -1);
        assert_eq!(
            result.feedback,
            vec!["-1: Recurring cost $120.0M exceeds the $115M threshold for a 187 aircraft buy."]
        );
    }

    #[test]
    fn test_187_objective() {
        let result = graded(187, 95.5);
        assert_eq!(result.delta, 0);
        assert_eq!(
            result.feedback,
            vec!["Recurring cost $95.5M meets the $100M objective for a 187 aircraft buy."]
        );
    }

    #[test]
    fn test_187_between_objective_and_ceiling() {
        assert_eq!(graded(187, 110.0), RuleResult::default());
    }

    #[test]
    fn test_800_tiers() {
        assert_eq!(graded(800, 80.0).delta, -1);
        assert_eq!(graded(800, 70.0), RuleResult::default());
        let praised = graded(800, 60.0);
        assert_eq!(praised.delta, 0);
        assert_eq!(praised.feedback.len(), 1);
    }

    #[test]
    fn test_unrecognized_fleet_size() {
        let result = graded(999, 10.0);
        assert_eq!(result.delta, -1);
        assert_eq!(
            result.feedback,
            vec!["-1: Number of aircraft (999) must be 187 or 800."]
        );
    }

    #[test]
    fn test_missing_fleet_size_is_unrecognized() {
        let result = graded("", 100.0);
        assert_eq!(result.delta, -1);
        assert_eq!(
            result.feedback,
            vec!["-1: Number of aircraft (NaN) must be 187 or 800."]
        );
    }

    #[test]
    fn test_missing_cost_no_ceiling_check() {
        let wb = Workbook::builder().cell(Sheet::Main, FLEET_SIZE, 187).build();
        assert_eq!(run(&wb), RuleResult::default());
    }
}
