//! Landing gear placement and rotation
//!
//! Two rotation variants exist and are selected by
//! [`RotationCheck`](crate::config::RotationCheck):
//!
//! - `speed`: the rotation speed alone must stay under the ceiling; an
//!   empty cell is skipped.
//! - `authority`: rotation must happen before the takeoff speed, and the
//!   takeoff speed must stay under the ceiling; missing speeds fail.

use crate::core::numeric::{is_present, number, Check};
use crate::fmt_msg;
use crate::messages::STRINGS;
use crate::types::{RuleResult, Workbook};

const NOSE_SHARE: &str = "J19";
const TIPBACK_UPPER: &str = "L20";
const TIPBACK_LOWER: &str = "L21";
const ROLLOVER_UPPER: &str = "M20";
const ROLLOVER_LOWER: &str = "M21";
const ROTATION_SPEED: &str = "N20";
const TAKEOFF_SPEED: &str = "N21";

/// Nose gear share of the weight, percent
const NOSE_BAND: (f64, f64) = (9.5, 20.0);
/// kts
const SPEED_CEILING: f64 = 200.0;

/// Nose share, tip-back and rollover: shared by both variants
fn placement(workbook: &Workbook, result: &mut RuleResult) -> bool {
    let gear = workbook.gear();
    let text = &STRINGS.gear;
    let mut good = true;

    let nose = number(gear, NOSE_SHARE);
    let (low, high) = NOSE_BAND;
    if Check::of(&[nose], || nose >= low && nose <= high).failed() {
        result.note(fmt_msg!(text.nose, nose));
        good = false;
    }

    let upper = number(gear, TIPBACK_UPPER);
    let lower = number(gear, TIPBACK_LOWER);
    if Check::of(&[upper, lower], || upper < lower).failed() {
        result.note(fmt_msg!(text.tipback, upper, lower));
        good = false;
    }

    let upper = number(gear, ROLLOVER_UPPER);
    let lower = number(gear, ROLLOVER_LOWER);
    if Check::of(&[upper, lower], || upper < lower).failed() {
        result.note(fmt_msg!(text.rollover, upper, lower));
        good = false;
    }

    good
}

fn finish(mut result: RuleResult, good: bool) -> RuleResult {
    if !good {
        result.note(STRINGS.gear.deduction);
        result.deduct(1);
    }
    result
}

/// Rotation speed against the ceiling only
pub fn run_with_rotation_speed(workbook: &Workbook) -> RuleResult {
    let mut result = RuleResult::new();
    let mut good = placement(workbook, &mut result);

    let rotation = number(workbook.gear(), ROTATION_SPEED);
    if Check::of(&[rotation], || rotation < SPEED_CEILING).failed() {
        result.note(fmt_msg!(STRINGS.gear.rotation, rotation));
        good = false;
    }

    finish(result, good)
}

/// Rotation before takeoff speed, takeoff speed under the ceiling
pub fn run_with_rotation_authority(workbook: &Workbook) -> RuleResult {
    let text = &STRINGS.gear;
    let mut result = RuleResult::new();
    let mut good = placement(workbook, &mut result);

    let gear = workbook.gear();
    let rotation = number(gear, ROTATION_SPEED);
    let takeoff = number(gear, TAKEOFF_SPEED);

    if !(is_present(rotation) && is_present(takeoff)) {
        result.note(text.rotation_missing);
        return finish(result, false);
    }

    if Check::of(&[rotation, takeoff], || rotation < takeoff).failed() {
        result.note(fmt_msg!(text.rotation_order, rotation, takeoff));
        good = false;
    }
    if Check::of(&[takeoff], || takeoff < SPEED_CEILING).failed() {
        result.note(fmt_msg!(text.takeoff_speed, takeoff));
        good = false;
    }

    finish(result, good)
}
