//! Static and lateral/directional stability
//!
//! All four derivatives are mandatory; an empty cell fails its check.

use crate::core::numeric::{number, Check};
use crate::messages::STRINGS;
use crate::types::{RuleResult, Workbook};

const STATIC_MARGIN: &str = "M10";
const CL_BETA: &str = "O10";
const CN_BETA: &str = "P10";
const STABILITY_RATIO: &str = "Q10";

const STATIC_MARGIN_BAND: (f64, f64) = (-0.1, 0.11);
const CL_BETA_MAX: f64 = -0.001;
const CN_BETA_MIN: f64 = 0.002;
const RATIO_BAND: (f64, f64) = (-1.0, -0.3);

fn within(value: f64, (low, high): (f64, f64)) -> Check {
    Check::required(&[value], || value >= low && value <= high)
}

pub fn run(workbook: &Workbook) -> RuleResult {
    let main = workbook.main();
    let text = &STRINGS.stability;
    let mut result = RuleResult::new();
    let mut stable = true;

    let sm = number(main, STATIC_MARGIN);
    let clb = number(main, CL_BETA);
    let cnb = number(main, CN_BETA);
    let ratio = number(main, STABILITY_RATIO);

    if within(sm, STATIC_MARGIN_BAND).failed() {
        result.note(text.sm);
        stable = false;
    } else if sm < 0.0 {
        result.note(text.sm_warn);
    }

    if Check::required(&[clb], || clb < CL_BETA_MAX).failed() {
        result.note(text.clb);
        stable = false;
    }

    if Check::required(&[cnb], || cnb > CN_BETA_MIN).failed() {
        result.note(text.cnb);
        stable = false;
    }

    if within(ratio, RATIO_BAND).failed() {
        result.note(text.ratio);
        stable = false;
    }

    if !stable {
        result.note(text.deduction);
        result.deduct(1);
    }

    result
}
