//! RFP constraints: scalar requirements, the constraint table and the
//! thrust-to-weight constraint curves
//!
//! Any scalar or table failure costs one point. The curve comparison is
//! advisory only.

use crate::core::interpolate::interpolate;
use crate::core::numeric::{is_present, number, number_at, Check};
use crate::fmt_msg;
use crate::messages::STRINGS;
use crate::rubric::{
    self, ConstraintSpec, Target, Tier, CONSTRAINTS, CONSTRAINT_AB_COL, CONSTRAINT_ALT_COL,
    CONSTRAINT_CDX_COL, CONSTRAINT_MACH_COL, CONSTRAINT_N_COL, CONSTRAINT_PS_COL, CURVE_ROWS,
};
use crate::types::{RuleResult, SheetMatrix, Workbook};
use thiserror::Error;
use tracing::warn;

/// Failure inside the curve comparison; reported as feedback, never raised
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("{label} curve has repeated wing-loading samples around {wing_loading}")]
    DegenerateCurve { label: &'static str, wing_loading: f64 },
}

pub fn run(workbook: &Workbook) -> RuleResult {
    let main = workbook.main();
    let mut result = RuleResult::new();
    let mut failures = 0;

    failures += check_scalars(main, &mut result);
    for spec in &CONSTRAINTS {
        failures += check_table_row(main, spec, &mut result);
    }

    if failures > 0 {
        result.note(STRINGS.constraint.summary);
        result.deduct(1);
    }

    let curves = check_curves(workbook);
    result.feedback.extend(curves.lines);
    for err in &curves.skipped {
        warn!(error = %err, "constraint curve skipped");
        result.note(fmt_msg!(STRINGS.constraint.curve_error, err.to_string()));
    }

    result
}

//==============================================================================
// Scalar requirements
//==============================================================================

/// Fails above the tier threshold, praised at or below the objective
fn check_upper(main: &SheetMatrix, tier: Tier, high: &str, obj: &str, out: &mut RuleResult) -> u32 {
    let value = number(main, tier.cell);
    if Check::of(&[value], || value <= tier.threshold).failed() {
        out.note(fmt_msg!(high, value));
        return 1;
    }
    if Check::of(&[value], || value <= tier.objective).passed() {
        out.note(fmt_msg!(obj, value));
    }
    0
}

fn check_scalars(main: &SheetMatrix, out: &mut RuleResult) -> u32 {
    let text = &STRINGS.constraint;
    let mut failures = 0;

    let radius = number(main, rubric::RADIUS.cell);
    if Check::of(&[radius], || radius >= rubric::RADIUS.threshold).failed() {
        out.note(fmt_msg!(text.radius_low, radius));
        failures += 1;
    } else if Check::of(&[radius], || radius >= rubric::RADIUS.objective).passed() {
        out.note(fmt_msg!(text.radius_obj, radius));
    }

    let aim120 = number(main, rubric::AIM120.cell);
    let aim9 = number(main, rubric::AIM9.cell);
    if Check::of(&[aim120], || aim120 >= rubric::AIM120.threshold).failed() {
        out.note(fmt_msg!(text.payload_low, aim120));
        failures += 1;
    } else if Check::of(&[aim120, aim9], || aim9 >= rubric::AIM9.objective).passed() {
        out.note(fmt_msg!(text.payload_obj, aim120, aim9));
    }

    failures += check_upper(
        main,
        rubric::TAKEOFF_DISTANCE,
        text.takeoff_high,
        text.takeoff_obj,
        out,
    );
    failures += check_upper(
        main,
        rubric::LANDING_DISTANCE,
        text.landing_high,
        text.landing_obj,
        out,
    );

    failures
}

//==============================================================================
// Constraint table
//==============================================================================

/// Minimum-with-objective column; skipped when the cell is empty
fn check_min(
    label: &str,
    value: f64,
    target: Target,
    low: &str,
    obj: &str,
    out: &mut RuleResult,
) -> u32 {
    let Target::Min { min, objective } = target else {
        return 0;
    };
    if Check::of(&[value], || value >= min).failed() {
        out.note(fmt_msg!(low, label, value, min));
        return 1;
    }
    if Check::of(&[value], || value >= objective).passed() {
        out.note(fmt_msg!(obj, label, objective, value));
    }
    0
}

/// Exact-value column; an empty cell does not match
fn check_exact(label: &str, value: f64, target: f64, msg: &str, out: &mut RuleResult) -> u32 {
    if Check::equals(value, target).failed() {
        out.note(fmt_msg!(msg, label, value, target));
        return 1;
    }
    0
}

/// Tolerance column; skipped when the cell is empty
fn check_near(
    label: &str,
    value: f64,
    target: f64,
    tolerance: f64,
    msg: &str,
    out: &mut RuleResult,
) -> u32 {
    if Check::of(&[value], || (value - target).abs() <= tolerance).failed() {
        out.note(fmt_msg!(msg, label, value, target));
        return 1;
    }
    0
}

fn check_table_row(main: &SheetMatrix, spec: &ConstraintSpec, out: &mut RuleResult) -> u32 {
    let text = &STRINGS.constraint;
    let label = spec.label;
    let read = |col| number_at(main, spec.row, col);

    let mach = read(CONSTRAINT_MACH_COL);
    let altitude = read(CONSTRAINT_ALT_COL);
    let n = read(CONSTRAINT_N_COL);
    let ab = read(CONSTRAINT_AB_COL);
    let ps = read(CONSTRAINT_PS_COL);
    let cdx = read(CONSTRAINT_CDX_COL);

    let mut failures = 0;

    failures += match spec.mach {
        Target::Eq(target) => {
            check_near(label, mach, target, rubric::MACH_TOLERANCE, text.mach_eq, out)
        }
        min => check_min(label, mach, min, text.mach_min, text.mach_obj, out),
    };

    if let Target::Eq(target) = spec.altitude {
        failures += check_exact(label, altitude, target, text.alt_eq, out);
    }

    failures += match spec.load_factor {
        Target::Eq(target) => check_exact(label, n, target, text.n_eq, out),
        min => check_min(label, n, min, text.n_min, text.n_obj, out),
    };

    failures += check_exact(label, ab, spec.afterburner, text.ab_eq, out);

    failures += match spec.ps {
        Target::Eq(target) => check_exact(label, ps, target, text.ps_eq, out),
        min => check_min(label, ps, min, text.ps_min, text.ps_obj, out),
    };

    failures += check_near(label, cdx, spec.cdx, rubric::CDX_TOLERANCE, text.cdx_eq, out);

    failures
}

//==============================================================================
// Constraint curves
//==============================================================================

fn curve_samples(consts: &SheetMatrix, row: usize) -> Vec<f64> {
    (rubric::CURVE_FIRST_COL..=rubric::CURVE_LAST_COL)
        .map(|col| number_at(consts, row, col))
        .collect()
}

/// Outcome of the curve comparison
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurveReport {
    /// Advisory lines, landing limit first
    pub lines: Vec<String>,
    /// Curves with no usable requirement at the design wing loading
    pub skipped: Vec<CurveError>,
}

/// Compare the design point against every constraint curve.
///
/// A curve that cannot be evaluated is skipped on its own; the remaining
/// curves and the landing limit are still checked. Nothing is reported when
/// the design point is missing.
pub fn check_curves(workbook: &Workbook) -> CurveReport {
    let main = workbook.main();
    let consts = workbook.consts();
    let text = &STRINGS.constraint;
    let mut report = CurveReport::default();

    let wing_loading = number(main, rubric::DESIGN_WING_LOADING);
    let thrust_to_weight = number(main, rubric::DESIGN_THRUST_TO_WEIGHT);
    if !is_present(wing_loading) || !is_present(thrust_to_weight) {
        return report;
    }

    let axis = curve_samples(consts, rubric::CURVE_AXIS_ROW);
    let mut failed: Vec<&str> = Vec::new();

    for curve in &CURVE_ROWS {
        let samples = curve_samples(consts, curve.row);
        let Some(required) = interpolate(&axis, &samples, wing_loading) else {
            continue;
        };
        if !required.is_finite() {
            report.skipped.push(CurveError::DegenerateCurve {
                label: curve.label,
                wing_loading,
            });
            continue;
        }
        if thrust_to_weight < required {
            failed.push(curve.label);
        }
    }

    let landing_limit = number(consts, rubric::LANDING_WING_LOADING_LIMIT);
    if Check::of(&[landing_limit], || wing_loading <= landing_limit).failed() {
        failed.push("Landing");
        report
            .lines
            .push(fmt_msg!(text.landing_curve, wing_loading, landing_limit));
    }

    if !failed.is_empty() {
        let plural = if failed.len() > 1 { "s" } else { "" };
        let mut message = fmt_msg!(text.curve_failure, plural, failed.join(", "));
        message.push_str(if failed.len() > rubric::CURVE_FAILURES_MANY {
            text.curve_suffix_many
        } else {
            text.curve_suffix_few
        });
        report.lines.push(message);
    }

    report
}
