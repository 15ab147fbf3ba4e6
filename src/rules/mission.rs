//! Mission profile (advisory, never deducts)
//!
//! Reads the mission leg table on the Main tab and compares every leg
//! against the RFP profile. Exact-value requirements fail when the cell is
//! empty; minimums are skipped when the cell is empty.

use crate::core::numeric::{number, number_at, Check};
use crate::messages::STRINGS;
use crate::types::{RuleResult, SheetMatrix, Workbook};

/// 1-based columns of the nine mission legs
const LEG_COLUMNS: [usize; 9] = [11, 12, 13, 14, 16, 18, 19, 22, 23];

const ALTITUDE_ROW: usize = 33;
const MACH_ROW: usize = 35;
const AFTERBURNER_ROW: usize = 36;
const DISTANCE_ROW: usize = 38;
const TIME_ROW: usize = 39;

/// Constraint-table cruise mach the supercruise legs must fly
const CRUISE_MACH_CELL: &str = "U4";
const CRUISE_MACH_TOLERANCE: f64 = 0.01;

const CRUISE_ALTITUDE: f64 = 35000.0;
const CRUISE_MACH: f64 = 0.9;
const COMBAT_ALTITUDE: f64 = 30000.0;
const COMBAT_MACH: f64 = 1.2;
const COMBAT_TIME: f64 = 2.0;
const SUPERCRUISE_DISTANCE: f64 = 150.0;
const LOITER_ALTITUDE: f64 = 10000.0;
const LOITER_MACH: f64 = 0.4;
const LOITER_TIME: f64 = 20.0;

fn leg_row(main: &SheetMatrix, row: usize) -> [f64; 9] {
    LEG_COLUMNS.map(|col| number_at(main, row, col))
}

fn off(value: f64, target: f64) -> bool {
    Check::equals(value, target).failed()
}

fn below(value: f64, min: f64) -> bool {
    Check::of(&[value], || value >= min).failed()
}

fn outside(value: f64, low: f64, high: f64) -> bool {
    Check::required(&[value, low, high], || value >= low && value <= high).failed()
}

fn drifts(value: f64, target: f64) -> bool {
    Check::of(&[value, target], || {
        (value - target).abs() <= CRUISE_MACH_TOLERANCE
    })
    .failed()
}

pub fn run(workbook: &Workbook) -> RuleResult {
    let main = workbook.main();
    let mut result = RuleResult::new();

    let cruise_mach = number(main, CRUISE_MACH_CELL);
    let alt = leg_row(main, ALTITUDE_ROW);
    let mach = leg_row(main, MACH_ROW);
    let ab = leg_row(main, AFTERBURNER_ROW);
    let dist = leg_row(main, DISTANCE_ROW);
    let time = leg_row(main, TIME_ROW);

    let subsonic_cruise = |leg: usize| {
        below(alt[leg], CRUISE_ALTITUDE) || off(mach[leg], CRUISE_MACH) || off(ab[leg], 0.0)
    };
    let supercruise = |leg: usize| {
        below(alt[leg], CRUISE_ALTITUDE)
            || drifts(mach[leg], cruise_mach)
            || off(ab[leg], 0.0)
            || below(dist[leg], SUPERCRUISE_DISTANCE)
    };

    let legs: [bool; 11] = [
        off(alt[0], 0.0) || off(ab[0], 100.0),
        outside(alt[1], alt[0], alt[2]),
        outside(mach[1], mach[0], mach[2]),
        off(ab[1], 0.0),
        subsonic_cruise(2),
        subsonic_cruise(3),
        supercruise(4),
        below(alt[5], COMBAT_ALTITUDE)
            || below(mach[5], COMBAT_MACH)
            || off(ab[5], 100.0)
            || below(time[5], COMBAT_TIME),
        supercruise(6),
        subsonic_cruise(7),
        off(alt[8], LOITER_ALTITUDE)
            || off(mach[8], LOITER_MACH)
            || off(ab[8], 0.0)
            || off(time[8], LOITER_TIME),
    ];

    for (failed, message) in legs.iter().zip(STRINGS.mission_legs) {
        if *failed {
            result.note(message);
        }
    }
    if legs.iter().any(|failed| *failed) {
        result.note(STRINGS.mission_summary);
    }

    result
}
