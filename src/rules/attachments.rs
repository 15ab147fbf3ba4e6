//! Control-surface attachment and fuselage-length checks
//!
//! Five geometric disconnect checks share one point; a component placed
//! behind the fuselage costs a separate point.

use crate::core::numeric::{is_present, number, number_at, Check};
use crate::fmt_msg;
use crate::messages::STRINGS;
use crate::types::{RuleResult, Workbook};

const FUSELAGE_LENGTH: &str = "B32";

const PCS_AREA: &str = "C18";
const PCS_X: &str = "C23";
const PCS_Z: &str = "C25";
const PCS_ROOT_CHORD: &str = "C8";

const VT_AREA: &str = "H18";
const VT_X: &str = "H23";
const VT_Y: &str = "H24";
const VT_ROOT_CHORD: &str = "C10";

const FUSE_Z_CENTER: &str = "D52";
const FUSE_HEIGHT: &str = "F52";
const FUSE_WIDTH: &str = "E52";

const STRAKE_AREA: &str = "D18";
const WING_SWEEP: &str = "K15";
const STRAKE_SPAN_Y: &str = "M152";
const STRAKE_APEX: &str = "L155";
const WING_APEX: &str = "L38";
/// Allowed gap between strake tip and wing leading edge (ft)
const STRAKE_GAP: f64 = 0.5;

/// Surfaces smaller than this are treated as not installed
const MIN_ACTIVE_AREA: f64 = 1.0;
/// Share of root chord allowed to overhang the fuselage end
const ROOT_CHORD_OVERHANG: f64 = 0.25;

/// Component table: area on row 18, x position on row 23, columns B..H
const COMPONENT_AREA_ROW: usize = 18;
const COMPONENT_X_ROW: usize = 23;
const COMPONENT_COLUMNS: std::ops::RangeInclusive<usize> = 2..=8;

fn installed(area: f64) -> bool {
    Check::of(&[area], || area >= MIN_ACTIVE_AREA).passed()
}

/// Leading-edge x of the wing at spanwise station `y`
fn wing_leading_edge(sweep_deg: f64, y: f64, apex: f64) -> f64 {
    y / (90.0 - sweep_deg).to_radians().tan() + apex
}

pub fn run(workbook: &Workbook) -> RuleResult {
    let main = workbook.main();
    let geom = workbook.geom();
    let text = &STRINGS.attachment;
    let mut result = RuleResult::new();
    let mut disconnected = 0;

    let fuselage_length = number(main, FUSELAGE_LENGTH);

    let pcs_area = number(main, PCS_AREA);
    let pcs_x = number(main, PCS_X);
    let pcs_chord = number(geom, PCS_ROOT_CHORD);
    if installed(pcs_area)
        && Check::of(&[pcs_x, pcs_chord, fuselage_length], || {
            pcs_x <= fuselage_length - ROOT_CHORD_OVERHANG * pcs_chord
        })
        .failed()
    {
        result.note(text.pcs_x);
        disconnected += 1;
    }

    let vt_area = number(main, VT_AREA);
    let vt_x = number(main, VT_X);
    let vt_chord = number(geom, VT_ROOT_CHORD);
    if installed(vt_area)
        && Check::of(&[vt_x, vt_chord, fuselage_length], || {
            vt_x <= fuselage_length - ROOT_CHORD_OVERHANG * vt_chord
        })
        .failed()
    {
        result.note(text.vt_x);
        disconnected += 1;
    }

    let pcs_z = number(main, PCS_Z);
    let z_center = number(main, FUSE_Z_CENTER);
    let height = number(main, FUSE_HEIGHT);
    if installed(pcs_area)
        && Check::of(&[pcs_z, z_center, height], || {
            pcs_z >= z_center - height / 2.0 && pcs_z <= z_center + height / 2.0
        })
        .failed()
    {
        result.note(text.pcs_z);
        disconnected += 1;
    }

    let vt_y = number(main, VT_Y);
    let width = number(main, FUSE_WIDTH);
    if installed(vt_area) && Check::of(&[vt_y, width], || vt_y <= width / 2.0).failed() {
        result.note(text.vt_y);
        disconnected += 1;
    }

    if installed(number(main, STRAKE_AREA)) {
        let sweep = number(geom, WING_SWEEP);
        let y = number(geom, STRAKE_SPAN_Y);
        let strake = number(geom, STRAKE_APEX);
        let apex = number(geom, WING_APEX);
        // Strake geometry is mandatory once a strake is installed
        let reaches = Check::required(&[sweep, y, strake, apex], || {
            wing_leading_edge(sweep, y, apex) < strake + STRAKE_GAP
        });
        if reaches.failed() {
            result.note(text.strake);
            disconnected += 1;
        }
    }

    if is_present(fuselage_length) {
        let behind = COMPONENT_COLUMNS
            .filter(|&col| installed(number_at(main, COMPONENT_AREA_ROW, col)))
            .map(|col| number_at(main, COMPONENT_X_ROW, col))
            .filter(|x| x.is_finite())
            .any(|x| x >= fuselage_length);
        if behind {
            result.note(fmt_msg!(text.fuselage, fuselage_length));
            result.deduct(1);
        }
    }

    if disconnected > 0 {
        result.note(text.deduction);
        result.deduct(1);
    }

    result
}
