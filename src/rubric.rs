//! Fixed rubric tables for the Fall 2025 design course iteration
//!
//! Coordinates and thresholds live here; the rule modules only know how to
//! apply them.

use crate::types::Sheet;

pub const VERSION_LABEL: &str = "Standalone Grader 2025 v1_0";

pub const BASE_SCORE: i32 = 10;
pub const MAX_SCORE: i32 = 10;

pub const MACRO_WARNING: &str = "This sheet has been saved as a .xlsx file which diables the macros in JET and makes Ps graphing impossible. Save as a macro enabled file outside your downloads folder for full functionality.";

//==============================================================================
// Fallback cells
//==============================================================================

const AERO_FALLBACK: &[&str] = &["G3", "G4", "G10", "G11", "A15", "A16"];

const MISS_FALLBACK: &[&str] = &[
    "C48", "D48", "E48", "F48", "G48", "H48", "I48", "J48", "K48", "L48", "M48", "N48", //
    "C49", "D49", "E49", "F49", "G49", "H49", "I49", "J49", "K49", "L49", "M49", "N49",
];

const MAIN_FALLBACK: &[&str] = &[
    "T3", "U3", "V3", "W3", "X3", "Y3", //
    "T4", "U4", "V4", "W4", "X4", "Y4", //
    "T6", "U6", "V6", "W6", "X6", "Y6", //
    "T7", "U7", "V7", "W7", "X7", "Y7", //
    "T8", "U8", "V8", "W8", "X8", "Y8", //
    "T9", "U9", "V9", "W9", "X9", "Y9", //
    "AB3", "AB4", "X12", "X13", "Y37", //
    "M10", "O10", "P10", "Q10", //
    "O18", "X40", "Q23", "Q31", "N31", //
    "P13", "Q13", //
    "K33", "L33", "M33", "N33", "P33", "R33", "S33", "V33", "W33", //
    "K35", "L35", "M35", "N35", "P35", "R35", "S35", "V35", "W35", //
    "K36", "L36", "M36", "N36", "P36", "R36", "S36", "V36", "W36", //
    "K38", "L38", "M38", "N38", "P38", "R38", "S38", "V38", "W38", //
    "K39", "L39", "M39", "N39", "P39", "R39", "S39", "V39", "W39", //
    "B32", "C23", "H23", //
    "D18", "D23", "D52", "F52", //
    "H24", "E52",
];

const CONSTS_FALLBACK: &[&str] = &[
    "K22", "K23", "K24", "K26", "K27", "K28", "K29", "K32", "AO42", "AQ41", "K33",
];

const GEAR_FALLBACK: &[&str] = &["J19", "L19", "L20", "M19", "M20", "N19", "N20"];

const GEOM_FALLBACK: &[&str] = &["C8", "C10", "M152", "K15", "L155", "L38"];

/// Cells patched into a sheet after ingestion when the grid left them empty
pub fn fallback_cells(sheet: Sheet) -> &'static [&'static str] {
    match sheet {
        Sheet::Aero => AERO_FALLBACK,
        Sheet::Miss => MISS_FALLBACK,
        Sheet::Main => MAIN_FALLBACK,
        Sheet::Consts => CONSTS_FALLBACK,
        Sheet::Gear => GEAR_FALLBACK,
        Sheet::Geom => GEOM_FALLBACK,
    }
}

//==============================================================================
// Constraint table
//==============================================================================

/// Target for one constraint-table column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Not checked for this row
    Free,
    /// Must equal the value
    Eq(f64),
    /// Must reach `min`; reaching `objective` earns a note
    Min { min: f64, objective: f64 },
}

/// One row of the Main tab constraint table (columns T..Y)
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSpec {
    pub label: &'static str,
    pub row: usize,
    pub mach: Target,
    pub altitude: Target,
    pub load_factor: Target,
    pub afterburner: f64,
    pub ps: Target,
    pub cdx: f64,
}

pub const CONSTRAINT_ALT_COL: usize = 20;
pub const CONSTRAINT_MACH_COL: usize = 21;
pub const CONSTRAINT_N_COL: usize = 22;
pub const CONSTRAINT_AB_COL: usize = 23;
pub const CONSTRAINT_PS_COL: usize = 24;
pub const CONSTRAINT_CDX_COL: usize = 25;

pub const MACH_TOLERANCE: f64 = 0.01;
pub const CDX_TOLERANCE: f64 = 0.001;

pub const CONSTRAINTS: [ConstraintSpec; 6] = [
    ConstraintSpec {
        label: "MaxMach",
        row: 3,
        mach: Target::Min { min: 2.0, objective: 2.2 },
        altitude: Target::Free,
        load_factor: Target::Free,
        afterburner: 100.0,
        ps: Target::Eq(0.0),
        cdx: 0.0,
    },
    ConstraintSpec {
        label: "CruiseMach",
        row: 4,
        mach: Target::Min { min: 1.5, objective: 1.8 },
        altitude: Target::Free,
        load_factor: Target::Free,
        afterburner: 0.0,
        ps: Target::Eq(0.0),
        cdx: 0.0,
    },
    ConstraintSpec {
        label: "Cmbt Turn1",
        row: 6,
        mach: Target::Eq(1.2),
        altitude: Target::Eq(30000.0),
        load_factor: Target::Min { min: 3.0, objective: 4.0 },
        afterburner: 100.0,
        ps: Target::Eq(0.0),
        cdx: 0.0,
    },
    ConstraintSpec {
        label: "Cmbt Turn2",
        row: 7,
        mach: Target::Eq(0.9),
        altitude: Target::Eq(10000.0),
        load_factor: Target::Min { min: 4.0, objective: 4.5 },
        afterburner: 100.0,
        ps: Target::Eq(0.0),
        cdx: 0.0,
    },
    ConstraintSpec {
        label: "Ps1",
        row: 8,
        mach: Target::Eq(1.15),
        altitude: Target::Eq(30000.0),
        load_factor: Target::Eq(1.0),
        afterburner: 100.0,
        ps: Target::Min { min: 400.0, objective: 500.0 },
        cdx: 0.0,
    },
    ConstraintSpec {
        label: "Ps2",
        row: 9,
        mach: Target::Eq(0.9),
        altitude: Target::Eq(10000.0),
        load_factor: Target::Eq(1.0),
        afterburner: 0.0,
        ps: Target::Min { min: 400.0, objective: 500.0 },
        cdx: 0.0,
    },
];

/// Tiered scalar requirement: fail past `threshold`, praise at `objective`
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub cell: &'static str,
    pub threshold: f64,
    pub objective: f64,
}

pub const RADIUS: Tier = Tier { cell: "Y37", threshold: 375.0, objective: 410.0 };
pub const AIM120: Tier = Tier { cell: "AB3", threshold: 8.0, objective: 8.0 };
pub const AIM9: Tier = Tier { cell: "AB4", threshold: 0.0, objective: 2.0 };
pub const TAKEOFF_DISTANCE: Tier = Tier { cell: "X12", threshold: 3000.0, objective: 2500.0 };
pub const LANDING_DISTANCE: Tier = Tier { cell: "X13", threshold: 5000.0, objective: 3500.0 };

//==============================================================================
// Constraint curves (Consts tab)
//==============================================================================

/// Wing-loading axis row on the Consts tab
pub const CURVE_AXIS_ROW: usize = 22;
/// Curve samples span columns K..AE
pub const CURVE_FIRST_COL: usize = 11;
pub const CURVE_LAST_COL: usize = 31;

#[derive(Debug, Clone, Copy)]
pub struct CurveRow {
    pub row: usize,
    pub label: &'static str,
}

pub const CURVE_ROWS: [CurveRow; 7] = [
    CurveRow { row: 23, label: "MaxMach" },
    CurveRow { row: 24, label: "Supercruise" },
    CurveRow { row: 26, label: "CombatTurn1" },
    CurveRow { row: 27, label: "CombatTurn2" },
    CurveRow { row: 28, label: "Ps1" },
    CurveRow { row: 29, label: "Ps2" },
    CurveRow { row: 32, label: "Takeoff" },
];

pub const DESIGN_WING_LOADING: &str = "P13";
pub const DESIGN_THRUST_TO_WEIGHT: &str = "Q13";
pub const LANDING_WING_LOADING_LIMIT: &str = "L33";

/// More failed curves than this means the design does not close at all
pub const CURVE_FAILURES_MANY: usize = 6;

//==============================================================================
// Recurring cost
//==============================================================================

#[derive(Debug, Clone, Copy)]
pub struct CostCeiling {
    pub fleet_size: f64,
    pub ceiling: f64,
    pub objective: f64,
}

pub const COST_CEILINGS: [CostCeiling; 2] = [
    CostCeiling { fleet_size: 187.0, ceiling: 115.0, objective: 100.0 },
    CostCeiling { fleet_size: 800.0, ceiling: 75.0, objective: 63.0 },
];
