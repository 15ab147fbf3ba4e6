//! Numeric coercion and tri-state threshold checks
//!
//! Cells are read as `f64` with `NaN` standing for "no reliable value".
//! Comparisons never touch a NaN directly: every rubric comparison goes
//! through [`Check`], which makes the missing-data outcome explicit.

use crate::types::{CellValue, SheetMatrix};

/// Coerce a cell to a number; `NaN` when there is no usable value
pub fn to_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Absent => f64::NAN,
        CellValue::Number(n) => *n,
        CellValue::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        CellValue::Bool(true) => 1.0,
        CellValue::Bool(false) => 0.0,
    }
}

/// True when the value is a real reading
pub fn is_present(value: f64) -> bool {
    value.is_finite()
}

/// Number at an A1 reference
pub fn number(matrix: &SheetMatrix, reference: &str) -> f64 {
    to_number(matrix.cell(reference))
}

/// Number at a 1-based (row, column)
pub fn number_at(matrix: &SheetMatrix, row1: usize, col1: usize) -> f64 {
    to_number(matrix.cell_at(row1, col1))
}

/// Outcome of one threshold comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Pass,
    Fail,
    /// At least one input had no reliable value
    Absent,
}

impl Check {
    /// Evaluate `passes` only when every input is present
    pub fn of(inputs: &[f64], passes: impl FnOnce() -> bool) -> Self {
        if !inputs.iter().copied().all(is_present) {
            return Check::Absent;
        }
        if passes() {
            Check::Pass
        } else {
            Check::Fail
        }
    }

    /// A check whose inputs are mandatory: missing data counts as a failure
    pub fn required(inputs: &[f64], passes: impl FnOnce() -> bool) -> Self {
        Self::of(inputs, passes).fail_closed()
    }

    /// Fail when the reading is missing or differs from `target`
    #[allow(clippy::float_cmp)]
    pub fn equals(value: f64, target: f64) -> Self {
        Self::required(&[value], || value == target)
    }

    pub fn fail_closed(self) -> Self {
        match self {
            Check::Absent => Check::Fail,
            other => other,
        }
    }

    pub fn failed(self) -> bool {
        self == Check::Fail
    }

    pub fn passed(self) -> bool {
        self == Check::Pass
    }
}
