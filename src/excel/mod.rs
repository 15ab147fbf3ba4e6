//! Excel ingestion for graded submissions
//!
//! Reads the six rubric sheets of a JET workbook (.xlsm or .xlsx) with
//! calamine and patches the rubric's fallback cells.

mod loader;

pub use loader::{normalize, WorkbookFormat, WorkbookLoader};
