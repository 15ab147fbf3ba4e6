//! Grading engine: cell coercion, curve interpolation, message formatting
//! and the orchestrator that runs the rubric

pub mod format;
pub mod grader;
pub mod interpolate;
pub mod numeric;

pub use grader::{grade_workbook, Grader};
