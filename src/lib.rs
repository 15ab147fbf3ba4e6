//! jetgrade - autograder for JET aircraft-design workbooks
//!
//! Loads a student's JET spreadsheet, runs nine independent rubric
//! modules over an immutable snapshot of it, and produces a score out of
//! 10 with an ordered feedback transcript.
//!
//! # Example
//!
//! ```no_run
//! use jetgrade::config::GraderConfig;
//! use jetgrade::core::grade_workbook;
//! use jetgrade::excel::WorkbookLoader;
//!
//! let config = GraderConfig::default();
//! let workbook = WorkbookLoader::new("team7.xlsm", &config.version_label).load()?;
//! let result = grade_workbook(&workbook, &config);
//!
//! println!("{}", result.feedback_log);
//! # Ok::<(), jetgrade::error::JetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod messages;
pub mod rubric;
pub mod rules;
pub mod types;

// Re-export commonly used types
pub use config::{GraderConfig, RotationCheck};
pub use error::{JetError, JetResult};
pub use types::{CellValue, GradeResult, RuleResult, SheetMatrix, Workbook};
