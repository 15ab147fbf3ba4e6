//! CLI command handlers

pub mod commands;

pub use commands::{grade, grade_file, resolve_config, show_rubric, GradeOptions, GradeReport};
