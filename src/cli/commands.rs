use crate::config::{GraderConfig, RotationCheck};
use crate::core::Grader;
use crate::error::{JetError, JetResult};
use crate::excel::{WorkbookFormat, WorkbookLoader};
use crate::rules::rubric;
use crate::types::GradeResult;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options shared by every file in a `grade` batch
#[derive(Debug, Clone, Default)]
pub struct GradeOptions {
    pub json: bool,
    pub config: Option<PathBuf>,
    pub rotation_check: Option<RotationCheck>,
}

/// One graded file as emitted by `--json`
#[derive(Debug, Serialize)]
pub struct GradeReport {
    pub file_name: String,
    pub version_label: String,
    pub graded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_warning: Option<String>,
    #[serde(flatten)]
    pub result: GradeResult,
}

/// Load the YAML config (if any) and apply CLI overrides
pub fn resolve_config(
    path: Option<&Path>,
    rotation_check: Option<RotationCheck>,
) -> JetResult<GraderConfig> {
    let mut config = match path {
        Some(p) => GraderConfig::load(p)?,
        None => GraderConfig::default(),
    };
    if let Some(check) = rotation_check {
        config.rotation_check = check;
    }
    Ok(config)
}

/// Grade one file; ingestion errors propagate, grading itself cannot fail
pub fn grade_file(path: &Path, grader: &Grader, config: &GraderConfig) -> JetResult<GradeReport> {
    let format = WorkbookFormat::from_path(path)?;
    let workbook = WorkbookLoader::new(path, &config.version_label).load()?;
    let result = grader.grade(&workbook);

    Ok(GradeReport {
        file_name: workbook
            .file_name
            .clone()
            .unwrap_or_else(|| path.display().to_string()),
        version_label: workbook.version_label.clone(),
        graded_at: Utc::now(),
        macro_warning: format
            .macros_disabled()
            .then(|| config.macro_warning.clone()),
        result,
    })
}

/// Execute the grade command over a batch of workbooks
pub fn grade(files: Vec<PathBuf>, options: GradeOptions) -> JetResult<()> {
    let config = resolve_config(options.config.as_deref(), options.rotation_check)?;
    let grader = Grader::new(&config);

    let mut reports = Vec::new();
    let mut failed = 0;

    for (i, path) in files.iter().enumerate() {
        match grade_file(path, &grader, &config) {
            Ok(report) => {
                if !options.json {
                    if i > 0 {
                        println!();
                    }
                    print_report(path, &report);
                }
                reports.push(report);
            }
            Err(e) => {
                failed += 1;
                eprintln!(
                    "{}",
                    format!("❌ {}: {}", path.display(), e).bold().red()
                );
            }
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if failed > 0 {
        return Err(JetError::BatchFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

fn print_report(path: &Path, report: &GradeReport) {
    let result = &report.result;
    let score = format!("{}/{}", result.score, result.max_score).bold();
    let score = if result.score == result.max_score {
        score.green()
    } else if result.score >= result.max_score / 2 {
        score.yellow()
    } else {
        score.red()
    };

    println!("{}", "✈️  JET Grader".bold().green());
    println!("   File: {}", path.display());
    println!("   Rubric: {}", report.version_label);
    println!("   Result: {score}\n");

    if let Some(warning) = &report.macro_warning {
        println!("{}\n", format!("⚠️  {warning}").yellow());
    }

    // Transcript is printed verbatim
    println!("{}", result.feedback_log);
}

/// Execute the rubric command - show module order and active config
pub fn show_rubric(config_path: Option<PathBuf>, rotation_check: Option<RotationCheck>) -> JetResult<()> {
    let config = resolve_config(config_path.as_deref(), rotation_check)?;

    println!("{}", "📋 JET Grading Rubric".bold().green());
    println!("   Version: {}", config.version_label.bright_blue());
    println!("   Rotation check: {}", config.rotation_check.to_string().cyan());
    println!(
        "   File name in log: {}\n",
        if config.include_file_name { "yes" } else { "no" }
    );

    println!("{}", "Modules (in grading order):".bold().cyan());
    for (i, rule) in rubric(&config).iter().enumerate() {
        println!("   {}. {}", i + 1, rule.name());
    }

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
