use crate::config::GraderConfig;
use crate::fmt_msg;
use crate::messages::STRINGS;
use crate::rubric::{BASE_SCORE, MAX_SCORE};
use crate::rules::{rubric, Rule};
use crate::types::{GradeResult, Workbook};
use tracing::{debug, info};

/// Runs the rubric over one workbook snapshot
pub struct Grader {
    rules: Vec<Box<dyn Rule>>,
    include_file_name: bool,
}

impl Grader {
    #[must_use]
    pub fn new(config: &GraderConfig) -> Self {
        Self {
            rules: rubric(config),
            include_file_name: config.include_file_name,
        }
    }

    /// Grade a workbook. Never fails: missing data only affects which
    /// checks fire.
    pub fn grade(&self, workbook: &Workbook) -> GradeResult {
        let mut feedback: Vec<String> = Vec::new();
        let mut score = BASE_SCORE;

        if self.include_file_name {
            if let Some(name) = workbook.file_name.as_deref().filter(|n| !n.is_empty()) {
                feedback.push(name.to_string());
            }
        }

        for rule in &self.rules {
            let result = rule.evaluate(workbook);
            debug!(
                rule = rule.name(),
                delta = result.delta,
                lines = result.feedback.len(),
                "rule evaluated"
            );
            score += result.delta;
            feedback.extend(result.feedback);
        }

        let score = score.max(0);
        let score_line = fmt_msg!(STRINGS.summary.score, score);
        let cutout_line = STRINGS.summary.cutout.to_string();
        feedback.push(score_line.clone());
        feedback.push(cutout_line.clone());

        info!(
            file = workbook.file_name.as_deref().unwrap_or("<memory>"),
            score,
            "graded workbook"
        );

        GradeResult {
            score,
            max_score: MAX_SCORE,
            score_line,
            cutout_line,
            feedback_log: feedback.join("\n"),
        }
    }
}

/// Grade with a one-off [`Grader`]
pub fn grade_workbook(workbook: &Workbook, config: &GraderConfig) -> GradeResult {
    Grader::new(config).grade(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotationCheck;
    use crate::types::Sheet;
    use pretty_assertions::assert_eq;

    fn speed_config() -> GraderConfig {
        GraderConfig {
            rotation_check: RotationCheck::Speed,
            ..GraderConfig::default()
        }
    }

    #[test]
    fn test_empty_workbook() {
        // Aero pairs match (-2); mandatory cells fail in constraints,
        // stability, fuel volume and cost (-4)
        let wb = Workbook::builder().build();
        let result = grade_workbook(&wb, &speed_config());
        assert_eq!(result.score, 4);
        assert_eq!(result.max_score, 10);
        assert_eq!(result.score_line, "Score: 4/10");
        assert!(result.feedback_log.ends_with(&format!(
            "Score: 4/10\n{}",
            STRINGS.summary.cutout
        )));

        // Authority variant also fails on the missing rotation speeds
        let result = grade_workbook(&wb, &GraderConfig::default());
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_file_name_leads_the_log() {
        let wb = Workbook::builder().file_name("team7.xlsm").build();
        let result = grade_workbook(&wb, &GraderConfig::default());
        assert!(result.feedback_log.starts_with("team7.xlsm\n"));

        let quiet = GraderConfig {
            include_file_name: false,
            ..GraderConfig::default()
        };
        let result = grade_workbook(&wb, &quiet);
        assert!(!result.feedback_log.contains("team7.xlsm"));
    }

    #[test]
    fn test_score_clamps_at_zero() {
        // Eleven points of deductions against a base of ten
        let wb = Workbook::builder()
            .cell(Sheet::Miss, "C48", 10)
            .cell(Sheet::Miss, "C49", 5)
            .cell(Sheet::Main, "O18", 1)
            .cell(Sheet::Main, "X40", 2)
            .cell(Sheet::Main, "B32", 10)
            .cell(Sheet::Main, "C18", 60)
            .cell(Sheet::Main, "C23", 20)
            .cell(Sheet::Geom, "C8", 8)
            .build();
        let result = grade_workbook(&wb, &GraderConfig::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.score_line, "Score: 0/10");
    }

    #[test]
    fn test_grading_is_deterministic() {
        let wb = Workbook::builder()
            .file_name("repeat.xlsm")
            .cell(Sheet::Main, "N31", 187)
            .cell(Sheet::Main, "Q31", 130.0)
            .cell(Sheet::Gear, "J19", 25)
            .build();
        let grader = Grader::new(&GraderConfig::default());
        assert_eq!(grader.grade(&wb), grader.grade(&wb));
    }
}
