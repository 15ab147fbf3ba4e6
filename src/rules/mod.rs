//! Rubric rule modules
//!
//! Each module is a pure function of the workbook snapshot returning a score
//! delta and its feedback lines. Modules never see each other's results.

pub mod aero;
pub mod attachments;
pub mod constraints;
pub mod cost;
pub mod fuel;
pub mod landing_gear;
pub mod mission;
pub mod stability;
pub mod thrust;

use crate::config::{GraderConfig, RotationCheck};
use crate::types::{RuleResult, Workbook};

/// One independently evaluated rubric area
pub trait Rule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn evaluate(&self, workbook: &Workbook) -> RuleResult;
}

/// Adapter for plain `fn(&Workbook) -> RuleResult` checks
pub struct FnRule {
    name: &'static str,
    check: fn(&Workbook) -> RuleResult,
}

impl FnRule {
    pub const fn new(name: &'static str, check: fn(&Workbook) -> RuleResult) -> Self {
        Self { name, check }
    }
}

impl Rule for FnRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, workbook: &Workbook) -> RuleResult {
        (self.check)(workbook)
    }
}

/// All nine modules in grading order. Feedback order follows this order.
pub fn rubric(config: &GraderConfig) -> Vec<Box<dyn Rule>> {
    let gear = match config.rotation_check {
        RotationCheck::Authority => {
            FnRule::new("landing_gear", landing_gear::run_with_rotation_authority)
        }
        RotationCheck::Speed => FnRule::new("landing_gear", landing_gear::run_with_rotation_speed),
    };

    vec![
        Box::new(FnRule::new("aero", aero::run)),
        Box::new(FnRule::new("mission", mission::run)),
        Box::new(FnRule::new("thrust", thrust::run)),
        Box::new(FnRule::new("constraints", constraints::run)),
        Box::new(FnRule::new("attachments", attachments::run)),
        Box::new(FnRule::new("stability", stability::run)),
        Box::new(FnRule::new("fuel", fuel::run)),
        Box::new(FnRule::new("cost", cost::run)),
        Box::new(gear),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rubric_order() {
        let names: Vec<&str> = rubric(&GraderConfig::default())
            .iter()
            .map(|r| r.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "aero",
                "mission",
                "thrust",
                "constraints",
                "attachments",
                "stability",
                "fuel",
                "cost",
                "landing_gear",
            ]
        );
    }
}
