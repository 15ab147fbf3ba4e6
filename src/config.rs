//! Grader configuration
//!
//! Every field has a default, so an empty (or absent) YAML file grades with
//! the stock rubric.

use crate::error::JetResult;
use crate::rubric;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which landing-gear rotation rule is in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationCheck {
    /// Rotation speed below takeoff speed, takeoff speed below the ceiling.
    /// Missing speeds fail.
    #[default]
    Authority,
    /// Rotation speed alone below the ceiling; skipped when missing
    Speed,
}

impl FromStr for RotationCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "authority" => Ok(RotationCheck::Authority),
            "speed" => Ok(RotationCheck::Speed),
            other => Err(format!(
                "unknown rotation check '{other}' (expected 'authority' or 'speed')"
            )),
        }
    }
}

impl fmt::Display for RotationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RotationCheck::Authority => "authority",
            RotationCheck::Speed => "speed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraderConfig {
    /// Label stamped on every graded workbook
    pub version_label: String,
    /// Start the feedback log with the submitted file name
    pub include_file_name: bool,
    pub rotation_check: RotationCheck,
    /// Advisory shown for macro-disabled (.xlsx) submissions
    pub macro_warning: String,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            version_label: rubric::VERSION_LABEL.to_string(),
            include_file_name: true,
            rotation_check: RotationCheck::default(),
            macro_warning: rubric::MACRO_WARNING.to_string(),
        }
    }
}

impl GraderConfig {
    /// Parse YAML config text
    pub fn from_yaml(content: &str) -> JetResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a YAML config file
    pub fn load(path: &Path) -> JetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraderConfig::default();
        assert_eq!(config.version_label, "Standalone Grader 2025 v1_0");
        assert!(config.include_file_name);
        assert_eq!(config.rotation_check, RotationCheck::Authority);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(GraderConfig::from_yaml("").unwrap(), GraderConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = GraderConfig::from_yaml("rotation_check: speed\ninclude_file_name: false\n")
            .unwrap();
        assert_eq!(config.rotation_check, RotationCheck::Speed);
        assert!(!config.include_file_name);
        assert_eq!(config.version_label, rubric::VERSION_LABEL);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(GraderConfig::from_yaml("max_score: 12\n").is_err());
    }

    #[test]
    fn test_rotation_check_from_str() {
        assert_eq!("Speed".parse::<RotationCheck>(), Ok(RotationCheck::Speed));
        assert_eq!(
            "authority".parse::<RotationCheck>(),
            Ok(RotationCheck::Authority)
        );
        assert!("both".parse::<RotationCheck>().is_err());
    }
}
