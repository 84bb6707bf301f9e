//! Configuration module
//!
//! `QuizConfig` is the serde-facing shape (JSON file, JSON string or a
//! Python dict on the binding side). `QuizSettings` is the validated,
//! immutable form sessions read from.

use crate::error::{QuizError, Result};
use crate::facts::TrigFunction;
use crate::range::RangeTag;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::path::Path;

/// Default number of questions per round
pub const DEFAULT_MAX_QUESTIONS: usize = 10;

/// Where a restart leaves the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartTarget {
    /// Drop the session; the user picks a quiz mode again
    #[default]
    ModeSelection,
    /// Keep the session and its mode; the user picks a range again
    RangeSelection,
}

/// A range key given either by id (`"m90_t"`, `"120"`) or as bare degrees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Degrees(i32),
    Id(String),
}

impl KeySpec {
    pub fn to_id(&self) -> String {
        match self {
            KeySpec::Degrees(degrees) => degrees.to_string(),
            KeySpec::Id(id) => id.trim().to_string(),
        }
    }
}

/// Raw quiz configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub max_questions: usize,
    pub restart_target: RestartTarget,
    pub functions: Vec<TrigFunction>,
    /// Per-tag overrides of the transformation offsets
    pub transformation_ranges: HashMap<RangeTag, Vec<KeySpec>>,
    /// Per-tag overrides of the famous angles
    pub famous_angle_ranges: HashMap<RangeTag, Vec<KeySpec>>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            restart_target: RestartTarget::default(),
            functions: TrigFunction::ALL.to_vec(),
            transformation_ranges: HashMap::new(),
            famous_angle_ranges: HashMap::new(),
        }
    }
}

impl QuizConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| QuizError::InvalidConfig(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            QuizError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        log::info!("Loading quiz config from {}", path.display());
        Self::from_json_str(&raw)
    }

    /// Validate the scalar settings. Range overrides are validated by the
    /// modes, which own the fact tables.
    pub fn settings(&self) -> Result<QuizSettings> {
        if self.max_questions == 0 {
            return Err(QuizError::InvalidConfig(
                "max_questions must be at least 1".to_string(),
            ));
        }

        let mut functions: SmallVec<[TrigFunction; 3]> = SmallVec::new();
        for function in &self.functions {
            if !functions.contains(function) {
                functions.push(*function);
            }
        }
        if functions.is_empty() {
            return Err(QuizError::InvalidConfig(
                "functions must not be empty".to_string(),
            ));
        }

        Ok(QuizSettings {
            max_questions: self.max_questions,
            restart_target: self.restart_target,
            functions,
        })
    }
}

/// Validated settings shared by every session of a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub max_questions: usize,
    pub restart_target: RestartTarget,
    /// Deduplicated, non-empty, in configured order
    pub functions: SmallVec<[TrigFunction; 3]>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            restart_target: RestartTarget::default(),
            functions: SmallVec::from_slice(&TrigFunction::ALL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = QuizConfig::default().settings().unwrap();
        assert_eq!(settings, QuizSettings::default());
        assert_eq!(settings.max_questions, 10);
        assert_eq!(settings.restart_target, RestartTarget::ModeSelection);
    }

    #[test]
    fn test_parse_json() {
        let config = QuizConfig::from_json_str(
            r#"{
                "max_questions": 5,
                "restart_target": "range_selection",
                "functions": ["sin", "tan", "sin"],
                "famous_angle_ranges": {"0~180": [30, "45", 60]},
                "transformation_ranges": {"ALL": ["m90_t"]}
            }"#,
        )
        .unwrap();

        assert_eq!(config.max_questions, 5);
        assert_eq!(config.restart_target, RestartTarget::RangeSelection);
        let ids: Vec<String> = config.famous_angle_ranges[&RangeTag::ZeroTo180]
            .iter()
            .map(KeySpec::to_id)
            .collect();
        assert_eq!(ids, vec!["30", "45", "60"]);

        let settings = config.settings().unwrap();
        assert_eq!(
            settings.functions.as_slice(),
            &[TrigFunction::Sin, TrigFunction::Tan]
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = QuizConfig::from_json_str(r#"{"max_questions": 3}"#).unwrap();
        assert_eq!(config.functions, TrigFunction::ALL.to_vec());
        assert_eq!(config.restart_target, RestartTarget::ModeSelection);
    }

    #[test]
    fn test_invalid_configs() {
        let zero = QuizConfig {
            max_questions: 0,
            ..Default::default()
        };
        assert!(matches!(zero.settings(), Err(QuizError::InvalidConfig(_))));

        let no_functions = QuizConfig {
            functions: vec![],
            ..Default::default()
        };
        assert!(matches!(no_functions.settings(), Err(QuizError::InvalidConfig(_))));

        assert!(QuizConfig::from_json_str(r#"{"max_question": 3}"#).is_err());
        assert!(QuizConfig::from_json_str(r#"{"famous_angle_ranges": {"0~90": [0]}}"#).is_err());
    }
}
