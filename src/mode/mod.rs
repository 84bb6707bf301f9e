//! Quiz modes
//!
//! A mode bundles the capabilities the session engine needs: a fact table,
//! a range selector and an option-set policy. Both quizzes run through the
//! same generic `Session<M: QuizMode>`.

mod famous;
mod transformation;

pub use famous::*;
pub use transformation::*;

use crate::error::QuizError;
use crate::facts::{FactTable, Symbol, TrigFunction};
use crate::question::OptionPolicy;
use crate::range::RangeSelector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capabilities of one quiz mode
pub trait QuizMode: Send + Sync + 'static {
    type Key: Symbol;
    type Answer: Symbol;

    fn kind(&self) -> ModeKind;

    fn table(&self) -> &FactTable<Self::Key, Self::Answer>;

    fn ranges(&self) -> &RangeSelector<Self::Key>;

    fn options(&self) -> &OptionPolicy<Self::Answer>;

    /// LaTeX prompt for `function` at `key`, without math delimiters
    fn prompt(&self, function: TrigFunction, key: Self::Key) -> String;

    /// Prompt shown in the end-of-round review table
    fn review_prompt(&self, function: TrigFunction, key: Self::Key) -> String {
        self.prompt(function, key)
    }
}

/// Quiz mode identifier on the external interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// Reduction formulas, e.g. sin(90° − θ)
    Transformation,
    /// Exact values, e.g. cos 120°
    FamousAngle,
}

impl ModeKind {
    pub const ALL: [ModeKind; 2] = [ModeKind::Transformation, ModeKind::FamousAngle];

    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            ModeKind::Transformation => "transformation",
            ModeKind::FamousAngle => "famous_angle",
        }
    }

    /// Title shown on the mode selection screen
    #[inline]
    pub fn title(self) -> &'static str {
        match self {
            ModeKind::Transformation => "クイズ（補角・余角）",
            ModeKind::FamousAngle => "クイズ（有名角の三角比）",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ModeKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "transformation" | "transform" | "quiz1" => Ok(ModeKind::Transformation),
            "famous_angle" | "famous" | "quiz2" => Ok(ModeKind::FamousAngle),
            _ => Err(QuizError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_aliases() {
        assert_eq!("quiz1".parse::<ModeKind>().unwrap(), ModeKind::Transformation);
        assert_eq!("Famous-Angle".parse::<ModeKind>().unwrap(), ModeKind::FamousAngle);
        assert_eq!(
            "quiz3".parse::<ModeKind>().unwrap_err(),
            QuizError::InvalidMode("quiz3".to_string())
        );
    }

    #[test]
    fn test_tags_round_trip() {
        for kind in ModeKind::ALL {
            assert_eq!(kind.tag().parse::<ModeKind>().unwrap(), kind);
        }
    }
}
