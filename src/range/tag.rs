//! Range tags and tolerant tag parsing

use crate::error::QuizError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Accepts `0~180`, `0-180`, `0 – 180`, `-180〜180` and friends
static BOUNDS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*(?:°)?\s*[~〜–\-]\s*(-?\d+)\s*(?:°)?\s*$")
        .expect("range bounds pattern is valid")
});

/// Preset range a user picks before a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum RangeTag {
    /// 0° to 180°
    ZeroTo180,
    /// 0° to 360°
    ZeroTo360,
    /// −180° to 180°
    Neg180To180,
    /// Every key in the table
    All,
}

impl RangeTag {
    pub const ALL: [RangeTag; 4] = [
        RangeTag::ZeroTo180,
        RangeTag::ZeroTo360,
        RangeTag::Neg180To180,
        RangeTag::All,
    ];

    /// Canonical tag string
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            RangeTag::ZeroTo180 => "0~180",
            RangeTag::ZeroTo360 => "0~360",
            RangeTag::Neg180To180 => "-180~180",
            RangeTag::All => "ALL",
        }
    }

    /// LaTeX label shown on the range buttons
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            RangeTag::ZeroTo180 => r"0^\circ \sim 180^\circ",
            RangeTag::ZeroTo360 => r"0^\circ \sim 360^\circ",
            RangeTag::Neg180To180 => r"-180^\circ \sim 180^\circ",
            RangeTag::All => "全範囲",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            RangeTag::ZeroTo180 => 0,
            RangeTag::ZeroTo360 => 1,
            RangeTag::Neg180To180 => 2,
            RangeTag::All => 3,
        }
    }
}

impl fmt::Display for RangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RangeTag {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "全範囲" {
            return Ok(RangeTag::All);
        }

        let invalid = || QuizError::InvalidRange(s.to_string());
        let caps = BOUNDS_PATTERN.captures(trimmed).ok_or_else(invalid)?;
        let low: i32 = caps[1].parse().map_err(|_| invalid())?;
        let high: i32 = caps[2].parse().map_err(|_| invalid())?;

        match (low, high) {
            (0, 180) => Ok(RangeTag::ZeroTo180),
            (0, 360) => Ok(RangeTag::ZeroTo360),
            (-180, 180) => Ok(RangeTag::Neg180To180),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for RangeTag {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for RangeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
