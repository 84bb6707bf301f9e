//! Famous-angle quiz mode

use super::{ModeKind, QuizMode};
use crate::config::{KeySpec, QuizConfig};
use crate::error::Result;
use crate::facts::{Angle, ExactValue, FactTable, TrigFunction, FAMOUS_ANGLE_TABLE};
use crate::question::{OptionPolicy, FAMOUS_ANGLE_OPTIONS};
use crate::range::{RangeSelector, RangeTag};

const ZERO_TO_180: [Angle; 9] = [
    Angle(0),
    Angle(30),
    Angle(45),
    Angle(60),
    Angle(90),
    Angle(120),
    Angle(135),
    Angle(150),
    Angle(180),
];

const ZERO_TO_360: [Angle; 17] = [
    Angle(0),
    Angle(30),
    Angle(45),
    Angle(60),
    Angle(90),
    Angle(120),
    Angle(135),
    Angle(150),
    Angle(180),
    Angle(210),
    Angle(225),
    Angle(240),
    Angle(270),
    Angle(300),
    Angle(315),
    Angle(330),
    Angle(360),
];

const NEG180_TO_180: [Angle; 17] = [
    Angle(-180),
    Angle(-150),
    Angle(-135),
    Angle(-120),
    Angle(-90),
    Angle(-60),
    Angle(-45),
    Angle(-30),
    Angle(0),
    Angle(30),
    Angle(45),
    Angle(60),
    Angle(90),
    Angle(120),
    Angle(135),
    Angle(150),
    Angle(180),
];

/// "What is cos 120°?" style questions
#[derive(Debug, Clone)]
pub struct FamousAngleMode {
    ranges: RangeSelector<Angle>,
}

impl FamousAngleMode {
    pub fn from_config(config: &QuizConfig) -> Result<Self> {
        let mut ranges = RangeSelector::from_table(
            &FAMOUS_ANGLE_TABLE,
            &ZERO_TO_180,
            &ZERO_TO_360,
            &NEG180_TO_180,
        )?;

        for tag in RangeTag::ALL {
            if let Some(keys) = config.famous_angle_ranges.get(&tag) {
                let ids: Vec<String> = keys.iter().map(KeySpec::to_id).collect();
                ranges = ranges.with_override(&FAMOUS_ANGLE_TABLE, tag, &ids)?;
            }
        }

        Ok(Self { ranges })
    }
}

impl QuizMode for FamousAngleMode {
    type Key = Angle;
    type Answer = ExactValue;

    #[inline]
    fn kind(&self) -> ModeKind {
        ModeKind::FamousAngle
    }

    #[inline]
    fn table(&self) -> &FactTable<Angle, ExactValue> {
        &FAMOUS_ANGLE_TABLE
    }

    #[inline]
    fn ranges(&self) -> &RangeSelector<Angle> {
        &self.ranges
    }

    #[inline]
    fn options(&self) -> &OptionPolicy<ExactValue> {
        &FAMOUS_ANGLE_OPTIONS
    }

    /// Negative angles are parenthesised: `\cos\left(-30^\circ\right)`
    fn prompt(&self, function: TrigFunction, key: Angle) -> String {
        if key.is_negative() {
            format!(r"{}\left({}^\circ\right)", function.latex(), key.degrees())
        } else {
            format!(r"{} {}^\circ", function.latex(), key.degrees())
        }
    }

    /// Function names are set as text: `\text{sin}\ 30^\circ`
    fn review_prompt(&self, function: TrigFunction, key: Angle) -> String {
        if key.is_negative() {
            format!(r"\text{{{}}}\left({}^\circ\right)", function.name(), key.degrees())
        } else {
            format!(r"\text{{{}}}\ {}^\circ", function.name(), key.degrees())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let mode = FamousAngleMode::from_config(&QuizConfig::default()).unwrap();
        assert_eq!(mode.ranges().keys_for(RangeTag::ZeroTo180).len(), 9);
        assert_eq!(mode.ranges().keys_for(RangeTag::ZeroTo360).len(), 17);
        assert_eq!(mode.ranges().keys_for(RangeTag::Neg180To180).len(), 17);
        assert_eq!(mode.ranges().keys_for(RangeTag::All).len(), 37);
    }

    #[test]
    fn test_prompt() {
        let mode = FamousAngleMode::from_config(&QuizConfig::default()).unwrap();
        assert_eq!(mode.prompt(TrigFunction::Cos, Angle(120)), r"\cos 120^\circ");
        assert_eq!(
            mode.prompt(TrigFunction::Sin, Angle(-30)),
            r"\sin\left(-30^\circ\right)"
        );
    }

    #[test]
    fn test_review_prompt() {
        let mode = FamousAngleMode::from_config(&QuizConfig::default()).unwrap();
        assert_eq!(
            mode.review_prompt(TrigFunction::Sin, Angle(30)),
            r"\text{sin}\ 30^\circ"
        );
        assert_eq!(
            mode.review_prompt(TrigFunction::Tan, Angle(-45)),
            r"\text{tan}\left(-45^\circ\right)"
        );
    }

    #[test]
    fn test_config_override_by_degrees() {
        let mut config = QuizConfig::default();
        config.famous_angle_ranges.insert(
            RangeTag::ZeroTo180,
            vec![KeySpec::Degrees(90), KeySpec::Id("270".to_string())],
        );
        let mode = FamousAngleMode::from_config(&config).unwrap();
        assert_eq!(
            mode.ranges().keys_for(RangeTag::ZeroTo180),
            &[Angle(90), Angle(270)]
        );

        config
            .famous_angle_ranges
            .insert(RangeTag::ZeroTo360, vec![KeySpec::Degrees(100)]);
        assert!(FamousAngleMode::from_config(&config).is_err());
    }
}
