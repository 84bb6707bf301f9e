//! Reduction-formula quiz mode

use super::{ModeKind, QuizMode};
use crate::config::{KeySpec, QuizConfig};
use crate::error::Result;
use crate::facts::{Cofunction, FactTable, Offset, Symbol, TrigFunction, TRANSFORMATION_TABLE};
use crate::question::{OptionPolicy, TRANSFORMATION_OPTIONS};
use crate::range::{RangeSelector, RangeTag};

const ZERO_TO_180: [Offset; 3] = [Offset::Minus90, Offset::Plus90, Offset::Minus180];

const ZERO_TO_360: [Offset; 7] = [
    Offset::Minus90,
    Offset::Plus90,
    Offset::Minus180,
    Offset::Plus180,
    Offset::Minus270,
    Offset::Plus270,
    Offset::Minus360,
];

const NEG180_TO_180: [Offset; 7] = [
    Offset::Negate,
    Offset::Minus90,
    Offset::Plus90,
    Offset::Minus180,
    Offset::Neg90Plus,
    Offset::Neg90Minus,
    Offset::Neg180Plus,
];

/// "Simplify sin(90° − θ)" style questions
#[derive(Debug, Clone)]
pub struct TransformationMode {
    ranges: RangeSelector<Offset>,
}

impl TransformationMode {
    pub fn from_config(config: &QuizConfig) -> Result<Self> {
        let mut ranges = RangeSelector::from_table(
            &TRANSFORMATION_TABLE,
            &ZERO_TO_180,
            &ZERO_TO_360,
            &NEG180_TO_180,
        )?;

        for tag in RangeTag::ALL {
            if let Some(keys) = config.transformation_ranges.get(&tag) {
                let ids: Vec<String> = keys.iter().map(KeySpec::to_id).collect();
                ranges = ranges.with_override(&TRANSFORMATION_TABLE, tag, &ids)?;
            }
        }

        Ok(Self { ranges })
    }
}

impl QuizMode for TransformationMode {
    type Key = Offset;
    type Answer = Cofunction;

    #[inline]
    fn kind(&self) -> ModeKind {
        ModeKind::Transformation
    }

    #[inline]
    fn table(&self) -> &FactTable<Offset, Cofunction> {
        &TRANSFORMATION_TABLE
    }

    #[inline]
    fn ranges(&self) -> &RangeSelector<Offset> {
        &self.ranges
    }

    #[inline]
    fn options(&self) -> &OptionPolicy<Cofunction> {
        &TRANSFORMATION_OPTIONS
    }

    fn prompt(&self, function: TrigFunction, key: Offset) -> String {
        format!(r"\text{{{}}} {}", function.name(), key.latex())
    }
}
