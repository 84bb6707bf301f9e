//! Reduction formulas: f(n·90° ± θ) as a signed cofunction of θ

use super::{FactRow, FactTable, Symbol};
use once_cell::sync::Lazy;
use std::borrow::Cow;

/// Phase shift applied to the free angle θ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Offset {
    /// −θ
    Negate,
    /// 90° + θ
    Plus90,
    /// 90° − θ
    Minus90,
    /// 180° + θ
    Plus180,
    /// 180° − θ
    Minus180,
    /// 270° + θ
    Plus270,
    /// 270° − θ
    Minus270,
    /// 360° + θ
    Plus360,
    /// 360° − θ
    Minus360,
    /// −90° + θ
    Neg90Plus,
    /// −90° − θ
    Neg90Minus,
    /// −180° + θ
    Neg180Plus,
    /// −180° − θ
    Neg180Minus,
    /// −270° + θ
    Neg270Plus,
    /// −270° − θ
    Neg270Minus,
}

impl Offset {
    pub const ALL: [Offset; 15] = [
        Offset::Negate,
        Offset::Plus90,
        Offset::Minus90,
        Offset::Plus180,
        Offset::Minus180,
        Offset::Plus270,
        Offset::Minus270,
        Offset::Plus360,
        Offset::Minus360,
        Offset::Neg90Plus,
        Offset::Neg90Minus,
        Offset::Neg180Plus,
        Offset::Neg180Minus,
        Offset::Neg270Plus,
        Offset::Neg270Minus,
    ];

    /// Split into `(quarter_turns, theta_sign)` so the expression reads
    /// `quarter_turns·90° + theta_sign·θ`
    #[inline]
    pub fn decompose(self) -> (i32, i32) {
        match self {
            Offset::Negate => (0, -1),
            Offset::Plus90 => (1, 1),
            Offset::Minus90 => (1, -1),
            Offset::Plus180 => (2, 1),
            Offset::Minus180 => (2, -1),
            Offset::Plus270 => (3, 1),
            Offset::Minus270 => (3, -1),
            Offset::Plus360 => (4, 1),
            Offset::Minus360 => (4, -1),
            Offset::Neg90Plus => (-1, 1),
            Offset::Neg90Minus => (-1, -1),
            Offset::Neg180Plus => (-2, 1),
            Offset::Neg180Minus => (-2, -1),
            Offset::Neg270Plus => (-3, 1),
            Offset::Neg270Minus => (-3, -1),
        }
    }

    fn as_id(self) -> &'static str {
        match self {
            Offset::Negate => "neg_t",
            Offset::Plus90 => "p90_t",
            Offset::Minus90 => "m90_t",
            Offset::Plus180 => "p180_t",
            Offset::Minus180 => "m180_t",
            Offset::Plus270 => "p270_t",
            Offset::Minus270 => "m270_t",
            Offset::Plus360 => "p360_t",
            Offset::Minus360 => "m360_t",
            Offset::Neg90Plus => "mneg90_t",
            Offset::Neg90Minus => "mneg90m_t",
            Offset::Neg180Plus => "mneg180_t",
            Offset::Neg180Minus => "mneg180m_t",
            Offset::Neg270Plus => "mneg270_t",
            Offset::Neg270Minus => "mneg270m_t",
        }
    }
}

impl Symbol for Offset {
    fn id(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.as_id())
    }

    fn latex(&self) -> Cow<'static, str> {
        let (quarter_turns, theta_sign) = self.decompose();
        let sign = if theta_sign < 0 { "-" } else { "+" };
        if quarter_turns == 0 {
            return Cow::Owned(format!(r"({}\theta)", if theta_sign < 0 { "-" } else { "" }));
        }
        Cow::Owned(format!(r"({}^\circ{}\theta)", quarter_turns * 90, sign))
    }

    fn parse_id(id: &str) -> Option<Self> {
        Offset::ALL.into_iter().find(|offset| offset.as_id() == id)
    }
}

/// Signed trigonometric function of θ, the answer alphabet for reductions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cofunction {
    Sin,
    NegSin,
    Cos,
    NegCos,
    Tan,
    NegTan,
    Cot,
    NegCot,
}

impl Cofunction {
    pub const ALL: [Cofunction; 8] = [
        Cofunction::Sin,
        Cofunction::NegSin,
        Cofunction::Cos,
        Cofunction::NegCos,
        Cofunction::Tan,
        Cofunction::NegTan,
        Cofunction::Cot,
        Cofunction::NegCot,
    ];

    fn as_id(self) -> &'static str {
        match self {
            Cofunction::Sin => "sin_t",
            Cofunction::NegSin => "-sin_t",
            Cofunction::Cos => "cos_t",
            Cofunction::NegCos => "-cos_t",
            Cofunction::Tan => "tan_t",
            Cofunction::NegTan => "-tan_t",
            Cofunction::Cot => "cot_t",
            Cofunction::NegCot => "-cot_t",
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            Cofunction::NegSin | Cofunction::NegCos | Cofunction::NegTan | Cofunction::NegCot
        )
    }
}

impl Symbol for Cofunction {
    fn id(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.as_id())
    }

    fn latex(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Cofunction::Sin => r"\sin\theta",
            Cofunction::NegSin => r"-\sin\theta",
            Cofunction::Cos => r"\cos\theta",
            Cofunction::NegCos => r"-\cos\theta",
            Cofunction::Tan => r"\tan\theta",
            Cofunction::NegTan => r"-\tan\theta",
            Cofunction::Cot => r"\dfrac{1}{\tan\theta}",
            Cofunction::NegCot => r"-\dfrac{1}{\tan\theta}",
        })
    }

    fn parse_id(id: &str) -> Option<Self> {
        Cofunction::ALL.into_iter().find(|value| value.as_id() == id)
    }
}

use Cofunction::{Cos, Cot, NegCos, NegCot, NegSin, NegTan, Sin, Tan};

/// `(offset, sin, cos, tan)`
const TRANSFORMATION_ROWS: [FactRow<Offset, Cofunction>; 15] = [
    (Offset::Negate, NegSin, Cos, NegTan),
    (Offset::Plus90, Cos, NegSin, NegCot),
    (Offset::Minus90, Cos, Sin, Cot),
    (Offset::Plus180, NegSin, NegCos, Tan),
    (Offset::Minus180, Sin, NegCos, NegTan),
    (Offset::Plus270, NegCos, Sin, NegCot),
    (Offset::Minus270, NegCos, NegSin, Cot),
    (Offset::Plus360, Sin, Cos, Tan),
    (Offset::Minus360, NegSin, Cos, NegTan),
    (Offset::Neg90Plus, NegCos, Sin, NegCot),
    (Offset::Neg90Minus, NegCos, NegSin, Cot),
    (Offset::Neg180Plus, NegSin, NegCos, Tan),
    (Offset::Neg180Minus, Sin, NegCos, NegTan),
    (Offset::Neg270Plus, Cos, NegSin, NegCot),
    (Offset::Neg270Minus, Cos, Sin, Cot),
];

/// Reduction formula table, built once on first use
pub static TRANSFORMATION_TABLE: Lazy<FactTable<Offset, Cofunction>> =
    Lazy::new(|| FactTable::from_rows("transformation", &TRANSFORMATION_ROWS));
