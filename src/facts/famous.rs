//! Exact trigonometric values at famous angles

use super::{FactRow, FactTable, Symbol};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::fmt;

/// Angle in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Angle(pub i32);

impl Angle {
    #[inline]
    pub const fn degrees(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl Symbol for Angle {
    fn id(&self) -> Cow<'static, str> {
        Cow::Owned(self.0.to_string())
    }

    fn latex(&self) -> Cow<'static, str> {
        Cow::Owned(format!(r"{}^\circ", self.0))
    }

    fn parse_id(id: &str) -> Option<Self> {
        let trimmed = id.trim();
        let digits = trimmed.strip_suffix('°').unwrap_or(trimmed);
        digits.parse().ok().map(Angle)
    }
}

/// The 37 angles covered by the table, ascending
pub const FAMOUS_ANGLES: [i32; 37] = [
    -360, -330, -315, -300, -270, -240, -225, -210, -180, -150, -135, -120, -90, -60, -45, -30, 0,
    30, 45, 60, 90, 120, 135, 150, 180, 210, 225, 240, 270, 300, 315, 330, 360, 390, 405, 420, 450,
];

/// Exact symbolic value of a trig function at a famous angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExactValue {
    Zero,
    One,
    NegOne,
    Half,
    NegHalf,
    Sqrt2Over2,
    NegSqrt2Over2,
    Sqrt3Over2,
    NegSqrt3Over2,
    InvSqrt3,
    NegInvSqrt3,
    Sqrt3,
    NegSqrt3,
    /// tan at odd multiples of 90°
    Undefined,
}

impl ExactValue {
    pub const ALL: [ExactValue; 14] = [
        ExactValue::Zero,
        ExactValue::One,
        ExactValue::NegOne,
        ExactValue::Half,
        ExactValue::NegHalf,
        ExactValue::Sqrt2Over2,
        ExactValue::NegSqrt2Over2,
        ExactValue::Sqrt3Over2,
        ExactValue::NegSqrt3Over2,
        ExactValue::InvSqrt3,
        ExactValue::NegInvSqrt3,
        ExactValue::Sqrt3,
        ExactValue::NegSqrt3,
        ExactValue::Undefined,
    ];

    fn as_id(self) -> &'static str {
        match self {
            ExactValue::Zero => "0",
            ExactValue::One => "1",
            ExactValue::NegOne => "-1",
            ExactValue::Half => "1/2",
            ExactValue::NegHalf => "-1/2",
            ExactValue::Sqrt2Over2 => "√2/2",
            ExactValue::NegSqrt2Over2 => "-√2/2",
            ExactValue::Sqrt3Over2 => "√3/2",
            ExactValue::NegSqrt3Over2 => "-√3/2",
            ExactValue::InvSqrt3 => "1/√3",
            ExactValue::NegInvSqrt3 => "-1/√3",
            ExactValue::Sqrt3 => "√3",
            ExactValue::NegSqrt3 => "-√3",
            ExactValue::Undefined => "なし",
        }
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        self != ExactValue::Undefined
    }
}

impl Symbol for ExactValue {
    fn id(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.as_id())
    }

    fn latex(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            ExactValue::Zero => "0",
            ExactValue::One => "1",
            ExactValue::NegOne => "-1",
            ExactValue::Half => r"\frac{1}{2}",
            ExactValue::NegHalf => r"-\frac{1}{2}",
            ExactValue::Sqrt2Over2 => r"\frac{\sqrt{2}}{2}",
            ExactValue::NegSqrt2Over2 => r"-\frac{\sqrt{2}}{2}",
            ExactValue::Sqrt3Over2 => r"\frac{\sqrt{3}}{2}",
            ExactValue::NegSqrt3Over2 => r"-\frac{\sqrt{3}}{2}",
            ExactValue::InvSqrt3 => r"\frac{1}{\sqrt{3}}",
            ExactValue::NegInvSqrt3 => r"-\frac{1}{\sqrt{3}}",
            ExactValue::Sqrt3 => r"\sqrt{3}",
            ExactValue::NegSqrt3 => r"-\sqrt{3}",
            ExactValue::Undefined => r"\text{なし}",
        })
    }

    fn parse_id(id: &str) -> Option<Self> {
        let id = id.trim();
        ExactValue::ALL.into_iter().find(|value| value.as_id() == id)
    }
}

use ExactValue::{
    Half, InvSqrt3, NegHalf, NegInvSqrt3, NegOne, NegSqrt2Over2, NegSqrt3, NegSqrt3Over2, One,
    Sqrt2Over2, Sqrt3, Sqrt3Over2, Undefined, Zero,
};

/// `(angle, sin, cos, tan)`
const FAMOUS_ANGLE_ROWS: [FactRow<Angle, ExactValue>; 37] = [
    (Angle(-360), Zero, One, Zero),
    (Angle(-330), Half, Sqrt3Over2, InvSqrt3),
    (Angle(-315), Sqrt2Over2, Sqrt2Over2, One),
    (Angle(-300), Sqrt3Over2, Half, Sqrt3),
    (Angle(-270), One, Zero, Undefined),
    (Angle(-240), Sqrt3Over2, NegHalf, NegSqrt3),
    (Angle(-225), Sqrt2Over2, NegSqrt2Over2, NegOne),
    (Angle(-210), Half, NegSqrt3Over2, NegInvSqrt3),
    (Angle(-180), Zero, NegOne, Zero),
    (Angle(-150), NegHalf, NegSqrt3Over2, InvSqrt3),
    (Angle(-135), NegSqrt2Over2, NegSqrt2Over2, One),
    (Angle(-120), NegSqrt3Over2, NegHalf, Sqrt3),
    (Angle(-90), NegOne, Zero, Undefined),
    (Angle(-60), NegSqrt3Over2, Half, NegSqrt3),
    (Angle(-45), NegSqrt2Over2, Sqrt2Over2, NegOne),
    (Angle(-30), NegHalf, Sqrt3Over2, NegInvSqrt3),
    (Angle(0), Zero, One, Zero),
    (Angle(30), Half, Sqrt3Over2, InvSqrt3),
    (Angle(45), Sqrt2Over2, Sqrt2Over2, One),
    (Angle(60), Sqrt3Over2, Half, Sqrt3),
    (Angle(90), One, Zero, Undefined),
    (Angle(120), Sqrt3Over2, NegHalf, NegSqrt3),
    (Angle(135), Sqrt2Over2, NegSqrt2Over2, NegOne),
    (Angle(150), Half, NegSqrt3Over2, NegInvSqrt3),
    (Angle(180), Zero, NegOne, Zero),
    (Angle(210), NegHalf, NegSqrt3Over2, InvSqrt3),
    (Angle(225), NegSqrt2Over2, NegSqrt2Over2, One),
    (Angle(240), NegSqrt3Over2, NegHalf, Sqrt3),
    (Angle(270), NegOne, Zero, Undefined),
    (Angle(300), NegSqrt3Over2, Half, NegSqrt3),
    (Angle(315), NegSqrt2Over2, Sqrt2Over2, NegOne),
    (Angle(330), NegHalf, Sqrt3Over2, NegInvSqrt3),
    (Angle(360), Zero, One, Zero),
    (Angle(390), Half, Sqrt3Over2, InvSqrt3),
    (Angle(405), Sqrt2Over2, Sqrt2Over2, One),
    (Angle(420), Sqrt3Over2, Half, Sqrt3),
    (Angle(450), One, Zero, Undefined),
];

/// Famous-angle value table, built once on first use
pub static FAMOUS_ANGLE_TABLE: Lazy<FactTable<Angle, ExactValue>> =
    Lazy::new(|| FactTable::from_rows("famous_angle", &FAMOUS_ANGLE_ROWS));
