//! Declarative function -> option-set mapping

use crate::facts::{Cofunction, ExactValue, Symbol, TrigFunction};

/// A named group of answer choices shown for some functions
#[derive(Debug)]
pub struct OptionSet<V: 'static> {
    pub name: &'static str,
    pub functions: &'static [TrigFunction],
    /// Display order
    pub options: &'static [V],
}

/// Which option set each function draws its choices from
#[derive(Debug)]
pub struct OptionPolicy<V: 'static> {
    sets: &'static [OptionSet<V>],
}

impl<V: 'static> OptionPolicy<V> {
    pub const fn new(sets: &'static [OptionSet<V>]) -> Self {
        Self { sets }
    }

    #[inline]
    pub fn sets(&self) -> &'static [OptionSet<V>] {
        self.sets
    }

    /// Option set for `function`, if the policy covers it
    #[inline]
    pub fn set_for(&self, function: TrigFunction) -> Option<&'static OptionSet<V>> {
        self.sets
            .iter()
            .find(|set| set.functions.contains(&function))
    }
}

impl<V: Symbol> OptionPolicy<V> {
    /// Every function maps to exactly one set
    pub fn is_total(&self) -> bool {
        TrigFunction::ALL.iter().all(|function| {
            self.sets
                .iter()
                .filter(|set| set.functions.contains(function))
                .count()
                == 1
        })
    }
}

static TRANSFORMATION_SIN_COS: [Cofunction; 4] = [
    Cofunction::Sin,
    Cofunction::NegSin,
    Cofunction::Cos,
    Cofunction::NegCos,
];

static TRANSFORMATION_TAN_COT: [Cofunction; 4] = [
    Cofunction::Tan,
    Cofunction::NegTan,
    Cofunction::Cot,
    Cofunction::NegCot,
];

static TRANSFORMATION_SETS: [OptionSet<Cofunction>; 2] = [
    OptionSet {
        name: "sin_cos",
        functions: &[TrigFunction::Sin, TrigFunction::Cos],
        options: &TRANSFORMATION_SIN_COS,
    },
    OptionSet {
        name: "tan_cot",
        functions: &[TrigFunction::Tan],
        options: &TRANSFORMATION_TAN_COT,
    },
];

/// Reduction-formula choices: sin/cos share ±sin θ, ±cos θ; tan gets ±tan θ, ±cot θ
pub static TRANSFORMATION_OPTIONS: OptionPolicy<Cofunction> =
    OptionPolicy::new(&TRANSFORMATION_SETS);

static FAMOUS_SIN_COS: [ExactValue; 9] = [
    ExactValue::Half,
    ExactValue::Sqrt2Over2,
    ExactValue::Sqrt3Over2,
    ExactValue::One,
    ExactValue::NegHalf,
    ExactValue::NegSqrt2Over2,
    ExactValue::NegSqrt3Over2,
    ExactValue::NegOne,
    ExactValue::Zero,
];

static FAMOUS_TAN: [ExactValue; 8] = [
    ExactValue::Zero,
    ExactValue::InvSqrt3,
    ExactValue::One,
    ExactValue::Sqrt3,
    ExactValue::Undefined,
    ExactValue::NegInvSqrt3,
    ExactValue::NegOne,
    ExactValue::NegSqrt3,
];

static FAMOUS_SETS: [OptionSet<ExactValue>; 2] = [
    OptionSet {
        name: "sin_cos",
        functions: &[TrigFunction::Sin, TrigFunction::Cos],
        options: &FAMOUS_SIN_COS,
    },
    OptionSet {
        name: "tan",
        functions: &[TrigFunction::Tan],
        options: &FAMOUS_TAN,
    },
];

/// Famous-angle choices: 9 values for sin/cos, 8 for tan including undefined
pub static FAMOUS_ANGLE_OPTIONS: OptionPolicy<ExactValue> = OptionPolicy::new(&FAMOUS_SETS);
