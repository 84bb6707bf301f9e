//! Question sampling
//!
//! Sampling is memoryless: function and key are drawn uniformly each time,
//! so a question may repeat within a round.

use crate::error::{QuizError, Result};
use crate::facts::{Symbol, TrigFunction};
use crate::mode::QuizMode;
use crate::range::RangeTag;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question<K, V> {
    pub function: TrigFunction,
    pub key: K,
    /// Name of the option set the choices came from
    pub option_set: &'static str,
    /// Choices in display order
    pub options: SmallVec<[V; 9]>,
}

impl<K: Symbol, V: Symbol> Question<K, V> {
    /// Resolve a submitted id against this question's choices
    pub fn option_by_id(&self, id: &str) -> Option<V> {
        let id = id.trim();
        self.options
            .iter()
            .copied()
            .find(|option| option.id() == id)
    }
}

/// Build the question for a given function and key
pub fn build_question<M: QuizMode>(
    mode: &M,
    function: TrigFunction,
    key: M::Key,
) -> Result<Question<M::Key, M::Answer>> {
    let set = mode.options().set_for(function).ok_or_else(|| {
        QuizError::InvalidConfig(format!(
            "{} mode has no option set for {}",
            mode.kind(),
            function
        ))
    })?;

    Ok(Question {
        function,
        key,
        option_set: set.name,
        options: SmallVec::from_slice(set.options),
    })
}

/// Sample the next question from `range`
#[inline]
pub fn next_question<M: QuizMode, R: Rng + ?Sized>(
    mode: &M,
    functions: &[TrigFunction],
    range: RangeTag,
    rng: &mut R,
) -> Result<Question<M::Key, M::Answer>> {
    let function = *functions
        .choose(rng)
        .ok_or_else(|| QuizError::InvalidConfig("functions must not be empty".to_string()))?;

    let key = *mode
        .ranges()
        .keys_for(range)
        .choose(rng)
        .ok_or_else(|| QuizError::InvalidRange(range.tag().to_string()))?;

    let question = build_question(mode, function, key)?;
    log::debug!(
        "{} question: {}({}) from {} with {} options",
        mode.kind(),
        function,
        key.id(),
        range,
        question.options.len()
    );
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::facts::{Angle, Cofunction, ExactValue, Offset};
    use crate::mode::{FamousAngleMode, TransformationMode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_transformation_question() {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        let question = build_question(&mode, TrigFunction::Tan, Offset::Plus90).unwrap();
        assert_eq!(question.option_set, "tan_cot");
        assert_eq!(
            question.options.as_slice(),
            &[Cofunction::Tan, Cofunction::NegTan, Cofunction::Cot, Cofunction::NegCot]
        );
        assert_eq!(question.option_by_id("-cot_t"), Some(Cofunction::NegCot));
        assert_eq!(question.option_by_id("sin_t"), None);
    }

    #[test]
    fn test_build_famous_question() {
        let mode = FamousAngleMode::from_config(&QuizConfig::default()).unwrap();
        let question = build_question(&mode, TrigFunction::Cos, Angle(120)).unwrap();
        assert_eq!(question.options.len(), 9);
        assert_eq!(question.option_by_id(" -1/2 "), Some(ExactValue::NegHalf));
    }

    #[test]
    fn test_next_question_respects_function_set() {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let question =
                next_question(&mode, &[TrigFunction::Tan], RangeTag::All, &mut rng).unwrap();
            assert_eq!(question.function, TrigFunction::Tan);
            assert_eq!(question.option_set, "tan_cot");
        }
    }

    #[test]
    fn test_next_question_empty_functions() {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let err = next_question(&mode, &[], RangeTag::All, &mut rng).unwrap_err();
        assert!(matches!(err, QuizError::InvalidConfig(_)));
    }

    #[test]
    fn test_sampling_reaches_every_key() {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let question =
                next_question(&mode, &TrigFunction::ALL, RangeTag::ZeroTo180, &mut rng).unwrap();
            seen.insert(question.key);
        }
        assert_eq!(seen.len(), mode.ranges().keys_for(RangeTag::ZeroTo180).len());
    }
}
