//! Answer grading

use crate::error::{QuizError, Result};
use crate::facts::{Symbol, TrigFunction};
use crate::mode::QuizMode;
use crate::question::Question;

/// Immutable record of one answered question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry<K, V> {
    pub function: TrigFunction,
    pub key: K,
    pub submitted: V,
    pub correct: V,
    pub is_correct: bool,
}

/// Grade a submitted option id against the mode's fact table
///
/// Answers are exact symbols, so correctness is identity of the option,
/// never a numeric comparison.
///
/// # Errors
/// * `NoSelection` if `submitted` is absent or blank
/// * `UnknownOption` if it is not one of the question's choices
/// * `KeyNotFound` if the question's key is outside the table
pub fn grade<M: QuizMode>(
    mode: &M,
    question: &Question<M::Key, M::Answer>,
    submitted: Option<&str>,
) -> Result<HistoryEntry<M::Key, M::Answer>> {
    let submitted_id = submitted
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(QuizError::NoSelection)?;

    let submitted = question
        .option_by_id(submitted_id)
        .ok_or_else(|| QuizError::UnknownOption(submitted_id.to_string()))?;

    let correct = mode.table().lookup(question.function, question.key)?;
    let is_correct = submitted == correct;

    log::debug!(
        "graded {}({}): submitted {} expected {} -> {}",
        question.function,
        question.key.id(),
        submitted.id(),
        correct.id(),
        if is_correct { "correct" } else { "wrong" }
    );

    Ok(HistoryEntry {
        function: question.function,
        key: question.key,
        submitted,
        correct,
        is_correct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::facts::{Angle, Cofunction, ExactValue, Offset};
    use crate::mode::{FamousAngleMode, TransformationMode};
    use crate::question::build_question;

    #[test]
    fn test_cos_minus_90_is_sin() {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        let question = build_question(&mode, TrigFunction::Cos, Offset::Minus90).unwrap();

        let entry = grade(&mode, &question, Some("sin_t")).unwrap();
        assert!(entry.is_correct);
        assert_eq!(entry.correct, Cofunction::Sin);

        let entry = grade(&mode, &question, Some("-sin_t")).unwrap();
        assert!(!entry.is_correct);
        assert_eq!(entry.submitted, Cofunction::NegSin);
    }

    #[test]
    fn test_tan_90_undefined() {
        let mode = FamousAngleMode::from_config(&QuizConfig::default()).unwrap();
        let question = build_question(&mode, TrigFunction::Tan, Angle(90)).unwrap();

        assert!(grade(&mode, &question, Some("なし")).unwrap().is_correct);
        for option in &question.options {
            if *option == ExactValue::Undefined {
                continue;
            }
            let id = option.id();
            let entry = grade(&mode, &question, Some(id.as_ref())).unwrap();
            assert!(!entry.is_correct, "{} should be wrong", id);
            assert_eq!(entry.correct, ExactValue::Undefined);
        }
    }

    #[test]
    fn test_no_selection() {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        let question = build_question(&mode, TrigFunction::Sin, Offset::Negate).unwrap();
        assert_eq!(grade(&mode, &question, None).unwrap_err(), QuizError::NoSelection);
        assert_eq!(grade(&mode, &question, Some("  ")).unwrap_err(), QuizError::NoSelection);
    }

    #[test]
    fn test_option_outside_displayed_set() {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        let question = build_question(&mode, TrigFunction::Sin, Offset::Negate).unwrap();
        assert_eq!(
            grade(&mode, &question, Some("tan_t")).unwrap_err(),
            QuizError::UnknownOption("tan_t".to_string())
        );
    }

    #[test]
    fn test_key_outside_domain() {
        let mode = FamousAngleMode::from_config(&QuizConfig::default()).unwrap();
        let question = build_question(&mode, TrigFunction::Sin, Angle(10)).unwrap();
        assert!(matches!(
            grade(&mode, &question, Some("0")),
            Err(QuizError::KeyNotFound { .. })
        ));
    }
}
