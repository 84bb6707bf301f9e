//! Read-only projections handed to the renderer

use super::{elapsed_hundredths, format_elapsed, Phase, Session};
use crate::error::{QuizError, Result};
use crate::facts::{Symbol, TrigFunction};
use crate::mode::{ModeKind, QuizMode};
use crate::range::RangeTag;
use serde::Serialize;

/// Correctness marks used in the review table
pub const MARK_CORRECT: &str = "○";
pub const MARK_WRONG: &str = "×";

/// One selectable choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: String,
    pub latex: String,
}

impl OptionView {
    pub fn of<V: Symbol>(value: V) -> Self {
        Self {
            id: value.id().into_owned(),
            latex: value.latex().into_owned(),
        }
    }
}

/// The question currently on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub function: TrigFunction,
    pub key: String,
    pub key_latex: String,
    pub prompt: String,
    pub option_set: &'static str,
}

/// One row of the end-of-round review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// 1-based
    pub number: usize,
    pub function: TrigFunction,
    pub key: String,
    pub prompt: String,
    pub user_answer: OptionView,
    pub correct_answer: OptionView,
    pub is_correct: bool,
    pub mark: &'static str,
}

/// Score, time and review, present only once the round is finished
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub score: usize,
    pub max_questions: usize,
    /// Rounded half-up to 2 decimals
    pub elapsed_seconds: f64,
    /// Same value with exactly two decimals, e.g. `"12.30"`
    pub elapsed_display: String,
    pub history: Vec<HistoryRow>,
}

/// Everything a renderer needs to draw the current screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub mode: ModeKind,
    pub mode_title: &'static str,
    pub phase: Phase,
    pub range: Option<RangeTag>,
    pub range_label: Option<&'static str>,
    /// 1-based number of the question on screen; 0 before a range is chosen
    pub question_number: usize,
    pub max_questions: usize,
    pub question: Option<QuestionView>,
    pub options: Vec<OptionView>,
    pub score: usize,
    /// Advisory message for a recoverable mistake such as no selection
    pub notice: Option<String>,
    pub result: Option<ResultView>,
}

impl SessionView {
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| QuizError::SerializationError(e.to_string()))
    }
}

impl<M: QuizMode> Session<M> {
    /// Project the session for display
    pub fn view(&self) -> SessionView {
        let mode = self.mode();
        let kind = mode.kind();

        let question = self.current_question().map(|q| QuestionView {
            function: q.function,
            key: q.key.id().into_owned(),
            key_latex: q.key.latex().into_owned(),
            prompt: mode.prompt(q.function, q.key),
            option_set: q.option_set,
        });

        let options = self
            .current_question()
            .map(|q| q.options.iter().copied().map(OptionView::of).collect())
            .unwrap_or_default();

        let question_number = match self.phase() {
            Phase::Idle => 0,
            Phase::InProgress => self.question_index() + 1,
            Phase::Finished => self.question_index(),
        };

        let result = match (self.phase(), self.elapsed()) {
            (Phase::Finished, Some(elapsed)) => {
                let history = self
                    .history()
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| HistoryRow {
                        number: i + 1,
                        function: entry.function,
                        key: entry.key.id().into_owned(),
                        prompt: mode.review_prompt(entry.function, entry.key),
                        user_answer: OptionView::of(entry.submitted),
                        correct_answer: OptionView::of(entry.correct),
                        is_correct: entry.is_correct,
                        mark: if entry.is_correct {
                            MARK_CORRECT
                        } else {
                            MARK_WRONG
                        },
                    })
                    .collect();

                Some(ResultView {
                    score: self.score(),
                    max_questions: self.max_questions(),
                    elapsed_seconds: elapsed_hundredths(elapsed) as f64 / 100.0,
                    elapsed_display: format_elapsed(elapsed),
                    history,
                })
            }
            _ => None,
        };

        SessionView {
            mode: kind,
            mode_title: kind.title(),
            phase: self.phase(),
            range: self.range(),
            range_label: self.range().map(RangeTag::label),
            question_number,
            max_questions: self.max_questions(),
            question,
            options,
            score: self.score(),
            notice: self.notice().map(str::to_string),
            result,
        }
    }
}
