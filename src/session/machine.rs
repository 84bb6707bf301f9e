//! Quiz session state machine
//!
//! `Idle --select_range--> InProgress --submit × max--> Finished --restart--> Idle`

use crate::config::QuizSettings;
use crate::error::{QuizError, Result};
use crate::grader::{grade, HistoryEntry};
use crate::mode::QuizMode;
use crate::question::{next_question, Question};
use crate::range::RangeTag;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Mode chosen, waiting for a range
    Idle,
    InProgress,
    Finished,
}

impl Phase {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::InProgress => "in_progress",
            Phase::Finished => "finished",
        }
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub is_correct: bool,
    /// This submission completed the round
    pub finished: bool,
}

/// Round elapsed time in hundredths of a second, halves rounded up
#[inline]
pub fn elapsed_hundredths(elapsed: Duration) -> u128 {
    (elapsed.as_nanos() + 5_000_000) / 10_000_000
}

/// `12.35`-style rendering of `elapsed_hundredths`
pub fn format_elapsed(elapsed: Duration) -> String {
    let hundredths = elapsed_hundredths(elapsed);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// One user's run through a quiz mode
///
/// All mutation goes through `select_range`, `submit` and `restart`.
#[derive(Debug)]
pub struct Session<M: QuizMode> {
    mode: Arc<M>,
    settings: Arc<QuizSettings>,
    phase: Phase,
    /// Locked once chosen, until restart
    range: Option<RangeTag>,
    score: usize,
    /// Number of answered questions, 0-based index of the current one
    question_index: usize,
    /// Present only while `InProgress`
    current: Option<Question<M::Key, M::Answer>>,
    /// Append-only during a round, chronological
    history: Vec<HistoryEntry<M::Key, M::Answer>>,
    started_at: Option<Instant>,
    /// Frozen at the `Finished` transition
    elapsed: Option<Duration>,
    /// Last recoverable problem, cleared by the next accepted action
    notice: Option<String>,
}

impl<M: QuizMode> Session<M> {
    pub fn new(mode: Arc<M>, settings: Arc<QuizSettings>) -> Self {
        let capacity = settings.max_questions;
        Self {
            mode,
            settings,
            phase: Phase::Idle,
            range: None,
            score: 0,
            question_index: 0,
            current: None,
            history: Vec::with_capacity(capacity),
            started_at: None,
            elapsed: None,
            notice: None,
        }
    }

    fn reject(&self, action: &'static str) -> QuizError {
        log::warn!(
            "{} session rejected '{}' while {}",
            self.mode.kind(),
            action,
            self.phase.name()
        );
        QuizError::InvalidTransition {
            phase: self.phase.name(),
            action,
        }
    }

    /// Lock the range, reset the round and generate question 1
    ///
    /// Fails without touching the session if it is not `Idle`.
    pub fn select_range<R: Rng + ?Sized>(&mut self, range: RangeTag, rng: &mut R) -> Result<()> {
        if self.phase != Phase::Idle {
            return Err(self.reject("select a range"));
        }

        let question = next_question(&*self.mode, &self.settings.functions, range, rng)?;

        self.range = Some(range);
        self.score = 0;
        self.question_index = 0;
        self.history.clear();
        self.current = Some(question);
        self.started_at = Some(Instant::now());
        self.elapsed = None;
        self.notice = None;
        self.phase = Phase::InProgress;

        log::info!(
            "{} session started on range {} ({} questions)",
            self.mode.kind(),
            range,
            self.settings.max_questions
        );
        Ok(())
    }

    /// Grade `option` against the current question and advance
    ///
    /// Errors leave the round untouched. `NoSelection` and `UnknownOption`
    /// are also kept as the session notice until the next accepted action.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        option: Option<&str>,
        rng: &mut R,
    ) -> Result<SubmitOutcome> {
        if self.phase != Phase::InProgress {
            return Err(self.reject("submit an answer"));
        }
        let (Some(question), Some(range)) = (self.current.as_ref(), self.range) else {
            log::error!("{} session in progress without a question", self.mode.kind());
            return Err(self.reject("submit an answer"));
        };

        let entry = match grade(&*self.mode, question, option) {
            Ok(entry) => entry,
            Err(err) => {
                if err.is_recoverable() {
                    self.notice = Some(err.to_string());
                }
                return Err(err);
            }
        };

        let answered = self.question_index + 1;
        let finished = answered >= self.settings.max_questions;
        let next = if finished {
            None
        } else {
            Some(next_question(
                &*self.mode,
                &self.settings.functions,
                range,
                rng,
            )?)
        };

        let is_correct = entry.is_correct;
        if is_correct {
            self.score += 1;
        }
        self.history.push(entry);
        self.question_index = answered;
        self.current = next;
        self.notice = None;

        if finished {
            self.phase = Phase::Finished;
            self.elapsed = self.started_at.map(|started| started.elapsed());
            log::info!(
                "{} session finished: {}/{} in {}s",
                self.mode.kind(),
                self.score,
                self.settings.max_questions,
                self.elapsed.map(format_elapsed).unwrap_or_default()
            );
        }

        Ok(SubmitOutcome {
            is_correct,
            finished,
        })
    }

    /// Discard the round and return to `Idle`; the mode is kept
    pub fn restart(&mut self) {
        log::info!(
            "{} session restarted from {}",
            self.mode.kind(),
            self.phase.name()
        );
        self.phase = Phase::Idle;
        self.range = None;
        self.score = 0;
        self.question_index = 0;
        self.current = None;
        self.history.clear();
        self.started_at = None;
        self.elapsed = None;
        self.notice = None;
    }

    #[inline]
    pub fn mode(&self) -> &M {
        &self.mode
    }

    #[inline]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn range(&self) -> Option<RangeTag> {
        self.range
    }

    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    #[inline]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[inline]
    pub fn max_questions(&self) -> usize {
        self.settings.max_questions
    }

    #[inline]
    pub fn current_question(&self) -> Option<&Question<M::Key, M::Answer>> {
        self.current.as_ref()
    }

    #[inline]
    pub fn history(&self) -> &[HistoryEntry<M::Key, M::Answer>] {
        &self.history
    }

    /// Total round time, available once `Finished`
    #[inline]
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    #[inline]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Correct answer to the current question, for renderers that reveal it
    pub fn current_answer(&self) -> Option<Result<M::Answer>> {
        self.current
            .as_ref()
            .map(|question| self.mode.table().lookup(question.function, question.key))
    }

    #[cfg(test)]
    pub(crate) fn force_question(&mut self, function: crate::facts::TrigFunction, key: M::Key) {
        assert_eq!(self.phase, Phase::InProgress);
        self.current = Some(crate::question::build_question(&*self.mode, function, key).unwrap());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::facts::{Angle, Cofunction, ExactValue, Offset, Symbol, TrigFunction};
    use crate::mode::{FamousAngleMode, TransformationMode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn transformation_session() -> Session<TransformationMode> {
        let mode = TransformationMode::from_config(&QuizConfig::default()).unwrap();
        Session::new(Arc::new(mode), Arc::new(QuizSettings::default()))
    }

    fn famous_session() -> Session<FamousAngleMode> {
        let mode = FamousAngleMode::from_config(&QuizConfig::default()).unwrap();
        Session::new(Arc::new(mode), Arc::new(QuizSettings::default()))
    }

    /// Submit the first displayed option
    fn submit_first<M: QuizMode>(session: &mut Session<M>, rng: &mut StdRng) -> SubmitOutcome {
        let id = session.current_question().unwrap().options[0].id();
        session.submit(Some(id.as_ref()), rng).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = transformation_session();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.current_question().is_none());
        assert!(session.range().is_none());
    }

    #[test]
    fn test_select_range_generates_first_question() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = transformation_session();
        session.select_range(RangeTag::ZeroTo180, &mut rng).unwrap();

        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.range(), Some(RangeTag::ZeroTo180));
        let question = session.current_question().unwrap();
        assert!(session
            .mode()
            .ranges()
            .keys_for(RangeTag::ZeroTo180)
            .contains(&question.key));
    }

    #[test]
    fn test_range_is_locked() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = transformation_session();
        session.select_range(RangeTag::ZeroTo180, &mut rng).unwrap();
        let err = session.select_range(RangeTag::All, &mut rng).unwrap_err();
        assert!(matches!(err, QuizError::InvalidTransition { .. }));
        assert_eq!(session.range(), Some(RangeTag::ZeroTo180));
    }

    #[test]
    fn test_submit_rejected_while_idle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = transformation_session();
        let err = session.submit(Some("sin_t"), &mut rng).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidTransition {
                phase: "idle",
                action: "submit an answer"
            }
        );
    }

    #[test]
    fn test_cos_minus_90_scores() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = transformation_session();
        session.select_range(RangeTag::ZeroTo180, &mut rng).unwrap();
        session.force_question(TrigFunction::Cos, Offset::Minus90);

        let outcome = session.submit(Some("sin_t"), &mut rng).unwrap();
        assert!(outcome.is_correct);
        assert!(!outcome.finished);
        assert_eq!(session.score(), 1);
        assert_eq!(session.question_index(), 1);

        let entry = &session.history()[0];
        assert_eq!(entry.function, TrigFunction::Cos);
        assert_eq!(entry.key, Offset::Minus90);
        assert_eq!(entry.correct, Cofunction::Sin);
    }

    #[test]
    fn test_tan_90_numeric_answer_wrong() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = famous_session();
        session.select_range(RangeTag::All, &mut rng).unwrap();
        session.force_question(TrigFunction::Tan, Angle(90));

        let outcome = session.submit(Some("√3"), &mut rng).unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(session.score(), 0);
        assert_eq!(session.history()[0].correct, ExactValue::Undefined);
    }

    #[test]
    fn test_no_selection_leaves_state_untouched() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = transformation_session();
        session.select_range(RangeTag::All, &mut rng).unwrap();
        let before = session.current_question().cloned();

        assert_eq!(session.submit(None, &mut rng).unwrap_err(), QuizError::NoSelection);
        assert_eq!(session.notice(), Some("No option selected"));
        assert!(session.submit(Some("nonsense"), &mut rng).is_err());
        assert_eq!(session.notice(), Some("Unknown option: nonsense"));

        assert_eq!(session.question_index(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.current_question().cloned(), before);
    }

    #[test]
    fn test_notice_cleared_by_accepted_actions() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = transformation_session();
        session.select_range(RangeTag::All, &mut rng).unwrap();

        session.submit(None, &mut rng).unwrap_err();
        assert!(session.notice().is_some());
        submit_first(&mut session, &mut rng);
        assert!(session.notice().is_none());

        session.submit(Some(""), &mut rng).unwrap_err();
        session.restart();
        assert!(session.notice().is_none());

        session.select_range(RangeTag::All, &mut rng).unwrap();
        session.submit(None, &mut rng).unwrap_err();
        assert!(session.notice().is_some());

        // Rejected transitions are not recorded
        session.restart();
        session.submit(None, &mut rng).unwrap_err();
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_tenth_submit_finishes() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = famous_session();
        session.select_range(RangeTag::ZeroTo360, &mut rng).unwrap();

        for i in 0..9 {
            let outcome = submit_first(&mut session, &mut rng);
            assert!(!outcome.finished, "finished early at {}", i);
            assert!(session.current_question().is_some());
        }

        let outcome = submit_first(&mut session, &mut rng);
        assert!(outcome.finished);
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.history().len(), 10);
        assert!(session.current_question().is_none());
        assert!(session.elapsed().is_some());

        let err = session.submit(Some("0"), &mut rng).unwrap_err();
        assert!(matches!(err, QuizError::InvalidTransition { .. }));
        assert_eq!(session.history().len(), 10);
    }

    #[test]
    fn test_restart_discards_round() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = transformation_session();
        session.select_range(RangeTag::All, &mut rng).unwrap();
        submit_first(&mut session, &mut rng);

        session.restart();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.question_index(), 0);
        assert!(session.history().is_empty());
        assert!(session.range().is_none());
        assert!(session.elapsed().is_none());

        session.select_range(RangeTag::ZeroTo360, &mut rng).unwrap();
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.range(), Some(RangeTag::ZeroTo360));
    }

    #[test]
    fn test_elapsed_rounding_half_up() {
        assert_eq!(elapsed_hundredths(Duration::from_millis(1234)), 123);
        assert_eq!(elapsed_hundredths(Duration::from_millis(1235)), 124);
        assert_eq!(elapsed_hundredths(Duration::from_micros(1_234_999)), 123);
        assert_eq!(elapsed_hundredths(Duration::from_micros(1_235_000)), 124);
        assert_eq!(format_elapsed(Duration::from_millis(5)), "0.01");
        assert_eq!(format_elapsed(Duration::from_millis(4)), "0.00");
        assert_eq!(format_elapsed(Duration::from_millis(61_005)), "61.01");
        assert_eq!(format_elapsed(Duration::from_secs(7)), "7.00");
    }

    #[test]
    fn test_current_answer() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = transformation_session();
        assert!(session.current_answer().is_none());
        session.select_range(RangeTag::All, &mut rng).unwrap();
        session.force_question(TrigFunction::Tan, Offset::Plus90);
        assert_eq!(session.current_answer().unwrap().unwrap(), Cofunction::NegCot);
    }
}
