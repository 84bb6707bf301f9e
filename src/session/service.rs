//! Session service: many isolated sessions keyed by id
//!
//! This is the surface a renderer talks to. Each call handles one user
//! event and returns the view to draw next.

use super::{Phase, Session, SessionView, SubmitOutcome};
use crate::config::{QuizConfig, QuizSettings, RestartTarget};
use crate::error::{QuizError, Result};
use crate::mode::{FamousAngleMode, ModeKind, TransformationMode};
use crate::range::RangeTag;
use ahash::AHashMap;
use parking_lot::Mutex;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub type SessionId = u64;

/// A session of either quiz mode
#[derive(Debug)]
pub enum AnySession {
    Transformation(Session<TransformationMode>),
    FamousAngle(Session<FamousAngleMode>),
}

impl AnySession {
    #[inline]
    pub fn kind(&self) -> ModeKind {
        match self {
            AnySession::Transformation(_) => ModeKind::Transformation,
            AnySession::FamousAngle(_) => ModeKind::FamousAngle,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        match self {
            AnySession::Transformation(s) => s.phase(),
            AnySession::FamousAngle(s) => s.phase(),
        }
    }

    pub fn view(&self) -> SessionView {
        match self {
            AnySession::Transformation(s) => s.view(),
            AnySession::FamousAngle(s) => s.view(),
        }
    }

    pub fn select_range<R: Rng + ?Sized>(&mut self, range: RangeTag, rng: &mut R) -> Result<()> {
        match self {
            AnySession::Transformation(s) => s.select_range(range, rng),
            AnySession::FamousAngle(s) => s.select_range(range, rng),
        }
    }

    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        option: Option<&str>,
        rng: &mut R,
    ) -> Result<SubmitOutcome> {
        match self {
            AnySession::Transformation(s) => s.submit(option, rng),
            AnySession::FamousAngle(s) => s.submit(option, rng),
        }
    }

    pub fn restart(&mut self) {
        match self {
            AnySession::Transformation(s) => s.restart(),
            AnySession::FamousAngle(s) => s.restart(),
        }
    }
}

/// Owns every live session; sessions never share state
///
/// Sessions are only removed by `end_session`, `restart_session` under the
/// `mode_selection` target, or `evict_finished`. A renderer that abandons
/// sessions should call `evict_finished` periodically.
pub struct QuizService {
    settings: Arc<QuizSettings>,
    transformation: Arc<TransformationMode>,
    famous_angle: Arc<FamousAngleMode>,
    sessions: Mutex<AHashMap<SessionId, AnySession>>,
    next_id: AtomicU64,
}

impl QuizService {
    pub fn new(config: &QuizConfig) -> Result<Self> {
        let settings = config.settings()?;
        let transformation = TransformationMode::from_config(config)?;
        let famous_angle = FamousAngleMode::from_config(config)?;

        log::info!(
            "Quiz service ready: {} questions per round, restart to {:?}",
            settings.max_questions,
            settings.restart_target
        );

        Ok(Self {
            settings: Arc::new(settings),
            transformation: Arc::new(transformation),
            famous_angle: Arc::new(famous_angle),
            sessions: Mutex::new(AHashMap::new()),
            next_id: AtomicU64::new(1),
        })
    }

    #[inline]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    fn create(&self, kind: ModeKind) -> AnySession {
        match kind {
            ModeKind::Transformation => AnySession::Transformation(Session::new(
                self.transformation.clone(),
                self.settings.clone(),
            )),
            ModeKind::FamousAngle => AnySession::FamousAngle(Session::new(
                self.famous_angle.clone(),
                self.settings.clone(),
            )),
        }
    }

    fn insert(&self, session: AnySession) -> SessionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.sessions.lock().insert(id, session);
        id
    }

    fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut AnySession) -> Result<T>,
    ) -> Result<T> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(&id)
            .ok_or(QuizError::SessionNotFound(id))?;
        f(session)
    }

    /// Create a session waiting on the range selection screen
    pub fn open_session(&self, mode: &str) -> Result<(SessionId, SessionView)> {
        let kind: ModeKind = mode.parse()?;
        let session = self.create(kind);
        let view = session.view();
        let id = self.insert(session);
        log::debug!("opened {} session {}", kind, id);
        Ok((id, view))
    }

    /// Create a session and start it on `range` in one step
    ///
    /// An unknown mode or range is reported without creating anything.
    pub fn start_session(&self, mode: &str, range: &str) -> Result<(SessionId, SessionView)> {
        let kind: ModeKind = mode.parse()?;
        let range: RangeTag = range.parse()?;

        let mut session = self.create(kind);
        session.select_range(range, &mut rand::thread_rng())?;
        let view = session.view();
        let id = self.insert(session);
        log::debug!("started {} session {} on {}", kind, id, range);
        Ok((id, view))
    }

    /// Choose the range for an idle session
    pub fn select_range(&self, id: SessionId, range: &str) -> Result<SessionView> {
        let range: RangeTag = range.parse()?;
        self.with_session(id, |session| {
            session.select_range(range, &mut rand::thread_rng())?;
            Ok(session.view())
        })
    }

    /// Submit the user's choice for the current question
    ///
    /// A missing or unknown choice leaves the round as it was; the session
    /// keeps a notice, visible in every view until the next accepted action.
    pub fn submit_answer(&self, id: SessionId, option: Option<&str>) -> Result<SessionView> {
        self.with_session(id, |session| {
            match session.submit(option, &mut rand::thread_rng()) {
                Ok(_) => Ok(session.view()),
                Err(err) if err.is_recoverable() => {
                    log::warn!("session {}: {}", id, err);
                    Ok(session.view())
                }
                Err(err) => Err(err),
            }
        })
    }

    /// Leave the round according to the configured restart target
    pub fn restart_session(&self, id: SessionId) -> Result<()> {
        match self.settings.restart_target {
            RestartTarget::ModeSelection => self.end_session(id),
            RestartTarget::RangeSelection => self.with_session(id, |session| {
                session.restart();
                Ok(())
            }),
        }
    }

    /// Drop a session, returning the user to mode selection
    pub fn end_session(&self, id: SessionId) -> Result<()> {
        self.sessions
            .lock()
            .remove(&id)
            .map(|session| log::info!("{} session {} closed", session.kind(), id))
            .ok_or(QuizError::SessionNotFound(id))
    }

    pub fn view(&self, id: SessionId) -> Result<SessionView> {
        self.with_session(id, |session| Ok(session.view()))
    }

    pub fn phase(&self, id: SessionId) -> Result<Phase> {
        self.with_session(id, |session| Ok(session.phase()))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Drop every `Finished` session, returning how many were removed
    pub fn evict_finished(&self) -> usize {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, session| session.phase() != Phase::Finished);
        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("evicted {} finished sessions", evicted);
        }
        evicted
    }
}
