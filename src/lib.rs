//! Trig Quiz Core - Trigonometry self-quiz engine
//!
//! This crate provides the fact tables, question generation, grading and
//! session state machine behind an interactive trigonometry quiz, with
//! optional Python bindings via PyO3 (`python` feature) for the renderer.
//!
//! ```
//! use trig_quiz_core::config::QuizConfig;
//! use trig_quiz_core::session::{Phase, QuizService};
//!
//! let service = QuizService::new(&QuizConfig::default()).unwrap();
//! let (id, view) = service.start_session("transformation", "0~180").unwrap();
//! assert_eq!(view.phase, Phase::InProgress);
//!
//! let choice = view.options[0].id.clone();
//! let view = service.submit_answer(id, Some(&choice)).unwrap();
//! assert_eq!(view.question_number, 2);
//! ```

pub mod config;
pub mod error;
pub mod facts;
pub mod grader;
pub mod mode;
pub mod question;
pub mod range;
pub mod session;

#[cfg(feature = "python")]
mod python;

pub use crate::config::{QuizConfig, QuizSettings, RestartTarget};
pub use crate::error::{QuizError, Result};
pub use crate::mode::{FamousAngleMode, ModeKind, QuizMode, TransformationMode};
pub use crate::range::RangeTag;
pub use crate::session::{Phase, QuizService, Session, SessionId, SessionView};
