//! Python bindings for the renderer
//!
//! The Python side owns page layout and widgets. It holds one `QuizEngine`,
//! forwards user events to it and draws the dicts it returns.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::facts::{Angle, Offset, Symbol, TrigFunction, FAMOUS_ANGLE_TABLE, TRANSFORMATION_TABLE};
use crate::mode::ModeKind;
use crate::range::RangeTag;
use crate::session::{HistoryRow, OptionView, QuizService, SessionView};

// ============================================================================
// Helper Functions
// ============================================================================

/// Deserialize a config dict by round-tripping it through JSON
fn config_from_dict(config: &Bound<'_, PyDict>) -> PyResult<QuizConfig> {
    let json: String = config
        .py()
        .import("json")?
        .call_method1("dumps", (config,))?
        .extract()?;
    Ok(QuizConfig::from_json_str(&json)?)
}

fn option_to_dict<'py>(py: Python<'py>, option: &OptionView) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", &option.id)?;
    dict.set_item("latex", &option.latex)?;
    Ok(dict)
}

fn row_to_dict<'py>(py: Python<'py>, row: &HistoryRow) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("number", row.number)?;
    dict.set_item("function", row.function.name())?;
    dict.set_item("key", &row.key)?;
    dict.set_item("prompt", &row.prompt)?;
    dict.set_item("user_answer", option_to_dict(py, &row.user_answer)?)?;
    dict.set_item("correct_answer", option_to_dict(py, &row.correct_answer)?)?;
    dict.set_item("is_correct", row.is_correct)?;
    dict.set_item("mark", row.mark)?;
    Ok(dict)
}

fn view_to_dict<'py>(py: Python<'py>, view: &SessionView) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("mode", view.mode.tag())?;
    dict.set_item("mode_title", view.mode_title)?;
    dict.set_item("phase", view.phase.name())?;
    dict.set_item("range", view.range.map(RangeTag::tag))?;
    dict.set_item("range_label", view.range_label)?;
    dict.set_item("question_number", view.question_number)?;
    dict.set_item("max_questions", view.max_questions)?;
    dict.set_item("score", view.score)?;
    dict.set_item("notice", view.notice.as_deref())?;

    match &view.question {
        Some(question) => {
            let q = PyDict::new(py);
            q.set_item("function", question.function.name())?;
            q.set_item("key", &question.key)?;
            q.set_item("key_latex", &question.key_latex)?;
            q.set_item("prompt", &question.prompt)?;
            q.set_item("option_set", question.option_set)?;
            dict.set_item("question", q)?;
        }
        None => dict.set_item("question", py.None())?,
    }

    let options = PyList::empty(py);
    for option in &view.options {
        options.append(option_to_dict(py, option)?)?;
    }
    dict.set_item("options", options)?;

    match &view.result {
        Some(result) => {
            let r = PyDict::new(py);
            r.set_item("score", result.score)?;
            r.set_item("max_questions", result.max_questions)?;
            r.set_item("elapsed_seconds", result.elapsed_seconds)?;
            r.set_item("elapsed_display", &result.elapsed_display)?;
            let history = PyList::empty(py);
            for row in &result.history {
                history.append(row_to_dict(py, row)?)?;
            }
            r.set_item("history", history)?;
            dict.set_item("result", r)?;
        }
        None => dict.set_item("result", py.None())?,
    }

    Ok(dict)
}

// ============================================================================
// QuizEngine PyClass
// ============================================================================

/// QuizEngine - owns every quiz session of the Python process
///
/// Sessions live in Rust memory and are addressed by integer id; Python only
/// ever sees view dicts.
#[pyclass(frozen)]
pub struct QuizEngine {
    service: QuizService,
}

#[pymethods]
impl QuizEngine {
    /// Create an engine
    ///
    /// # Arguments
    /// * `config` - Optional dict with `max_questions`, `restart_target`,
    ///   `functions`, `transformation_ranges`, `famous_angle_ranges`
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config {
            Some(dict) => config_from_dict(dict)?,
            None => QuizConfig::default(),
        };
        Ok(Self {
            service: QuizService::new(&config)?,
        })
    }

    /// Questions per round
    #[getter]
    fn max_questions(&self) -> usize {
        self.service.settings().max_questions
    }

    /// Number of live sessions
    #[getter]
    fn session_count(&self) -> usize {
        self.service.session_count()
    }

    /// Create a session on the range selection screen
    ///
    /// # Returns
    /// `(session_id, view)`
    fn open_session<'py>(
        &self,
        py: Python<'py>,
        mode: &str,
    ) -> PyResult<(u64, Bound<'py, PyDict>)> {
        let (id, view) = self.service.open_session(mode)?;
        Ok((id, view_to_dict(py, &view)?))
    }

    /// Create a session and generate its first question
    ///
    /// # Returns
    /// `(session_id, view)`
    ///
    /// # Raises
    /// ValueError for an unknown mode or range tag
    fn start_session<'py>(
        &self,
        py: Python<'py>,
        mode: &str,
        range: &str,
    ) -> PyResult<(u64, Bound<'py, PyDict>)> {
        let (id, view) = self.service.start_session(mode, range)?;
        Ok((id, view_to_dict(py, &view)?))
    }

    fn select_range<'py>(
        &self,
        py: Python<'py>,
        session_id: u64,
        range: &str,
    ) -> PyResult<Bound<'py, PyDict>> {
        let view = self.service.select_range(session_id, range)?;
        view_to_dict(py, &view)
    }

    /// Submit the clicked option id; `None` sets the session notice
    #[pyo3(signature = (session_id, option_id=None))]
    fn submit_answer<'py>(
        &self,
        py: Python<'py>,
        session_id: u64,
        option_id: Option<&str>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let view = self.service.submit_answer(session_id, option_id)?;
        view_to_dict(py, &view)
    }

    fn restart_session(&self, session_id: u64) -> PyResult<()> {
        Ok(self.service.restart_session(session_id)?)
    }

    fn end_session(&self, session_id: u64) -> PyResult<()> {
        Ok(self.service.end_session(session_id)?)
    }

    /// Drop finished sessions the renderer abandoned
    fn evict_finished(&self) -> usize {
        self.service.evict_finished()
    }

    fn view<'py>(&self, py: Python<'py>, session_id: u64) -> PyResult<Bound<'py, PyDict>> {
        let view = self.service.view(session_id)?;
        view_to_dict(py, &view)
    }

    /// Same view serialized as a JSON string
    fn view_json(&self, session_id: u64) -> PyResult<String> {
        Ok(self.service.view(session_id)?.to_json()?)
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Correct reduction for `function(offset)`, e.g. `("sin", "m90_t") -> "cos_t"`
#[pyfunction]
fn lookup_transformation(function: &str, offset: &str) -> PyResult<String> {
    let function: TrigFunction = function.parse()?;
    let offset = Offset::parse_id(offset).ok_or_else(|| QuizError::KeyNotFound {
        function: function.name().to_string(),
        key: offset.to_string(),
    })?;
    Ok(TRANSFORMATION_TABLE.lookup(function, offset)?.id().into_owned())
}

/// Exact value of `function` at `angle` degrees, e.g. `("tan", 90) -> "なし"`
#[pyfunction]
fn lookup_famous_angle(function: &str, angle: i32) -> PyResult<String> {
    let function: TrigFunction = function.parse()?;
    Ok(FAMOUS_ANGLE_TABLE
        .lookup(function, Angle(angle))?
        .id()
        .into_owned())
}

/// `[(tag, label), ...]` for the range buttons
#[pyfunction]
fn range_tags() -> Vec<(&'static str, &'static str)> {
    RangeTag::ALL
        .into_iter()
        .map(|tag| (tag.tag(), tag.label()))
        .collect()
}

/// `[(tag, title), ...]` for the mode selection screen
#[pyfunction]
fn mode_tags() -> Vec<(&'static str, &'static str)> {
    ModeKind::ALL
        .into_iter()
        .map(|kind| (kind.tag(), kind.title()))
        .collect()
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn trig_quiz_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(lookup_transformation, m)?)?;
    m.add_function(wrap_pyfunction!(lookup_famous_angle, m)?)?;
    m.add_function(wrap_pyfunction!(range_tags, m)?)?;
    m.add_function(wrap_pyfunction!(mode_tags, m)?)?;
    m.add_class::<QuizEngine>()?;
    Ok(())
}
