//! Angle fact tables
//!
//! Immutable lookups from (trigonometric function, key) to the exact answer.
//! Two instances exist: reduction formulas over phase-shifted θ, and exact
//! values at famous angles.

mod famous;
mod function;
mod table;
mod transformation;


pub use famous::*;
pub use function::*;
pub use table::*;
pub use transformation::*;

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// A symbolic key or answer with a stable wire id and a LaTeX rendering
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Stable identifier exchanged with the renderer, e.g. `"m90_t"`, `"-sin_t"`, `"120"`
    fn id(&self) -> Cow<'static, str>;

    /// LaTeX body without math delimiters
    fn latex(&self) -> Cow<'static, str>;

    /// Parse a symbol back from its id
    fn parse_id(id: &str) -> Option<Self>;
}
