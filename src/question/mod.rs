//! Question generation module

mod generator;
mod options;


pub use generator::*;
pub use options::*;
