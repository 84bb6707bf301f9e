//! Quiz session module

mod machine;
mod service;
mod view;


pub use machine::*;
pub use service::*;
pub use view::*;
