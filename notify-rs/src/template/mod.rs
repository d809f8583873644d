//! Email template engine
//!
//! Parses templates once into a node tree and evaluates them against a
//! variable bag. Missing keys degrade to literal text instead of errors so
//! a stale template never fails a notification run.

pub mod defaults;
pub mod parser;
pub mod renderer;
pub mod value;

pub use renderer::render;
pub use value::{Value, VariableBag};
