//! Materialization steps for a project tree
//!
//! - `operation`: a single filesystem step with its log message and error context

pub mod operation;

pub use operation::SynthOperation;
