//! Command implementations for skillpack CLI
//!
//! Every command re-derives its state from the repository root: skills are
//! discovered fresh, nothing is cached between runs.

pub mod completions;
pub mod index;
pub mod install;
pub mod list;
pub mod package;
pub mod validate;
