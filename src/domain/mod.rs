//! Domain models for skillpack
//!
//! This module contains pure domain objects representing core entities.
//! A [`Skill`] is discovered fresh on every invocation and never mutated.

pub mod skill;

pub use skill::{MANIFEST_FILE, NAME_PATTERN, Skill, is_valid_skill_name};
