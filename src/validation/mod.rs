//! Manifest validation
//!
//! Checks each skill's manifest against the required schema and accumulates
//! findings across all skills. Nothing here aborts: the caller decides the
//! exit status from the finished [`ValidationReport`].

use std::fmt;

use tracing::debug;

use crate::domain::{MANIFEST_FILE, NAME_PATTERN, Skill, is_valid_skill_name};
use crate::manifest::{Metadata, read_metadata};

/// Descriptions longer than this (in characters) produce a warning
pub const MAX_DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One validation result for one skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub folder: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(skill: &Skill, message: impl Into<String>) -> Self {
        Self {
            folder: skill.folder_name.clone(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(skill: &Skill, message: impl Into<String>) -> Self {
        Self {
            folder: skill.folder_name.clone(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.folder, self.message)
    }
}

/// Accumulated findings of one validation run
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
    pub skills_checked: usize,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Warnings never fail a run
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }
}

fn non_empty<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    metadata
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Validate one skill given its parsed metadata (`None` when parsing failed)
pub fn validate_skill(skill: &Skill, metadata: Option<&Metadata>) -> Vec<Finding> {
    let Some(metadata) = metadata else {
        return vec![Finding::error(
            skill,
            format!("{MANIFEST_FILE} missing or invalid manifest header"),
        )];
    };

    let mut findings = Vec::new();
    let name = non_empty(metadata, "name");
    let description = non_empty(metadata, "description");

    if name.is_none() {
        findings.push(Finding::error(skill, "manifest missing required field 'name'"));
    }
    if description.is_none() {
        findings.push(Finding::error(
            skill,
            "manifest missing required field 'description'",
        ));
    }

    if let Some(name) = name {
        if name != skill.folder_name {
            findings.push(Finding::error(
                skill,
                format!(
                    "manifest name '{}' does not match folder name '{}'",
                    name, skill.folder_name
                ),
            ));
        }
        if !is_valid_skill_name(name) {
            findings.push(Finding::error(
                skill,
                format!("name '{name}' must match pattern {NAME_PATTERN}"),
            ));
        }
    }

    if let Some(description) = description {
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_CHARS {
            findings.push(Finding::warning(
                skill,
                format!(
                    "description is {len} chars (>{MAX_DESCRIPTION_CHARS}); consider shortening"
                ),
            ));
        }
    }

    findings
}

/// Read and validate every skill, continuing past failures
pub fn validate_all(skills: &[Skill]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for skill in skills {
        let findings = match read_metadata(skill) {
            Ok(metadata) => validate_skill(skill, metadata.as_ref()),
            Err(e) => vec![Finding::error(skill, e.to_string())],
        };
        debug!(skill = %skill.folder_name, findings = findings.len(), "validated skill");
        report.findings.extend(findings);
        report.skills_checked += 1;
    }
    report
}
