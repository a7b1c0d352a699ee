//! Console presentation layer
//!
//! Every per-skill outcome is a single `LABEL: message` status line. Labels are
//! coloured by [`Tone`] when the stream is a terminal.

pub mod display;

use std::fmt::Display;

use console::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Notice,
    Failure,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Success => Style::new().green().bold(),
            Tone::Notice => Style::new().yellow().bold(),
            Tone::Failure => Style::new().red().bold(),
        }
    }
}

/// Format a status line without printing it
pub fn format_status(label: &str, tone: Tone, message: impl Display) -> String {
    format!("{}: {}", tone.style().apply_to(label), message)
}

/// Print a status line to stdout
pub fn status(label: &str, tone: Tone, message: impl Display) {
    println!("{}", format_status(label, tone, message));
}

/// Print a status line to stderr
pub fn status_err(label: &str, tone: Tone, message: impl Display) {
    eprintln!(
        "{}: {}",
        tone.style().for_stderr().apply_to(label),
        message
    );
}

/// Final `Done. A: n, B: m` line of a batch command
pub fn summary(counts: &[(&str, usize)]) -> String {
    let parts: Vec<String> = counts
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect();
    format!("Done. {}", parts.join(", "))
}
