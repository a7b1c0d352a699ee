//! Display functions for skills and validation findings

use console::Style;

use crate::validation::{Finding, ValidationReport};

/// Display one skill in the `list` format
pub fn display_skill(folder: &str, name: &str, description: &str) {
    println!("  {}", Style::new().bold().yellow().apply_to(folder));
    if name != folder {
        println!("    {} {}", Style::new().bold().apply_to("Name:"), name);
    }
    if description.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            Style::new().dim().apply_to("None")
        );
    } else {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            description
        );
    }
}

fn bullet(finding: &Finding) -> String {
    format!(" - {finding}")
}

/// Print warnings to stdout, then errors to stderr
pub fn display_report(report: &ValidationReport) {
    let warnings: Vec<&Finding> = report.warnings().collect();
    if !warnings.is_empty() {
        println!("{}", Style::new().yellow().bold().apply_to("WARNINGS:"));
        for warning in warnings {
            println!("{}", bullet(warning));
        }
        println!();
    }

    let errors: Vec<&Finding> = report.errors().collect();
    if !errors.is_empty() {
        eprintln!(
            "{}",
            Style::new().red().bold().for_stderr().apply_to("ERRORS:")
        );
        for error in errors {
            eprintln!("{}", bullet(error));
        }
    }
}
