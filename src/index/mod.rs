//! INDEX.md generation
//!
//! The index is regenerated wholesale on every run. Bad or missing metadata
//! never fails generation; the skill's folder name and an empty description
//! stand in for it.

use std::fs;
use std::path::Path;

use crate::domain::Skill;
use crate::error::{Result, file_write_failed};
use crate::manifest::{read_metadata_lenient, summary};

/// Default index file name under the repository root
pub const INDEX_FILE: &str = "INDEX.md";

const TITLE: &str = "# Skill index";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub name: String,
    pub description: String,
}

/// One row per skill, in the order given (discovery order is folder-name order)
pub fn build_rows(skills: &[Skill]) -> Vec<IndexRow> {
    skills
        .iter()
        .map(|skill| {
            let metadata = read_metadata_lenient(skill);
            let (name, description) = summary(skill, metadata.as_ref());
            IndexRow { name, description }
        })
        .collect()
}

pub fn render_index(rows: &[IndexRow]) -> String {
    let mut out = vec![
        TITLE.to_string(),
        String::new(),
        "| Skill | Description |".to_string(),
        "| --- | --- |".to_string(),
    ];
    for row in rows {
        out.push(format!(
            "| `{}` | {} |",
            row.name,
            escape_cell(&row.description)
        ));
    }
    out.push(String::new());
    out.join("\n")
}

// A bare pipe would split the description into an extra column
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Overwrite `path` with the rendered index
pub fn write_index(path: &Path, rows: &[IndexRow]) -> Result<()> {
    fs::write(path, render_index(rows)).map_err(|e| file_write_failed(path, e))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::MANIFEST_FILE;
    use tempfile::TempDir;

    fn row(name: &str, description: &str) -> IndexRow {
        IndexRow {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_render_empty_index() {
        assert_eq!(
            render_index(&[]),
            "# Skill index\n\n| Skill | Description |\n| --- | --- |\n"
        );
    }

    #[test]
    fn test_render_rows_in_order() {
        let rendered = render_index(&[
            row("code-review", "Reviews code changes"),
            row("debugging", ""),
        ]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[4], "| `code-review` | Reviews code changes |");
        assert_eq!(lines[5], "| `debugging` |  |");
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_escapes_pipes() {
        let rendered = render_index(&[row("a", "x | y")]);
        assert!(rendered.contains("| `a` | x \\| y |"));
    }

    #[test]
    fn test_build_rows_uses_fallbacks() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path();
        for (name, content) in [
            ("good", "---\nname: good\ndescription: \"  Good one \"\n---\n"),
            ("no-header", "plain text"),
        ] {
            fs::create_dir_all(root.join(name)).expect("Failed to create dir");
            fs::write(root.join(name).join(MANIFEST_FILE), content).expect("Failed to write");
        }
        let skills = crate::discovery::discover_skills(root).expect("Discovery failed");

        let rows = build_rows(&skills);
        assert_eq!(rows, vec![row("good", "Good one"), row("no-header", "")]);
    }

    #[test]
    fn test_write_index_overwrites() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join(INDEX_FILE);
        fs::write(&path, "stale content that is much longer than the new index\n".repeat(20))
            .expect("Failed to write stale index");

        write_index(&path, &[row("a", "b")]).expect("Write failed");
        let content = fs::read_to_string(&path).expect("Failed to read index");
        assert!(!content.contains("stale"));
        assert!(content.contains("| `a` | b |"));
    }

    #[test]
    fn test_write_index_unwritable_destination() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("missing-dir").join(INDEX_FILE);
        let err = write_index(&path, &[]).expect_err("Write should fail");
        assert!(err.to_string().contains("Failed to write file"));
    }
}
