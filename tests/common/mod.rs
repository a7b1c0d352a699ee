//! Common test utilities for skillpack integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary skills repository plus a separate install destination
pub struct TestRepo {
    /// Temporary directory holding both the repo and the destination
    pub temp: TempDir,
    /// Repository root (canonical)
    pub root: PathBuf,
    /// Install destination (not created)
    pub dest: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let base = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        let root = base.join("repo");
        let dest = base.join("home/.claude/skills");
        std::fs::create_dir_all(&root).expect("Failed to create repo root");
        Self { temp, root, dest }
    }

    /// Create a skill folder whose manifest has the given name and description
    pub fn create_skill(&self, folder: &str, name: &str, description: &str) -> PathBuf {
        self.write_file(
            &format!("{folder}/SKILL.md"),
            &format!("---\nname: {name}\ndescription: \"{description}\"\n---\n\n# {name}\n"),
        );
        self.root.join(folder)
    }

    /// Create a skill folder with valid metadata matching its folder name
    pub fn create_valid_skill(&self, folder: &str) -> PathBuf {
        self.create_skill(folder, folder, &format!("The {folder} skill"))
    }

    /// Write a file relative to the repository root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the repository root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.root.join(path)).expect("Failed to read file")
    }

    /// `skillpack` command rooted at this repository, isolated from the environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("skillpack").expect("binary should be built");
        cmd.env_remove("SKILLPACK_ROOT");
        cmd.env_remove("SKILLPACK_DEST");
        cmd.env_remove("RUST_LOG");
        cmd.env("HOME", self.temp.path().join("home"));
        cmd.current_dir(&self.root);
        cmd
    }

    /// Install command with `--dest` pointing at this fixture's destination
    pub fn install_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("install").arg("--dest").arg(&self.dest);
        cmd
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of all entries in a zip archive, in stored order
pub fn zip_entry_names(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    (0..archive.len())
        .map(|i| {
            archive
                .by_index(i)
                .expect("Failed to read entry")
                .name()
                .to_string()
        })
        .collect()
}
