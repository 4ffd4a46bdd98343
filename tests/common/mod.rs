#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the repo-cloc binary.
#[macro_export]
macro_rules! repo_cloc {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("repo-cloc"))
    };
}

/// A temporary source tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and any missing parent directories, in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Go file with 2 code, 4 comment and 1 blank lines.
    pub fn create_go_file(&self, relative_path: &str) {
        self.create_file(relative_path, GO_SOURCE);
    }

    /// Python file with 2 code and 1 comment lines.
    pub fn create_python_file(&self, relative_path: &str) {
        self.create_file(relative_path, PYTHON_SOURCE);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const GO_SOURCE: &str = "// hello\n\nx := 1\n/* block\nstill in block\nend */\ny := 2\n";

pub const PYTHON_SOURCE: &str = "# helper\ndef f():\n    return 1\n";

/// Override table with only Go, using `#` as its line comment.
pub const HASH_GO_LANGUAGES: &str = r##"
[[languages]]
name = "Go"
extensions = [".go"]
line_comments = ["#"]
"##;
