// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A "compiler" that copies the source to the output and makes it executable.
/// Called as `fakecc -o <output> <source>`.
pub const COPYING_COMPILER: &str = "#!/bin/sh\ncp \"$3\" \"$2\" && chmod +x \"$2\"\n";

/// A "compiler" that always fails.
pub const FAILING_COMPILER: &str = "#!/bin/sh\necho 'main.c:1: error: deliberate failure' >&2\nexit 1\n";

/// A subject that echoes its standard input.
pub const ECHO_SUBJECT: &str = "#!/bin/sh\ncat\n";

/// A subject that always prints `wrong`.
pub const WRONG_SUBJECT: &str = "#!/bin/sh\necho wrong\n";

/// Writes an executable script.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, body).expect("Failed to write script");
    let mut permissions = fs::metadata(path).expect("Failed to stat script").permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).expect("Failed to chmod script");
}

/// A sandbox laid out like a project the harness runs in:
///
/// ```text
/// <root>/
/// ├── fakecc          (the compiler)
/// ├── main.c          (the subject "source", a shell script)
/// └── TestCases/Open/ (numbered case files)
/// ```
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new(compiler: &str, subject: &str) -> Self {
        let dir = tempdir().expect("Failed to create temporary directory");
        fs::create_dir_all(dir.path().join("TestCases").join("Open"))
            .expect("Failed to create cases directory");
        #[cfg(unix)]
        write_script(&dir.path().join("fakecc"), compiler);
        fs::write(dir.path().join("main.c"), subject).expect("Failed to write main.c");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn compiler(&self) -> PathBuf {
        self.root().join("fakecc")
    }

    pub fn report(&self) -> PathBuf {
        self.root().join("Report.txt")
    }

    pub fn read_report(&self) -> String {
        fs::read_to_string(self.report()).expect("Failed to read report")
    }

    /// Writes `open_<n>.txt` and `open_<n>.output.txt`.
    pub fn add_case(&self, n: usize, input: &str, expected: &str) {
        let dir = self.root().join("TestCases").join("Open");
        fs::write(dir.join(format!("open_{n}.txt")), input).expect("Failed to write input");
        fs::write(dir.join(format!("open_{n}.output.txt")), expected)
            .expect("Failed to write expected output");
    }
}
