//! Shared helpers for e2e CLI tests.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use tempfile::TempDir;

/// A scratch directory the `circ` binary runs in; the snapshot file lands
/// here via the default `library.json` path.
pub struct CircWorkspace {
    pub root: PathBuf,
    _dir: TempDir,
}

impl CircWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp workspace");
        Self {
            root: dir.path().to_path_buf(),
            _dir: dir,
        }
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run the `circ` binary in the workspace and capture its output.
///
/// The label names the step in failure messages.
pub fn run_circ<I, S>(workspace: &CircWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = assert_cmd::Command::cargo_bin("circ")
        .expect("circ binary")
        .current_dir(&workspace.root)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("step '{label}' failed to run: {e}"));

    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
