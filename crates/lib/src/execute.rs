//! Child-process execution.
//!
//! The synthesized compiler command runs through the platform shell with
//! inherited stdio, so compiler diagnostics reach the user's terminal
//! directly; nothing is captured or parsed. The exit code is the sole
//! success/failure signal, surfaced verbatim on failure.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::consts::OUTPUT_DIR;
use crate::error::{BuildError, Result};

/// Run a synthesized command via the platform shell, blocking until it
/// completes.
///
/// # Errors
///
/// Returns `Execution` carrying the exit code if the child exits non-zero
/// (`None` when terminated by a signal), or an `Io` error if the shell
/// itself cannot be spawned.
pub fn run_command(command: &str, cwd: &Path) -> Result<()> {
  info!(%command, "executing");

  let (shell, flag) = shell_invocation();
  let status = Command::new(shell).arg(flag).arg(command).current_dir(cwd).status()?;

  if status.success() {
    Ok(())
  } else {
    Err(BuildError::Execution { code: status.code() })
  }
}

/// Path of the built executable for a project, relative to its root.
pub fn binary_path(name: &str) -> PathBuf {
  let file = if cfg!(windows) {
    format!("{}.exe", name)
  } else {
    name.to_string()
  };
  Path::new(OUTPUT_DIR).join(file)
}

/// Run the built executable directly (no shell), blocking until it exits.
///
/// Returns the child's exit code. Used by `cppack run`.
///
/// # Errors
///
/// Returns `Filesystem` if the binary has not been built yet.
pub fn run_binary(root: &Path, name: &str) -> Result<i32> {
  let relative = binary_path(name);
  let path = root.join(&relative);
  if !path.exists() {
    return Err(BuildError::Filesystem {
      path,
      message: "executable not found (run `cppack build` first)".to_string(),
    });
  }

  info!(binary = %relative.display(), "running");

  let status = Command::new(&path).current_dir(root).status()?;
  Ok(status.code().unwrap_or(-1))
}

fn shell_invocation() -> (&'static str, &'static str) {
  if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") }
}
