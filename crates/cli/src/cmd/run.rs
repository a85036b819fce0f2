//! Implementation of the `cppack run` command.
//!
//! Loads the manifest for the project name, locates the built executable
//! under `build/`, and runs it with inherited stdio. The child's exit code
//! becomes this process's exit code.

use std::path::Path;

use cppack_lib::Manifest;
use cppack_lib::execute::run_binary;
use tracing::info;

use crate::output;

/// Execute the run command. Returns the process exit code.
pub fn cmd_run(dir: &str) -> i32 {
  let root = Path::new(dir);

  info!(dir = %root.display(), "run requested");

  let manifest = match Manifest::load(root) {
    Ok(m) => m,
    Err(err) => {
      output::print_error(&err.to_string());
      return 1;
    }
  };

  output::print_step(&format!("Running {}", manifest.name));

  match run_binary(root, &manifest.name) {
    Ok(0) => {
      output::print_success("Exited successfully");
      0
    }
    Ok(code) => {
      output::print_error(&format!("Exited with code {}", code));
      code
    }
    Err(err) => {
      output::print_error(&err.to_string());
      1
    }
  }
}
