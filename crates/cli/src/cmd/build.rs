//! Implementation of the `cppack build` command.
//!
//! Runs the full build pipeline for the project in the given directory:
//! structure validation, toolchain detection, source/header discovery,
//! dependency resolution, command synthesis, and one aggregate compiler
//! invocation.

use std::path::Path;
use std::time::Instant;

use cppack_lib::{BuildError, build_project};
use tracing::info;

use crate::output::{self, format_duration};

/// Execute the build command. Returns the process exit code.
pub fn cmd_build(dir: &str, verbose: bool) -> i32 {
  let root = Path::new(dir);
  let started = Instant::now();

  info!(dir = %root.display(), "build requested");
  output::print_step("Starting build");

  match build_project(root) {
    Ok(outcome) => {
      info!(binary = %outcome.binary.display(), "build finished");
      if verbose {
        output::print_info(&format!("Toolchain: {}", outcome.toolchain));
        output::print_info(&format!("Command: {}", outcome.command));
      }
      output::print_success(&format!(
        "Build finished in {} ({})",
        format_duration(started.elapsed()),
        outcome.binary.display()
      ));
      0
    }
    Err(BuildError::Dependency { issues }) => {
      output::print_error("Failed to resolve dependencies:");
      for issue in &issues {
        eprintln!("    {}", issue);
      }
      1
    }
    Err(err) => {
      output::print_error(&err.to_string());
      1
    }
  }
}
