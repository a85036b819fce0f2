//! The build pipeline.
//!
//! Sequential, single-threaded orchestration of the stages: validate the
//! project structure, detect a toolchain, discover sources and headers,
//! resolve dependencies, synthesize one aggregate compiler invocation, and
//! execute it. Each stage either passes a value forward or short-circuits
//! with an error; no state survives the invocation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::OUTPUT_DIR;
use crate::discovery::{discover_sources, header_directories};
use crate::error::Result;
use crate::execute::{binary_path, run_command};
use crate::manifest::Manifest;
use crate::plan::CompilationPlan;
use crate::resolve::resolve_dependencies;
use crate::toolchain::{self, Toolchain};
use crate::validate::validate_structure;

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
  /// The toolchain the command was synthesized for.
  pub toolchain: Toolchain,
  /// The exact command that was executed.
  pub command: String,
  /// Path of the produced executable, relative to the project root.
  pub binary: PathBuf,
}

/// Run the whole build pipeline for the project at `root`.
///
/// Loads the manifest fresh, so repeated invocations share no state.
///
/// # Errors
///
/// Surfaces the first stage failure: `Config` (manifest/entry missing),
/// `Filesystem` (output directory), `ToolchainNotFound`, `Dependency`
/// (collected per-entry issues), `NoSourceFiles`, or `Execution` with the
/// compiler's exit code.
pub fn build_project(root: &Path) -> Result<BuildOutcome> {
  // Normalize the root so every derived path and the child process cwd
  // agree, including on Windows UNC-prefixed paths.
  let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

  let manifest = Manifest::load(&root)?;
  validate_structure(&root, &manifest)?;

  let toolchain = toolchain::detect()?;
  info!(%toolchain, project = %manifest.name, "starting build");

  let sources = discover_sources(&root, &manifest);
  let header_dirs = header_directories(&root);
  let dependencies = resolve_dependencies(&root, &manifest)?;
  debug!(
    sources = sources.len(),
    header_dirs = header_dirs.len(),
    dependencies = dependencies.len(),
    "inputs resolved"
  );

  let plan = CompilationPlan {
    toolchain,
    standard: manifest.standard,
    binary_name: manifest.name.clone(),
    sources,
    header_dirs,
    dependencies,
    output_dir: PathBuf::from(OUTPUT_DIR),
  };

  let command = plan.synthesize()?;
  run_command(&command, &root)?;

  Ok(BuildOutcome {
    toolchain,
    command,
    binary: binary_path(&manifest.name),
  })
}
