//! Project structure validation.
//!
//! Preconditions that must hold before any other pipeline stage runs: the
//! manifest file and the entry source file exist, and the output directory
//! exists (created here if absent — the pipeline's only filesystem mutation
//! before the compiler runs).

use std::path::Path;

use tracing::debug;

use crate::consts::{MANIFEST_FILE, OUTPUT_DIR};
use crate::error::{BuildError, Result};
use crate::manifest::Manifest;

/// Validate the project structure for a build.
///
/// # Errors
///
/// Returns `Config` if the manifest file or the entry source file is
/// missing, or `Filesystem` if the output directory cannot be created
/// (e.g. permission denied).
pub fn validate_structure(root: &Path, manifest: &Manifest) -> Result<()> {
  let manifest_path = root.join(MANIFEST_FILE);
  if !manifest_path.exists() {
    return Err(BuildError::config(format!(
      "missing configuration file: {}",
      manifest_path.display()
    )));
  }

  let entry = root.join(&manifest.exec);
  if !entry.exists() {
    return Err(BuildError::config(format!(
      "missing entry source file: {}",
      entry.display()
    )));
  }

  let output_dir = root.join(OUTPUT_DIR);
  if !output_dir.exists() {
    std::fs::create_dir_all(&output_dir).map_err(|e| BuildError::Filesystem {
      path: output_dir.clone(),
      message: e.to_string(),
    })?;
    debug!(path = %output_dir.display(), "output directory created");
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn setup(root: &Path) -> Manifest {
    std::fs::write(
      root.join(MANIFEST_FILE),
      r#"{ "name": "demo", "cpp_version": "17", "exec": "src/main.cpp" }"#,
    )
    .unwrap();
    Manifest::load(root).unwrap()
  }

  #[test]
  fn valid_structure_creates_output_dir() {
    let temp = TempDir::new().unwrap();
    let manifest = setup(temp.path());
    std::fs::create_dir_all(temp.path().join("src")).unwrap();
    std::fs::write(temp.path().join("src/main.cpp"), "int main() {}\n").unwrap();

    validate_structure(temp.path(), &manifest).unwrap();
    assert!(temp.path().join(OUTPUT_DIR).is_dir());
  }

  #[test]
  fn missing_entry_file_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let manifest = setup(temp.path());

    let err = validate_structure(temp.path(), &manifest).unwrap_err();
    assert!(matches!(err, BuildError::Config { .. }));
    assert!(err.to_string().contains("entry source file"));
    // Nothing may be created when validation fails.
    assert!(!temp.path().join(OUTPUT_DIR).exists());
  }

  #[test]
  fn missing_manifest_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let manifest = setup(temp.path());
    std::fs::remove_file(temp.path().join(MANIFEST_FILE)).unwrap();

    let err = validate_structure(temp.path(), &manifest).unwrap_err();
    assert!(matches!(err, BuildError::Config { .. }));
  }

  #[test]
  fn existing_output_dir_is_left_alone() {
    let temp = TempDir::new().unwrap();
    let manifest = setup(temp.path());
    std::fs::create_dir_all(temp.path().join("src")).unwrap();
    std::fs::write(temp.path().join("src/main.cpp"), "").unwrap();
    std::fs::create_dir_all(temp.path().join(OUTPUT_DIR)).unwrap();
    std::fs::write(temp.path().join(OUTPUT_DIR).join("stale"), "").unwrap();

    validate_structure(temp.path(), &manifest).unwrap();
    assert!(temp.path().join(OUTPUT_DIR).join("stale").exists());
  }
}
