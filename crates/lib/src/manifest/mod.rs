//! Project manifest loading.
//!
//! The manifest (`cppack.json`) is the declarative description of a project:
//! its name, language standard, entry file, optional explicit source list,
//! and dependency declarations. It is loaded once per build invocation and
//! passed read-only into each pipeline stage.

mod types;

pub use types::*;

use std::path::Path;

use tracing::debug;

use crate::consts::MANIFEST_FILE;
use crate::error::{BuildError, Result};

impl Manifest {
  /// Load the manifest from `<root>/cppack.json`.
  ///
  /// # Errors
  ///
  /// Returns a `Config` error if the file is missing, unreadable, fails to
  /// parse, or declares an unsupported language standard.
  pub fn load(root: &Path) -> Result<Self> {
    let path = root.join(MANIFEST_FILE);
    if !path.exists() {
      return Err(BuildError::config(format!("missing manifest file: {}", path.display())));
    }

    let content = std::fs::read_to_string(&path)
      .map_err(|e| BuildError::config(format!("failed to read {}: {}", path.display(), e)))?;

    let manifest: Manifest = serde_json::from_str(&content)
      .map_err(|e| BuildError::config(format!("failed to parse {}: {}", path.display(), e)))?;

    debug!(name = %manifest.name, standard = %manifest.standard, "manifest loaded");

    Ok(manifest)
  }
}
