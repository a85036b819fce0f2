//! Dependency resolution against the local package cache.
//!
//! Each manifest declaration is mapped to a [`DependencyRecord`] by locating
//! it under `_packages/<name>/<version>/`. Resolution is a pure path lookup
//! over already-materialized cache contents: no network access, no version
//! constraint solving. Broken entries are collected and reported together
//! rather than aborting at the first failure.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::CACHE_DIR;
use crate::error::{BuildError, DependencyIssue, Result};
use crate::manifest::{DependencyDecl, Linkage, Manifest};

/// A resolved dependency, ready for command synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
  pub name: String,
  pub version: String,
  /// Header search path under the cache, when the package ships one.
  pub include_path: Option<PathBuf>,
  /// Library file passed to the linker; always `None` for header-only.
  pub library_path: Option<PathBuf>,
  pub linkage: Linkage,
}

/// Resolve every dependency declaration in the manifest.
///
/// Partial-failure semantics: an entry whose declaration is malformed or
/// whose cached files are missing is recorded as an issue, and resolution
/// of the remaining entries continues. If any issue was recorded the whole
/// resolution fails once it completes, reporting all issues together.
pub fn resolve_dependencies(root: &Path, manifest: &Manifest) -> Result<Vec<DependencyRecord>> {
  let mut records = Vec::new();
  let mut issues = Vec::new();

  for (name, decl) in &manifest.dependencies {
    match resolve_one(root, name, decl) {
      Ok(record) => records.push(record),
      Err(reason) => {
        warn!(dependency = %name, %reason, "dependency unresolved");
        issues.push(DependencyIssue {
          name: name.clone(),
          reason,
        });
      }
    }
  }

  if issues.is_empty() {
    Ok(records)
  } else {
    Err(BuildError::Dependency { issues })
  }
}

fn resolve_one(root: &Path, name: &str, decl: &DependencyDecl) -> std::result::Result<DependencyRecord, String> {
  let version = match decl.version() {
    Some(v) if !v.is_empty() => v.to_string(),
    _ => return Err("declaration is missing a version".to_string()),
  };

  let linkage = match decl.linkage_token() {
    None => Linkage::Static,
    Some(token) => {
      Linkage::parse(token).ok_or_else(|| format!("unknown linkage '{}' (expected header-only, static, or dynamic)", token))?
    }
  };

  let package_dir = root.join(CACHE_DIR).join(name).join(&version);
  if !package_dir.exists() {
    return Err(format!(
      "not found in {} cache (expected {})",
      CACHE_DIR,
      package_dir.display()
    ));
  }

  // A package without an include directory is legal (a
  // prebuilt-library-only package); the record just carries no search path.
  let include_dir = package_dir.join("include");
  let include_path = include_dir.exists().then_some(include_dir);

  let library_path = match linkage {
    Linkage::HeaderOnly => None,
    Linkage::Static | Linkage::Dynamic => {
      let lib = package_dir.join("lib").join(library_file_name(name, linkage));
      if !lib.exists() {
        return Err(format!("library file not found: {}", lib.display()));
      }
      Some(lib)
    }
  };

  debug!(dependency = %name, %version, %linkage, "dependency resolved");

  Ok(DependencyRecord {
    name: name.to_string(),
    version,
    include_path,
    library_path,
    linkage,
  })
}

/// Conventional library file name for a cached package.
fn library_file_name(name: &str, linkage: Linkage) -> String {
  let ext = match linkage {
    Linkage::Static => "a",
    Linkage::Dynamic => {
      if cfg!(windows) {
        "dll"
      } else if cfg!(target_os = "macos") {
        "dylib"
      } else {
        "so"
      }
    }
    // Unreachable by construction; header-only never looks up a library.
    Linkage::HeaderOnly => "a",
  };
  format!("lib{}.{}", name, ext)
}
