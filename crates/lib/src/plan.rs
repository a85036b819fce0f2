//! Compilation plan and command synthesis.
//!
//! A [`CompilationPlan`] is the fully resolved, immutable input set to
//! command synthesis: toolchain identity, language standard, binary name,
//! source list, header search directories, dependency records, and output
//! directory. It is built once per invocation, synthesized into a single
//! aggregate compile-and-link command, and discarded.
//!
//! Synthesis bifurcates entirely on toolchain identity. MSVC and GCC/Clang
//! do not differ in flag spelling alone but in invocation grammar, so each
//! branch assembles the whole command; there is no shared flag template.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::manifest::{Linkage, Standard};
use crate::resolve::DependencyRecord;
use crate::toolchain::Toolchain;

/// Everything command synthesis needs, resolved up front.
#[derive(Debug, Clone)]
pub struct CompilationPlan {
  pub toolchain: Toolchain,
  pub standard: Standard,
  /// Output binary stem, taken from the manifest name.
  pub binary_name: String,
  /// Compilation units, relative to the project root.
  pub sources: Vec<PathBuf>,
  /// Discovered header search directories (deduplicated set).
  pub header_dirs: BTreeSet<PathBuf>,
  pub dependencies: Vec<DependencyRecord>,
  /// Directory receiving the artifact, relative to the project root.
  pub output_dir: PathBuf,
}

impl CompilationPlan {
  /// Synthesize the single shell-invokable compiler command for this plan.
  ///
  /// All sources are compiled and linked in one invocation; there is no
  /// per-file object step. Every path is quoted to tolerate embedded
  /// spaces. Discovered header directories come first, then dependency
  /// include paths, without deduplication between the two.
  ///
  /// # Errors
  ///
  /// Returns `NoSourceFiles` if the source list is empty. Explicit manifest
  /// source lists are only validated for non-emptiness here, after missing
  /// entries have been dropped by discovery.
  pub fn synthesize(&self) -> Result<String> {
    if self.sources.is_empty() {
      return Err(BuildError::NoSourceFiles);
    }

    let cmd = if self.toolchain.is_msvc() {
      self.synthesize_msvc()
    } else {
      self.synthesize_gnu()
    };

    debug!(toolchain = %self.toolchain, %cmd, "command synthesized");
    Ok(cmd)
  }

  /// MSVC grammar: `/std:` standard, fixed exception/diagnostic flags,
  /// `/I"dir"` includes, `/Fo`/`/Fe` outputs, then sources.
  ///
  /// Only static-linkage library paths are handed to the linker in this
  /// branch. Dynamic-linkage dependencies are deliberately omitted; the
  /// behavior is carried over from the original tool and is flagged in
  /// DESIGN.md as a suspected defect rather than silently changed.
  fn synthesize_msvc(&self) -> String {
    let mut cmd = format!("{} /std:{} /EHsc /nologo", self.toolchain.driver(), self.standard);

    for dir in self.include_paths() {
      let _ = write!(cmd, " /I\"{}\"", dir.display());
    }

    let out = self.output_dir.display();
    let _ = write!(cmd, " /Fo{}/ /Fe{}/{}", out, out, self.binary_name);

    for src in &self.sources {
      let _ = write!(cmd, " \"{}\"", src.display());
    }

    for dep in &self.dependencies {
      if dep.linkage == Linkage::Static {
        if let Some(lib) = &dep.library_path {
          let _ = write!(cmd, " \"{}\"", lib.display());
        }
      }
    }

    cmd
  }

  /// GCC/Clang grammar: `-std=` standard, warning flags, `-I"dir"`
  /// includes, `-o` output, then sources and both static and dynamic
  /// dependency libraries.
  fn synthesize_gnu(&self) -> String {
    let mut cmd = format!(
      "{} -std={} -Wall -Wextra -pedantic",
      self.toolchain.driver(),
      self.standard
    );

    for dir in self.include_paths() {
      let _ = write!(cmd, " -I\"{}\"", dir.display());
    }

    let _ = write!(cmd, " -o {}/{}", self.output_dir.display(), self.binary_name);

    for src in &self.sources {
      let _ = write!(cmd, " \"{}\"", src.display());
    }

    for dep in &self.dependencies {
      if matches!(dep.linkage, Linkage::Static | Linkage::Dynamic) {
        if let Some(lib) = &dep.library_path {
          let _ = write!(cmd, " \"{}\"", lib.display());
        }
      }
    }

    cmd
  }

  /// Discovered header directories first, then dependency includes.
  fn include_paths(&self) -> impl Iterator<Item = &Path> {
    self
      .header_dirs
      .iter()
      .map(PathBuf::as_path)
      .chain(self.dependencies.iter().filter_map(|d| d.include_path.as_deref()))
  }
}
