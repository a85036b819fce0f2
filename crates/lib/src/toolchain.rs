//! Compiler toolchain detection.
//!
//! Candidates are probed in a fixed, platform-conditioned order and the
//! first driver that can be located and invoked wins. The probe never
//! compiles anything; it only spawns the driver with all stdio discarded
//! and checks that the executable resolves.

use std::fmt;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{BuildError, Result};

/// A compiler driver identity.
///
/// A closed set of variants rather than a free-form string: command
/// synthesis matches on this exhaustively, so adding a toolchain forces
/// every flag-grammar decision to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
  Gcc,
  Clang,
  Msvc,
}

impl Toolchain {
  /// The driver executable name probed on `PATH`.
  pub const fn driver(&self) -> &'static str {
    match self {
      Toolchain::Gcc => "g++",
      Toolchain::Clang => "clang++",
      Toolchain::Msvc => "cl",
    }
  }

  /// Whether this toolchain uses the MSVC flag grammar.
  pub const fn is_msvc(&self) -> bool {
    matches!(self, Toolchain::Msvc)
  }

  /// Detection order for the current platform.
  ///
  /// GCC-compatible first on Unix-like hosts; on Windows, Clang then GCC
  /// then the MSVC driver.
  #[cfg(windows)]
  pub const fn candidates() -> &'static [Toolchain] {
    &[Toolchain::Clang, Toolchain::Gcc, Toolchain::Msvc]
  }

  #[cfg(not(windows))]
  pub const fn candidates() -> &'static [Toolchain] {
    &[Toolchain::Gcc, Toolchain::Clang]
  }
}

impl fmt::Display for Toolchain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.driver())
  }
}

/// Detect the first available toolchain for the current platform.
///
/// # Errors
///
/// Returns `ToolchainNotFound` with platform-specific installation guidance
/// if no candidate driver resolves.
pub fn detect() -> Result<Toolchain> {
  detect_with(Toolchain::candidates(), probe)
}

/// Detection over an explicit candidate list with an injectable probe.
///
/// Split out from [`detect`] so the ordering contract is testable without
/// compilers installed on the test host.
pub fn detect_with(candidates: &[Toolchain], probe: impl Fn(Toolchain) -> bool) -> Result<Toolchain> {
  for &candidate in candidates {
    if probe(candidate) {
      debug!(driver = %candidate, "toolchain resolved");
      return Ok(candidate);
    }
    debug!(driver = %candidate, "toolchain not available");
  }

  Err(BuildError::ToolchainNotFound {
    guidance: install_guidance().to_string(),
  })
}

/// Presence check: can the driver executable be located and invoked.
///
/// The child's exit status is irrelevant; most drivers exit non-zero when
/// given no input files. Only a spawn failure counts as absence.
fn probe(toolchain: Toolchain) -> bool {
  Command::new(toolchain.driver())
    .stdin(Stdio::null())
    .stdout(Stdio::null())
    .stderr(Stdio::null())
    .status()
    .is_ok()
}

/// Installation guidance for the current platform, carried as context on
/// `ToolchainNotFound` and surfaced by the caller.
fn install_guidance() -> &'static str {
  if cfg!(windows) {
    "Please install one of the following:\n\
     1. Visual Studio Build Tools (https://visualstudio.microsoft.com/visual-cpp-build-tools/)\n\
     2. MinGW-w64 (https://mingw-w64.org/doku.php)"
  } else if cfg!(target_os = "macos") {
    "Please install the Xcode Command Line Tools: xcode-select --install"
  } else {
    "Please install one of the following:\n\
     1. GCC: sudo apt install g++\n\
     2. Clang: sudo apt install clang"
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn detect_returns_first_available_candidate() {
    let order = [Toolchain::Gcc, Toolchain::Clang];
    let found = detect_with(&order, |tc| tc == Toolchain::Clang).unwrap();
    assert_eq!(found, Toolchain::Clang);
  }

  #[test]
  fn detect_prefers_earlier_candidates() {
    let order = [Toolchain::Gcc, Toolchain::Clang];
    let found = detect_with(&order, |_| true).unwrap();
    assert_eq!(found, Toolchain::Gcc);
  }

  #[test]
  fn detect_fails_when_no_candidate_resolves() {
    let err = detect_with(Toolchain::candidates(), |_| false).unwrap_err();
    match err {
      BuildError::ToolchainNotFound { guidance } => {
        assert!(!guidance.is_empty());
      }
      other => panic!("expected ToolchainNotFound, got {:?}", other),
    }
  }

  #[test]
  fn candidate_order_is_platform_conditioned() {
    let candidates = Toolchain::candidates();
    if cfg!(windows) {
      assert_eq!(candidates, &[Toolchain::Clang, Toolchain::Gcc, Toolchain::Msvc]);
    } else {
      assert_eq!(candidates, &[Toolchain::Gcc, Toolchain::Clang]);
    }
  }

  #[test]
  fn driver_names() {
    assert_eq!(Toolchain::Gcc.driver(), "g++");
    assert_eq!(Toolchain::Clang.driver(), "clang++");
    assert_eq!(Toolchain::Msvc.driver(), "cl");
    assert!(Toolchain::Msvc.is_msvc());
    assert!(!Toolchain::Gcc.is_msvc());
  }
}
