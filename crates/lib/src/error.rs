//! Error types for the build pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BuildError>;

/// A single unresolvable or malformed dependency declaration.
///
/// Issues are collected across all entries so a build failure reports every
/// broken dependency at once instead of stopping at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyIssue {
  /// Name of the offending manifest entry.
  pub name: String,
  /// Human-readable reason the entry could not be resolved.
  pub reason: String,
}

impl std::fmt::Display for DependencyIssue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.name, self.reason)
  }
}

/// Errors that can occur while orchestrating a build.
#[derive(Debug, Error)]
pub enum BuildError {
  /// Manifest missing, unparseable, or a required field/file is absent.
  #[error("config error: {message}")]
  Config { message: String },

  /// Directory creation or another filesystem mutation failed.
  #[error("filesystem error for '{path}': {message}")]
  Filesystem { path: PathBuf, message: String },

  /// No candidate compiler could be located on this host.
  #[error("no compiler found\n{guidance}")]
  ToolchainNotFound { guidance: String },

  /// Discovery produced an empty compilation unit set.
  #[error("no source files found to compile")]
  NoSourceFiles,

  /// One or more dependency declarations could not be resolved.
  #[error("failed to resolve {} dependenc{}", .issues.len(), if .issues.len() == 1 { "y" } else { "ies" })]
  Dependency { issues: Vec<DependencyIssue> },

  /// The compiler invocation exited with a non-zero status.
  #[error("build failed with exit code {code:?}")]
  Execution { code: Option<i32> },

  /// I/O error while spawning or waiting on a child process.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl BuildError {
  /// Shorthand for a `Config` error from anything displayable.
  pub fn config(message: impl Into<String>) -> Self {
    BuildError::Config { message: message.into() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dependency_error_counts_issues() {
    let err = BuildError::Dependency {
      issues: vec![
        DependencyIssue {
          name: "fmt".to_string(),
          reason: "missing".to_string(),
        },
        DependencyIssue {
          name: "zlib".to_string(),
          reason: "missing".to_string(),
        },
      ],
    };
    assert_eq!(err.to_string(), "failed to resolve 2 dependencies");
  }

  #[test]
  fn dependency_issue_display() {
    let issue = DependencyIssue {
      name: "fmt".to_string(),
      reason: "library file not found".to_string(),
    };
    assert_eq!(issue.to_string(), "fmt: library file not found");
  }
}
