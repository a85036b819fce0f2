use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The project manifest as declared in `cppack.json`.
///
/// Immutable after loading; every pipeline stage receives it by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
  /// Project name, used as the output binary stem.
  pub name: String,
  /// Language standard, normalized from shorthand forms at deserialization.
  #[serde(rename = "cpp_version")]
  pub standard: Standard,
  /// Entry source file; must exist on disk before any compilation attempt.
  pub exec: PathBuf,
  /// Optional explicit ordered source list. When absent, sources are
  /// discovered by walking the project tree.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sources: Option<Vec<PathBuf>>,
  /// Dependency declarations, keyed by package name.
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub dependencies: BTreeMap<String, DependencyDecl>,
}

/// Supported C++ language standards.
///
/// A closed set: anything outside it is rejected when the manifest is
/// parsed, so later stages never see a free-form version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Standard {
  Cpp11,
  Cpp14,
  Cpp17,
  Cpp20,
  Cpp23,
}

impl Standard {
  /// The token embedded in the compiler invocation (e.g. `c++17`).
  pub const fn token(&self) -> &'static str {
    match self {
      Standard::Cpp11 => "c++11",
      Standard::Cpp14 => "c++14",
      Standard::Cpp17 => "c++17",
      Standard::Cpp20 => "c++20",
      Standard::Cpp23 => "c++23",
    }
  }
}

impl TryFrom<String> for Standard {
  type Error = String;

  /// Accepts `17`, `cpp17`, and `c++17` shorthand forms.
  fn try_from(value: String) -> Result<Self, Self::Error> {
    let digits = value
      .strip_prefix("c++")
      .or_else(|| value.strip_prefix("cpp"))
      .unwrap_or(&value);

    match digits {
      "11" => Ok(Standard::Cpp11),
      "14" => Ok(Standard::Cpp14),
      "17" => Ok(Standard::Cpp17),
      "20" => Ok(Standard::Cpp20),
      "23" => Ok(Standard::Cpp23),
      _ => Err(format!(
        "unsupported C++ version '{}' (supported: 11, 14, 17, 20, 23)",
        value
      )),
    }
  }
}

impl From<Standard> for String {
  fn from(standard: Standard) -> Self {
    standard.token().to_string()
  }
}

impl fmt::Display for Standard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.token())
  }
}

/// How a dependency participates in the link step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Linkage {
  /// Headers only; never contributes a library path to the linker.
  HeaderOnly,
  Static,
  Dynamic,
}

impl Linkage {
  /// Classify a declared linkage token. `shared` is accepted as an alias
  /// for dynamic, matching older manifests.
  pub fn parse(token: &str) -> Option<Self> {
    match token {
      "header-only" => Some(Linkage::HeaderOnly),
      "static" => Some(Linkage::Static),
      "dynamic" | "shared" => Some(Linkage::Dynamic),
      _ => None,
    }
  }

  pub const fn as_str(&self) -> &'static str {
    match self {
      Linkage::HeaderOnly => "header-only",
      Linkage::Static => "static",
      Linkage::Dynamic => "dynamic",
    }
  }
}

impl fmt::Display for Linkage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A dependency declaration from the manifest.
///
/// Either a bare version string (`"fmt": "9.0.0"`) or a detailed form
/// (`"fmt": { "version": "9.0.0", "linkage": "static" }`). The linkage is
/// kept as a raw token here and classified by the resolver, so a malformed
/// declaration is reported as a per-entry dependency issue rather than a
/// manifest parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyDecl {
  Version(String),
  Detailed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linkage: Option<String>,
  },
}

impl DependencyDecl {
  /// The declared version, if any.
  pub fn version(&self) -> Option<&str> {
    match self {
      DependencyDecl::Version(v) => Some(v.as_str()),
      DependencyDecl::Detailed { version, .. } => version.as_deref(),
    }
  }

  /// The declared linkage token, if any.
  pub fn linkage_token(&self) -> Option<&str> {
    match self {
      DependencyDecl::Version(_) => None,
      DependencyDecl::Detailed { linkage, .. } => linkage.as_deref(),
    }
  }
}
