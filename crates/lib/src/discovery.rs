//! Source and header discovery.
//!
//! Two independent passes over the project tree. Sources become the
//! compilation unit list; headers contribute their containing directories
//! to a deduplicated search-path set. Both passes produce paths relative to
//! the project root, since the synthesized command runs with the root as
//! its working directory.
//!
//! Both passes skip `build/` and `_packages/`, the header walk included:
//! cached package headers reach the compiler through the resolver's
//! dependency include paths, so walking the cache would only duplicate
//! them.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::consts::{CACHE_DIR, HEADER_EXTENSIONS, OUTPUT_DIR, SOURCE_EXTENSIONS};
use crate::manifest::Manifest;

/// Discover the compilation unit list for a project.
///
/// If the manifest declares an explicit source list, each entry is kept only
/// if it exists under the root; missing entries are silently dropped so
/// manifests may list optional platform-specific sources. Without an
/// explicit list, the tree is walked recursively and every file with a
/// compilation-unit extension is collected, excluding anything under the
/// output directory or the dependency cache.
///
/// Emptiness is not an error here; it is checked at command synthesis.
pub fn discover_sources(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
  let sources: Vec<PathBuf> = match &manifest.sources {
    Some(declared) => declared
      .iter()
      .filter(|s| root.join(s).exists())
      .cloned()
      .collect(),
    None => walk_files(root)
      .filter(|p| has_extension(p, SOURCE_EXTENSIONS))
      .collect(),
  };

  debug!(count = sources.len(), "sources discovered");
  sources
}

/// Discover header search directories.
///
/// Every file with a header extension contributes its parent directory.
/// The result is a set: each directory appears at most once regardless of
/// how many headers it contains, and ordering carries no meaning.
pub fn header_directories(root: &Path) -> BTreeSet<PathBuf> {
  let dirs: BTreeSet<PathBuf> = walk_files(root)
    .filter(|p| has_extension(p, HEADER_EXTENSIONS))
    .map(|p| match p.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
      _ => PathBuf::from("."),
    })
    .collect();

  debug!(count = dirs.len(), "header directories discovered");
  dirs
}

/// Walk regular files under the root, skipping the output directory and the
/// dependency cache, yielding paths relative to the root.
fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
  let root = root.to_path_buf();
  WalkDir::new(&root)
    .into_iter()
    .filter_entry(|e| !is_excluded_dir(e))
    .filter_map(|e| e.ok())
    .filter(|e| e.file_type().is_file())
    .filter_map(move |e| e.path().strip_prefix(&root).map(Path::to_path_buf).ok())
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
  // depth 0 is the project root itself, which must never be filtered even
  // if the project directory happens to be named like an excluded one.
  entry.depth() > 0
    && entry.file_type().is_dir()
    && entry
      .file_name()
      .to_str()
      .is_some_and(|name| name == OUTPUT_DIR || name == CACHE_DIR)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| extensions.contains(&ext))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
  }

  fn manifest_without_sources() -> Manifest {
    serde_json::from_str(r#"{ "name": "demo", "cpp_version": "17", "exec": "src/main.cpp" }"#)
      .unwrap()
  }

  fn manifest_with_sources(sources: &[&str]) -> Manifest {
    let json = serde_json::json!({
      "name": "demo",
      "cpp_version": "17",
      "exec": "src/main.cpp",
      "sources": sources,
    });
    serde_json::from_value(json).unwrap()
  }

  #[test]
  fn walk_collects_all_source_extensions() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/main.cpp");
    touch(temp.path(), "src/util.cc");
    touch(temp.path(), "src/legacy.cxx");
    touch(temp.path(), "README.md");

    let sources = discover_sources(temp.path(), &manifest_without_sources());
    assert_eq!(sources.len(), 3);
    assert!(sources.contains(&PathBuf::from("src/main.cpp")));
    assert!(sources.contains(&PathBuf::from("src/util.cc")));
    assert!(sources.contains(&PathBuf::from("src/legacy.cxx")));
  }

  #[test]
  fn walk_excludes_output_and_cache_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/main.cpp");
    touch(temp.path(), "build/generated.cpp");
    touch(temp.path(), "_packages/fmt/9.0.0/src/format.cpp");

    let sources = discover_sources(temp.path(), &manifest_without_sources());
    assert_eq!(sources, vec![PathBuf::from("src/main.cpp")]);
  }

  #[test]
  fn explicit_list_drops_missing_entries_silently() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/main.cpp");

    let manifest = manifest_with_sources(&["src/main.cpp", "src/win_only.cpp"]);
    let sources = discover_sources(temp.path(), &manifest);
    assert_eq!(sources, vec![PathBuf::from("src/main.cpp")]);
  }

  #[test]
  fn explicit_list_preserves_declared_order() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/b.cpp");
    touch(temp.path(), "src/a.cpp");

    let manifest = manifest_with_sources(&["src/b.cpp", "src/a.cpp"]);
    let sources = discover_sources(temp.path(), &manifest);
    assert_eq!(sources, vec![PathBuf::from("src/b.cpp"), PathBuf::from("src/a.cpp")]);
  }

  #[test]
  fn header_directories_are_deduplicated() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "include/a.hpp");
    touch(temp.path(), "include/b.hpp");
    touch(temp.path(), "include/c.h");
    touch(temp.path(), "src/internal.hh");

    let dirs = header_directories(temp.path());
    assert_eq!(dirs.len(), 2);
    assert!(dirs.contains(&PathBuf::from("include")));
    assert!(dirs.contains(&PathBuf::from("src")));
  }

  #[test]
  fn header_walk_excludes_output_and_cache_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "include/a.hpp");
    touch(temp.path(), "_packages/fmt/9.0.0/include/format.h");
    touch(temp.path(), "build/generated.hpp");

    let dirs = header_directories(temp.path());
    assert_eq!(dirs.len(), 1);
    assert!(dirs.contains(&PathBuf::from("include")));
  }

  #[test]
  fn header_at_project_root_maps_to_dot() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "config.h");

    let dirs = header_directories(temp.path());
    assert_eq!(dirs.len(), 1);
    assert!(dirs.contains(&PathBuf::from(".")));
  }

  #[test]
  fn header_discovery_ignores_non_header_files() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/main.cpp");
    touch(temp.path(), "notes.txt");

    assert!(header_directories(temp.path()).is_empty());
  }
}
