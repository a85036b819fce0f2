//! Project layout constants shared across the pipeline stages.

/// Name of the project manifest file, expected at the project root.
pub const MANIFEST_FILE: &str = "cppack.json";

/// Directory receiving the build artifact, relative to the project root.
pub const OUTPUT_DIR: &str = "build";

/// Local dependency cache directory, relative to the project root.
///
/// Layout: `_packages/<name>/<version>/include` and
/// `_packages/<name>/<version>/lib/lib<name>.<ext>`.
pub const CACHE_DIR: &str = "_packages";

/// File extensions treated as compilation units during source discovery.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx"];

/// File extensions treated as headers during header-directory discovery.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hh", "hxx"];
