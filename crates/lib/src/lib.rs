//! cppack-lib: build orchestration for single-executable C++ projects
//!
//! This crate provides the stages of the build pipeline:
//! - `Manifest`: the declarative project description loaded from `cppack.json`
//! - `Toolchain`: compiler detection and identity
//! - source/header discovery over the project tree
//! - dependency resolution against the local `_packages` cache
//! - `CompilationPlan`: the fully resolved input to command synthesis
//! - command execution and exit-status interpretation
//!
//! The pipeline is strictly sequential: validate, detect a toolchain,
//! discover sources and headers, resolve dependencies, synthesize one
//! aggregate compiler invocation, execute it.

pub mod build;
pub mod consts;
pub mod discovery;
pub mod error;
pub mod execute;
pub mod manifest;
pub mod plan;
pub mod resolve;
pub mod toolchain;
pub mod validate;

pub use build::{BuildOutcome, build_project};
pub use error::{BuildError, DependencyIssue, Result};
pub use manifest::{DependencyDecl, Linkage, Manifest, Standard};
pub use plan::CompilationPlan;
pub use resolve::DependencyRecord;
pub use toolchain::Toolchain;
