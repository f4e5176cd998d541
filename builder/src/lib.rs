//! Shared-library build helpers.
//!
//! This crate names the shared library produced when several packages are
//! linked together, splits the flag output of `pkg-config` style tools, and
//! clears stale build outputs without touching special files.
//!
//! # Modules
//!
//! - [`cleanup`] - Removal of stale outputs that spares special files
//! - [`error`] - Error types for naming and flag queries
//! - [`libname`] - Base-name derivation from patterns and resolved packages
//! - [`naming`] - Platform filename prefixes and suffixes
//! - [`package`] - Resolved package descriptors and import paths
//! - [`pkg_config`] - Splitting of `pkg-config` output into flags
//! - [`selector`] - Classification of meta and concrete package patterns

pub mod cleanup;
pub mod error;
pub mod libname;
pub mod naming;
pub mod package;
pub mod pkg_config;
pub mod selector;

pub use cleanup::{NULL_DEVICE, Removal, maybe_remove_file};
pub use error::{BuildError, Result};
pub use libname::{LibName, derive_lib_name};
pub use naming::{LibraryNaming, TargetTriple};
pub use package::{ImportPath, Package};
pub use pkg_config::{PkgConfigFlags, PkgConfigQuery, split_pkg_config_output};
pub use selector::{MetaPattern, Selection};
