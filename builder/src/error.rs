//! Error types for shared-library naming and build-output helpers.
//!
//! Naming failures indicate a mistake in the caller's input rather than a
//! transient condition, so none of these variants are retried.

use thiserror::Error;

/// Errors raised by the builder helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Meta-patterns such as `std` were combined with concrete package
    /// patterns.
    #[error(
        "mixing of meta and non-meta packages is not allowed: {}",
        args.join(" ")
    )]
    ConflictingSelectors {
        /// The arguments as the caller supplied them.
        args: Vec<String>,
    },

    /// Neither arguments nor resolved packages were available to name the
    /// library after.
    #[error("no packages selected; cannot derive a shared library name")]
    NoSelection,

    /// A target triple could not be used to pick a naming convention.
    #[error("invalid target triple {triple:?}: {reason}")]
    InvalidTargetTriple {
        /// The rejected triple.
        triple: String,
        /// Why the triple was rejected.
        reason: &'static str,
    },

    /// A pkg-config package name would be read as an option or is blank.
    #[error("invalid pkg-config package name: {name:?}")]
    InvalidPkgConfigName {
        /// The rejected package name.
        name: String,
    },
}

/// Result type alias using [`BuildError`].
pub type Result<T> = std::result::Result<T, BuildError>;
