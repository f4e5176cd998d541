//! Platform conventions for shared-library filenames.
//!
//! A derived [`LibName`] sits between a platform prefix and suffix:
//! `libstd.so` on Linux, `libstd.dylib` on macOS, `std.dll` on Windows.

use crate::error::{BuildError, Result};
use crate::libname::LibName;
use std::fmt;

/// Return the host's shared library file extension (including the dot).
#[must_use]
pub const fn library_extension() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        ".dylib"
    }
    #[cfg(target_os = "windows")]
    {
        ".dll"
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        ".so"
    }
}

/// Return the host's shared library filename prefix.
#[must_use]
pub const fn library_prefix() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        ""
    }
    #[cfg(not(target_os = "windows"))]
    {
        "lib"
    }
}

/// A target triple such as `x86_64-unknown-linux-gnu`.
///
/// Only the shape is checked: the triple must be non-empty, free of
/// whitespace, and have at least two `-`-separated components.
///
/// # Examples
///
/// ```
/// use shlib_builder::naming::TargetTriple;
///
/// let triple: TargetTriple = "aarch64-apple-darwin".try_into().expect("valid triple");
/// assert_eq!(triple.library_extension(), ".dylib");
/// assert_eq!(triple.library_prefix(), "lib");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetTriple(String);

impl TargetTriple {
    /// Return the triple as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the shared library extension used by this target.
    ///
    /// Unlike [`library_extension`], this inspects the triple at runtime and
    /// so works when cross-compiling.
    #[must_use]
    pub fn library_extension(&self) -> &'static str {
        if self.is_windows() {
            ".dll"
        } else if self.is_darwin() {
            ".dylib"
        } else {
            ".so"
        }
    }

    /// Return the library filename prefix used by this target.
    #[must_use]
    pub fn library_prefix(&self) -> &'static str {
        if self.is_windows() { "" } else { "lib" }
    }

    fn is_windows(&self) -> bool {
        self.0.contains("windows")
    }

    fn is_darwin(&self) -> bool {
        self.0.contains("darwin") || self.0.contains("apple-ios")
    }

    fn validate(value: &str) -> Result<()> {
        let reason = if value.is_empty() {
            "must not be empty"
        } else if value.chars().any(char::is_whitespace) {
            "must not contain whitespace"
        } else if value.split('-').filter(|part| !part.is_empty()).count() < 2 {
            "expected at least two components"
        } else {
            return Ok(());
        };
        Err(BuildError::InvalidTargetTriple {
            triple: value.to_owned(),
            reason,
        })
    }
}

impl TryFrom<&str> for TargetTriple {
    type Error = BuildError;

    fn try_from(value: &str) -> Result<Self> {
        Self::validate(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for TargetTriple {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl fmt::Display for TargetTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The prefix and suffix wrapped around a [`LibName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNaming {
    prefix: String,
    suffix: String,
}

impl LibraryNaming {
    /// Use the convention of the platform this crate was compiled for.
    #[must_use]
    pub fn host() -> Self {
        Self {
            prefix: library_prefix().to_owned(),
            suffix: library_extension().to_owned(),
        }
    }

    /// Use the convention of `target`.
    #[must_use]
    pub fn for_target(target: &TargetTriple) -> Self {
        Self {
            prefix: target.library_prefix().to_owned(),
            suffix: target.library_extension().to_owned(),
        }
    }

    /// Replace the filename prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the filename suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// The filename prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The filename suffix, including the dot.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Compose the full filename for `name`.
    #[must_use]
    pub fn file_name(&self, name: &LibName) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

impl Default for LibraryNaming {
    fn default() -> Self {
        Self::host()
    }
}
