//! Classification of command-line package patterns.
//!
//! A handful of reserved patterns select whole package groups. They compose
//! with each other but never with concrete package patterns.

use std::fmt;

/// A reserved pattern that selects a predefined group of packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaPattern {
    /// The standard library.
    Std,
    /// The toolchain's commands.
    Cmd,
    /// Every package visible to the build.
    All,
}

impl MetaPattern {
    /// Every recognised meta-pattern.
    pub const ALL: [Self; 3] = [Self::Std, Self::Cmd, Self::All];

    /// Return the pattern as the user types it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Std => "std",
            Self::Cmd => "cmd",
            Self::All => "all",
        }
    }

    /// Look up a meta-pattern by its exact spelling.
    #[must_use]
    pub fn lookup(arg: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meta| meta.as_str() == arg)
    }
}

impl fmt::Display for MetaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments partitioned into meta-patterns and concrete patterns.
///
/// Both halves keep the order the caller supplied them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    meta: Vec<MetaPattern>,
    concrete: Vec<&'a str>,
}

impl<'a> Selection<'a> {
    /// Partition `args` into meta and concrete patterns.
    pub fn classify<S: AsRef<str>>(args: &'a [S]) -> Self {
        let mut selection = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match MetaPattern::lookup(arg) {
                Some(meta) => selection.meta.push(meta),
                None => selection.concrete.push(arg),
            }
        }
        selection
    }

    /// The meta-patterns, duplicates included.
    #[must_use]
    pub fn meta(&self) -> &[MetaPattern] {
        &self.meta
    }

    /// The concrete patterns.
    #[must_use]
    pub fn concrete(&self) -> &[&'a str] {
        &self.concrete
    }

    /// Whether meta-patterns were mixed with concrete ones.
    #[must_use]
    pub fn is_conflicting(&self) -> bool {
        !self.meta.is_empty() && !self.concrete.is_empty()
    }

    /// The single `X/...` wildcard argument, if that is all the caller gave.
    #[must_use]
    pub fn sole_wildcard(&self) -> Option<Wildcard<'a>> {
        match (self.meta.as_slice(), self.concrete.as_slice()) {
            ([], [only]) => Wildcard::parse(*only),
            _ => None,
        }
    }
}

/// A pattern of the form `root/...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wildcard<'a> {
    root: &'a str,
}

impl<'a> Wildcard<'a> {
    /// Parse `pattern` as a trailing-wildcard pattern.
    #[must_use]
    pub fn parse(pattern: &'a str) -> Option<Self> {
        pattern
            .strip_suffix("/...")
            .map(|root| Self { root })
    }

    /// The part of the pattern before `/...`.
    #[must_use]
    pub const fn root(&self) -> &'a str {
        self.root
    }

    /// Whether the root is a filesystem-relative or absolute directory
    /// rather than an import path.
    ///
    /// Absolute roots count as local: an absolute directory is never a
    /// meaningful import path, so the library is named after the packages
    /// it matched rather than after `-src-lib` style dashed directories.
    #[must_use]
    pub fn is_local(&self) -> bool {
        let root = self.root;
        root.is_empty()
            || root == "."
            || root == ".."
            || root.starts_with("./")
            || root.starts_with("../")
            || root.starts_with('/')
    }
}
