//! Resolved package descriptors.
//!
//! The package loader runs before naming and hands over one [`Package`] per
//! resolved pattern match. Only the import path matters here.

use std::fmt;

/// A slash-separated import path such as `gopkg.in/dir/lib1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportPath(String);

impl ImportPath {
    /// Create a new import path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the import path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Iterate over the path's slash-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Render the path with every slash replaced by a dash.
    #[must_use]
    pub fn dashed(&self) -> String {
        dashify(&self.0)
    }
}

impl AsRef<str> for ImportPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImportPath {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ImportPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A package as produced by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Package {
    import_path: ImportPath,
}

impl Package {
    /// Create a descriptor for the given import path.
    #[must_use]
    pub fn new(import_path: impl Into<ImportPath>) -> Self {
        Self {
            import_path: import_path.into(),
        }
    }

    /// Return the package's import path.
    #[must_use]
    pub fn import_path(&self) -> &ImportPath {
        &self.import_path
    }
}

/// Replace every `/` with `-` so the result can sit inside a filename.
pub(crate) fn dashify(path: &str) -> String {
    path.replace('/', "-")
}
