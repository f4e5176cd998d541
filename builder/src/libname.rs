//! Naming of combined shared libraries.
//!
//! When several packages are linked into one shared library, the library is
//! named after what the user asked for: the meta-patterns they typed, the root
//! of a `dir/...` wildcard, or the import paths the loader resolved. The name
//! carries no platform prefix or suffix; see [`crate::naming`] for those.

use crate::error::{BuildError, Result};
use crate::package::{ImportPath, Package, dashify};
use crate::selector::{MetaPattern, Selection, Wildcard};
use log::trace;
use std::fmt;

/// A filesystem-safe base name for a combined shared library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibName(String);

impl LibName {
    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for LibName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the base name of the shared library built from `args`.
///
/// `args` are the patterns exactly as the user typed them and `packages` the
/// descriptors the loader resolved them to.
///
/// # Errors
///
/// Returns [`BuildError::ConflictingSelectors`] if a meta-pattern such as
/// `std` is combined with any other pattern, and [`BuildError::NoSelection`]
/// if there is nothing to name the library after.
///
/// # Examples
///
/// ```
/// use shlib_builder::libname::derive_lib_name;
/// use shlib_builder::package::Package;
///
/// let name = derive_lib_name(&["std", "cmd"], &[]).expect("meta-patterns compose");
/// assert_eq!(name.as_str(), "std,cmd");
///
/// let pkgs = [Package::new("gopkg.in/somelib")];
/// let name = derive_lib_name::<&str>(&[], &pkgs).expect("one package");
/// assert_eq!(name.as_str(), "gopkg.in-somelib");
/// ```
pub fn derive_lib_name<S: AsRef<str>>(args: &[S], packages: &[Package]) -> Result<LibName> {
    let selection = Selection::classify(args);

    if !selection.meta().is_empty() {
        if selection.is_conflicting() {
            return Err(BuildError::ConflictingSelectors {
                args: args.iter().map(|arg| arg.as_ref().to_owned()).collect(),
            });
        }
        trace!("naming shared library after meta-patterns {:?}", selection.meta());
        return Ok(LibName(join_meta(selection.meta())));
    }

    if let Some(wildcard) = selection.sole_wildcard().filter(|w| !w.is_local()) {
        trace!("naming shared library after wildcard root {}", wildcard.root());
        return Ok(LibName(dashify(wildcard.root())));
    }

    let paths = distinct_import_paths(packages);
    let name = match paths.as_slice() {
        [] => {
            trace!("patterns {:?} resolved to no packages", selection.concrete());
            return Err(BuildError::NoSelection);
        }
        [only] => only.dashed(),
        several => match selection.sole_wildcard().and_then(|w| wildcard_root(&w, several)) {
            Some(root) => root,
            None => join_dashed(several),
        },
    };

    trace!("naming shared library {name} after {} package(s)", paths.len());
    Ok(LibName(name))
}

fn join_meta(meta: &[MetaPattern]) -> String {
    meta.iter()
        .map(|pattern| pattern.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn join_dashed(paths: &[&ImportPath]) -> String {
    paths
        .iter()
        .map(|path| path.dashed())
        .collect::<Vec<_>>()
        .join(",")
}

/// Import paths in order of first appearance, without repeats.
fn distinct_import_paths(packages: &[Package]) -> Vec<&ImportPath> {
    let mut paths: Vec<&ImportPath> = Vec::with_capacity(packages.len());
    for pkg in packages {
        let path = pkg.import_path();
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

/// The dashed common root of the packages a local wildcard matched.
fn wildcard_root(wildcard: &Wildcard<'_>, paths: &[&ImportPath]) -> Option<String> {
    trace!("collapsing packages matched by {}/...", wildcard.root());
    common_segment_prefix(paths).map(|prefix| dashify(&prefix))
}

/// The longest run of leading path segments shared by every path.
///
/// Segments are compared whole, so `gopkg.in/lib1` and `gopkg.in/lib2` share
/// `gopkg.in` but never `gopkg.in/li`. Returns `None` when not even the first
/// segment is shared.
#[must_use]
pub fn common_segment_prefix(paths: &[&ImportPath]) -> Option<String> {
    let (first, rest) = paths.split_first()?;
    let mut iters: Vec<_> = rest.iter().map(|path| path.segments()).collect();
    let mut shared: Vec<&str> = Vec::new();

    for segment in first.segments() {
        let all_match = iters
            .iter_mut()
            .all(|other| other.next() == Some(segment));
        if !all_match {
            break;
        }
        shared.push(segment);
    }

    if shared.is_empty() {
        None
    } else {
        Some(shared.join("/"))
    }
}
