//! Handling of `pkg-config` style flag queries.
//!
//! `pkg-config --cflags` and `pkg-config --libs` print their flags as a single
//! line of shell words. Spaces inside a flag are escaped with a backslash and
//! there is no quoting, so splitting needs only a small scanner.

use crate::error::{BuildError, Result};

/// Scanner state while splitting tool output into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SkippingWhitespace,
    InWord,
    Escaped,
}

const fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Split raw `pkg-config` output into flags.
///
/// Whitespace separates words and a backslash takes the following byte
/// literally, so `\ ` embeds a space and `\\` a single backslash. A lone
/// backslash at the very end is dropped. Empty or whitespace-only output
/// yields no flags. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD in the flag they belong to, so such flags do not survive unchanged.
///
/// # Examples
///
/// ```
/// use shlib_builder::pkg_config::split_pkg_config_output;
///
/// let flags = split_pkg_config_output(br"-L/usr/white\ space/lib -lfoo");
/// assert_eq!(flags, ["-L/usr/white space/lib", "-lfoo"]);
/// assert!(split_pkg_config_output(b" \r\n ").is_empty());
/// ```
#[must_use]
pub fn split_pkg_config_output(out: &[u8]) -> Vec<String> {
    let mut flags = Vec::new();
    let mut word: Vec<u8> = Vec::new();
    let mut state = ScanState::SkippingWhitespace;

    for &byte in out {
        state = match state {
            ScanState::Escaped => {
                word.push(byte);
                ScanState::InWord
            }
            _ if byte == b'\\' => ScanState::Escaped,
            ScanState::InWord if is_separator(byte) => {
                flush_word(&mut word, &mut flags);
                ScanState::SkippingWhitespace
            }
            ScanState::SkippingWhitespace if is_separator(byte) => state,
            ScanState::InWord | ScanState::SkippingWhitespace => {
                word.push(byte);
                ScanState::InWord
            }
        };
    }
    flush_word(&mut word, &mut flags);

    flags
}

fn flush_word(word: &mut Vec<u8>, flags: &mut Vec<String>) {
    if !word.is_empty() {
        flags.push(String::from_utf8_lossy(word).into_owned());
        word.clear();
    }
}

/// Reject package names that the tool would read as options.
///
/// # Errors
///
/// Returns [`BuildError::InvalidPkgConfigName`] for the first name that is
/// blank or starts with `-`.
pub fn validate_pkg_config_names<S: AsRef<str>>(names: &[S]) -> Result<()> {
    for name in names {
        let name = name.as_ref();
        if name.trim().is_empty() || name.starts_with('-') {
            return Err(BuildError::InvalidPkgConfigName {
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

/// The packages a build asks `pkg-config` about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgConfigQuery {
    packages: Vec<String>,
}

impl PkgConfigQuery {
    /// Create a query for the given package names.
    ///
    /// # Errors
    ///
    /// Returns an error if any name fails [`validate_pkg_config_names`].
    pub fn new<S: AsRef<str>>(packages: &[S]) -> Result<Self> {
        validate_pkg_config_names(packages)?;
        Ok(Self {
            packages: packages.iter().map(|p| p.as_ref().to_owned()).collect(),
        })
    }

    /// Arguments asking for compiler flags.
    #[must_use]
    pub fn cflags_args(&self) -> Vec<String> {
        self.args_for("--cflags")
    }

    /// Arguments asking for linker flags.
    #[must_use]
    pub fn libs_args(&self) -> Vec<String> {
        self.args_for("--libs")
    }

    fn args_for(&self, mode: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(self.packages.len() + 2);
        args.push(mode.to_owned());
        // Everything after `--` is a package name, never an option.
        args.push("--".to_owned());
        args.extend(self.packages.iter().cloned());
        args
    }
}

/// Compiler and linker flags reported for a set of packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PkgConfigFlags {
    /// Flags from the `--cflags` query.
    pub cflags: Vec<String>,
    /// Flags from the `--libs` query.
    pub ldflags: Vec<String>,
}

impl PkgConfigFlags {
    /// Split the raw output of both queries.
    #[must_use]
    pub fn from_outputs(cflags_out: &[u8], libs_out: &[u8]) -> Self {
        Self {
            cflags: split_pkg_config_output(cflags_out),
            ldflags: split_pkg_config_output(libs_out),
        }
    }

    /// Whether neither query reported anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cflags.is_empty() && self.ldflags.is_empty()
    }
}
