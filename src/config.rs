//! Workspace configuration for shared library builds.
//!
//! Settings live in `shlib.toml` under a `[shared_library]` table. Every field
//! is optional: the target defaults to the host platform and the filename
//! prefix and suffix default to that target's convention.

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace};
use serde::Deserialize;
use shlib_builder::error::BuildError;
use shlib_builder::libname::derive_lib_name;
use shlib_builder::naming::{LibraryNaming, TargetTriple};
use shlib_builder::package::Package;
use std::io::ErrorKind;
use thiserror::Error;

/// Conventional name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "shlib.toml";

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`SharedConfig`].
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// The parser's error.
        #[source]
        source: toml::de::Error,
    },

    /// The configured values could not be turned into a filename.
    #[error(transparent)]
    Naming(#[from] BuildError),
}

/// Top-level configuration document.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Filename conventions for combined shared libraries.
    pub shared_library: SharedLibraryConfig,
}

/// Overrides for shared library filenames.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedLibraryConfig {
    /// Target triple whose convention applies. Blank values mean the host.
    pub target: Option<String>,
    /// Replacement for the platform filename prefix, such as `lib`.
    pub prefix: Option<String>,
    /// Replacement for the platform filename suffix, such as `.so`.
    pub suffix: Option<String>,
}

impl SharedLibraryConfig {
    /// Returns the configured target triple, if present.
    ///
    /// Whitespace-only values are treated as absent so that templated files
    /// with `target = ""` fall back to the host.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target
            .as_deref()
            .map(str::trim)
            .filter(|target| !target.is_empty())
    }
}

impl SharedConfig {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid.
    pub fn load_from(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, read_config_file)
    }

    /// Loads configuration using the supplied loader.
    ///
    /// This exists so tests can substitute the file system read.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the loader returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use shlib::SharedConfig;
    ///
    /// let config = SharedConfig::load_with(Utf8Path::new("shlib.toml"), |_| {
    ///     Ok(SharedConfig::default())
    /// })
    /// .expect("stub loader succeeds");
    /// assert!(config.shared_library.target().is_none());
    /// ```
    pub fn load_with<F>(path: &Utf8Path, loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<Self, ConfigError>,
    {
        loader(path)
    }

    /// Resolves the prefix and suffix to wrap around library names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Naming`] if the configured target triple is
    /// malformed.
    pub fn naming(&self) -> Result<LibraryNaming, ConfigError> {
        let settings = &self.shared_library;
        let mut naming = match settings.target() {
            Some(target) => LibraryNaming::for_target(&TargetTriple::try_from(target)?),
            None => LibraryNaming::host(),
        };
        if let Some(prefix) = &settings.prefix {
            naming = naming.with_prefix(prefix.as_str());
        }
        if let Some(suffix) = &settings.suffix {
            naming = naming.with_suffix(suffix.as_str());
        }
        Ok(naming)
    }

    /// Computes the full filename of the shared library built from `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Naming`] if the arguments cannot be named or
    /// the configured target is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use shlib::SharedConfig;
    ///
    /// let config: SharedConfig = toml::from_str(
    ///     "[shared_library]\ntarget = \"x86_64-unknown-linux-gnu\"\n",
    /// )
    /// .expect("valid configuration");
    /// let file = config.library_file_name(&["std", "cmd"], &[]).expect("nameable");
    /// assert_eq!(file, "libstd,cmd.so");
    /// ```
    pub fn library_file_name<S: AsRef<str>>(
        &self,
        args: &[S],
        packages: &[Package],
    ) -> Result<String, ConfigError> {
        let name = derive_lib_name(args, packages)?;
        Ok(self.naming()?.file_name(&name))
    }
}

fn read_config_file(path: &Utf8Path) -> Result<SharedConfig, ConfigError> {
    let source = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!("no configuration at {path}; using defaults");
            return Ok(SharedConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_owned(),
                source: e,
            });
        }
    };

    let config = toml::from_str(&source).map_err(|e| ConfigError::Parse {
        path: path.to_owned(),
        source: e,
    })?;
    debug!("loaded configuration from {path}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(source: &str) -> SharedConfig {
        toml::from_str::<SharedConfig>(source)
            .expect("expected configuration to parse successfully")
    }

    #[rstest]
    fn defaults_follow_the_host() {
        let config = SharedConfig::default();

        assert!(config.shared_library.target().is_none());
        assert_eq!(
            config.naming().expect("host naming"),
            LibraryNaming::host()
        );
    }

    #[rstest]
    #[case::linux("x86_64-unknown-linux-gnu", "libstd.so")]
    #[case::macos("aarch64-apple-darwin", "libstd.dylib")]
    #[case::windows("x86_64-pc-windows-msvc", "std.dll")]
    fn target_selects_the_convention(#[case] target: &str, #[case] expected: &str) {
        let config = parse(&format!("[shared_library]\ntarget = \"{target}\"\n"));

        let file = config
            .library_file_name(&["std"], &[])
            .expect("nameable");

        assert_eq!(file, expected);
    }

    #[rstest]
    fn overrides_replace_the_platform_affixes() {
        let config = parse(concat!(
            "[shared_library]\n",
            "target = \"x86_64-pc-windows-msvc\"\n",
            "prefix = \"go-\"\n",
            "suffix = \".plugin\"\n",
        ));

        let file = config
            .library_file_name(&[] as &[&str], &[Package::new("gopkg.in/somelib")])
            .expect("nameable");

        assert_eq!(file, "go-gopkg.in-somelib.plugin");
    }

    #[rstest]
    fn blank_target_falls_back_to_the_host() {
        let config = parse("[shared_library]\ntarget = \"   \"\n");

        assert!(config.shared_library.target().is_none());
        assert_eq!(
            config.naming().expect("host naming"),
            LibraryNaming::host()
        );
    }

    #[rstest]
    fn malformed_target_is_a_naming_error() {
        let config = parse("[shared_library]\ntarget = \"linux\"\n");

        let err = config.naming().expect_err("single-component triple");

        assert!(matches!(
            err,
            ConfigError::Naming(BuildError::InvalidTargetTriple { .. })
        ));
    }

    #[rstest]
    fn naming_errors_propagate() {
        let err = SharedConfig::default()
            .library_file_name(&["all", "./"], &[])
            .expect_err("mixed selectors");

        assert!(matches!(
            err,
            ConfigError::Naming(BuildError::ConflictingSelectors { .. })
        ));
    }

    #[rstest]
    fn rejects_unknown_fields() {
        let outcome: Result<SharedConfig, _> =
            toml::from_str("[shared_library]\nextension = \".so\"\n");

        assert!(
            outcome.is_err(),
            "expected a parse error when unknown fields are present"
        );
    }

    #[rstest]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::try_from(dir.path().join(CONFIG_FILE_NAME)).expect("utf-8 path");

        let config = SharedConfig::load_from(&path).expect("missing file is not an error");

        assert_eq!(config, SharedConfig::default());
    }

    #[rstest]
    fn load_with_passes_through_the_requested_path() {
        let config = SharedConfig::load_with(Utf8Path::new("custom.toml"), |path| {
            assert_eq!(path.as_str(), "custom.toml");
            Ok(SharedConfig {
                shared_library: SharedLibraryConfig {
                    prefix: Some(String::new()),
                    ..SharedLibraryConfig::default()
                },
            })
        })
        .expect("stub loader succeeds");

        assert_eq!(config.shared_library.prefix.as_deref(), Some(""));
    }
}
