//! Shared library naming with workspace configuration.
//!
//! The naming, flag-splitting, and cleanup logic lives in [`shlib_builder`];
//! this crate adds the `shlib.toml` configuration layer on top.

pub mod config;

pub use config::{CONFIG_FILE_NAME, ConfigError, SharedConfig, SharedLibraryConfig};
pub use shlib_builder as builder;
