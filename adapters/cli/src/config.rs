//! Loading of [`GameConfig`] from TOML files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use quoridor_core::GameConfig;
use thiserror::Error;
use tracing::debug;

/// Failure to obtain a configuration from disk.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file was read but is not a valid configuration.
    #[error("failed to parse config file {}", path.display())]
    Parse {
        /// File that was requested.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Reads and parses the configuration stored at `path`.
pub(crate) fn load(path: &Path) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}

/// Parses a TOML document; absent keys keep their defaults.
pub(crate) fn parse(contents: &str) -> Result<GameConfig, toml::de::Error> {
    toml::from_str(contents)
}
