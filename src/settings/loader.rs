//! Config file loading

use crate::settings::Settings;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Fatal resolution failures.
///
/// Only fatal conditions are representable here: a missing file and missing
/// keys resolve to defaults before an error can be constructed. Anything that
/// reaches the caller as a `SettingsError` aborts initialization.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Resolve settings from `config.yaml` under `dir`.
///
/// An absent file is the expected no-override path and yields the defaults
/// silently. A present file overrides each key independently: keys it does not
/// carry stay at their defaults, unrecognized keys are ignored. A document
/// that exists but does not parse, or carries a wrong-typed value, fails
/// resolution rather than silently defaulting, as does any filesystem error
/// other than not-found.
pub fn load_settings(dir: &Path) -> Result<Settings, SettingsError> {
    let path = dir.join(CONFIG_FILE_NAME);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            return Ok(Settings::default());
        }
        Err(source) => return Err(SettingsError::Io { path, source }),
    };

    tracing::debug!("loading settings from: {}", path.display());

    // Parse to a generic value first: an empty file yields a null document,
    // which must fail here rather than slide into the defaults.
    let raw: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|source| SettingsError::Parse { path: path.clone(), source })?;
    serde_yaml::from_value(raw).map_err(|source| SettingsError::Parse { path, source })
}
