//! compass: configuration and data-path resolution for COMPASS Imager datasets
//!
//! Resolves an optional `config.yaml` into an immutable [`Settings`] value at
//! startup, then hands path resolution over to [`ImagerStore`]. When no config
//! file is present the defaults assume the data lives on the ERDA mount.

pub mod imager;
pub mod settings;

pub use imager::*;
pub use settings::{load_settings, Settings, SettingsError, CONFIG_FILE_NAME};
