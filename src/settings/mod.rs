//! Settings resolution
//!
//! Loads `config.yaml` when present and falls back to the ERDA defaults
//! otherwise. Absence of the file or of individual keys is not an error;
//! a malformed document is.

pub mod loader;
pub mod model;

pub use loader::{load_settings, SettingsError, CONFIG_FILE_NAME};
pub use model::Settings;
