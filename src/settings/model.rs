//! Settings model

use serde::Deserialize;
use std::path::PathBuf;

/// Resolved process settings.
///
/// Both fields are always defined once resolution completes; there is no
/// partially-initialized state. Each key in `config.yaml` overrides its field
/// independently, so a file carrying only `datadir` leaves `erda` at its
/// default and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root directory for Imager input data. Consumers treat this as the
    /// dataset root; it is neither validated nor created here.
    pub datadir: PathBuf,

    /// Whether `datadir` sits on the ERDA remote-mounted storage.
    pub erda: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { datadir: PathBuf::from("COMPASS/data/Imager"), erda: true }
    }
}

impl Settings {
    /// Resolve settings from `config.yaml` in the current working directory.
    ///
    /// Shorthand for [`load_settings`](super::load_settings) over `"."`.
    pub fn load() -> Result<Self, super::SettingsError> {
        super::load_settings(std::path::Path::new("."))
    }

    /// Whether the remote-mounted storage assumption holds.
    pub fn is_remote(&self) -> bool {
        self.erda
    }
}
