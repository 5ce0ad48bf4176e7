use std::fs;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SettingsError;
use crate::fs_op::AbsPath;
use crate::net::Port;

pub const DEFAULT_LISTEN_PORT: Port = Port(9000);

/// User settings stored as TOML.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    /// Port `listen` binds when none is given on the command line.
    pub listen_port: Port,
    /// Folder the CLI resolves relative arguments against.
    pub home_folder: Option<AbsPath>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_filter: None,
            listen_port: DEFAULT_LISTEN_PORT,
            home_folder: None,
        }
    }
}

/// Write `settings` to `path`, creating its folder if needed.
pub fn save_settings_to(path: &AbsPath, settings: &Settings) -> Result<(), SettingsError> {
    let text = toml::to_string_pretty(settings)?;
    if let Ok(parent) = path.up() {
        parent.ensure_folder()?;
    }
    fs::write(path, text)?;
    debug!(path = %path, "saved settings");
    Ok(())
}

/// Write `settings` to the default settings file.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to(&super::settings_file()?, settings)
}
