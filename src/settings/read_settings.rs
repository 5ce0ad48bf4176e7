use std::fs;
use std::io;

use tracing::debug;

use super::write_settings::Settings;
use super::SettingsError;
use crate::fs_op::AbsPath;

/// Read settings from `path`. A missing file gives the defaults.
pub fn load_settings_from(path: &AbsPath) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path, "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    Ok(toml::from_str(&text)?)
}

/// Read settings from the default settings file.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&super::settings_file()?)
}
