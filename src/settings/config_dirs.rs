use directories_next::ProjectDirs;

use super::SettingsError;
use crate::fs_op::AbsPath;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Per-user config folder, like `~/.config/hello` on Linux.
pub fn project_config_dir() -> Result<AbsPath, SettingsError> {
    let dirs = ProjectDirs::from("org", "limewire", "hello").ok_or(SettingsError::NoConfigDir)?;
    Ok(AbsPath::from_path_buf(dirs.config_dir().to_path_buf())?)
}

/// Where `load_settings` and `save_settings` look by default.
pub fn settings_file() -> Result<AbsPath, SettingsError> {
    Ok(project_config_dir()?.add(SETTINGS_FILE_NAME)?)
}
