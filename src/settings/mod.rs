pub mod config_dirs;
pub mod read_settings;
pub mod write_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{project_config_dir, settings_file};
pub use read_settings::{load_settings, load_settings_from};
pub use write_settings::{save_settings, save_settings_to, Settings};

use thiserror::Error;

use crate::fs_op::PathError;

/// Errors from reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not determine a config directory for this user")]
    NoConfigDir,

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
