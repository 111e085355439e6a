//! Platform-specific configuration paths.
//!
//! - **User config**: `~/.config/chgain/` (Linux),
//!   `~/Library/Application Support/chgain/` (macOS), `%APPDATA%\chgain\` (Windows)
//! - **Editor config file**: `editor.toml` inside the user config directory
//!
//! # Example
//!
//! ```rust,no_run
//! use chgain_config::paths;
//!
//! let file = paths::config_file();
//! println!("Editor config: {:?}", file);
//! ```

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "chgain";

/// File name of the editor configuration.
pub const CONFIG_FILE_NAME: &str = "editor.toml";

/// Returns the user-specific configuration directory.
///
/// # Platform Paths
///
/// - Linux: `~/.config/chgain/`
/// - macOS: `~/Library/Application Support/chgain/`
/// - Windows: `%APPDATA%\chgain\`
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default editor configuration file path.
pub fn config_file() -> PathBuf {
    user_config_dir().join(CONFIG_FILE_NAME)
}

/// Ensure the user config directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
        tracing::debug!(dir = %dir.display(), "created config directory");
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_config_dir_is_namespaced() {
        let dir = user_config_dir();
        assert!(dir.ends_with("chgain"), "got {dir:?}");
    }

    #[test]
    fn config_file_lives_in_config_dir() {
        let file = config_file();
        assert_eq!(file.parent(), Some(user_config_dir().as_path()));
        assert_eq!(file.file_name().unwrap(), "editor.toml");
    }
}
