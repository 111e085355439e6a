//! Command-line arguments and config resolution.

use chgain_config::{ConfigError, EditorConfig, paths};
use chgain_gui_core::EditorVariant;
use clap::Parser;
use std::path::PathBuf;

/// Channel gain editor window.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "chgain-gui")]
#[command(about = "Standalone channel gain plugin editor")]
#[command(version)]
pub struct Args {
    /// Editor config file (default: the platform config directory's chgain/editor.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Editor revision: gain_only, direct, or attached
    ///
    /// Overriding the variant also resets the window to that variant's default
    /// size, unless --width or --height is given.
    #[arg(long)]
    pub variant: Option<EditorVariant>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<i32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<i32>,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    pub save_config: bool,
}

impl Args {
    /// Config file to read (and write with `--save-config`).
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::config_file)
    }

    /// Applies command-line overrides on top of `base` and validates the result.
    pub fn apply_overrides(&self, base: EditorConfig) -> Result<EditorConfig, ConfigError> {
        let mut config = base;
        if let Some(variant) = self.variant
            && variant != config.variant
        {
            let (width, height) = variant.default_size();
            config = config.with_size(width, height);
            config.variant = variant;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file (or defaults) and applies overrides.
    pub fn resolve_config(&self) -> Result<EditorConfig, ConfigError> {
        let path = self.config_path();
        let config = self.apply_overrides(EditorConfig::load_or_default(&path)?)?;
        if self.save_config {
            config.save(&path)?;
            tracing::info!(path = %path.display(), "saved editor config");
        }
        Ok(config)
    }
}
