//! Editor configuration file.
//!
//! Every field is optional in TOML. Missing size fields take the chosen
//! variant's default size, so `variant = "attached"` alone yields an
//! 800 × 600 window.

use crate::ConfigError;
use crate::validation::{ValidationResult, validate_config};
use chgain_gui_core::{CAPTION, Editor, EditorVariant};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Window and editor settings for the standalone host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEditorConfig")]
pub struct EditorConfig {
    /// Editor revision to build.
    pub variant: EditorVariant,
    /// Initial window width.
    pub width: i32,
    /// Initial window height.
    pub height: i32,
    /// Caption painted in the top band.
    pub caption: String,
}

#[derive(Deserialize)]
struct RawEditorConfig {
    #[serde(default)]
    variant: EditorVariant,
    width: Option<i32>,
    height: Option<i32>,
    caption: Option<String>,
}

impl From<RawEditorConfig> for EditorConfig {
    fn from(raw: RawEditorConfig) -> Self {
        let defaults = EditorConfig::for_variant(raw.variant);
        Self {
            variant: raw.variant,
            width: raw.width.unwrap_or(defaults.width),
            height: raw.height.unwrap_or(defaults.height),
            caption: raw.caption.unwrap_or(defaults.caption),
        }
    }
}

impl EditorConfig {
    /// Defaults for one variant.
    pub fn for_variant(variant: EditorVariant) -> Self {
        let (width, height) = variant.default_size();
        Self {
            variant,
            width,
            height,
            caption: CAPTION.to_string(),
        }
    }

    /// Override the window size.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Override the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Check size and caption.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_config(self)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), variant = %config.variant, "loaded editor config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no editor config, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate and save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), "saved editor config");
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply size and caption to an editor built for this configuration.
    pub fn apply(&self, editor: &mut Editor) {
        editor.set_caption(self.caption.clone());
        editor.set_size(self.width, self.height);
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::for_variant(EditorVariant::default())
    }
}
