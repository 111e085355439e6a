//! Editor configuration for the chgain standalone host.
//!
//! # Features
//!
//! - **Editor config**: Load and save [`EditorConfig`] (variant, window size, caption) as TOML
//! - **Validation**: Reject windows below the variant's minimum size and empty captions
//! - **Paths**: Platform-specific config directory and default config file
//!
//! # Example
//!
//! ```rust,no_run
//! use chgain_config::{EditorConfig, paths};
//! use chgain_gui_core::EditorVariant;
//!
//! let config = EditorConfig::load_or_default(paths::config_file()).unwrap();
//!
//! let attached = EditorConfig::for_variant(EditorVariant::Attached).with_caption("Bus Gain");
//! attached.save(paths::config_file()).unwrap();
//! ```

mod editor_config;
mod error;

/// Platform-specific configuration paths.
pub mod paths;

/// Editor configuration validation.
pub mod validation;

pub use editor_config::EditorConfig;
pub use error::ConfigError;
pub use paths::{config_file, ensure_user_config_dir, user_config_dir};
pub use validation::{ValidationError, ValidationResult, validate_config, validate_size};
