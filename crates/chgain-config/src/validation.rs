//! Editor configuration validation.
//!
//! A configuration is valid when its window is at least the variant's
//! minimum size (so no control is clipped) and its caption is non-empty.
//!
//! # Example
//!
//! ```rust
//! use chgain_config::{EditorConfig, validate_config};
//!
//! let config = EditorConfig::default();
//! validate_config(&config).expect("defaults are valid");
//! ```

use crate::EditorConfig;
use chgain_gui_core::EditorVariant;
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Width or height is zero or negative.
    #[error("window size {width}x{height} must be positive")]
    ZeroSize {
        /// Configured width.
        width: i32,
        /// Configured height.
        height: i32,
    },

    /// Window is smaller than the variant's layout needs.
    #[error(
        "window size {width}x{height} is below the {variant} minimum of {min_width}x{min_height}"
    )]
    BelowMinimum {
        /// Editor variant.
        variant: EditorVariant,
        /// Configured width.
        width: i32,
        /// Configured height.
        height: i32,
        /// Variant's minimum width.
        min_width: i32,
        /// Variant's minimum height.
        min_height: i32,
    },

    /// Caption is empty or whitespace.
    #[error("caption must not be empty")]
    EmptyCaption,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", join_errors(.0))]
    Multiple(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate the window size for a variant.
pub fn validate_size(variant: EditorVariant, width: i32, height: i32) -> ValidationResult<()> {
    if width <= 0 || height <= 0 {
        return Err(ValidationError::ZeroSize { width, height });
    }
    let (min_width, min_height) = variant.min_size();
    if width < min_width || height < min_height {
        return Err(ValidationError::BelowMinimum {
            variant,
            width,
            height,
            min_width,
            min_height,
        });
    }
    Ok(())
}

/// Validate a whole configuration, collecting every problem.
pub fn validate_config(config: &EditorConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_size(config.variant, config.width, config.height) {
        errors.push(e);
    }
    if config.caption.trim().is_empty() {
        errors.push(ValidationError::EmptyCaption);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
