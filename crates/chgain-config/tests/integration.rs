//! Integration tests for chgain-config.
//!
//! These tests exercise config files on disk and applying them to a live editor.

use chgain_config::{ConfigError, EditorConfig, ValidationError};
use chgain_core::ChannelGain;
use chgain_gui_core::{DisplayList, Editor, EditorVariant};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn save_then_load_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("editor.toml");

    let config = EditorConfig::for_variant(EditorVariant::Attached)
        .with_size(900, 640)
        .with_caption("Bus Gain");
    config.save(&path).expect("save should create parent directories");

    let loaded = EditorConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let config = EditorConfig::load_or_default(&path).unwrap();
    assert_eq!(config, EditorConfig::default());
    assert!(!path.exists(), "defaults must not be written back");
}

#[test]
fn load_or_default_reports_broken_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("editor.toml");
    std::fs::write(&path, "width = \"wide\"").unwrap();
    let err = EditorConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse(_)), "got {err:?}");
}

#[test]
fn load_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");
    let err = EditorConfig::load(&path).unwrap_err();
    assert!(
        matches!(err, ConfigError::ReadFile { path: ref p, .. } if p == &path),
        "got {err:?}"
    );
}

#[test]
fn invalid_config_is_not_saved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("editor.toml");
    let config = EditorConfig::default().with_caption("");
    let err = config.save(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::EmptyCaption)
    ));
    assert!(!path.exists());
}

#[test]
fn config_applies_to_editor() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("editor.toml");
    std::fs::write(
        &path,
        "variant = \"direct\"\nwidth = 500\nheight = 420\ncaption = \"Left Gain\"\n",
    )
    .unwrap();

    let config = EditorConfig::load(&path).unwrap();
    let processor = Arc::new(ChannelGain::new());
    let mut editor = Editor::new(&processor, config.variant).unwrap();
    config.apply(&mut editor);

    assert_eq!(editor.size(), (500, 420));
    let mut g = DisplayList::new();
    editor.paint(&mut g);
    assert_eq!(g.texts(), vec!["Left Gain"]);
}
