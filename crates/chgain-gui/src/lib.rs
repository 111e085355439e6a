//! Standalone window hosting the chgain channel gain editor.
//!
//! The binary resolves an [`EditorConfig`](chgain_config::EditorConfig) from
//! the config file and command line, creates one processor and one editor,
//! and renders the editor with eframe.

pub mod app;
pub mod cli;

pub use app::ChannelGainApp;
pub use cli::Args;
