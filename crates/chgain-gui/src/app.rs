//! Main application window.

use chgain_config::EditorConfig;
use chgain_core::ChannelGain;
use chgain_gui_core::{Editor, EditorError, Theme, show_editor};
use egui::{CentralPanel, Context, Frame};
use std::sync::Arc;
use std::time::Duration;

/// Standalone host for one processor and its editor.
pub struct ChannelGainApp {
    // Dropped before the processor; it only holds a weak reference anyway.
    editor: Editor,
    processor: Arc<ChannelGain>,
    theme: Theme,
    last_error: Option<EditorError>,
}

impl ChannelGainApp {
    /// Create a new application instance from a resolved configuration.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &EditorConfig,
    ) -> Result<Self, EditorError> {
        let app = Self::headless(config)?;
        app.theme.apply(&cc.egui_ctx);
        Ok(app)
    }

    /// Builds the processor and editor without a window.
    pub fn headless(config: &EditorConfig) -> Result<Self, EditorError> {
        let processor = Arc::new(ChannelGain::new());
        let mut editor = Editor::new(&processor, config.variant)?;
        config.apply(&mut editor);
        tracing::info!(
            variant = %config.variant,
            width = config.width,
            height = config.height,
            "editor opened"
        );

        Ok(Self {
            editor,
            processor,
            theme: Theme::default(),
            last_error: None,
        })
    }

    /// The hosted processor.
    pub fn processor(&self) -> &Arc<ChannelGain> {
        &self.processor
    }

    /// The hosted editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Renders one frame of the editor.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        match show_editor(ui, &mut self.editor) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                if self.last_error.as_ref() != Some(&e) {
                    tracing::warn!(error = %e, "editor interaction failed");
                }
                self.last_error = Some(e);
            }
        }
    }
}

impl eframe::App for ChannelGainApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Attached controls follow the store, which can change without input
        if self.editor.variant().uses_attachments() {
            ctx.request_repaint_after(Duration::from_millis(33));
        }

        CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| self.ui(ui));
    }
}

impl Drop for ChannelGainApp {
    fn drop(&mut self) {
        tracing::info!(
            gain = self.processor.gain(),
            invert_phase = self.processor.invert_phase(),
            "editor closed"
        );
    }
}
