//! Paint target abstraction.
//!
//! The editor paints through [`Graphics`] so the same paint routine drives the
//! egui window ([`EguiGraphics`](crate::view::EguiGraphics)) and headless
//! tests ([`DisplayList`]).

use crate::layout::Rect;
use egui::Color32;

/// Horizontal placement of fitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    /// Left-aligned, vertically centred.
    Left,
    /// Centred both ways.
    #[default]
    Centred,
    /// Right-aligned, vertically centred.
    Right,
}

/// Minimal drawing interface used by editors.
pub trait Graphics {
    /// Fills the whole paint area.
    fn fill_all(&mut self, colour: Color32);

    /// Sets the colour for subsequent text.
    fn set_colour(&mut self, colour: Color32);

    /// Sets the font height in points for subsequent text.
    fn set_font(&mut self, size: f32);

    /// Draws `text` inside `area`, using at most `max_lines` lines.
    fn draw_fitted_text(
        &mut self,
        text: &str,
        area: Rect,
        justification: Justification,
        max_lines: usize,
    );
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// [`Graphics::fill_all`].
    FillAll(Color32),
    /// [`Graphics::set_colour`].
    SetColour(Color32),
    /// [`Graphics::set_font`].
    SetFont(f32),
    /// [`Graphics::draw_fitted_text`].
    DrawFittedText {
        /// Text drawn.
        text: String,
        /// Target area.
        area: Rect,
        /// Placement inside the area.
        justification: Justification,
        /// Line limit.
        max_lines: usize,
    },
}

/// [`Graphics`] implementation that records every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<PaintCommand>,
}

impl DisplayList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Texts drawn, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawFittedText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Graphics for DisplayList {
    fn fill_all(&mut self, colour: Color32) {
        self.commands.push(PaintCommand::FillAll(colour));
    }

    fn set_colour(&mut self, colour: Color32) {
        self.commands.push(PaintCommand::SetColour(colour));
    }

    fn set_font(&mut self, size: f32) {
        self.commands.push(PaintCommand::SetFont(size));
    }

    fn draw_fitted_text(
        &mut self,
        text: &str,
        area: Rect,
        justification: Justification,
        max_lines: usize,
    ) {
        self.commands.push(PaintCommand::DrawFittedText {
            text: text.to_owned(),
            area,
            justification,
            max_lines,
        });
    }
}

/// Keeps at most `max_lines` lines of `text`.
pub fn fit_lines(text: &str, max_lines: usize) -> String {
    text.lines().take(max_lines.max(1)).collect::<Vec<_>>().join("\n")
}
