//! egui rendering of an [`Editor`].
//!
//! [`show_editor`] runs once per frame: it applies pending store changes,
//! resizes the editor to the available area, paints it through
//! [`EguiGraphics`], and places one egui widget per visible control at the
//! control's bounds. Widget interaction is routed back into the editor with
//! the same gesture protocol a host expects (`begin_drag` on drag start,
//! the change itself, `end_drag` on drag stop).

use crate::controls::{ControlId, ControlRef, Label, Slider, TextBoxPosition, ToggleButton};
use crate::graphics::{Graphics, Justification, fit_lines};
use crate::layout::Rect;
use crate::{Editor, EditorError};
use egui::{Align2, Color32, FontId, Painter, Pos2, Ui, UiBuilder};

/// [`Graphics`] implementation that draws with an egui [`Painter`].
///
/// Editor coordinates are offsets from `origin`.
pub struct EguiGraphics {
    painter: Painter,
    origin: Pos2,
    colour: Color32,
    font_size: f32,
}

impl EguiGraphics {
    /// Draws into `painter`, with editor `(0, 0)` at `origin`.
    pub fn new(painter: Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            colour: Color32::BLACK,
            font_size: 12.0,
        }
    }
}

impl Graphics for EguiGraphics {
    fn fill_all(&mut self, colour: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, colour);
    }

    fn set_colour(&mut self, colour: Color32) {
        self.colour = colour;
    }

    fn set_font(&mut self, size: f32) {
        self.font_size = size;
    }

    fn draw_fitted_text(
        &mut self,
        text: &str,
        area: Rect,
        justification: Justification,
        max_lines: usize,
    ) {
        let rect = to_egui_rect(area, self.origin);
        let (anchor, pos) = match justification {
            Justification::Left => (Align2::LEFT_CENTER, rect.left_center()),
            Justification::Centred => (Align2::CENTER_CENTER, rect.center()),
            Justification::Right => (Align2::RIGHT_CENTER, rect.right_center()),
        };
        self.painter.with_clip_rect(rect).text(
            pos,
            anchor,
            fit_lines(text, max_lines),
            FontId::proportional(self.font_size),
            self.colour,
        );
    }
}

/// Converts editor bounds to screen space.
pub fn to_egui_rect(rect: Rect, origin: Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

/// Owned copy of a control's display state, taken before the editor is
/// mutated by widget interaction.
enum Snapshot {
    Slider(Slider),
    Button(ToggleButton),
    Label(Label),
}

/// Renders `editor` into the whole of `ui`'s available area.
///
/// Errors from control dispatch (for example a dropped processor) are
/// returned after the frame's widgets have been placed up to that point.
pub fn show_editor(ui: &mut Ui, editor: &mut Editor) -> Result<(), EditorError> {
    editor.sync_from_params();

    let area = ui.max_rect();
    editor.set_size(area.width().round() as i32, area.height().round() as i32);

    let mut graphics = EguiGraphics::new(ui.painter_at(area), area.min);
    editor.paint(&mut graphics);

    let controls = editor.visible_controls().to_vec();
    for id in controls {
        let snapshot = match editor.control(id) {
            Some(ControlRef::Slider(slider)) => Snapshot::Slider(slider.clone()),
            Some(ControlRef::Button(button)) => Snapshot::Button(button.clone()),
            Some(ControlRef::Label(label)) => Snapshot::Label(label.clone()),
            None => continue,
        };
        match snapshot {
            Snapshot::Slider(slider) => show_slider(ui, editor, id, &slider, area.min)?,
            Snapshot::Button(button) => show_button(ui, editor, id, &button, area.min)?,
            Snapshot::Label(label) => show_label(ui, &label, area.min),
        }
    }
    Ok(())
}

fn show_slider(
    ui: &mut Ui,
    editor: &mut Editor,
    id: ControlId,
    slider: &Slider,
    origin: Pos2,
) -> Result<(), EditorError> {
    if slider.bounds().is_empty() {
        return Ok(());
    }
    let rect = to_egui_rect(slider.bounds(), origin);
    let range = slider.range();
    let vertical = slider.style().is_vertical();

    let mut value = slider.value();
    let mut widget = egui::Slider::new(&mut value, range.min..=range.max)
        .show_value(slider.text_box().position != TextBoxPosition::NoTextBox)
        .suffix(slider.suffix())
        .max_decimals(range.decimal_places());
    if range.interval > 0.0 {
        widget = widget.step_by(range.interval);
    }
    if vertical {
        widget = widget.vertical();
    }

    let response = ui
        .scope_builder(UiBuilder::new().max_rect(rect), |ui| {
            ui.spacing_mut().slider_width = if vertical { rect.height() } else { rect.width() };
            ui.add(widget)
        })
        .inner;

    if response.drag_started() {
        editor.begin_drag(id)?;
    }
    if response.changed() {
        editor.drag_slider(id, value)?;
    }
    if response.drag_stopped() {
        editor.end_drag(id)?;
    }
    if let Some(text) = editor
        .slider(id)
        .filter(|s| s.popup_display())
        .map(Slider::display_text)
    {
        response.on_hover_text(text);
    }
    Ok(())
}

fn show_button(
    ui: &mut Ui,
    editor: &mut Editor,
    id: ControlId,
    button: &ToggleButton,
    origin: Pos2,
) -> Result<(), EditorError> {
    if button.bounds().is_empty() {
        return Ok(());
    }
    let rect = to_egui_rect(button.bounds(), origin);
    let response = ui.put(
        rect,
        egui::Button::new(button.text()).selected(button.toggle_state()),
    );
    if response.clicked() {
        editor.click_button(id)?;
    }
    Ok(())
}

fn show_label(ui: &mut Ui, label: &Label, origin: Pos2) {
    if label.bounds().is_empty() {
        return;
    }
    ui.put(
        to_egui_rect(label.bounds(), origin),
        egui::Label::new(label.text()),
    );
}
