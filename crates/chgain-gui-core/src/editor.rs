//! The channel gain editor.
//!
//! [`Editor`] owns a small fixed set of controls and one [`Binding`] per bound
//! control. It refers to the processor through a `Weak` back-reference and
//! never keeps it alive.
//!
//! Lifecycle: constructed (size set, controls configured, bound, registered
//! for display, laid out) → live (paint, resize, control changes) → dropped
//! (bindings released before controls).
//!
//! # Example
//!
//! ```rust
//! use chgain_core::ChannelGain;
//! use chgain_gui_core::{ControlId, Editor, EditorVariant};
//! use std::sync::Arc;
//!
//! let processor = Arc::new(ChannelGain::new());
//! let mut editor = Editor::new(&processor, EditorVariant::Direct).unwrap();
//!
//! editor.drag_slider(ControlId::GAIN_SLIDER, 0.8).unwrap();
//! assert_eq!(processor.gain(), 0.8);
//!
//! editor.click_button(ControlId::PHASE_BUTTON).unwrap();
//! assert!(processor.invert_phase());
//! ```

use crate::attachment::Attachment;
use crate::binding::{Binding, ControlListener, DirectBinding, state_text};
use crate::controls::{
    ControlId, ControlMut, ControlRef, ControlValue, Label, Slider, SliderStyle, TextBoxPosition,
    ToggleButton,
};
use crate::graphics::{Graphics, Justification};
use crate::layout::{EditorLayout, EditorVariant, caption_band};
use crate::{EditorError, ParamBridge};
use chgain_core::{ChannelGain, GAIN, GAIN_KEY, INVERT_PHASE, INVERT_PHASE_KEY, ParamIndex};
use egui::Color32;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

/// Caption painted in the top band.
pub const CAPTION: &str = "Channel Gain";

/// Caption font height in points.
pub const CAPTION_FONT_SIZE: f32 = 15.0;

/// Plugin editor bound to a [`ChannelGain`] processor.
pub struct Editor {
    // Declared first so attachments drop before the controls they touch.
    bindings: BTreeMap<ControlId, Binding>,
    processor: Weak<ChannelGain>,
    store: Arc<dyn ParamBridge>,
    variant: EditorVariant,
    width: i32,
    height: i32,
    caption: String,
    gain_slider: Slider,
    phase_button: Option<ToggleButton>,
    gain_label: Option<Label>,
    visible: Vec<ControlId>,
}

impl Editor {
    /// Builds an editor whose attachments talk to the processor's own store.
    pub fn new(processor: &Arc<ChannelGain>, variant: EditorVariant) -> Result<Self, EditorError> {
        let store: Arc<dyn ParamBridge> = Arc::new(processor.params().clone());
        Self::with_store(processor, store, variant)
    }

    /// Builds an editor from a back-reference.
    ///
    /// Fails with [`EditorError::ProcessorGone`] if the processor was dropped.
    pub fn from_weak(
        processor: &Weak<ChannelGain>,
        variant: EditorVariant,
    ) -> Result<Self, EditorError> {
        let processor = processor.upgrade().ok_or(EditorError::ProcessorGone)?;
        Self::new(&processor, variant)
    }

    /// Builds an editor whose attachments talk to `store`.
    ///
    /// Direct bindings always write through the processor.
    pub fn with_store(
        processor: &Arc<ChannelGain>,
        store: Arc<dyn ParamBridge>,
        variant: EditorVariant,
    ) -> Result<Self, EditorError> {
        let mut editor = Self {
            bindings: BTreeMap::new(),
            processor: Arc::downgrade(processor),
            store,
            variant,
            width: 0,
            height: 0,
            caption: CAPTION.to_owned(),
            gain_slider: Slider::new(ControlId::GAIN_SLIDER),
            phase_button: None,
            gain_label: None,
            visible: Vec::new(),
        };

        let (width, height) = variant.default_size();
        editor.set_size(width, height);

        match variant {
            EditorVariant::GainOnly | EditorVariant::Direct => editor.build_direct()?,
            EditorVariant::Attached => editor.build_attached()?,
        }
        editor.resized();

        tracing::debug!(
            %variant,
            width,
            height,
            controls = editor.visible.len(),
            "editor constructed"
        );
        Ok(editor)
    }

    fn build_direct(&mut self) -> Result<(), EditorError> {
        let slider = &mut self.gain_slider;
        slider.set_slider_style(SliderStyle::LinearBarVertical);
        slider.set_range(0.0, 1.0, 0.01);
        slider.set_text_box_style(TextBoxPosition::NoTextBox, false, 90, 0);
        slider.set_popup_display_enabled(true);
        slider.set_text_value_suffix(" Volume");
        slider.set_value(0.5);
        self.bind_direct(ControlId::GAIN_SLIDER, GAIN)?;
        self.add_and_make_visible(ControlId::GAIN_SLIDER);

        if self.variant.has_phase_button() {
            let mut button = ToggleButton::new(ControlId::PHASE_BUTTON);
            button.set_button_text(self.direct_state_text(INVERT_PHASE, 0.0)?);
            button.set_clicking_toggles_state(true);
            self.phase_button = Some(button);
            self.bind_direct(ControlId::PHASE_BUTTON, INVERT_PHASE)?;
            self.add_and_make_visible(ControlId::PHASE_BUTTON);
        }
        Ok(())
    }

    fn build_attached(&mut self) -> Result<(), EditorError> {
        self.gain_label = Some(Label::new(ControlId::GAIN_LABEL, "Gain"));
        self.add_and_make_visible(ControlId::GAIN_LABEL);

        self.add_and_make_visible(ControlId::GAIN_SLIDER);
        self.attach(ControlId::GAIN_SLIDER, GAIN_KEY)?;

        let mut button = ToggleButton::new(ControlId::PHASE_BUTTON);
        button.set_button_text("Invert Phase");
        self.phase_button = Some(button);
        self.add_and_make_visible(ControlId::PHASE_BUTTON);
        self.attach(ControlId::PHASE_BUTTON, INVERT_PHASE_KEY)?;
        Ok(())
    }

    fn add_and_make_visible(&mut self, control: ControlId) {
        if !self.visible.contains(&control) {
            self.visible.push(control);
        }
    }

    fn direct_state_text(&self, param: ParamIndex, value: f32) -> Result<String, EditorError> {
        let processor = self.processor()?;
        let desc = processor
            .params()
            .descriptor(param)
            .ok_or(EditorError::ParamOutOfRange(param))?;
        Ok(state_text(desc.name, &desc.format_value(value)))
    }

    // ── Bindings ────────────────────────────────────────────────────────────

    /// Binds a slider or button so user changes are written straight into
    /// the processor parameter `param`.
    pub fn bind_direct(
        &mut self,
        control: ControlId,
        param: ParamIndex,
    ) -> Result<(), EditorError> {
        if self.bindings.contains_key(&control) {
            return Err(EditorError::AlreadyBound(control));
        }
        if self.processor()?.params().descriptor(param).is_none() {
            return Err(EditorError::ParamOutOfRange(param));
        }
        let show_state_in_text = match self.control(control) {
            Some(ControlRef::Button(_)) => true,
            Some(ControlRef::Slider(_)) => false,
            Some(ControlRef::Label(_)) => {
                return Err(EditorError::WrongControlKind {
                    control,
                    expected: "slider or button",
                });
            }
            None => return Err(EditorError::UnknownControl(control)),
        };

        self.bindings.insert(
            control,
            Binding::Direct(DirectBinding {
                param,
                show_state_in_text,
            }),
        );
        tracing::trace!(%control, %param, "direct binding");
        Ok(())
    }

    /// Attaches a slider or button to the store parameter named `key`.
    pub fn attach(&mut self, control: ControlId, key: &str) -> Result<(), EditorError> {
        if self.bindings.contains_key(&control) {
            return Err(EditorError::AlreadyBound(control));
        }
        let store = Arc::clone(&self.store);
        let attachment = match self.control_mut(control) {
            Some(ControlMut::Slider(slider)) => Attachment::slider(store, key, slider)?,
            Some(ControlMut::Button(button)) => Attachment::button(store, key, button)?,
            Some(ControlMut::Label(_)) => {
                return Err(EditorError::WrongControlKind {
                    control,
                    expected: "slider or button",
                });
            }
            None => return Err(EditorError::UnknownControl(control)),
        };
        self.bindings.insert(control, Binding::Managed(attachment));
        Ok(())
    }

    /// Removes a control's binding. Dropping the result releases it.
    pub fn unbind(&mut self, control: ControlId) -> Option<Binding> {
        self.bindings.remove(&control)
    }

    /// Binding of a control.
    pub fn binding(&self, control: ControlId) -> Option<&Binding> {
        self.bindings.get(&control)
    }

    /// Number of bound controls.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    // ── Interaction ─────────────────────────────────────────────────────────

    /// Moves a slider as a user drag would. Dispatches only if the value changed.
    pub fn drag_slider(&mut self, control: ControlId, value: f64) -> Result<bool, EditorError> {
        let slider = match self.control_mut(control) {
            Some(ControlMut::Slider(slider)) => slider,
            Some(_) => {
                return Err(EditorError::WrongControlKind {
                    control,
                    expected: "slider",
                });
            }
            None => return Err(EditorError::UnknownControl(control)),
        };
        if !slider.set_value(value) {
            return Ok(false);
        }
        let value = slider.value();
        self.on_control_changed(control, ControlValue::Continuous(value))?;
        Ok(true)
    }

    /// Clicks a button as a user would. Returns the state after the click.
    pub fn click_button(&mut self, control: ControlId) -> Result<bool, EditorError> {
        let state = match self.control_mut(control) {
            Some(ControlMut::Button(button)) => button.click(),
            Some(_) => {
                return Err(EditorError::WrongControlKind {
                    control,
                    expected: "button",
                });
            }
            None => return Err(EditorError::UnknownControl(control)),
        };
        self.on_control_changed(control, ControlValue::Toggle(state))?;
        Ok(state)
    }

    /// Marks the start of a drag on a bound control.
    pub fn begin_drag(&mut self, control: ControlId) -> Result<(), EditorError> {
        match self.bindings.get(&control) {
            Some(Binding::Direct(direct)) => self.processor()?.params().begin_gesture(direct.param),
            Some(Binding::Managed(attachment)) => attachment.begin_gesture(),
            None => {}
        }
        Ok(())
    }

    /// Marks the end of a drag on a bound control.
    pub fn end_drag(&mut self, control: ControlId) -> Result<(), EditorError> {
        match self.bindings.get(&control) {
            Some(Binding::Direct(direct)) => self.processor()?.params().end_gesture(direct.param),
            Some(Binding::Managed(attachment)) => attachment.end_gesture(),
            None => {}
        }
        Ok(())
    }

    /// Applies store changes to attached controls without re-dispatching.
    ///
    /// Returns how many controls changed. Direct bindings never read back.
    pub fn sync_from_params(&mut self) -> usize {
        let updates: Vec<(ControlId, f32)> = self
            .bindings
            .iter()
            .filter_map(|(control, binding)| match binding {
                Binding::Managed(attachment) => attachment.take_pending().map(|v| (*control, v)),
                Binding::Direct(_) => None,
            })
            .collect();

        let mut applied = 0;
        for (control, value) in updates {
            let changed = match self.control_mut(control) {
                Some(ControlMut::Slider(slider)) => slider.set_value(f64::from(value)),
                Some(ControlMut::Button(button)) => button.set_toggle_state(value >= 0.5),
                Some(ControlMut::Label(_)) | None => false,
            };
            if changed {
                applied += 1;
            }
        }
        if applied > 0 {
            tracing::trace!(applied, "controls synced from parameters");
        }
        applied
    }

    // ── Paint / layout ──────────────────────────────────────────────────────

    /// Draws the static caption. No live values are rendered.
    pub fn paint(&self, g: &mut dyn Graphics) {
        if !self.variant.uses_attachments() {
            g.fill_all(Color32::WHITE);
            g.set_colour(Color32::BLACK);
        }
        g.set_font(CAPTION_FONT_SIZE);
        g.draw_fitted_text(
            &self.caption,
            caption_band(self.width),
            Justification::Centred,
            1,
        );
    }

    /// Resizes the editor and lays out its controls if the size changed.
    pub fn set_size(&mut self, width: i32, height: i32) {
        let (width, height) = (width.max(0), height.max(0));
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.resized();
    }

    /// Recomputes every control's bounds for the current size.
    pub fn resized(&mut self) {
        let layout = EditorLayout::compute(self.variant, self.width, self.height);
        self.gain_slider.set_bounds(layout.gain_slider);
        if let (Some(button), Some(bounds)) = (self.phase_button.as_mut(), layout.phase_button) {
            button.set_bounds(bounds);
        }
        if let (Some(label), Some(bounds)) = (self.gain_label.as_mut(), layout.gain_label) {
            label.set_bounds(bounds);
        }
        tracing::debug!(width = self.width, height = self.height, "editor resized");
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// Current `(width, height)`.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Which revision this editor implements.
    pub fn variant(&self) -> EditorVariant {
        self.variant
    }

    /// Caption text.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Replaces the caption text.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Controls registered for display, in registration order.
    pub fn visible_controls(&self) -> &[ControlId] {
        &self.visible
    }

    /// The processor, if it is still alive.
    pub fn processor(&self) -> Result<Arc<ChannelGain>, EditorError> {
        self.processor.upgrade().ok_or(EditorError::ProcessorGone)
    }

    /// The store attachments talk to.
    pub fn store(&self) -> &Arc<dyn ParamBridge> {
        &self.store
    }

    /// Any control by id.
    pub fn control(&self, id: ControlId) -> Option<ControlRef<'_>> {
        if id == self.gain_slider.id() {
            return Some(ControlRef::Slider(&self.gain_slider));
        }
        if let Some(button) = self.phase_button.as_ref().filter(|b| b.id() == id) {
            return Some(ControlRef::Button(button));
        }
        self.gain_label
            .as_ref()
            .filter(|l| l.id() == id)
            .map(ControlRef::Label)
    }

    fn control_mut(&mut self, id: ControlId) -> Option<ControlMut<'_>> {
        if id == self.gain_slider.id() {
            return Some(ControlMut::Slider(&mut self.gain_slider));
        }
        if let Some(button) = self.phase_button.as_mut().filter(|b| b.id() == id) {
            return Some(ControlMut::Button(button));
        }
        self.gain_label
            .as_mut()
            .filter(|l| l.id() == id)
            .map(ControlMut::Label)
    }

    /// Slider by id.
    pub fn slider(&self, id: ControlId) -> Option<&Slider> {
        match self.control(id) {
            Some(ControlRef::Slider(slider)) => Some(slider),
            _ => None,
        }
    }

    /// Button by id.
    pub fn button(&self, id: ControlId) -> Option<&ToggleButton> {
        match self.control(id) {
            Some(ControlRef::Button(button)) => Some(button),
            _ => None,
        }
    }

    /// Label by id.
    pub fn label(&self, id: ControlId) -> Option<&Label> {
        match self.control(id) {
            Some(ControlRef::Label(label)) => Some(label),
            _ => None,
        }
    }

    /// The gain slider.
    pub fn gain_slider(&self) -> &Slider {
        &self.gain_slider
    }

    /// The phase button, if the variant has one.
    pub fn phase_button(&self) -> Option<&ToggleButton> {
        self.phase_button.as_ref()
    }

    /// The gain label, if the variant has one.
    pub fn gain_label(&self) -> Option<&Label> {
        self.gain_label.as_ref()
    }
}

impl ControlListener for Editor {
    fn on_control_changed(
        &mut self,
        control: ControlId,
        value: ControlValue,
    ) -> Result<(), EditorError> {
        let direct = match self.bindings.get(&control) {
            Some(Binding::Managed(attachment)) => {
                attachment.control_changed(value);
                return Ok(());
            }
            Some(Binding::Direct(direct)) => *direct,
            None if self.control(control).is_some() => return Ok(()),
            None => return Err(EditorError::UnknownControl(control)),
        };

        let processor = self.processor().inspect_err(|_| {
            tracing::warn!(%control, "control changed after the processor was dropped");
        })?;
        let params = processor.params();
        params.set(direct.param, value.as_param());
        tracing::trace!(%control, param = %direct.param, value = value.as_param(), "direct write");

        if !direct.show_state_in_text {
            return Ok(());
        }
        if let Some(desc) = params.descriptor(direct.param) {
            let text = state_text(desc.name, &desc.format_value(value.as_param()));
            if let Some(ControlMut::Button(button)) = self.control_mut(control) {
                button.set_button_text(text);
            }
        }
        Ok(())
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        let released = self.bindings.len();
        self.bindings.clear();
        tracing::debug!(released, "editor closed, bindings released");
    }
}

impl core::fmt::Debug for Editor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Editor")
            .field("variant", &self.variant)
            .field("size", &(self.width, self.height))
            .field("bindings", &self.bindings)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingKind;
    use crate::graphics::{DisplayList, PaintCommand};
    use crate::layout::Rect;

    fn processor() -> Arc<ChannelGain> {
        Arc::new(ChannelGain::new())
    }

    #[test]
    fn direct_construction() {
        let p = processor();
        let editor = Editor::new(&p, EditorVariant::Direct).unwrap();

        assert_eq!(editor.size(), (400, 300));
        assert_eq!(
            editor.visible_controls(),
            &[ControlId::GAIN_SLIDER, ControlId::PHASE_BUTTON]
        );
        let slider = editor.gain_slider();
        assert_eq!(slider.style(), SliderStyle::LinearBarVertical);
        assert_eq!(slider.value(), 0.5);
        assert_eq!(slider.text_box().position, TextBoxPosition::NoTextBox);
        assert!(slider.popup_display());
        assert_eq!(slider.display_text(), "0.50 Volume");
        assert_eq!(slider.bounds(), Rect::new(40, 30, 20, 240));

        let button = editor.phase_button().unwrap();
        assert_eq!(button.text(), "Phase Invert (False)");
        assert!(button.clicking_toggles_state());
        assert_eq!(button.bounds(), Rect::new(80, 30, 150, 20));

        assert_eq!(
            editor.binding(ControlId::GAIN_SLIDER).map(Binding::kind),
            Some(BindingKind::Direct)
        );
        assert_eq!(p.params().subscriber_count(), 0);
    }

    #[test]
    fn construction_does_not_write_parameters() {
        let p = processor();
        p.set_gain(0.9);
        let editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        assert_eq!(editor.gain_slider().value(), 0.5);
        assert_eq!(p.gain(), 0.9);
    }

    #[test]
    fn gain_only_has_no_button() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::GainOnly).unwrap();
        assert!(editor.phase_button().is_none());
        assert_eq!(editor.visible_controls(), &[ControlId::GAIN_SLIDER]);
        assert_eq!(
            editor.click_button(ControlId::PHASE_BUTTON),
            Err(EditorError::UnknownControl(ControlId::PHASE_BUTTON))
        );
    }

    #[test]
    fn attached_construction() {
        let p = processor();
        p.set_invert_phase(true);
        let editor = Editor::new(&p, EditorVariant::Attached).unwrap();

        assert_eq!(editor.size(), (800, 600));
        assert_eq!(
            editor.visible_controls(),
            &[
                ControlId::GAIN_LABEL,
                ControlId::GAIN_SLIDER,
                ControlId::PHASE_BUTTON
            ]
        );
        assert_eq!(editor.gain_label().unwrap().text(), "Gain");
        assert_eq!(editor.phase_button().unwrap().text(), "Invert Phase");
        assert!(editor.phase_button().unwrap().toggle_state());
        assert_eq!(editor.binding_count(), 2);
        assert_eq!(p.params().subscriber_count(), 2);
    }

    #[test]
    fn direct_paint_fills_and_draws_caption() {
        let p = processor();
        let editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        let mut g = DisplayList::new();
        editor.paint(&mut g);
        assert_eq!(
            g.commands(),
            &[
                PaintCommand::FillAll(Color32::WHITE),
                PaintCommand::SetColour(Color32::BLACK),
                PaintCommand::SetFont(15.0),
                PaintCommand::DrawFittedText {
                    text: "Channel Gain".to_string(),
                    area: Rect::new(0, 0, 400, 30),
                    justification: Justification::Centred,
                    max_lines: 1,
                },
            ]
        );
    }

    #[test]
    fn attached_paint_has_no_fill() {
        let p = processor();
        let editor = Editor::new(&p, EditorVariant::Attached).unwrap();
        let mut g = DisplayList::new();
        editor.paint(&mut g);
        assert!(
            !g.commands()
                .iter()
                .any(|c| matches!(c, PaintCommand::FillAll(_)))
        );
        assert_eq!(g.texts(), vec!["Channel Gain"]);
    }

    #[test]
    fn paint_does_not_render_live_values() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        let mut before = DisplayList::new();
        editor.paint(&mut before);
        editor.drag_slider(ControlId::GAIN_SLIDER, 0.1).unwrap();
        let mut after = DisplayList::new();
        editor.paint(&mut after);
        assert_eq!(before, after);
    }

    #[test]
    fn double_binding_rejected() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        assert_eq!(
            editor.bind_direct(ControlId::GAIN_SLIDER, GAIN),
            Err(EditorError::AlreadyBound(ControlId::GAIN_SLIDER))
        );
        assert_eq!(
            editor.attach(ControlId::GAIN_SLIDER, GAIN_KEY),
            Err(EditorError::AlreadyBound(ControlId::GAIN_SLIDER))
        );
        assert_eq!(p.params().subscriber_count(), 0);
    }

    #[test]
    fn rebind_after_unbind() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        let old = editor.unbind(ControlId::GAIN_SLIDER).unwrap();
        assert_eq!(old.kind(), BindingKind::Direct);

        // Unbound but existing controls change silently.
        editor.drag_slider(ControlId::GAIN_SLIDER, 0.2).unwrap();
        assert_eq!(p.gain(), 0.5);

        editor.attach(ControlId::GAIN_SLIDER, GAIN_KEY).unwrap();
        assert_eq!(p.params().subscriber_count(), 1);
        editor.drag_slider(ControlId::GAIN_SLIDER, 0.3).unwrap();
        assert!((p.gain() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn attach_errors() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Attached).unwrap();
        assert_eq!(
            editor.attach(ControlId::GAIN_LABEL, GAIN_KEY),
            Err(EditorError::WrongControlKind {
                control: ControlId::GAIN_LABEL,
                expected: "slider or button",
            })
        );
        assert_eq!(
            editor.attach(ControlId("missing"), GAIN_KEY),
            Err(EditorError::UnknownControl(ControlId("missing")))
        );
        drop(editor.unbind(ControlId::GAIN_SLIDER));
        assert_eq!(
            editor.attach(ControlId::GAIN_SLIDER, "volume"),
            Err(EditorError::UnknownParameter("volume".to_string()))
        );
        assert_eq!(
            editor.bind_direct(ControlId::GAIN_SLIDER, ParamIndex(5)),
            Err(EditorError::ParamOutOfRange(ParamIndex(5)))
        );
    }

    #[test]
    fn wrong_kind_interactions() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        assert!(matches!(
            editor.click_button(ControlId::GAIN_SLIDER),
            Err(EditorError::WrongControlKind { expected: "button", .. })
        ));
        assert!(matches!(
            editor.drag_slider(ControlId::PHASE_BUTTON, 1.0),
            Err(EditorError::WrongControlKind { expected: "slider", .. })
        ));
    }

    #[test]
    fn unchanged_drag_does_not_dispatch() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        p.set_gain(0.9);
        assert_eq!(editor.drag_slider(ControlId::GAIN_SLIDER, 0.5), Ok(false));
        assert_eq!(p.gain(), 0.9);
    }

    #[test]
    fn processor_gone() {
        let p = processor();
        let weak = Arc::downgrade(&p);
        let mut editor = Editor::from_weak(&weak, EditorVariant::Direct).unwrap();
        drop(p);
        assert_eq!(
            editor.drag_slider(ControlId::GAIN_SLIDER, 0.7),
            Err(EditorError::ProcessorGone)
        );
        assert_eq!(
            Editor::from_weak(&weak, EditorVariant::Direct).unwrap_err(),
            EditorError::ProcessorGone
        );
    }

    #[test]
    fn gestures_follow_bindings() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        editor.begin_drag(ControlId::GAIN_SLIDER).unwrap();
        editor.end_drag(ControlId::GAIN_SLIDER).unwrap();
        assert_eq!(
            p.params().take_gesture_flags(GAIN),
            chgain_core::GESTURE_BEGIN | chgain_core::GESTURE_END
        );

        let mut attached = Editor::new(&p, EditorVariant::Attached).unwrap();
        attached.begin_drag(ControlId::GAIN_SLIDER).unwrap();
        assert_eq!(p.params().take_gesture_flags(GAIN), chgain_core::GESTURE_BEGIN);
    }

    #[test]
    fn set_size_relayouts() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        editor.set_size(500, 500);
        assert_eq!(editor.gain_slider().bounds(), Rect::new(40, 30, 20, 440));
        editor.set_size(-5, 20);
        assert_eq!(editor.size(), (0, 20));
        assert!(editor.gain_slider().bounds().is_empty());
    }

    #[test]
    fn caption_can_change() {
        let p = processor();
        let mut editor = Editor::new(&p, EditorVariant::Direct).unwrap();
        editor.set_caption("Left Gain");
        let mut g = DisplayList::new();
        editor.paint(&mut g);
        assert_eq!(g.texts(), vec!["Left Gain"]);
    }
}
