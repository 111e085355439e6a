//! Retained control models: slider, toggle button, label.
//!
//! Controls hold their own value and display state and know nothing about
//! parameters. The [`Editor`](crate::Editor) owns them and routes user
//! changes through its bindings.

use crate::layout::Rect;
use core::fmt;

/// Identifier of a control inside an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(pub &'static str);

impl ControlId {
    /// The gain slider.
    pub const GAIN_SLIDER: Self = Self("gainSlider");
    /// The invert-phase toggle button.
    pub const PHASE_BUTTON: Self = Self("phaseInvert");
    /// The text label above the gain slider.
    pub const GAIN_LABEL: Self = Self("gainLabel");
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Value carried by a control change notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlValue {
    /// Slider position in the slider's own range.
    Continuous(f64),
    /// Toggle button state.
    Toggle(bool),
}

impl ControlValue {
    /// Plain parameter value for this control value.
    pub fn as_param(self) -> f32 {
        match self {
            ControlValue::Continuous(v) => v as f32,
            ControlValue::Toggle(true) => 1.0,
            ControlValue::Toggle(false) => 0.0,
        }
    }
}

/// Visual style of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderStyle {
    /// Horizontal track with a thumb.
    #[default]
    LinearHorizontal,
    /// Vertical track with a thumb.
    LinearVertical,
    /// Vertical bar filled from the bottom up to the value.
    LinearBarVertical,
}

impl SliderStyle {
    /// Whether the slider moves along the vertical axis.
    pub const fn is_vertical(self) -> bool {
        matches!(self, SliderStyle::LinearVertical | SliderStyle::LinearBarVertical)
    }
}

/// Where a slider shows its editable value box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBoxPosition {
    /// No value box.
    NoTextBox,
    /// Left of the track.
    Left,
    /// Right of the track.
    Right,
    /// Below the track.
    #[default]
    Below,
}

/// Value box configuration of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBoxStyle {
    /// Position relative to the track.
    pub position: TextBoxPosition,
    /// Whether the box is read-only.
    pub read_only: bool,
    /// Box width in pixels.
    pub width: i32,
    /// Box height in pixels.
    pub height: i32,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            position: TextBoxPosition::Below,
            read_only: false,
            width: 80,
            height: 20,
        }
    }
}

/// Value range of a slider. `interval == 0.0` means continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    /// Lowest value.
    pub min: f64,
    /// Highest value.
    pub max: f64,
    /// Step grid, anchored at `min`.
    pub interval: f64,
}

impl SliderRange {
    /// Creates a range. `max` below `min` is collapsed onto `min`.
    pub fn new(min: f64, max: f64, interval: f64) -> Self {
        Self {
            min,
            max: max.max(min),
            interval: interval.max(0.0),
        }
    }

    /// Clamps into the range and snaps to the step grid. NaN maps to `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.interval > 0.0 {
            let steps = ((clamped - self.min) / self.interval).round();
            (self.min + steps * self.interval).clamp(self.min, self.max)
        } else {
            clamped
        }
    }

    /// Position of `value` within the range, 0.0 to 1.0.
    pub fn proportion(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            0.0
        } else {
            (value - self.min) / span
        }
    }

    /// Decimal places implied by the interval (0 for integer steps).
    pub fn decimal_places(&self) -> usize {
        if self.interval >= 1.0 {
            return 0;
        }
        if self.interval <= 0.0 {
            return 2;
        }
        let mut places = 0;
        let mut scaled = self.interval;
        while places < 7 && (scaled - scaled.round()).abs() > 1e-9 {
            scaled *= 10.0;
            places += 1;
        }
        places
    }
}

impl Default for SliderRange {
    fn default() -> Self {
        Self::new(0.0, 10.0, 0.0)
    }
}

/// A continuous value control.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    id: ControlId,
    style: SliderStyle,
    range: SliderRange,
    value: f64,
    text_box: TextBoxStyle,
    popup_display: bool,
    suffix: String,
    bounds: Rect,
}

impl Slider {
    /// Creates a horizontal slider over `0.0..=10.0` at value `0.0`.
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            style: SliderStyle::default(),
            range: SliderRange::default(),
            value: 0.0,
            text_box: TextBoxStyle::default(),
            popup_display: false,
            suffix: String::new(),
            bounds: Rect::default(),
        }
    }

    /// Control identifier.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Visual style.
    pub fn style(&self) -> SliderStyle {
        self.style
    }

    /// Sets the visual style.
    pub fn set_slider_style(&mut self, style: SliderStyle) {
        self.style = style;
    }

    /// Value range.
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Sets the range and re-snaps the current value into it.
    pub fn set_range(&mut self, min: f64, max: f64, interval: f64) {
        self.range = SliderRange::new(min, max, interval);
        self.value = self.range.snap(self.value);
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the value, clamped and snapped to the range.
    ///
    /// Returns whether the value changed. NaN is ignored. Never notifies
    /// anyone; the editor decides whether a change is dispatched.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let snapped = self.range.snap(value);
        if snapped == self.value {
            return false;
        }
        self.value = snapped;
        true
    }

    /// Value box configuration.
    pub fn text_box(&self) -> TextBoxStyle {
        self.text_box
    }

    /// Configures the value box.
    pub fn set_text_box_style(
        &mut self,
        position: TextBoxPosition,
        read_only: bool,
        width: i32,
        height: i32,
    ) {
        self.text_box = TextBoxStyle {
            position,
            read_only,
            width,
            height,
        };
    }

    /// Whether a value popup is shown while dragging.
    pub fn popup_display(&self) -> bool {
        self.popup_display
    }

    /// Enables or disables the value popup.
    pub fn set_popup_display_enabled(&mut self, enabled: bool) {
        self.popup_display = enabled;
    }

    /// Suffix appended to the displayed value.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Sets the displayed value suffix (e.g. `" Volume"`).
    pub fn set_text_value_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    /// Text shown in the value box or popup.
    pub fn display_text(&self) -> String {
        format!(
            "{:.*}{}",
            self.range.decimal_places(),
            self.value,
            self.suffix
        )
    }

    /// Bounds relative to the editor.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the bounds relative to the editor.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

/// A button that can hold an on/off state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    id: ControlId,
    text: String,
    toggle_state: bool,
    clicking_toggles_state: bool,
    bounds: Rect,
}

impl ToggleButton {
    /// Creates an untoggled button with empty text.
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            text: String::new(),
            toggle_state: false,
            clicking_toggles_state: false,
            bounds: Rect::default(),
        }
    }

    /// Control identifier. Doubles as the component name.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Button caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the caption.
    pub fn set_button_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current toggle state.
    pub fn toggle_state(&self) -> bool {
        self.toggle_state
    }

    /// Sets the toggle state. Returns whether it changed.
    pub fn set_toggle_state(&mut self, state: bool) -> bool {
        let changed = self.toggle_state != state;
        self.toggle_state = state;
        changed
    }

    /// Whether a click flips the toggle state.
    pub fn clicking_toggles_state(&self) -> bool {
        self.clicking_toggles_state
    }

    /// Makes clicks flip the toggle state.
    pub fn set_clicking_toggles_state(&mut self, toggles: bool) {
        self.clicking_toggles_state = toggles;
    }

    /// Simulates a click. Returns the state after the click.
    pub fn click(&mut self) -> bool {
        if self.clicking_toggles_state {
            self.toggle_state = !self.toggle_state;
        }
        self.toggle_state
    }

    /// Bounds relative to the editor.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the bounds relative to the editor.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

/// Static text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    id: ControlId,
    text: String,
    bounds: Rect,
}

impl Label {
    /// Creates a label.
    pub fn new(id: ControlId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            bounds: Rect::default(),
        }
    }

    /// Control identifier.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Bounds relative to the editor.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the bounds relative to the editor.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

/// Shared borrow of any control.
#[derive(Debug, Clone, Copy)]
pub enum ControlRef<'a> {
    /// A slider.
    Slider(&'a Slider),
    /// A toggle button.
    Button(&'a ToggleButton),
    /// A label.
    Label(&'a Label),
}

impl ControlRef<'_> {
    /// Bounds of the referenced control.
    pub fn bounds(&self) -> Rect {
        match self {
            ControlRef::Slider(s) => s.bounds(),
            ControlRef::Button(b) => b.bounds(),
            ControlRef::Label(l) => l.bounds(),
        }
    }
}

/// Exclusive borrow of any control.
#[derive(Debug)]
pub enum ControlMut<'a> {
    /// A slider.
    Slider(&'a mut Slider),
    /// A toggle button.
    Button(&'a mut ToggleButton),
    /// A label.
    Label(&'a mut Label),
}
