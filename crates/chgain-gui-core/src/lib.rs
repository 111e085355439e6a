//! Editor model and egui rendering for the chgain channel gain plugin.
//!
//! The [`Editor`] owns a vertical gain slider, an optional phase-invert
//! button and an optional label, and binds each control to a processor
//! parameter. Bindings are either *direct* (the editor writes the processor
//! through a weak back-reference) or *managed* (an [`Attachment`] keeps the
//! control and a [`ParamBridge`] store in sync in both directions).
//!
//! Everything except [`view`] and [`theme`] is plain data and runs headless;
//! painting goes through the [`Graphics`] trait, recorded by [`DisplayList`]
//! in tests and drawn by [`EguiGraphics`] on screen.
//!
//! # Modules
//!
//! - [`controls`] — Slider, toggle button, and label models
//! - [`layout`] — Editor variants, rectangles, and per-variant layout
//! - [`graphics`] — Drawing surface trait and a recording implementation
//! - [`param_bridge`] — Store abstraction used by attachments
//! - [`attachment`] — Managed two-way control/parameter binding
//! - [`binding`] — Binding descriptors and the control listener trait
//! - [`editor`] — The editor itself
//! - [`view`] — egui rendering and interaction routing
//! - [`theme`] — Visual styling and egui theme application

pub mod attachment;
pub mod binding;
pub mod controls;
pub mod editor;
pub mod error;
pub mod graphics;
pub mod layout;
pub mod param_bridge;
pub mod theme;
pub mod view;

pub use attachment::Attachment;
pub use binding::{Binding, BindingKind, ControlListener, DirectBinding, state_text};
pub use controls::{
    ControlId, ControlMut, ControlRef, ControlValue, Label, Slider, SliderRange, SliderStyle,
    TextBoxPosition, TextBoxStyle, ToggleButton,
};
pub use editor::{CAPTION, CAPTION_FONT_SIZE, Editor};
pub use error::EditorError;
pub use graphics::{DisplayList, Graphics, Justification, PaintCommand, fit_lines};
pub use layout::{
    CAPTION_BAND_HEIGHT, EditorLayout, EditorVariant, MIN_SLIDER_LENGTH, Rect, caption_band,
};
pub use param_bridge::ParamBridge;
pub use theme::Theme;
pub use view::{EguiGraphics, show_editor, to_egui_rect};
