//! How a control is tied to a parameter.
//!
//! The editor keeps one [`Binding`] per bound control and dispatches user
//! changes through it. A direct binding writes into the processor through the
//! editor's back-reference; a managed binding delegates to an [`Attachment`].

use crate::attachment::Attachment;
use crate::controls::{ControlId, ControlValue};
use crate::EditorError;
use chgain_core::ParamIndex;

/// Receiver of control change notifications.
///
/// Hosts call this after a user interaction has changed a control's value.
pub trait ControlListener {
    /// A control's value changed because of user input.
    fn on_control_changed(
        &mut self,
        control: ControlId,
        value: ControlValue,
    ) -> Result<(), EditorError>;
}

/// Direct write of a control's value into a processor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectBinding {
    /// Target parameter.
    pub param: ParamIndex,
    /// Rewrite the button text as `"<name> (True)"` / `"<name> (False)"`
    /// after every change.
    pub show_state_in_text: bool,
}

/// Discriminant of a [`Binding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// [`Binding::Direct`].
    Direct,
    /// [`Binding::Managed`].
    Managed,
}

/// Binding descriptor for one control.
#[derive(Debug)]
pub enum Binding {
    /// Editor listens and writes the parameter itself.
    Direct(DirectBinding),
    /// An attachment keeps control and parameter in sync.
    Managed(Attachment),
}

impl Binding {
    /// Which variant this is.
    pub fn kind(&self) -> BindingKind {
        match self {
            Binding::Direct(_) => BindingKind::Direct,
            Binding::Managed(_) => BindingKind::Managed,
        }
    }

    /// Bound parameter.
    pub fn param(&self) -> ParamIndex {
        match self {
            Binding::Direct(direct) => direct.param,
            Binding::Managed(attachment) => attachment.param(),
        }
    }
}

/// Button text for a direct binding that shows its state.
pub fn state_text(name: &str, state: &str) -> String {
    format!("{name} ({state})")
}
