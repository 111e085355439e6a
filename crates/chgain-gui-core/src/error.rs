//! Error types for editor construction and binding.

use crate::ControlId;
use chgain_core::ParamIndex;
use thiserror::Error;

/// Errors raised while building or driving an editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The processor the editor refers to has been dropped.
    #[error("processor is no longer alive")]
    ProcessorGone,

    /// No parameter with this string id exists in the store.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// No parameter at this index exists on the processor.
    #[error("parameter index {0} out of range")]
    ParamOutOfRange(ParamIndex),

    /// The control already has a binding.
    #[error("control '{0}' is already bound")]
    AlreadyBound(ControlId),

    /// The editor has no such control, or it has no binding.
    #[error("unknown control: {0}")]
    UnknownControl(ControlId),

    /// The control cannot take the requested role.
    #[error("control '{control}' is not a {expected}")]
    WrongControlKind {
        /// Control that was addressed.
        control: ControlId,
        /// Kind the operation needs.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EditorError::ProcessorGone.to_string(),
            "processor is no longer alive"
        );
        assert_eq!(
            EditorError::UnknownParameter("volume".to_string()).to_string(),
            "unknown parameter: volume"
        );
        assert_eq!(
            EditorError::AlreadyBound(ControlId::GAIN_SLIDER).to_string(),
            "control 'gainSlider' is already bound"
        );
        assert_eq!(
            EditorError::WrongControlKind {
                control: ControlId::GAIN_LABEL,
                expected: "slider or button",
            }
            .to_string(),
            "control 'gainLabel' is not a slider or button"
        );
        assert_eq!(
            EditorError::ParamOutOfRange(ParamIndex(7)).to_string(),
            "parameter index 7 out of range"
        );
    }
}
