//! Managed two-way binding between one control and one named parameter.
//!
//! An [`Attachment`] is a scoped resource: constructing it configures the
//! control from the parameter (range, initial value) and subscribes to store
//! changes; dropping it unsubscribes. Control changes are pushed into the
//! store immediately. Store changes land in a lock-free pending slot and are
//! applied to the control on the editor's thread by
//! [`Editor::sync_from_params`](crate::Editor::sync_from_params).

use crate::controls::{ControlValue, Slider, ToggleButton};
use crate::{EditorError, ParamBridge};
use chgain_core::{ParamDescriptor, ParamIndex, SubscriptionId};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Latest store value not yet applied to the control.
#[derive(Debug, Default)]
struct PendingValue {
    bits: AtomicU32,
    dirty: AtomicBool,
}

impl PendingValue {
    fn store(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Release);
        self.dirty.store(true, Ordering::Release);
    }

    fn take(&self) -> Option<f32> {
        self.dirty
            .swap(false, Ordering::AcqRel)
            .then(|| f32::from_bits(self.bits.load(Ordering::Acquire)))
    }
}

/// Two-way control/parameter binding, released on drop.
pub struct Attachment {
    store: Arc<dyn ParamBridge>,
    param: ParamIndex,
    key: String,
    subscription: SubscriptionId,
    pending: Arc<PendingValue>,
}

impl Attachment {
    /// Attaches a slider to the parameter named `key`.
    ///
    /// The slider takes the parameter's range and step, and its current value.
    pub fn slider(
        store: Arc<dyn ParamBridge>,
        key: &str,
        slider: &mut Slider,
    ) -> Result<Self, EditorError> {
        let (param, desc) = resolve(store.as_ref(), key)?;
        slider.set_range(widen(desc.min), widen(desc.max), widen(desc.step));
        slider.set_value(widen(store.get(param)));
        Ok(Self::subscribe(store, param, key))
    }

    /// Attaches a toggle button to the parameter named `key`.
    ///
    /// Clicking the button toggles its state; the state starts from the
    /// parameter's current value.
    pub fn button(
        store: Arc<dyn ParamBridge>,
        key: &str,
        button: &mut ToggleButton,
    ) -> Result<Self, EditorError> {
        let (param, _) = resolve(store.as_ref(), key)?;
        button.set_clicking_toggles_state(true);
        button.set_toggle_state(store.get(param) >= 0.5);
        Ok(Self::subscribe(store, param, key))
    }

    fn subscribe(store: Arc<dyn ParamBridge>, param: ParamIndex, key: &str) -> Self {
        let pending = Arc::new(PendingValue::default());
        let sink = Arc::clone(&pending);
        let subscription = store.subscribe(Box::new(move |index, value| {
            if index == param {
                sink.store(value);
            }
        }));
        tracing::trace!(key, %param, "attachment created");

        Self {
            store,
            param,
            key: key.to_owned(),
            subscription,
            pending,
        }
    }

    /// Index of the bound parameter.
    pub fn param(&self) -> ParamIndex {
        self.param
    }

    /// String id of the bound parameter.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Pushes a user change into the store.
    pub fn control_changed(&self, value: ControlValue) {
        self.store.set(self.param, value.as_param());
    }

    /// Starts a host gesture on the bound parameter.
    pub fn begin_gesture(&self) {
        self.store.begin_set(self.param);
    }

    /// Ends a host gesture on the bound parameter.
    pub fn end_gesture(&self) {
        self.store.end_set(self.param);
    }

    /// Takes the latest store value the control has not seen yet.
    pub fn take_pending(&self) -> Option<f32> {
        self.pending.take()
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        let removed = self.store.unsubscribe(self.subscription);
        tracing::trace!(key = %self.key, removed, "attachment released");
    }
}

impl core::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Attachment")
            .field("key", &self.key)
            .field("param", &self.param)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

/// Widens to the shortest f64 with the same decimal form, so a step of
/// `0.01_f32` becomes `0.01_f64` rather than `0.009999999776482582`.
fn widen(value: f32) -> f64 {
    value
        .to_string()
        .parse()
        .unwrap_or_else(|_| f64::from(value))
}

fn resolve(
    store: &dyn ParamBridge,
    key: &str,
) -> Result<(ParamIndex, ParamDescriptor), EditorError> {
    store
        .index_of(key)
        .and_then(|param| store.param_descriptor(param).map(|desc| (param, desc)))
        .ok_or_else(|| EditorError::UnknownParameter(key.to_owned()))
}
