//! Parameter bridge trait for decoupled editor-to-store communication.
//!
//! [`ParamBridge`] abstracts over the parameter storage an editor's
//! attachments talk to. The processor's [`ParamStore`] implements it; tests
//! and other hosts can supply their own store.
//!
//! ```text
//! Attachment ──► ParamBridge::set(param, value)
//!                        │
//!                   ┌────┴─────┐
//!                   │ParamStore│──► audio thread get()
//!                   └────┬─────┘
//!                        │
//! Attachment ◄── subscribe(callback)
//! ```

use chgain_core::{ParamCallback, ParamDescriptor, ParamIndex, ParamStore, SubscriptionId};

/// Trait for bridging parameter values between an editor and its host.
///
/// Implementations must be thread-safe: `get` may run on the audio thread
/// while the editor calls `set`.
pub trait ParamBridge: Send + Sync {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Descriptor for display and range setup. `None` if out of range.
    fn param_descriptor(&self, param: ParamIndex) -> Option<ParamDescriptor>;

    /// Resolves a string id such as `"gain"` to an index.
    fn index_of(&self, key: &str) -> Option<ParamIndex>;

    /// Current plain value. `0.0` if out of range.
    fn get(&self, param: ParamIndex) -> f32;

    /// Writes a plain value. Out-of-range indices are ignored; values are
    /// clamped by the implementation.
    fn set(&self, param: ParamIndex, value: f32);

    /// Begin a host gesture (drag start).
    fn begin_set(&self, param: ParamIndex);

    /// End a host gesture (drag stop).
    fn end_set(&self, param: ParamIndex);

    /// Registers a change callback.
    fn subscribe(&self, callback: Box<ParamCallback>) -> SubscriptionId;

    /// Removes a callback. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

impl ParamBridge for ParamStore {
    fn param_count(&self) -> usize {
        ParamStore::param_count(self)
    }

    fn param_descriptor(&self, param: ParamIndex) -> Option<ParamDescriptor> {
        self.descriptor(param).copied()
    }

    fn index_of(&self, key: &str) -> Option<ParamIndex> {
        ParamStore::index_of(self, key)
    }

    fn get(&self, param: ParamIndex) -> f32 {
        ParamStore::get(self, param)
    }

    fn set(&self, param: ParamIndex, value: f32) {
        ParamStore::set(self, param, value);
    }

    fn begin_set(&self, param: ParamIndex) {
        self.begin_gesture(param);
    }

    fn end_set(&self, param: ParamIndex) {
        self.end_gesture(param);
    }

    fn subscribe(&self, callback: Box<ParamCallback>) -> SubscriptionId {
        ParamStore::subscribe(self, callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        ParamStore::unsubscribe(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chgain_core::{ChannelGain, GAIN, GESTURE_BEGIN, GESTURE_END, INVERT_PHASE};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn bridge() -> (ChannelGain, Arc<dyn ParamBridge>) {
        let processor = ChannelGain::new();
        let bridge: Arc<dyn ParamBridge> = Arc::new(processor.params().clone());
        (processor, bridge)
    }

    #[test]
    fn store_bridge_reads_and_writes_processor() {
        let (processor, bridge) = bridge();
        assert_eq!(bridge.param_count(), 2);
        assert_eq!(bridge.index_of("gain"), Some(GAIN));
        assert_eq!(bridge.index_of("invertPhase"), Some(INVERT_PHASE));

        bridge.set(GAIN, 0.3);
        assert_eq!(processor.gain(), 0.3);
        bridge.set(INVERT_PHASE, 1.0);
        assert!(processor.invert_phase());
    }

    #[test]
    fn gestures_reach_the_store() {
        let (processor, bridge) = bridge();
        bridge.begin_set(GAIN);
        bridge.end_set(GAIN);
        assert_eq!(
            processor.params().take_gesture_flags(GAIN),
            GESTURE_BEGIN | GESTURE_END
        );
    }

    #[test]
    fn boxed_subscription_round_trip() {
        let (processor, bridge) = bridge();
        let last = Arc::new(AtomicU32::new(0));
        let sink = Arc::clone(&last);
        let id = bridge.subscribe(Box::new(move |_, v| sink.store(v.to_bits(), Ordering::SeqCst)));

        processor.set_gain(0.75);
        assert_eq!(f32::from_bits(last.load(Ordering::SeqCst)), 0.75);

        assert!(bridge.unsubscribe(id));
        assert_eq!(processor.params().subscriber_count(), 0);
    }

    #[test]
    fn out_of_range_safe() {
        let (_processor, bridge) = bridge();
        assert_eq!(bridge.get(ParamIndex(9)), 0.0);
        assert!(bridge.param_descriptor(ParamIndex(9)).is_none());
        bridge.set(ParamIndex(9), 1.0);
        bridge.begin_set(ParamIndex(9));
    }
}
