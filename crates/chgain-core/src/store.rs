//! Thread-safe parameter-state store with change notification.
//!
//! [`ParamStore`] owns the current value of every processor parameter. Values
//! are stored as atomic `u32` (f32 bit-cast) so the audio thread can read them
//! lock-free while the editor writes from the UI thread.
//!
//! Editors that keep controls in sync with parameters register a callback via
//! [`ParamStore::subscribe`]. Callbacks run on the thread that changed the
//! value, outside the subscriber lock, and must not block.
//!
//! ```text
//! Editor ──► set(index, value) ──► AtomicU32 ──► audio thread get()
//!                                     │
//!                                     └──► subscribers (index, value)
//! ```

use crate::{ParamDescriptor, ParamIndex};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU32, AtomicU64, Ordering};

/// Flag indicating a gesture-begin is pending (editor → host).
pub const GESTURE_BEGIN: u8 = 1;
/// Flag indicating a gesture-end is pending (editor → host).
pub const GESTURE_END: u8 = 2;

/// Handle returned by [`ParamStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change callback: receives the parameter index and its new plain value.
pub type ParamCallback = dyn Fn(ParamIndex, f32) + Send + Sync;

struct Subscriber {
    id: SubscriptionId,
    callback: Arc<ParamCallback>,
}

struct ParamStoreData {
    descriptors: Vec<ParamDescriptor>,
    values: Vec<AtomicU32>,
    /// Per parameter: bit 0 = begin pending, bit 1 = end pending.
    gesture_flags: Vec<AtomicU8>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscription: AtomicU64,
}

/// Shared parameter storage, cheap to clone.
///
/// Descriptors are immutable after construction. Every clone refers to the
/// same values and subscriber list.
#[derive(Clone)]
pub struct ParamStore {
    inner: Arc<ParamStoreData>,
}

impl ParamStore {
    /// Creates a store with every value initialized to its descriptor default.
    pub fn new(descriptors: Vec<ParamDescriptor>) -> Self {
        let values = descriptors
            .iter()
            .map(|d| AtomicU32::new(d.default.to_bits()))
            .collect();
        let gesture_flags = descriptors.iter().map(|_| AtomicU8::new(0)).collect();

        Self {
            inner: Arc::new(ParamStoreData {
                descriptors,
                values,
                gesture_flags,
                subscribers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
        }
    }

    /// Number of parameters.
    pub fn param_count(&self) -> usize {
        self.inner.descriptors.len()
    }

    /// Descriptor at `index`.
    pub fn descriptor(&self, index: ParamIndex) -> Option<&ParamDescriptor> {
        self.inner.descriptors.get(index.0)
    }

    /// All descriptors, in index order.
    pub fn descriptors(&self) -> &[ParamDescriptor] {
        &self.inner.descriptors
    }

    /// Looks up a parameter by its string id. Case-sensitive.
    pub fn index_of(&self, key: &str) -> Option<ParamIndex> {
        self.inner
            .descriptors
            .iter()
            .position(|d| d.string_id == key)
            .map(ParamIndex)
    }

    /// Current plain value. Returns `0.0` for out-of-range indices.
    pub fn get(&self, index: ParamIndex) -> f32 {
        self.inner
            .values
            .get(index.0)
            .map_or(0.0, |v| f32::from_bits(v.load(Ordering::Acquire)))
    }

    /// Current value of a toggle parameter.
    pub fn get_bool(&self, index: ParamIndex) -> bool {
        self.get(index) >= 0.5
    }

    /// Current value in normalized \[0, 1\] space.
    pub fn get_normalized(&self, index: ParamIndex) -> f32 {
        self.descriptor(index)
            .map_or(0.0, |d| d.normalize(self.get(index)))
    }

    /// Writes a plain value, sanitized by the descriptor.
    ///
    /// Out-of-range indices and NaN are ignored. Subscribers are notified
    /// only when the stored value changes. Returns whether it changed.
    pub fn set(&self, index: ParamIndex, value: f32) -> bool {
        if value.is_nan() {
            return false;
        }
        let Some((atomic, desc)) = self
            .inner
            .values
            .get(index.0)
            .zip(self.inner.descriptors.get(index.0))
        else {
            return false;
        };

        let sanitized = desc.sanitize(value);
        let previous = f32::from_bits(atomic.swap(sanitized.to_bits(), Ordering::AcqRel));
        if previous.to_bits() == sanitized.to_bits() {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(param = desc.string_id, from = previous, to = sanitized, "param changed");

        self.notify(index, sanitized);
        true
    }

    /// Writes a toggle parameter.
    pub fn set_bool(&self, index: ParamIndex, value: bool) -> bool {
        self.set(index, if value { 1.0 } else { 0.0 })
    }

    /// Writes a value given in normalized \[0, 1\] space.
    pub fn set_normalized(&self, index: ParamIndex, normalized: f32) -> bool {
        let Some(plain) = self
            .descriptor(index)
            .map(|d| d.denormalize(normalized.clamp(0.0, 1.0)))
        else {
            return false;
        };
        self.set(index, plain)
    }

    /// Resets every parameter to its descriptor default.
    pub fn reset(&self) {
        for (i, desc) in self.inner.descriptors.iter().enumerate() {
            self.set(ParamIndex(i), desc.default);
        }
    }

    /// Marks the start of a user gesture on a parameter.
    pub fn begin_gesture(&self, index: ParamIndex) {
        if let Some(flags) = self.inner.gesture_flags.get(index.0) {
            flags.fetch_or(GESTURE_BEGIN, Ordering::Release);
        }
    }

    /// Marks the end of a user gesture on a parameter.
    pub fn end_gesture(&self, index: ParamIndex) {
        if let Some(flags) = self.inner.gesture_flags.get(index.0) {
            flags.fetch_or(GESTURE_END, Ordering::Release);
        }
    }

    /// Takes and clears the pending gesture flags for a parameter.
    ///
    /// Called from the host side to emit gesture events.
    pub fn take_gesture_flags(&self, index: ParamIndex) -> u8 {
        self.inner
            .gesture_flags
            .get(index.0)
            .map_or(0, |f| f.swap(0, Ordering::AcqRel))
    }

    /// Registers a change callback.
    pub fn subscribe(
        &self,
        callback: impl Fn(ParamIndex, f32) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.lock().push(Subscriber {
            id,
            callback: Arc::new(callback),
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(subscription = id.0, "param store subscribe");

        id
    }

    /// Removes a callback. Returns `false` if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() != before;

        #[cfg(feature = "tracing")]
        tracing::trace!(subscription = id.0, removed, "param store unsubscribe");

        removed
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    fn notify(&self, index: ParamIndex, value: f32) {
        // Snapshot so callbacks may (un)subscribe without deadlocking.
        let callbacks: Vec<Arc<ParamCallback>> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|s| Arc::clone(&s.callback))
            .collect();
        for callback in callbacks {
            callback(index, value);
        }
    }
}

impl core::fmt::Debug for ParamStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParamStore")
            .field("params", &self.param_count())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamId;
    use std::sync::atomic::AtomicUsize;

    fn store() -> ParamStore {
        ParamStore::new(vec![
            ParamDescriptor::linear("Gain", "Gain", 0.0, 1.0, 0.5).with_id(ParamId(100), "gain"),
            ParamDescriptor::toggle("Phase Invert", "Phase", false)
                .with_id(ParamId(101), "invertPhase"),
        ])
    }

    #[test]
    fn defaults_and_lookup() {
        let s = store();
        assert_eq!(s.param_count(), 2);
        assert_eq!(s.index_of("gain"), Some(ParamIndex(0)));
        assert_eq!(s.index_of("invertPhase"), Some(ParamIndex(1)));
        assert_eq!(s.index_of("volume"), None);
        assert_eq!(s.get(ParamIndex(0)), 0.5);
        assert!(!s.get_bool(ParamIndex(1)));
    }

    #[test]
    fn set_clamps_and_snaps_toggles() {
        let s = store();
        assert!(s.set(ParamIndex(0), 2.0));
        assert_eq!(s.get(ParamIndex(0)), 1.0);
        assert!(s.set(ParamIndex(1), 0.9));
        assert_eq!(s.get(ParamIndex(1)), 1.0);
        assert!(s.set_bool(ParamIndex(1), false));
        assert!(!s.get_bool(ParamIndex(1)));
    }

    #[test]
    fn nan_is_ignored() {
        let s = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        s.subscribe(move |_, _| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert!(!s.set(ParamIndex(0), f32::NAN));
        assert!(!s.set(ParamIndex(1), f32::NAN));
        assert_eq!(s.get(ParamIndex(0)), 0.5);
        assert!(!s.get_bool(ParamIndex(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(s.set(ParamIndex(0), f32::INFINITY));
        assert_eq!(s.get(ParamIndex(0)), 1.0);
    }

    #[test]
    fn set_from_another_thread() {
        let s = store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        s.subscribe(move |index, value| sink.lock().push((index, value)));

        let writer = s.clone();
        std::thread::spawn(move || {
            writer.set(ParamIndex(0), 0.8);
            writer.set_bool(ParamIndex(1), true);
        })
        .join()
        .unwrap();

        assert_eq!(s.get(ParamIndex(0)), 0.8);
        assert!(s.get_bool(ParamIndex(1)));
        assert_eq!(*seen.lock(), vec![(ParamIndex(0), 0.8), (ParamIndex(1), 1.0)]);
    }

    #[test]
    fn out_of_range_safe() {
        let s = store();
        assert_eq!(s.get(ParamIndex(9)), 0.0);
        assert!(!s.set(ParamIndex(9), 1.0));
        assert!(s.descriptor(ParamIndex(9)).is_none());
        s.begin_gesture(ParamIndex(9));
        assert_eq!(s.take_gesture_flags(ParamIndex(9)), 0);
    }

    #[test]
    fn subscribers_notified_only_on_change() {
        let s = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let id = s.subscribe(move |index, value| {
            assert_eq!(index, ParamIndex(0));
            assert_eq!(value, 0.8);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        s.set(ParamIndex(0), 0.8);
        s.set(ParamIndex(0), 0.8);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(s.unsubscribe(id));
        assert!(!s.unsubscribe(id));
        assert_eq!(s.subscriber_count(), 0);
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let s = store();
        let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));
        let handle = s.clone();
        let own_id = Arc::clone(&slot);
        let id = s.subscribe(move |_, _| {
            if let Some(id) = own_id.lock().take() {
                handle.unsubscribe(id);
            }
        });
        *slot.lock() = Some(id);

        s.set(ParamIndex(0), 0.1);
        assert_eq!(s.subscriber_count(), 0);
    }

    #[test]
    fn gestures_accumulate_until_taken() {
        let s = store();
        s.begin_gesture(ParamIndex(0));
        s.end_gesture(ParamIndex(0));
        assert_eq!(s.take_gesture_flags(ParamIndex(0)), GESTURE_BEGIN | GESTURE_END);
        assert_eq!(s.take_gesture_flags(ParamIndex(0)), 0);
    }

    #[test]
    fn normalized_access_and_reset() {
        let s = store();
        s.set_normalized(ParamIndex(0), 0.25);
        assert_eq!(s.get(ParamIndex(0)), 0.25);
        assert_eq!(s.get_normalized(ParamIndex(0)), 0.25);
        s.set_bool(ParamIndex(1), true);
        s.reset();
        assert_eq!(s.get(ParamIndex(0)), 0.5);
        assert!(!s.get_bool(ParamIndex(1)));
    }
}
