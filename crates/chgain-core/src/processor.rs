//! The channel gain processor: a gain stage with optional phase inversion.
//!
//! [`ChannelGain`] owns the [`ParamStore`] holding its two parameters. The
//! editor never owns the processor; it keeps a `Weak` back-reference and an
//! optional clone of the store for attachments.

use crate::{ParamDescriptor, ParamId, ParamIndex, ParamStore, ParameterInfo};

/// Index of the `gain` parameter.
pub const GAIN: ParamIndex = ParamIndex(0);
/// Index of the `invertPhase` parameter.
pub const INVERT_PHASE: ParamIndex = ParamIndex(1);

/// String id of the `gain` parameter.
pub const GAIN_KEY: &str = "gain";
/// String id of the `invertPhase` parameter.
pub const INVERT_PHASE_KEY: &str = "invertPhase";

/// Parameter descriptors in index order.
pub fn channel_gain_descriptors() -> Vec<ParamDescriptor> {
    vec![
        ParamDescriptor::linear("Gain", "Gain", 0.0, 1.0, 0.5).with_id(ParamId(100), GAIN_KEY),
        ParamDescriptor::toggle("Phase Invert", "Phase", false)
            .with_id(ParamId(101), INVERT_PHASE_KEY),
    ]
}

/// Gain stage with phase inversion.
///
/// `process_block` multiplies every sample by `gain` and negates it when
/// `invertPhase` is on. Parameter reads are lock-free, so the processor can be
/// shared as `Arc<ChannelGain>` between the audio thread and the editor.
#[derive(Debug)]
pub struct ChannelGain {
    params: ParamStore,
}

impl ChannelGain {
    /// Creates a processor with default parameter values.
    pub fn new() -> Self {
        Self {
            params: ParamStore::new(channel_gain_descriptors()),
        }
    }

    /// The parameter-state store.
    pub fn params(&self) -> &ParamStore {
        &self.params
    }

    /// Current linear gain (0.0–1.0).
    pub fn gain(&self) -> f32 {
        self.params.get(GAIN)
    }

    /// Sets the linear gain, clamped to 0.0–1.0.
    pub fn set_gain(&self, gain: f32) {
        self.params.set(GAIN, gain);
    }

    /// Whether the output polarity is inverted.
    pub fn invert_phase(&self) -> bool {
        self.params.get_bool(INVERT_PHASE)
    }

    /// Sets phase inversion.
    pub fn set_invert_phase(&self, invert: bool) {
        self.params.set_bool(INVERT_PHASE, invert);
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&self, input: f32) -> f32 {
        input * self.effective_gain()
    }

    /// Processes a block in place.
    pub fn process_block(&self, buffer: &mut [f32]) {
        let g = self.effective_gain();
        for sample in buffer.iter_mut() {
            *sample *= g;
        }
    }

    #[inline]
    fn effective_gain(&self) -> f32 {
        let gain = self.gain();
        if self.invert_phase() { -gain } else { gain }
    }
}

impl Default for ChannelGain {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterInfo for ChannelGain {
    fn param_count(&self) -> usize {
        self.params.param_count()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.params.descriptor(ParamIndex(index)).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        self.params.get(ParamIndex(index))
    }

    fn set_param(&mut self, index: usize, value: f32) {
        self.params.set(ParamIndex(index), value);
    }
}
