//! chgain Core - parameter model and channel gain processor.
//!
//! This crate owns everything the editor binds to but does not own:
//!
//! - [`ParamDescriptor`], [`ParamUnit`], [`ParamFlags`], [`ParamId`], [`ParamIndex`]
//!   — parameter metadata and addressing
//! - [`ParameterInfo`] — index-based parameter introspection
//! - [`ParamStore`] — thread-safe parameter values with change subscriptions
//!   and gesture flags
//! - [`ChannelGain`] — the processor: gain with optional phase inversion
//!
//! # Example
//!
//! ```rust
//! use chgain_core::{ChannelGain, GAIN, INVERT_PHASE};
//!
//! let processor = ChannelGain::new();
//! processor.params().set(GAIN, 0.8);
//! processor.params().set_bool(INVERT_PHASE, true);
//!
//! let mut block = [1.0_f32; 4];
//! processor.process_block(&mut block);
//! assert!(block.iter().all(|&s| s == -0.8));
//! ```
//!
//! # Features
//!
//! - `tracing` — trace-level events for value changes and subscriptions

pub mod param_info;
pub mod processor;
pub mod store;

pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamIndex, ParamUnit, ParameterInfo};
pub use processor::{
    ChannelGain, GAIN, GAIN_KEY, INVERT_PHASE, INVERT_PHASE_KEY, channel_gain_descriptors,
};
pub use store::{GESTURE_BEGIN, GESTURE_END, ParamCallback, ParamStore, SubscriptionId};
