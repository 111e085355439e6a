//! Parameter metadata for host-visible processor parameters.
//!
//! Every parameter the processor exposes is described by a [`ParamDescriptor`]:
//! display names, unit, range, default, step size, and the two stable
//! identifiers hosts and editors rely on:
//!
//! - [`ParamId`] — numeric ID for automation and host communication
//! - `string_id` — the key editors use to attach controls (e.g. `"gain"`)
//!
//! Parameters are addressed at runtime by [`ParamIndex`], their position in
//! the owning [`ParamStore`](crate::ParamStore).
//!
//! # Example
//!
//! ```rust
//! use chgain_core::{ParamDescriptor, ParamId};
//!
//! let gain = ParamDescriptor::linear("Gain", "Gain", 0.0, 1.0, 0.5)
//!     .with_id(ParamId(100), "gain");
//! assert_eq!(gain.normalize(0.25), 0.25);
//! assert_eq!(gain.clamp(3.0), 1.0);
//! ```

use core::fmt;

/// Type-safe index into a parameter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParamIndex(pub usize);

impl fmt::Display for ParamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ParamIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (toggles, enums).
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for processors that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the processor. Out-of-range indices must be handled gracefully: `get_param`
/// returns `0.0` and `set_param` does nothing.
pub trait ParameterInfo {
    /// Number of parameters. Valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current plain value of the parameter at `index`.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the parameter at `index`, clamped to the descriptor's range.
    fn set_param(&mut self, index: usize, value: f32);

    /// Finds a parameter index by its string id (e.g. `"invertPhase"`).
    fn find_param_by_key(&self, key: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.string_id == key))
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g. "Phase Invert").
    pub name: &'static str,

    /// Short name for compact displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value the parameter holds after construction.
    pub default: f32,

    /// Step increment. `1.0` for toggles, small values for continuous controls.
    pub step: f32,

    /// Stable numeric ID for host automation.
    pub id: ParamId,

    /// Key editors use to attach controls to this parameter.
    pub string_id: &'static str,

    /// Capability flags.
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Continuous unitless parameter with a linear range and `0.01` step.
    pub fn linear(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Boolean parameter stored as `0.0` (off) or `1.0` (on).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chgain_core::{ParamDescriptor, ParamFlags};
    ///
    /// let invert = ParamDescriptor::toggle("Phase Invert", "Phase", false);
    /// assert!(invert.flags.contains(ParamFlags::STEPPED));
    /// assert_eq!(invert.default, 0.0);
    /// ```
    pub fn toggle(name: &'static str, short_name: &'static str, default: bool) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Toggle,
            min: 0.0,
            max: 1.0,
            default: if default { 1.0 } else { 0.0 },
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
        }
    }

    /// Sets the stable parameter ID and string ID.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the step increment.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Whether this parameter only takes discrete values.
    #[inline]
    pub const fn is_stepped(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED)
    }

    /// Clamps a value to this parameter's valid range. NaN maps to `min`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() || value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Clamps, then rounds stepped parameters to the nearest step.
    ///
    /// Continuous parameters are only clamped: the editor control owns the
    /// step grid for those.
    pub fn sanitize(&self, value: f32) -> f32 {
        let clamped = self.clamp(value);
        if self.is_stepped() && self.step > 0.0 {
            let steps = ((clamped - self.min) / self.step).round();
            self.clamp(self.min + steps * self.step)
        } else {
            clamped
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0), linearly.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the plain range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }

    /// Formats a plain value with this parameter's unit.
    ///
    /// ```rust
    /// use chgain_core::ParamDescriptor;
    ///
    /// let invert = ParamDescriptor::toggle("Phase Invert", "Phase", false);
    /// assert_eq!(invert.format_value(1.0), "True");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Toggle => {
                if value >= 0.5 {
                    "True".to_string()
                } else {
                    "False".to_string()
                }
            }
            ParamUnit::None => format!("{value:.2}"),
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// On/off switch stored as `0.0`/`1.0`.
    Toggle,
    /// No unit.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestProcessor {
        level: f32,
        mute: f32,
    }

    impl ParameterInfo for TestProcessor {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::linear("Level", "Level", 0.0, 1.0, 0.5)
                        .with_id(ParamId(10), "level"),
                ),
                1 => Some(
                    ParamDescriptor::toggle("Mute", "Mute", false).with_id(ParamId(11), "mute"),
                ),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.level,
                1 => self.mute,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            let Some(desc) = self.param_info(index) else {
                return;
            };
            match index {
                0 => self.level = desc.sanitize(value),
                1 => self.mute = desc.sanitize(value),
                _ => {}
            }
        }
    }

    #[test]
    fn find_by_key() {
        let p = TestProcessor {
            level: 0.5,
            mute: 0.0,
        };
        assert_eq!(p.find_param_by_key("level"), Some(0));
        assert_eq!(p.find_param_by_key("mute"), Some(1));
        assert_eq!(p.find_param_by_key("Mute"), None);
    }

    #[test]
    fn set_param_sanitizes() {
        let mut p = TestProcessor {
            level: 0.5,
            mute: 0.0,
        };
        p.set_param(0, 4.0);
        assert_eq!(p.get_param(0), 1.0);
        p.set_param(1, 0.7);
        assert_eq!(p.get_param(1), 1.0);
        p.set_param(1, 0.2);
        assert_eq!(p.get_param(1), 0.0);
        p.set_param(9, 1.0);
        assert_eq!(p.get_param(9), 0.0);
    }

    #[test]
    fn continuous_values_are_not_snapped() {
        let desc = ParamDescriptor::linear("Gain", "Gain", 0.0, 1.0, 0.5);
        assert_eq!(desc.sanitize(0.537), 0.537);
        assert_eq!(desc.sanitize(-0.1), 0.0);
    }

    #[test]
    fn non_finite_values_clamp_into_range() {
        let gain = ParamDescriptor::linear("Gain", "Gain", 0.0, 1.0, 0.5);
        assert_eq!(gain.clamp(f32::NAN), 0.0);
        assert_eq!(gain.sanitize(f32::NAN), 0.0);
        assert_eq!(gain.clamp(f32::INFINITY), 1.0);
        assert_eq!(gain.clamp(f32::NEG_INFINITY), 0.0);
        let invert = ParamDescriptor::toggle("Phase Invert", "Phase", false);
        assert_eq!(invert.sanitize(f32::NAN), 0.0);
    }

    #[test]
    fn degenerate_range_normalizes_to_zero() {
        let desc = ParamDescriptor::linear("Fixed", "Fixed", 1.0, 1.0, 1.0);
        assert_eq!(desc.normalize(1.0), 0.0);
    }

    #[test]
    fn format_by_unit() {
        let gain = ParamDescriptor::linear("Gain", "Gain", 0.0, 1.0, 0.5);
        assert_eq!(gain.format_value(0.5), "0.50");
        assert_eq!(gain.unit, ParamUnit::None);
        let invert = ParamDescriptor::toggle("Phase Invert", "Phase", true);
        assert_eq!(invert.default, 1.0);
        assert_eq!(invert.format_value(0.0), "False");
    }

    #[test]
    fn flags_union() {
        let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
        assert!(flags.contains(ParamFlags::STEPPED));
        assert!(!ParamFlags::AUTOMATABLE.contains(ParamFlags::STEPPED));
        assert_eq!(ParamFlags::default(), ParamFlags::AUTOMATABLE);
        assert!(ParamFlags::NONE.union(ParamFlags::NONE).contains(ParamFlags::NONE));
    }
}
