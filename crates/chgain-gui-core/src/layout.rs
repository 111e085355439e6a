//! Editor geometry: integer rectangles and per-variant control placement.
//!
//! Every variant places its controls at fixed offsets from the editor's
//! top-left corner, with the gain slider in the direct variants stretching to
//! the editor height. Computed rectangles are clipped to the editor area, so
//! no control ever has a negative size or extends past the visible area.

use serde::{Deserialize, Serialize};

/// Integer rectangle in editor coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width, never negative.
    pub width: i32,
    /// Height, never negative.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle. Negative sizes are clamped to zero.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether the rectangle covers no area.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Overlap of two rectangles. Disjoint rectangles give an empty rect
    /// anchored inside `other`.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.clamp(other.x, other.right());
        let y = self.y.clamp(other.y, other.bottom());
        let right = self.right().clamp(other.x, other.right());
        let bottom = self.bottom().clamp(other.y, other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Whether `other` lies entirely inside `self`.
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Which revision of the editor to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorVariant {
    /// Gain slider only, written directly into the processor.
    GainOnly,
    /// Gain slider and phase button, written directly into the processor.
    #[default]
    Direct,
    /// Label, slider and button kept in sync with the store by attachments.
    Attached,
}

impl EditorVariant {
    /// All variants, in declaration order.
    pub const ALL: [EditorVariant; 3] = [
        EditorVariant::GainOnly,
        EditorVariant::Direct,
        EditorVariant::Attached,
    ];

    /// Size the editor starts with.
    pub const fn default_size(self) -> (i32, i32) {
        match self {
            EditorVariant::GainOnly | EditorVariant::Direct => (400, 300),
            EditorVariant::Attached => (800, 600),
        }
    }

    /// Smallest size at which every control is unclipped and the gain
    /// slider keeps at least [`MIN_SLIDER_LENGTH`] of travel.
    pub const fn min_size(self) -> (i32, i32) {
        match self {
            EditorVariant::GainOnly => (60, 60 + MIN_SLIDER_LENGTH),
            EditorVariant::Direct => (230, 60 + MIN_SLIDER_LENGTH),
            EditorVariant::Attached => (500, 300),
        }
    }

    /// Whether controls are bound through attachments.
    pub const fn uses_attachments(self) -> bool {
        matches!(self, EditorVariant::Attached)
    }

    /// Whether the variant has a phase button.
    pub const fn has_phase_button(self) -> bool {
        !matches!(self, EditorVariant::GainOnly)
    }

    /// Stable lowercase name, matching the config file spelling.
    pub const fn name(self) -> &'static str {
        match self {
            EditorVariant::GainOnly => "gain_only",
            EditorVariant::Direct => "direct",
            EditorVariant::Attached => "attached",
        }
    }
}

impl core::fmt::Display for EditorVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for EditorVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditorVariant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| {
                format!("unknown editor variant '{s}' (expected gain_only, direct, attached)")
            })
    }
}

/// Shortest gain slider the minimum editor size allows.
pub const MIN_SLIDER_LENGTH: i32 = 20;

/// Height of the caption band painted at the top of the editor.
pub const CAPTION_BAND_HEIGHT: i32 = 30;

/// Bounds for every control of an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    /// Gain slider bounds.
    pub gain_slider: Rect,
    /// Phase button bounds, if the variant has one.
    pub phase_button: Option<Rect>,
    /// Label bounds, if the variant has one.
    pub gain_label: Option<Rect>,
}

impl EditorLayout {
    /// Computes control bounds for an editor of the given size.
    pub fn compute(variant: EditorVariant, width: i32, height: i32) -> Self {
        let area = Rect::new(0, 0, width, height);
        let clip = |r: Rect| r.intersection(&area);

        match variant {
            EditorVariant::GainOnly => Self {
                gain_slider: clip(Rect::new(40, 30, 20, height - 60)),
                phase_button: None,
                gain_label: None,
            },
            EditorVariant::Direct => Self {
                gain_slider: clip(Rect::new(40, 30, 20, height - 60)),
                phase_button: Some(clip(Rect::new(80, 30, 150, 20))),
                gain_label: None,
            },
            EditorVariant::Attached => Self {
                gain_slider: clip(Rect::new(100, 100, 400, 100)),
                phase_button: Some(clip(Rect::new(100, 200, 100, 100))),
                gain_label: Some(clip(Rect::new(100, 70, 400, 30))),
            },
        }
    }

    /// All rectangles present in this layout.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        core::iter::once(self.gain_slider)
            .chain(self.phase_button)
            .chain(self.gain_label)
    }
}

/// The caption band for an editor of the given width.
pub fn caption_band(width: i32) -> Rect {
    Rect::new(0, 0, width, CAPTION_BAND_HEIGHT)
}
