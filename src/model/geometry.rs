// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic geometry shared by the strategies and the placement engine.
//!
//! Coordinates are local to the split container: the origin is its top-left
//! corner regardless of layout direction.

use serde::{Deserialize, Serialize};

/// The orientation of a gap or of a strategy.
///
/// Note that a *horizontal* strategy lays panes out side by side, which means
/// the gap between them is a *vertical* line. See
/// [`Orientation::perpendicular`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::RightToLeft
    }
}

/// A 2D extent in pixels. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// The largest extent a container can have along either axis. Layout
    /// works in whole `i32` pixels.
    pub const MAX_EXTENT: f64 = i32::MAX as f64;

    /// Creates a size, clamping each extent to `[0, MAX_EXTENT]`. NaN becomes
    /// zero.
    pub fn new(width: f64, height: f64) -> Self {
        Size {
            width: clamp_extent(width),
            height: clamp_extent(height),
        }
    }

    /// The extent along the axis that a gap of the given orientation splits.
    ///
    /// A vertical gap splits the width; a horizontal gap splits the height.
    pub fn split_extent(self, gap_orientation: Orientation) -> f64 {
        match gap_orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    pub fn cross_extent(self, gap_orientation: Orientation) -> f64 {
        self.split_extent(gap_orientation.perpendicular())
    }
}

fn clamp_extent(extent: f64) -> f64 {
    if extent.is_nan() {
        0.0
    } else {
        extent.clamp(0.0, Size::MAX_EXTENT)
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Creates a rectangle from two corners, normalizing them so that
    /// `left <= right` and `top <= bottom`.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    pub fn from_size(size: Size) -> Self {
        Rect::new(0.0, 0.0, size.width, size.height)
    }

    /// Builds a rectangle from a span on the split axis and a span on the
    /// cross axis, for a gap of the given orientation.
    pub(crate) fn from_spans(
        gap_orientation: Orientation,
        split: (f64, f64),
        cross: (f64, f64),
    ) -> Self {
        match gap_orientation {
            Orientation::Vertical => Rect::new(split.0, cross.0, split.1, cross.1),
            Orientation::Horizontal => Rect::new(cross.0, split.0, cross.1, split.1),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// The `(start, end)` span along the axis split by a gap of the given
    /// orientation.
    pub fn split_span(&self, gap_orientation: Orientation) -> (f64, f64) {
        match gap_orientation {
            Orientation::Vertical => (self.left, self.right),
            Orientation::Horizontal => (self.top, self.bottom),
        }
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Mirrors the rectangle horizontally inside a container of the given
    /// width.
    pub fn mirror_x(&self, container_width: f64) -> Rect {
        Rect::new(
            container_width - self.right,
            self.top,
            container_width - self.left,
            self.bottom,
        )
    }
}

/// Conversion factor from density-independent units to pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub const IDENTITY: Density = Density(1.0);

    /// Returns `None` if the scale is not a positive, finite number.
    pub fn new(scale: f64) -> Option<Self> {
        (scale.is_finite() && scale > 0.0).then_some(Density(scale))
    }

    pub fn scale(self) -> f64 {
        self.0
    }

    pub fn to_px(self, dp: f64) -> f64 {
        dp * self.0
    }

    pub fn round_to_px(self, dp: f64) -> i32 {
        self.to_px(dp).round() as i32
    }
}

impl Default for Density {
    fn default() -> Self {
        Density::IDENTITY
    }
}
