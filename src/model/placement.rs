// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns a [`SplitResult`] into concrete rectangles for the panes, the
//! divider and the drag handle.

use serde::{Deserialize, Serialize};

use super::constraints::{PaneSizes, resolve_pane_sizes};
use super::error::LayoutError;
use super::geometry::{LayoutDirection, Orientation, Rect, Size};
use super::strategy::SplitResult;

/// Pixel dimensions of the divider, the drag handle and the minimum pane
/// sizes for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneDimensions {
    pub divider_thickness: i32,
    pub handle_width: i32,
    pub min_first_pane: i32,
    pub min_second_pane: i32,
}

/// The mouse cursor to show over the drag handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCursor {
    /// Resize left and right, for side-by-side panes.
    Horizontal,
    /// Resize up and down, for stacked panes.
    Vertical,
}

impl ResizeCursor {
    pub fn for_gap(gap_orientation: Orientation) -> Self {
        match gap_orientation {
            Orientation::Vertical => ResizeCursor::Horizontal,
            Orientation::Horizontal => ResizeCursor::Vertical,
        }
    }
}

/// The output of a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitPlacement {
    pub size: Size,
    pub gap_orientation: Orientation,
    pub direction: LayoutDirection,
    pub cursor: ResizeCursor,
    pub pane_sizes: PaneSizes,
    pub first: Rect,
    pub second: Rect,
    pub divider: Rect,
    /// The invisible, usually wider area around the divider which accepts
    /// drag gestures.
    pub handle: Rect,
}

impl SplitPlacement {
    /// The placeholder layout used before the container has been measured.
    pub fn unmeasured(gap_orientation: Orientation, direction: LayoutDirection) -> Self {
        SplitPlacement {
            size: Size::ZERO,
            gap_orientation,
            direction,
            cursor: ResizeCursor::for_gap(gap_orientation),
            pane_sizes: PaneSizes::default(),
            first: Rect::ZERO,
            second: Rect::ZERO,
            divider: Rect::ZERO,
            handle: Rect::ZERO,
        }
    }

    /// Projects a pointer movement in physical pixels onto the split axis.
    ///
    /// The result is measured from the start edge, so it can be passed
    /// directly to
    /// [`SplitLayout::apply_drag_delta`][super::SplitLayout::apply_drag_delta].
    pub fn drag_delta(&self, dx: f64, dy: f64) -> f64 {
        project_drag(self.gap_orientation, self.direction, dx, dy)
    }
}

pub(crate) fn project_drag(
    gap_orientation: Orientation,
    direction: LayoutDirection,
    dx: f64,
    dy: f64,
) -> f64 {
    match gap_orientation {
        Orientation::Vertical if direction.is_rtl() => -dx,
        Orientation::Vertical => dx,
        Orientation::Horizontal => dy,
    }
}

/// Places both panes, the divider and the drag handle inside `container`.
///
/// Positions are computed from the start edge and then mirrored for
/// side-by-side panes in right-to-left layouts, so the first pane is always
/// on the start side.
///
/// The handle is centred on the divider, starting `(handle - divider) / 2`
/// pixels before it, rather than starting half a handle before the split
/// point. With a 1px divider and an 8px handle it spans `[first - 3, first + 5)`
/// instead of `[first - 4, first + 4)`, and it always covers the whole divider.
pub fn place(
    container: Size,
    direction: LayoutDirection,
    result: &SplitResult,
    dims: &PaneDimensions,
) -> Result<SplitPlacement, LayoutError> {
    let container = Size::new(container.width.round(), container.height.round());
    let gap_orientation = result.gap_orientation;
    let extent = container.split_extent(gap_orientation) as i32;
    let cross = container.cross_extent(gap_orientation);
    let mirrored = gap_orientation == Orientation::Vertical && direction.is_rtl();

    let available = extent.saturating_sub(dims.divider_thickness);
    let (gap_start, gap_end) = result.gap_bounds.split_span(gap_orientation);
    let raw_gap = if mirrored {
        f64::from(extent) - gap_end
    } else {
        gap_start
    };
    let pane_sizes = resolve_pane_sizes(
        available,
        dims.min_first_pane,
        dims.min_second_pane,
        raw_gap,
    )?;

    let first = pane_sizes.first;
    let divider_end = first.saturating_add(dims.divider_thickness);
    let handle_start =
        first.saturating_sub(dims.handle_width.saturating_sub(dims.divider_thickness) / 2);
    let handle_end = handle_start.saturating_add(dims.handle_width);
    let span = |start: i32, end: i32| {
        let rect =
            Rect::from_spans(gap_orientation, (f64::from(start), f64::from(end)), (0.0, cross));
        if mirrored { rect.mirror_x(container.width) } else { rect }
    };

    Ok(SplitPlacement {
        size: container,
        gap_orientation,
        direction,
        cursor: ResizeCursor::for_gap(gap_orientation),
        pane_sizes,
        first: span(0, first),
        second: span(divider_end, extent),
        divider: span(first, divider_end),
        handle: span(handle_start, handle_end),
    })
}
