// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use super::geometry::{LayoutDirection, Orientation, Rect, Size};
use super::placement::project_drag;
use super::strategy::SplitResult;

/// Placement of a fixed two-pane layout, without a divider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TwoPanePlacement {
    pub gap_orientation: Orientation,
    pub direction: LayoutDirection,
    pub first: Rect,
    pub second: Rect,
}

impl TwoPanePlacement {
    /// Projects a pointer movement onto the split axis, measured from the
    /// start edge.
    pub fn drag_delta(&self, dx: f64, dy: f64) -> f64 {
        project_drag(self.gap_orientation, self.direction, dx, dy)
    }
}

/// Places two panes on either side of the gap, leaving the gap itself empty.
///
/// Unlike [`place`][super::placement::place] this layout has no minimum
/// sizes and cannot fail. The first pane is on the start side, so in
/// right-to-left layouts it is right of a vertical gap.
pub fn place_two_pane(
    container: Size,
    direction: LayoutDirection,
    result: &SplitResult,
) -> TwoPanePlacement {
    let width = container.width.round();
    let height = container.height.round();
    let gap = result.gap_bounds;
    let gap_left = gap.left.round().clamp(0.0, width);
    let gap_right = gap.right.round().clamp(0.0, width);
    let gap_top = gap.top.round().clamp(0.0, height);
    let gap_bottom = gap.bottom.round().clamp(0.0, height);

    let left = Rect::new(0.0, 0.0, gap_left, height);
    let right = Rect::new(gap_right, 0.0, width, height);
    let (first, second) = match result.gap_orientation {
        Orientation::Vertical if direction.is_rtl() => (right, left),
        Orientation::Vertical => (left, right),
        Orientation::Horizontal => (
            Rect::new(0.0, 0.0, width, gap_top),
            Rect::new(0.0, gap_bottom, width, height),
        ),
    };
    TwoPanePlacement {
        gap_orientation: result.gap_orientation,
        direction,
        first,
        second,
    }
}
