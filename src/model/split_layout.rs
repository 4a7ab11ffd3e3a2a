// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::{ConfigurationError, LayoutError, check_length};
use super::geometry::{Density, LayoutDirection, Orientation, Size};
use super::placement::{self, PaneDimensions, SplitPlacement};
use super::strategy::SplitStrategy;
use super::two_pane::{TwoPanePlacement, place_two_pane};

/// Sizes of the divider, the drag handle and the panes, in dp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitLayoutOptions {
    pub divider_thickness: f64,
    /// Width of the invisible drag area around the divider.
    pub handle_width: f64,
    pub min_first_pane: f64,
    pub min_second_pane: f64,
}

impl Default for SplitLayoutOptions {
    fn default() -> Self {
        SplitLayoutOptions {
            divider_thickness: 1.0,
            handle_width: 8.0,
            min_first_pane: 100.0,
            min_second_pane: 100.0,
        }
    }
}

impl SplitLayoutOptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_length("divider_thickness", self.divider_thickness)?;
        check_length("handle_width", self.handle_width)?;
        check_length("min_first_pane", self.min_first_pane)?;
        check_length("min_second_pane", self.min_second_pane)?;
        if self.handle_width < self.divider_thickness {
            return Err(ConfigurationError::HandleNarrowerThanDivider {
                handle_width: self.handle_width,
                divider_thickness: self.divider_thickness,
            });
        }
        Ok(())
    }

    pub fn dimensions(&self, density: Density) -> PaneDimensions {
        let divider_thickness = density.round_to_px(self.divider_thickness);
        PaneDimensions {
            divider_thickness,
            // Rounding could otherwise make the handle narrower than the divider.
            handle_width: density.round_to_px(self.handle_width).max(divider_thickness),
            min_first_pane: density.round_to_px(self.min_first_pane),
            min_second_pane: density.round_to_px(self.min_second_pane),
        }
    }
}

/// Drag offset of the divider in pixels, measured from the start edge along
/// the split axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DividerOffset(f64);

impl DividerOffset {
    pub fn get(self) -> f64 {
        self.0
    }
}

/// A two-pane split layout with a draggable divider.
///
/// The layout owns the divider offset accumulated from drag gestures. Layout
/// passes only read it; it changes through [`Self::apply_drag_delta`].
#[derive(Clone, Debug)]
pub struct SplitLayout {
    strategy: SplitStrategy,
    options: SplitLayoutOptions,
    divider_offset: DividerOffset,
}

impl SplitLayout {
    pub fn new(
        strategy: SplitStrategy,
        options: SplitLayoutOptions,
    ) -> Result<Self, ConfigurationError> {
        options.validate()?;
        Ok(SplitLayout {
            strategy,
            options,
            divider_offset: DividerOffset::default(),
        })
    }

    pub fn strategy(&self) -> &SplitStrategy {
        &self.strategy
    }

    pub fn options(&self) -> &SplitLayoutOptions {
        &self.options
    }

    pub fn divider_offset(&self) -> DividerOffset {
        self.divider_offset
    }

    /// Moves the divider by `delta` pixels towards the end edge.
    ///
    /// Offsets are not clamped here; the next layout pass keeps the panes
    /// within their minimum sizes.
    pub fn apply_drag_delta(&mut self, delta: f64) {
        if !delta.is_finite() {
            debug!(delta, "Ignoring non-finite drag delta");
            return;
        }
        self.divider_offset = DividerOffset(self.divider_offset.0 + delta);
    }

    /// Returns the divider to where the strategy puts it.
    pub fn reset_divider(&mut self) {
        self.divider_offset = DividerOffset::default();
    }

    /// Lays out the panes in a container of the given size.
    ///
    /// `size` is `None` until the container has been measured, in which case
    /// an empty placement is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn layout(
        &self,
        size: Option<Size>,
        direction: LayoutDirection,
        density: Density,
    ) -> Result<SplitPlacement, LayoutError> {
        let Some(size) = size else {
            debug!("Container has not been measured yet");
            return Ok(SplitPlacement::unmeasured(
                self.default_gap_orientation(),
                direction,
            ));
        };
        let result = self.strategy.calculate_split_result(
            density,
            direction,
            size,
            self.divider_offset.get(),
        );
        let placement =
            placement::place(size, direction, &result, &self.options.dimensions(density))?;
        debug!(
            pane_sizes = ?placement.pane_sizes,
            gap_orientation = ?placement.gap_orientation,
            "Placed panes"
        );
        Ok(placement)
    }

    /// Places the panes on either side of the strategy's gap, ignoring the
    /// divider and the minimum pane sizes.
    ///
    /// The divider offset still moves the gap, so drags can be applied with
    /// [`TwoPanePlacement::drag_delta`].
    pub fn layout_two_pane(
        &self,
        size: Size,
        direction: LayoutDirection,
        density: Density,
    ) -> TwoPanePlacement {
        let result = self.strategy.calculate_split_result(
            density,
            direction,
            size,
            self.divider_offset.get(),
        );
        place_two_pane(size, direction, &result)
    }

    /// The orientation of the gap before any layout pass. Composite strategies
    /// may produce a different one depending on the container.
    pub fn default_gap_orientation(&self) -> Orientation {
        self.strategy.orientation().perpendicular()
    }
}
