// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategies decide where the gap between the two panes goes.
//!
//! A strategy is a pure function of the container size, the layout direction
//! and the divider offset accumulated from drag gestures. It does not know
//! about minimum pane sizes; those are enforced later by
//! [`resolve_pane_sizes`][super::constraints::resolve_pane_sizes].

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{ConfigurationError, check_length};
use super::geometry::{Density, LayoutDirection, Orientation, Rect, Size};

/// Where the gap between the two panes is, in the container's local
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitResult {
    pub gap_orientation: Orientation,
    pub gap_bounds: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SplitStrategy {
    Fraction(FractionStrategy),
    Offset(OffsetStrategy),
    Composite(CompositeStrategy),
}

impl SplitStrategy {
    /// Places the panes side by side, with the gap at `split_fraction` of the
    /// width from the start edge.
    pub fn horizontal_fraction(
        split_fraction: f64,
        gap_width: f64,
    ) -> Result<Self, ConfigurationError> {
        FractionStrategy::new(Orientation::Horizontal, split_fraction, gap_width)
            .map(SplitStrategy::Fraction)
    }

    /// Stacks the panes, with the gap at `split_fraction` of the height from
    /// the top.
    pub fn vertical_fraction(
        split_fraction: f64,
        gap_height: f64,
    ) -> Result<Self, ConfigurationError> {
        FractionStrategy::new(Orientation::Vertical, split_fraction, gap_height)
            .map(SplitStrategy::Fraction)
    }

    /// Places the panes side by side, with the gap `split_offset` away from
    /// the start edge, or from the end edge if `offset_from_start` is false.
    pub fn horizontal_offset(
        split_offset: f64,
        offset_from_start: bool,
        gap_width: f64,
    ) -> Result<Self, ConfigurationError> {
        OffsetStrategy::new(
            Orientation::Horizontal,
            split_offset,
            offset_from_start,
            gap_width,
        )
        .map(SplitStrategy::Offset)
    }

    /// Stacks the panes, with the gap `split_offset` away from the top edge,
    /// or from the bottom edge if `offset_from_top` is false.
    pub fn vertical_offset(
        split_offset: f64,
        offset_from_top: bool,
        gap_height: f64,
    ) -> Result<Self, ConfigurationError> {
        OffsetStrategy::new(
            Orientation::Vertical,
            split_offset,
            offset_from_top,
            gap_height,
        )
        .map(SplitStrategy::Offset)
    }

    /// Tries each of `conditionals` in order, falling back to `default` when
    /// none of them applies.
    pub fn composite(conditionals: Vec<ConditionalStrategy>, default: SplitStrategy) -> Self {
        SplitStrategy::Composite(CompositeStrategy {
            conditionals,
            default: Box::new(default),
        })
    }

    /// Puts the gap on a fold of the display when there is one that matches
    /// the orientation of `default`, and otherwise uses `default`.
    pub fn fold_aware(fold: Option<FoldFeature>, default: SplitStrategy) -> Self {
        let orientation = default.orientation();
        let conditionals = fold
            .into_iter()
            .map(|fold| ConditionalStrategy::Fold { orientation, fold })
            .collect();
        SplitStrategy::composite(conditionals, default)
    }

    /// Calculates the gap for the given container.
    ///
    /// `divider_offset` is the drag offset accumulated by the split layout,
    /// measured from the start edge along the split axis.
    pub fn calculate_split_result(
        &self,
        density: Density,
        direction: LayoutDirection,
        size: Size,
        divider_offset: f64,
    ) -> SplitResult {
        let result = match self {
            SplitStrategy::Fraction(s) => s.calculate(density, direction, size, divider_offset),
            SplitStrategy::Offset(s) => s.calculate(density, direction, size, divider_offset),
            SplitStrategy::Composite(s) => s.calculate(density, direction, size, divider_offset),
        };
        trace!(?size, ?direction, divider_offset, ?result, "calculated split");
        result
    }

    /// Whether the panes are placed side by side, which means the gap is
    /// vertical.
    pub fn is_horizontal(&self) -> bool {
        self.orientation() == Orientation::Horizontal
    }

    /// The orientation of the pane arrangement. The gap is perpendicular to
    /// it.
    pub fn orientation(&self) -> Orientation {
        match self {
            SplitStrategy::Fraction(s) => s.orientation,
            SplitStrategy::Offset(s) => s.orientation,
            SplitStrategy::Composite(s) => s.default.orientation(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FractionStrategy {
    orientation: Orientation,
    split_fraction: f64,
    gap_width: f64,
}

impl FractionStrategy {
    pub fn new(
        orientation: Orientation,
        split_fraction: f64,
        gap_width: f64,
    ) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&split_fraction) {
            return Err(ConfigurationError::InvalidSplitFraction(split_fraction));
        }
        Ok(FractionStrategy {
            orientation,
            split_fraction,
            gap_width: check_length("gap_width", gap_width)?,
        })
    }

    pub fn split_fraction(&self) -> f64 {
        self.split_fraction
    }

    fn calculate(
        &self,
        density: Density,
        direction: LayoutDirection,
        size: Size,
        divider_offset: f64,
    ) -> SplitResult {
        let gap_orientation = self.orientation.perpendicular();
        let extent = size.split_extent(gap_orientation);
        let split = extent * self.split_fraction + divider_offset;
        gap_around(
            gap_orientation,
            direction,
            size,
            split,
            density.to_px(self.gap_width),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OffsetStrategy {
    orientation: Orientation,
    split_offset: f64,
    offset_from_start: bool,
    gap_width: f64,
}

impl OffsetStrategy {
    pub fn new(
        orientation: Orientation,
        split_offset: f64,
        offset_from_start: bool,
        gap_width: f64,
    ) -> Result<Self, ConfigurationError> {
        Ok(OffsetStrategy {
            orientation,
            split_offset: check_length("split_offset", split_offset)?,
            offset_from_start,
            gap_width: check_length("gap_width", gap_width)?,
        })
    }

    fn calculate(
        &self,
        density: Density,
        direction: LayoutDirection,
        size: Size,
        divider_offset: f64,
    ) -> SplitResult {
        let gap_orientation = self.orientation.perpendicular();
        let extent = size.split_extent(gap_orientation);
        let offset = density.to_px(self.split_offset);
        let split = if self.offset_from_start {
            offset
        } else {
            extent - offset
        };
        gap_around(
            gap_orientation,
            direction,
            size,
            split + divider_offset,
            density.to_px(self.gap_width),
        )
    }
}

/// Builds the gap rectangle around a split point measured from the start edge.
///
/// Side-by-side splits are mirrored in right-to-left layouts, so the
/// resulting bounds are always in physical coordinates. Both edges of the gap
/// are kept inside the container.
fn gap_around(
    gap_orientation: Orientation,
    direction: LayoutDirection,
    size: Size,
    split: f64,
    gap_width: f64,
) -> SplitResult {
    let extent = size.split_extent(gap_orientation);
    let split = split.clamp(0.0, extent);
    let split = if gap_orientation == Orientation::Vertical && direction.is_rtl() {
        extent - split
    } else {
        split
    };
    let half = gap_width / 2.0;
    let gap_bounds = Rect::from_spans(
        gap_orientation,
        ((split - half).max(0.0), (split + half).min(extent)),
        (0.0, size.cross_extent(gap_orientation)),
    );
    SplitResult { gap_orientation, gap_bounds }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompositeStrategy {
    conditionals: Vec<ConditionalStrategy>,
    default: Box<SplitStrategy>,
}

impl CompositeStrategy {
    fn calculate(
        &self,
        density: Density,
        direction: LayoutDirection,
        size: Size,
        divider_offset: f64,
    ) -> SplitResult {
        self.conditionals
            .iter()
            .find_map(|c| c.calculate(density, direction, size, divider_offset))
            .unwrap_or_else(|| {
                self.default.calculate_split_result(density, direction, size, divider_offset)
            })
    }
}

/// A hinge or fold of the display, in the container's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoldFeature {
    pub bounds: Rect,
    pub orientation: Orientation,
}

/// A strategy that only produces a result under some condition.
#[derive(Clone, Debug, PartialEq)]
pub enum ConditionalStrategy {
    /// Uses the fold as the gap when the fold is perpendicular to
    /// `orientation` and lies within the container.
    ///
    /// Drag offsets do not move a fold.
    Fold {
        orientation: Orientation,
        fold: FoldFeature,
    },
    /// Delegates to `strategy` when the container is at least
    /// `min_width` x `min_height` (in dp).
    Breakpoint {
        min_width: f64,
        min_height: f64,
        strategy: Box<SplitStrategy>,
    },
}

impl ConditionalStrategy {
    pub fn breakpoint(
        min_width: f64,
        min_height: f64,
        strategy: SplitStrategy,
    ) -> Result<Self, ConfigurationError> {
        Ok(ConditionalStrategy::Breakpoint {
            min_width: check_length("min_width", min_width)?,
            min_height: check_length("min_height", min_height)?,
            strategy: Box::new(strategy),
        })
    }

    /// Returns `None` if this strategy does not apply to the container.
    pub fn calculate(
        &self,
        density: Density,
        direction: LayoutDirection,
        size: Size,
        divider_offset: f64,
    ) -> Option<SplitResult> {
        match self {
            ConditionalStrategy::Fold { orientation, fold } => {
                let applies = fold.orientation == orientation.perpendicular()
                    && Rect::from_size(size).contains_rect(&fold.bounds);
                applies.then_some(SplitResult {
                    gap_orientation: fold.orientation,
                    gap_bounds: fold.bounds,
                })
            }
            ConditionalStrategy::Breakpoint {
                min_width,
                min_height,
                strategy,
            } => {
                let applies = size.width >= density.to_px(*min_width)
                    && size.height >= density.to_px(*min_height);
                applies.then(|| {
                    strategy.calculate_split_result(density, direction, size, divider_offset)
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use LayoutDirection::*;

    fn split_x(strategy: &SplitStrategy, direction: LayoutDirection, width: f64) -> f64 {
        let result = strategy.calculate_split_result(
            Density::IDENTITY,
            direction,
            Size::new(width, 400.0),
            0.0,
        );
        (result.gap_bounds.left + result.gap_bounds.right) / 2.0
    }

    #[test]
    fn fraction_centers_the_gap_on_the_split_point() {
        let strategy = SplitStrategy::horizontal_fraction(0.5, 1.0).unwrap();
        let result = strategy.calculate_split_result(
            Density::IDENTITY,
            LeftToRight,
            Size::new(1000.0, 600.0),
            0.0,
        );
        assert_eq!(
            result,
            SplitResult {
                gap_orientation: Orientation::Vertical,
                gap_bounds: Rect::new(499.5, 0.0, 500.5, 600.0),
            }
        );
    }

    #[test]
    fn fraction_adds_the_divider_offset() {
        let strategy = SplitStrategy::horizontal_fraction(0.5, 0.0).unwrap();
        let result = strategy.calculate_split_result(
            Density::IDENTITY,
            LeftToRight,
            Size::new(1000.0, 600.0),
            50.0,
        );
        assert_eq!(result.gap_bounds.left, 550.0);
    }

    #[test]
    fn fraction_clamps_the_gap_to_the_container() {
        let strategy = SplitStrategy::horizontal_fraction(0.5, 10.0).unwrap();
        let size = Size::new(1000.0, 600.0);
        let right = strategy.calculate_split_result(Density::IDENTITY, LeftToRight, size, 900.0);
        assert_eq!(right.gap_bounds, Rect::new(995.0, 0.0, 1000.0, 600.0));
        let left = strategy.calculate_split_result(Density::IDENTITY, LeftToRight, size, -900.0);
        assert_eq!(left.gap_bounds, Rect::new(0.0, 0.0, 5.0, 600.0));
    }

    #[test]
    fn vertical_fraction_splits_the_height() {
        let strategy = SplitStrategy::vertical_fraction(0.25, 2.0).unwrap();
        let result = strategy.calculate_split_result(
            Density::IDENTITY,
            RightToLeft,
            Size::new(300.0, 800.0),
            0.0,
        );
        assert_eq!(result.gap_orientation, Orientation::Horizontal);
        assert_eq!(result.gap_bounds, Rect::new(0.0, 199.0, 300.0, 201.0));
    }

    #[test]
    fn horizontal_strategies_produce_vertical_gaps() {
        let strategies = [
            SplitStrategy::horizontal_fraction(0.3, 1.0).unwrap(),
            SplitStrategy::horizontal_offset(120.0, true, 1.0).unwrap(),
            SplitStrategy::fold_aware(None, SplitStrategy::horizontal_fraction(0.5, 0.0).unwrap()),
        ];
        for strategy in strategies {
            assert!(strategy.is_horizontal());
            let result = strategy.calculate_split_result(
                Density::IDENTITY,
                LeftToRight,
                Size::new(500.0, 500.0),
                0.0,
            );
            assert_eq!(result.gap_orientation, Orientation::Vertical);
        }
    }

    #[test]
    fn vertical_strategies_produce_horizontal_gaps() {
        let strategies = [
            SplitStrategy::vertical_fraction(0.3, 1.0).unwrap(),
            SplitStrategy::vertical_offset(120.0, false, 1.0).unwrap(),
        ];
        for strategy in strategies {
            assert!(!strategy.is_horizontal());
            let result = strategy.calculate_split_result(
                Density::IDENTITY,
                LeftToRight,
                Size::new(500.0, 500.0),
                0.0,
            );
            assert_eq!(result.gap_orientation, Orientation::Horizontal);
        }
    }

    #[test]
    fn calculation_is_idempotent() {
        let strategy = SplitStrategy::horizontal_fraction(1.0 / 3.0, 3.0).unwrap();
        let size = Size::new(777.0, 333.0);
        let density = Density::new(1.25).unwrap();
        let a = strategy.calculate_split_result(density, RightToLeft, size, 12.5);
        let b = strategy.calculate_split_result(density, RightToLeft, size, 12.5);
        assert_eq!(a, b);
    }

    #[test]
    fn offset_from_start_is_mirrored_in_rtl() {
        let strategy = SplitStrategy::horizontal_offset(200.0, true, 0.0).unwrap();
        let ltr = split_x(&strategy, LeftToRight, 1000.0);
        let rtl = split_x(&strategy, RightToLeft, 1000.0);
        assert_eq!(ltr, 200.0);
        assert_eq!(rtl, 1000.0 - ltr);
    }

    #[test]
    fn offset_from_end() {
        let strategy = SplitStrategy::horizontal_offset(200.0, false, 0.0).unwrap();
        assert_eq!(split_x(&strategy, LeftToRight, 1000.0), 800.0);
        assert_eq!(split_x(&strategy, RightToLeft, 1000.0), 200.0);
    }

    #[test]
    fn vertical_offset_ignores_direction() {
        let strategy = SplitStrategy::vertical_offset(100.0, false, 0.0).unwrap();
        for direction in [LeftToRight, RightToLeft] {
            let result = strategy.calculate_split_result(
                Density::IDENTITY,
                direction,
                Size::new(640.0, 480.0),
                0.0,
            );
            assert_eq!(result.gap_bounds.top, 380.0);
        }
    }

    #[test]
    fn offset_scales_with_density() {
        let strategy = SplitStrategy::horizontal_offset(100.0, true, 0.0).unwrap();
        let result = strategy.calculate_split_result(
            Density::new(2.0).unwrap(),
            LeftToRight,
            Size::new(1000.0, 100.0),
            0.0,
        );
        assert_eq!(result.gap_bounds.left, 200.0);
    }

    #[test]
    fn composite_prefers_the_first_applicable_conditional() {
        let fold = FoldFeature {
            bounds: Rect::new(400.0, 0.0, 420.0, 600.0),
            orientation: Orientation::Vertical,
        };
        let strategy = SplitStrategy::fold_aware(
            Some(fold),
            SplitStrategy::horizontal_fraction(0.5, 0.0).unwrap(),
        );

        let on_fold = strategy.calculate_split_result(
            Density::IDENTITY,
            LeftToRight,
            Size::new(820.0, 600.0),
            0.0,
        );
        assert_eq!(on_fold.gap_bounds, fold.bounds);

        // The fold is outside of a smaller container, so the default applies.
        let fallback = strategy.calculate_split_result(
            Density::IDENTITY,
            LeftToRight,
            Size::new(300.0, 600.0),
            0.0,
        );
        assert_eq!(fallback.gap_bounds, Rect::new(150.0, 0.0, 150.0, 600.0));
    }

    #[test]
    fn folds_with_the_wrong_orientation_are_ignored() {
        let fold = FoldFeature {
            bounds: Rect::new(0.0, 290.0, 800.0, 310.0),
            orientation: Orientation::Horizontal,
        };
        let strategy = SplitStrategy::fold_aware(
            Some(fold),
            SplitStrategy::horizontal_fraction(0.25, 0.0).unwrap(),
        );
        let result = strategy.calculate_split_result(
            Density::IDENTITY,
            LeftToRight,
            Size::new(800.0, 600.0),
            0.0,
        );
        assert_eq!(result.gap_orientation, Orientation::Vertical);
        assert_eq!(result.gap_bounds.left, 200.0);
    }

    #[test]
    fn breakpoints_switch_orientation() {
        let strategy = SplitStrategy::composite(
            vec![
                ConditionalStrategy::breakpoint(
                    600.0,
                    0.0,
                    SplitStrategy::horizontal_fraction(0.5, 0.0).unwrap(),
                )
                .unwrap(),
            ],
            SplitStrategy::vertical_fraction(0.5, 0.0).unwrap(),
        );
        // The default decides what the strategy reports as its orientation.
        assert!(!strategy.is_horizontal());

        let wide = strategy.calculate_split_result(
            Density::IDENTITY,
            LeftToRight,
            Size::new(800.0, 400.0),
            0.0,
        );
        assert_eq!(wide.gap_orientation, Orientation::Vertical);

        let narrow = strategy.calculate_split_result(
            Density::IDENTITY,
            LeftToRight,
            Size::new(500.0, 400.0),
            0.0,
        );
        assert_eq!(narrow.gap_orientation, Orientation::Horizontal);
    }

    #[test]
    fn invalid_strategies_are_rejected() {
        assert_eq!(
            SplitStrategy::horizontal_fraction(1.5, 0.0),
            Err(ConfigurationError::InvalidSplitFraction(1.5))
        );
        assert!(SplitStrategy::vertical_fraction(f64::NAN, 0.0).is_err());
        assert_eq!(
            SplitStrategy::horizontal_fraction(0.5, -1.0),
            Err(ConfigurationError::InvalidLength {
                name: "gap_width",
                value: -1.0
            })
        );
        assert!(SplitStrategy::horizontal_offset(f64::INFINITY, true, 0.0).is_err());
        assert!(
            ConditionalStrategy::breakpoint(
                -1.0,
                0.0,
                SplitStrategy::vertical_fraction(0.5, 0.0).unwrap()
            )
            .is_err()
        );
    }
}
