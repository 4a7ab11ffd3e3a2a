// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The split geometry engine.
//!
//! A layout pass runs in three steps: a [`SplitStrategy`] decides where the
//! gap should be, [`resolve_pane_sizes`] clamps it to the minimum pane
//! sizes, and [`place`] turns the result into rectangles. [`SplitLayout`]
//! ties these together and owns the divider offset.

mod constraints;
mod error;
mod geometry;
mod placement;
mod split_layout;
mod strategy;
mod two_pane;

pub use constraints::{PaneSizes, resolve_pane_sizes};
pub use error::{ConfigurationError, LayoutError};
pub use geometry::{Density, LayoutDirection, Orientation, Rect, Size};
pub use placement::{PaneDimensions, ResizeCursor, SplitPlacement, place};
pub use split_layout::{DividerOffset, SplitLayout, SplitLayoutOptions};
pub use strategy::{
    CompositeStrategy, ConditionalStrategy, FoldFeature, FractionStrategy, OffsetStrategy,
    SplitResult, SplitStrategy,
};
pub use two_pane::{TwoPanePlacement, place_two_pane};
