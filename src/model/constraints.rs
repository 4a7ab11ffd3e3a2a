// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use tracing::error;

use super::error::LayoutError;

/// Pane sizes along the split axis, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSizes {
    pub first: i32,
    pub second: i32,
}

/// Clamps the raw gap position into the range allowed by the minimum pane
/// sizes.
///
/// `available` is the extent of the container along the split axis minus the
/// divider thickness. The second pane always takes exactly what the first
/// one leaves, so `first + second == available`.
pub fn resolve_pane_sizes(
    available: i32,
    min_first: i32,
    min_second: i32,
    raw_gap: f64,
) -> Result<PaneSizes, LayoutError> {
    let max_first = available.saturating_sub(min_second);
    // An exact fit leaves the divider no room to move and is rejected.
    if max_first <= min_first {
        error!(
            available,
            min_first, min_second, "Not enough space for both panes; adjust the minimum pane sizes"
        );
        return Err(LayoutError::UnsatisfiableConstraints {
            available,
            min_first,
            min_second,
        });
    }
    let first = (raw_gap.round() as i32).clamp(min_first, max_first);
    Ok(PaneSizes {
        first,
        second: available - first,
    })
}
