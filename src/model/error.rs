// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// An error produced while laying out a split container.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The container cannot hold both panes at their minimum sizes.
    ///
    /// This is a configuration bug in the caller: either the minimum sizes are
    /// too large or the container is too small.
    #[error(
        "Not enough space for both panes: {available}px available, \
         but the first pane needs at least {min_first}px and the second {min_second}px"
    )]
    UnsatisfiableConstraints {
        available: i32,
        min_first: i32,
        min_second: i32,
    },
}

/// An invalid strategy or layout option, rejected at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Split fraction must be within [0, 1], got {0}")]
    InvalidSplitFraction(f64),
    #[error("{name} must be a finite, non-negative length, got {value}")]
    InvalidLength { name: &'static str, value: f64 },
    #[error(
        "Drag handle width ({handle_width}) must not be smaller than the divider thickness \
         ({divider_thickness})"
    )]
    HandleNarrowerThanDivider {
        handle_width: f64,
        divider_thickness: f64,
    },
    #[error("Density must be a finite, positive scale factor, got {0}")]
    InvalidDensity(f64),
}

pub(crate) fn check_length(name: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::InvalidLength { name, value })
    }
}
