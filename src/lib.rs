// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config;
pub mod log;
pub mod model;
