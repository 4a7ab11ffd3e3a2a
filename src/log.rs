// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::{Stderr, stderr};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_tree::time::UtcDateTime;

/// Installs the global subscriber, filtered by `RUST_LOG`.
///
/// Log lines are written from a background thread; keep the returned guard
/// alive until exit so they are flushed.
pub fn init_logging() -> WorkerGuard {
    let (err_appender, err_appender_guard) = tracing_appender::non_blocking(stderr());
    tracing_subscriber::registry()
        .with(
            tree_layer()
                .with_writer(err_appender)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();
    err_appender_guard
}

pub fn tree_layer() -> tracing_tree::HierarchicalLayer<fn() -> Stderr, UtcDateTime> {
    tracing_tree::HierarchicalLayer::default()
        .with_indent_amount(2)
        .with_indent_lines(true)
        .with_deferred_spans(true)
        .with_span_retrace(true)
        .with_targets(true)
        .with_timer(UtcDateTime::default())
}
