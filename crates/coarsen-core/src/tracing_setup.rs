//! Tracing subscriber setup and span definitions per stage:
//! round, projection, matching, contraction.

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `"warn"`,
/// `"info"`, `"coarsen_engine=debug"`) is used. Calling this twice is
/// harmless: the second install is ignored.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Create a span for one contraction round.
#[macro_export]
macro_rules! round_span {
    ($round:expr) => {
        tracing::info_span!("coarsen.round", round = $round)
    };
}

/// Create a span for the one-mode projection of a layer.
#[macro_export]
macro_rules! project_span {
    ($layer:expr, $measure:expr) => {
        tracing::debug_span!("coarsen.project", layer = $layer, measure = %$measure)
    };
}

/// Create a span for matching a layer's projection.
#[macro_export]
macro_rules! match_span {
    ($layer:expr, $strategy:expr) => {
        tracing::debug_span!("coarsen.match", layer = $layer, strategy = %$strategy)
    };
}

/// Create a span for a contraction step.
#[macro_export]
macro_rules! contract_span {
    ($layers:expr) => {
        tracing::debug_span!("coarsen.contract", layers = ?$layers)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ROUND: &str = "coarsen.round";
    pub const PROJECT: &str = "coarsen.project";
    pub const MATCH: &str = "coarsen.match";
    pub const CONTRACT: &str = "coarsen.contract";
}
