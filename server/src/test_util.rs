//! test utilities. Provides log macros and shared fixtures for unit tests.

use std::sync::Arc;

use crate::campus::Campus;
use crate::router::{router_types::road_router::DEFAULT_MAX_DEPTH, Navigator, RoutingMode};

/// Writes a debug! message to the app::test logger
#[macro_export]
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::test", $($arg)+)
    };
}

/// Writes an info! message to the app::test logger
#[macro_export]
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::test", $($arg)+)
    };
}

/// Writes an error! message to the app::test logger
#[macro_export]
macro_rules! ut_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::test", $($arg)+)
    };
}

/// The embedded campus, panicking if it does not load.
pub fn embedded_campus() -> Arc<Campus> {
    Campus::embedded().unwrap_or_else(|e| panic!("embedded campus must load: {e}"))
}

/// A navigator over the embedded campus with the default hop bound.
pub fn embedded_navigator(mode: RoutingMode) -> Navigator {
    Navigator::new(embedded_campus(), mode, DEFAULT_MAX_DEPTH)
        .unwrap_or_else(|e| panic!("navigator must build: {e}"))
}
