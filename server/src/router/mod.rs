//! Router module

#[macro_use]
pub mod macros;
pub mod navigator;

pub mod router_types {
    //! Data types shared by the routers.
    pub mod edge;
    pub mod location;
    pub mod node;
    pub mod road;
    pub mod road_router;
    pub mod route;
    pub mod router;
}

pub mod router_utils {
    //! Helpers for distances, graphs and polylines.
    pub mod graph;
    pub mod haversine;
    pub mod polyline;

    #[cfg(any(test, feature = "mock"))]
    pub mod mock;
}

pub use navigator::{Navigator, RoutingMode};
pub use router_types::route::RouteResult;

use thiserror::Error;

/// Errors returned to callers of the routers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// No place with this name exists on campus.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// The strict graph router found no path.
    #[error("No path found from {from} to {to}")]
    NoPathFound { from: String, to: String },

    /// A coordinate that is not a finite WGS84 position.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// The hop bound is outside the supported range.
    #[error("Search depth {0} is outside 1..={max}", max = router_types::road_router::MAX_SEARCH_DEPTH)]
    InvalidSearchDepth(usize),
}
