//! Point clouds sampled on varieties and their epsilon-neighborhood graphs.
//!
//! Modules
//! - `cloud`: identified point sets, solver-output filtering, reference samplers.
//! - `select`: deterministic median-of-medians order statistics per axis.
//! - `graph`: exact and subdivision neighborhood-graph builders plus dispatch.
//!
//! Downstream (simplicial complexes, persistent homology) consumes the plain
//! `Adjacency` export of a `WeightedGraph`.

pub mod api;
pub mod cfg;
pub mod cloud;
pub mod error;
pub mod graph;
pub mod select;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GraphError, GraphResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{Point, PointId, PointSet, Space};
    pub use crate::error::{GraphError, GraphResult};
    pub use crate::graph::{
        neighborhood_graph, AxisMode, DepthLimit, Strategy, SubdivisionCfg, WeightedGraph,
    };
}
