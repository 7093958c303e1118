//! Curated surface for callers that want everything in one import.
//!
//! Grouped by stage: ingest a cloud, pick a strategy, build, export.

// Ingest
pub use crate::cloud::filter::{FilterCfg, SolutionFilter};
pub use crate::cloud::rand::{sphere, torus, uniform_box};
pub use crate::cloud::{Point, PointId, PointSet, Space};
// Select
pub use crate::select::select;
// Build
pub use crate::graph::{
    build_exact, build_subdivision, build_subdivision_with_stats, neighborhood_graph, AxisMode,
    DepthLimit, Strategy, SubdivisionCfg, SubdivisionStats,
};
// Export
pub use crate::graph::{Adjacency, Edge, WeightedGraph};
pub use crate::error::{GraphError, GraphResult};
