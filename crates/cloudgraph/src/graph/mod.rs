//! Epsilon-neighborhood graphs over point clouds.
//!
//! Purpose
//! - Turn a `PointSet` into the weighted graph joining every pair of points at
//!   Euclidean distance strictly below `epsilon`, as input for simplicial
//!   complex construction.
//!
//! Why this design
//! - Two exact builders: all-pairs (`exact`) and median subdivision with glue
//!   bands (`subdivide`); the latter does far fewer distance checks on spread
//!   clouds and produces the identical graph.
//! - Strategies are plain descriptor values (`strategy`); named-but-unbuilt
//!   strategies and projective space fail with `NotSupported` instead of
//!   returning nothing.
//!
//! Layout
//! - `types.rs` (output graph), `strategy.rs` (descriptors), `exact.rs`,
//!   `subdivide.rs` (builders), `service.rs` (validation and dispatch).

mod exact;
mod service;
mod strategy;
mod subdivide;
mod types;

pub use exact::build_exact;
pub use service::neighborhood_graph;
pub use strategy::{AxisMode, DepthLimit, Strategy, SubdivisionCfg};
pub use subdivide::{build_subdivision, build_subdivision_with_stats, SubdivisionStats};
pub use types::{Adjacency, Edge, WeightedGraph};
