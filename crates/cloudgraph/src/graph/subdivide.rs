//! Subdivision builder: median splits with glue bands across every cut.
//!
//! Model
//! - A subset `S` is cut at the median of its coordinates along the current
//!   axis into `smaller` (`< m`) and `bigger` (`>= m`). Any edge crossing the
//!   cut joins a point of `smaller` above `m - ε` to a point of `bigger` below
//!   `m + ε`; those two glue bands are checked pairwise, then both halves are
//!   processed on the next axis.
//! - `DepthLimit::Levels(n)` stops after `n` further levels and resolves the
//!   remaining halves with the exact builder.
//! - Every level is exact, so the result equals `build_exact` for every depth
//!   limit and axis mode.
//!
//! Termination
//! - When at least half the subset shares the minimum on the axis, `smaller`
//!   is empty. The subset is then cut into `equal` (`== m`) and `greater`
//!   (`> m`) instead, with `equal` as the lower glue band.
//! - A subset constant on the axis cannot be cut at all and moves on to the
//!   next axis. Only a subset constant on every axis of the cycle (coincident
//!   points, or a fixed axis with one value) is resolved exactly, so heavy
//!   duplicates cost no more than their own clique.
//!
//! Pending subsets live on an explicit `Vec<Task>`, so deep splits on large or
//! skewed inputs never grow the call stack.

use crate::cloud::{Point, PointSet};
use crate::error::{GraphError, GraphResult};
use crate::select::select_member;

use super::exact::exact_into;
use super::service::validate;
use super::strategy::{AxisMode, DepthLimit, SubdivisionCfg};
use super::types::WeightedGraph;

/// Work counters for one subdivision build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubdivisionStats {
    /// Median cuts performed.
    pub splits: usize,
    /// Distance evaluations across glue bands.
    pub glue_checks: usize,
    /// Subsets handed to the exact builder (depth limit or constant subsets).
    pub exact_subsets: usize,
    /// Distance evaluations inside those subsets.
    pub exact_checks: usize,
    /// Largest number of subsets waiting on the work stack.
    pub peak_pending: usize,
}

impl SubdivisionStats {
    #[inline]
    pub fn distance_checks(&self) -> usize {
        self.glue_checks + self.exact_checks
    }
}

/// Subdivision graph (affine space only).
pub fn build_subdivision(
    points: &PointSet,
    epsilon: f64,
    cfg: SubdivisionCfg,
) -> GraphResult<WeightedGraph> {
    build_subdivision_with_stats(points, epsilon, cfg).map(|(g, _)| g)
}

/// Same as `build_subdivision`, also returning work counters.
pub fn build_subdivision_with_stats(
    points: &PointSet,
    epsilon: f64,
    cfg: SubdivisionCfg,
) -> GraphResult<(WeightedGraph, SubdivisionStats)> {
    validate(points, epsilon, "subdivision")?;
    let dim = points.ambient_dim();
    let start = cfg.axis.initial();
    if start >= dim {
        return Err(GraphError::invalid(format!(
            "axis {start} out of range for dimension {dim}"
        )));
    }
    let runner = SubdivisionRunner {
        points: points.points(),
        epsilon,
        dim,
        mode: cfg.axis,
        graph: WeightedGraph::empty(points.len(), epsilon),
        stats: SubdivisionStats::default(),
        pending: Vec::new(),
    };
    let root = Task {
        members: (0..points.len()).collect(),
        axis: start,
        depth: cfg.depth,
        stalled: 0,
    };
    let (graph, stats) = runner.run(root);
    tracing::debug!(
        points = points.len(),
        epsilon,
        splits = stats.splits,
        glue_checks = stats.glue_checks,
        exact_subsets = stats.exact_subsets,
        exact_checks = stats.exact_checks,
        peak_pending = stats.peak_pending,
        edges = graph.edge_count(),
        "subdivision graph"
    );
    Ok((graph, stats))
}

/// A subset waiting to be cut.
#[derive(Debug)]
struct Task {
    members: Vec<usize>,
    axis: usize,
    depth: DepthLimit,
    /// Consecutive axes, ending at the previous one, on which this subset is constant.
    stalled: usize,
}

/// Runner carrying the shared context, the output graph, and the work stack.
struct SubdivisionRunner<'a> {
    points: &'a [Point],
    epsilon: f64,
    dim: usize,
    mode: AxisMode,
    graph: WeightedGraph,
    stats: SubdivisionStats,
    pending: Vec<Task>,
}

impl<'a> SubdivisionRunner<'a> {
    fn run(mut self, root: Task) -> (WeightedGraph, SubdivisionStats) {
        self.pending.push(root);
        while let Some(task) = self.pending.pop() {
            self.split(task);
            self.stats.peak_pending = self.stats.peak_pending.max(self.pending.len());
        }
        (self.graph, self.stats)
    }

    fn resolve_exact(&mut self, members: &[usize]) {
        if members.len() < 2 {
            return;
        }
        self.stats.exact_subsets += 1;
        self.stats.exact_checks += exact_into(self.points, members, self.epsilon, &mut self.graph);
    }

    /// Queue a subset, or resolve it exactly once it is constant on the whole cycle.
    fn schedule(&mut self, members: Vec<usize>, axis: usize, depth: DepthLimit, stalled: usize) {
        if members.len() <= 1 {
            return;
        }
        if stalled >= self.mode.cycle_len(self.dim) {
            self.resolve_exact(&members);
            return;
        }
        self.pending.push(Task {
            members,
            axis,
            depth,
            stalled,
        });
    }

    fn split(&mut self, task: Task) {
        if task.members.len() <= 1 {
            return;
        }
        let pts = self.points;
        let axis = task.axis;
        let key = |i: usize| pts[i].coord(axis);
        let median = select_member(&task.members, task.members.len() / 2, key);
        let cut = key(median);
        let (mut lower, mut upper): (Vec<usize>, Vec<usize>) =
            task.members.iter().partition(|&&i| key(i) < cut);
        // The median is the minimum: cut off the points sitting on it instead.
        let lower_constant = lower.is_empty();
        if lower_constant {
            let (equal, greater): (Vec<usize>, Vec<usize>) =
                upper.iter().partition(|&&i| key(i) == cut);
            lower = equal;
            upper = greater;
        }

        let glue_lower: Vec<usize> = lower
            .iter()
            .copied()
            .filter(|&i| key(i) > cut - self.epsilon)
            .collect();
        let glue_upper: Vec<usize> = upper
            .iter()
            .copied()
            .filter(|&i| key(i) < cut + self.epsilon)
            .collect();
        for &p in &glue_lower {
            for &q in &glue_upper {
                let dist = pts[p].distance(&pts[q]);
                if dist < self.epsilon {
                    self.graph.insert_edge(pts[p].id(), pts[q].id(), dist);
                }
            }
        }
        self.stats.splits += 1;
        self.stats.glue_checks += glue_lower.len() * glue_upper.len();
        tracing::trace!(
            size = task.members.len(),
            axis,
            cut,
            lower = lower.len(),
            upper = upper.len(),
            lower_constant,
            glue_lower = glue_lower.len(),
            glue_upper = glue_upper.len(),
            "split"
        );

        let lower_stalled = if lower_constant { task.stalled + 1 } else { 0 };
        let next_axis = self.mode.next(axis, self.dim);
        let next_depth = match task.depth {
            DepthLimit::Unbounded => DepthLimit::Unbounded,
            DepthLimit::Levels(0) => {
                self.resolve_exact(&lower);
                self.resolve_exact(&upper);
                return;
            }
            DepthLimit::Levels(n) => DepthLimit::Levels(n - 1),
        };
        // `lower` is pushed last so it is processed first.
        self.schedule(upper, next_axis, next_depth, 0);
        self.schedule(lower, next_axis, next_depth, lower_stalled);
    }
}
