//! Boundary adapter from raw complex solver output to a real point cloud.
//!
//! Homotopy-continuation solvers report every solution as a complex vector, even
//! the real ones (imaginary parts around 1e-48 are typical). The filter keeps
//! the solutions that are numerically real and inside a coordinate box, and
//! drops the imaginary parts.

use nalgebra::Complex;

use super::{PointSet, Space};
use crate::cfg::{DEFAULT_BOUNDS, DEFAULT_IMAG_TOL};
use crate::error::GraphResult;

/// Acceptance rule for solver solutions.
#[derive(Clone, Copy, Debug)]
pub struct FilterCfg {
    /// Largest accepted `|imag|` per component.
    pub imag_tol: f64,
    /// Accepted real parts lie in `[-bounds, bounds]`; `0` rejects everything.
    pub bounds: f64,
    /// Stop accepting once this many solutions were kept.
    pub limit: Option<usize>,
}

impl Default for FilterCfg {
    fn default() -> Self {
        Self {
            imag_tol: DEFAULT_IMAG_TOL,
            bounds: DEFAULT_BOUNDS,
            limit: None,
        }
    }
}

/// Streaming filter; feed solutions with `offer`, then take the cloud.
#[derive(Clone, Debug)]
pub struct SolutionFilter {
    cfg: FilterCfg,
    accepted: Vec<Vec<f64>>,
    rejected: usize,
}

impl SolutionFilter {
    pub fn new(cfg: FilterCfg) -> Self {
        Self {
            cfg,
            accepted: Vec::new(),
            rejected: 0,
        }
    }

    fn component_ok(&self, z: &Complex<f64>) -> bool {
        let b = self.cfg.bounds;
        z.im.abs() <= self.cfg.imag_tol && b != 0.0 && -b <= z.re && z.re <= b
    }

    /// Whether the filter has reached its `limit`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cfg.limit.is_some_and(|n| self.accepted.len() >= n)
    }

    /// Offer one solution; returns `true` if it was kept.
    pub fn offer(&mut self, solution: &[Complex<f64>]) -> bool {
        if self.is_full() {
            return false;
        }
        if solution.is_empty() || !solution.iter().all(|z| self.component_ok(z)) {
            self.rejected += 1;
            return false;
        }
        self.accepted.push(solution.iter().map(|z| z.re).collect());
        true
    }

    /// Offer a batch; returns how many were kept.
    pub fn extend<I, R>(&mut self, solutions: I) -> usize
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Complex<f64>]>,
    {
        let mut kept = 0;
        for s in solutions {
            if self.is_full() {
                break;
            }
            if self.offer(s.as_ref()) {
                kept += 1;
            }
        }
        kept
    }

    #[inline]
    pub fn accepted(&self) -> usize {
        self.accepted.len()
    }
    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Consume the filter into a point cloud (rows must share one dimension).
    pub fn into_point_set(self, space: Space) -> GraphResult<PointSet> {
        tracing::debug!(
            accepted = self.accepted.len(),
            rejected = self.rejected,
            "solution_filter"
        );
        PointSet::from_rows(space, self.accepted)
    }
}
