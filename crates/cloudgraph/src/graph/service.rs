//! Dispatch from a strategy descriptor to the matching builder.

use crate::cloud::{PointSet, Space};
use crate::error::{GraphError, GraphResult};

use super::exact::build_exact;
use super::strategy::Strategy;
use super::subdivide::build_subdivision;
use super::types::WeightedGraph;

/// Shared argument checks for every builder.
///
/// Argument errors take precedence over unsupported spaces.
pub(crate) fn validate(points: &PointSet, epsilon: f64, method: &str) -> GraphResult<()> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GraphError::invalid(format!(
            "epsilon must be a positive finite number, got {epsilon}"
        )));
    }
    if points.is_empty() {
        return Err(GraphError::invalid("point set is empty"));
    }
    if points.space() == Space::Projective {
        return Err(GraphError::unsupported(format!(
            "{method} neighborhood graphs in projective space"
        )));
    }
    Ok(())
}

/// Build the epsilon-neighborhood graph of `points` with `strategy`.
pub fn neighborhood_graph(
    points: &PointSet,
    epsilon: f64,
    strategy: &Strategy,
) -> GraphResult<WeightedGraph> {
    tracing::debug!(points = points.len(), epsilon, %strategy, "neighborhood_graph");
    match strategy {
        Strategy::Exact => build_exact(points, epsilon),
        Strategy::Subdivision(cfg) => build_subdivision(points, epsilon, *cfg),
        Strategy::Approximate | Strategy::Randomized | Strategy::Landmarking => {
            validate(points, epsilon, strategy.kind())?;
            Err(GraphError::unsupported(format!(
                "{} neighborhood graphs",
                strategy.kind()
            )))
        }
    }
}

impl PointSet {
    /// Method form of [`neighborhood_graph`].
    pub fn neighborhood_graph(
        &self,
        epsilon: f64,
        strategy: &Strategy,
    ) -> GraphResult<WeightedGraph> {
        neighborhood_graph(self, epsilon, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::strategy::{AxisMode, DepthLimit, SubdivisionCfg};

    fn square() -> PointSet {
        PointSet::from_rows(
            Space::Affine,
            [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.5, 0.5]],
        )
        .unwrap()
    }

    #[test]
    fn every_implemented_strategy_agrees() {
        let pts = square();
        let exact = pts.neighborhood_graph(0.8, &Strategy::Exact).unwrap();
        for s in ["subdivision", "subdivision 0", "subdivision fixed-axis=1"] {
            let g = pts.neighborhood_graph(0.8, &s.parse().unwrap()).unwrap();
            assert_eq!(g, exact, "{s}");
        }
    }

    #[test]
    fn invalid_epsilon_and_empty_sets() {
        let pts = square();
        for eps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = neighborhood_graph(&pts, eps, &Strategy::default()).unwrap_err();
            assert!(err.is_invalid_argument(), "{eps}");
        }
        let empty = PointSet::new(Space::Affine);
        let err = neighborhood_graph(&empty, 1.0, &Strategy::Exact).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn single_point_has_no_edges() {
        let pts = PointSet::from_rows(Space::Affine, [[3.0, 4.0]]).unwrap();
        for s in [Strategy::Exact, Strategy::default()] {
            let g = neighborhood_graph(&pts, 1.0, &s).unwrap();
            assert_eq!((g.len(), g.edge_count()), (1, 0));
        }
    }

    #[test]
    fn unsupported_strategies_and_spaces() {
        let pts = square();
        for s in [
            Strategy::Approximate,
            Strategy::Randomized,
            Strategy::Landmarking,
        ] {
            assert!(neighborhood_graph(&pts, 1.0, &s)
                .unwrap_err()
                .is_not_supported());
        }
        let proj = PointSet::from_rows(Space::Projective, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
            .unwrap();
        let sub = Strategy::Subdivision(SubdivisionCfg {
            depth: DepthLimit::Levels(2),
            axis: AxisMode::default(),
        });
        for s in [Strategy::Exact, Strategy::default(), sub] {
            assert!(neighborhood_graph(&proj, 1.0, &s)
                .unwrap_err()
                .is_not_supported());
        }
    }
}
