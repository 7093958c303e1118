//! Brute-force builder: every unordered pair, O(n²).

use crate::cloud::{Point, PointSet};
use crate::error::GraphResult;

use super::service::validate;
use super::types::WeightedGraph;

/// All pairs at distance `< epsilon` (affine space only).
pub fn build_exact(points: &PointSet, epsilon: f64) -> GraphResult<WeightedGraph> {
    validate(points, epsilon, "exact")?;
    let members: Vec<usize> = (0..points.len()).collect();
    let mut graph = WeightedGraph::empty(points.len(), epsilon);
    let checks = exact_into(points.points(), &members, epsilon, &mut graph);
    tracing::debug!(
        points = points.len(),
        checks,
        edges = graph.edge_count(),
        "exact graph"
    );
    Ok(graph)
}

/// Pairwise pass over `members`; returns the number of distance evaluations.
pub(crate) fn exact_into(
    points: &[Point],
    members: &[usize],
    epsilon: f64,
    graph: &mut WeightedGraph,
) -> usize {
    let mut checks = 0;
    for (n, &i) in members.iter().enumerate() {
        for &j in &members[n + 1..] {
            checks += 1;
            let dist = points[i].distance(&points[j]);
            if dist < epsilon {
                graph.insert_edge(points[i].id(), points[j].id(), dist);
            }
        }
    }
    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{PointId, Space};

    #[test]
    fn unit_square_with_center() {
        let pts = PointSet::from_rows(
            Space::Affine,
            [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.5, 0.5]],
        )
        .unwrap();
        let g = build_exact(&pts, 0.8).unwrap();
        assert_eq!(g.edge_count(), 4);
        for corner in 0..4 {
            let d = g.distance(PointId(4), PointId(corner)).unwrap();
            assert!((d - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        }
        assert_eq!(g.distance(PointId(0), PointId(1)), None);
    }

    #[test]
    fn threshold_is_strict() {
        let pts = PointSet::from_rows(Space::Affine, [[0.0], [1.0]]).unwrap();
        assert_eq!(build_exact(&pts, 1.0).unwrap().edge_count(), 0);
        assert_eq!(build_exact(&pts, 1.0 + 1e-12).unwrap().edge_count(), 1);
    }

    #[test]
    fn coincident_points_are_joined() {
        let pts = PointSet::from_rows(Space::Affine, [[2.0, 2.0], [2.0, 2.0]]).unwrap();
        let g = build_exact(&pts, 0.1).unwrap();
        assert_eq!(g.distance(PointId(0), PointId(1)), Some(0.0));
    }

    #[test]
    fn projective_space_is_rejected() {
        let pts = PointSet::from_rows(Space::Projective, [[1.0, 0.0, 0.0]]).unwrap();
        assert!(build_exact(&pts, 1.0).unwrap_err().is_not_supported());
    }
}
