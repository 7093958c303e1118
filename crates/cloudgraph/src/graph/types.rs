//! Output structure: symmetric weighted adjacency over point ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cloud::PointId;
use crate::error::{GraphError, GraphResult};

/// Plain adjacency export: point id → sorted `(neighbor, distance)` list.
pub type Adjacency = BTreeMap<PointId, Vec<(PointId, f64)>>;

/// Undirected edge, reported once with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: PointId,
    pub b: PointId,
    pub distance: f64,
}

/// Epsilon-neighborhood graph over the points `0..len()` of one `PointSet`.
///
/// Invariants:
/// - symmetric: `adj[p][q] == adj[q][p]`;
/// - no self-edges;
/// - every stored distance is `< epsilon`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeightedGraph {
    epsilon: f64,
    adj: Vec<BTreeMap<PointId, f64>>,
}

impl WeightedGraph {
    /// Graph on `n` isolated vertices.
    pub fn empty(n: usize, epsilon: f64) -> Self {
        Self {
            epsilon,
            adj: vec![BTreeMap::new(); n],
        }
    }

    /// Insert both directions of the edge between `p` and `q`.
    #[inline]
    pub(crate) fn insert_edge(&mut self, p: PointId, q: PointId, distance: f64) {
        debug_assert!(p != q, "self-edge at {p:?}");
        debug_assert!(distance < self.epsilon, "edge {p:?}-{q:?} not below epsilon");
        self.adj[p.0].insert(q, distance);
        self.adj[q.0].insert(p, distance);
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Neighbors of `p` in increasing id order (empty for unknown ids).
    pub fn neighbors(&self, p: PointId) -> impl Iterator<Item = (PointId, f64)> + '_ {
        self.adj
            .get(p.0)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&q, &d)| (q, d)))
    }

    #[inline]
    pub fn distance(&self, p: PointId, q: PointId) -> Option<f64> {
        self.adj.get(p.0).and_then(|m| m.get(&q)).copied()
    }

    #[inline]
    pub fn degree(&self, p: PointId) -> usize {
        self.adj.get(p.0).map_or(0, BTreeMap::len)
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Each undirected edge once, ordered by `(a, b)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj.iter().enumerate().flat_map(|(i, m)| {
            m.range(PointId(i + 1)..).map(move |(&b, &distance)| Edge {
                a: PointId(i),
                b,
                distance,
            })
        })
    }

    /// Union with another graph over the same vertex set and the same epsilon.
    /// Order of merges is irrelevant; on error `self` is left untouched.
    pub fn merge(&mut self, other: &WeightedGraph) -> GraphResult<()> {
        if other.len() != self.len() {
            return Err(GraphError::invalid(format!(
                "cannot merge graphs on {} and {} vertices",
                self.len(),
                other.len()
            )));
        }
        if other.epsilon != self.epsilon {
            return Err(GraphError::invalid(format!(
                "cannot merge graphs built with epsilon {} and {}",
                self.epsilon, other.epsilon
            )));
        }
        for e in other.edges() {
            self.insert_edge(e.a, e.b, e.distance);
        }
        Ok(())
    }

    /// Detach from crate types: id → `(neighbor, distance)` list, every vertex present.
    pub fn to_adjacency(&self) -> Adjacency {
        self.adj
            .iter()
            .enumerate()
            .map(|(i, m)| (PointId(i), m.iter().map(|(&q, &d)| (q, d)).collect()))
            .collect()
    }

    /// Check the symmetry and no-self-edge invariants.
    pub fn is_symmetric(&self) -> bool {
        self.adj.iter().enumerate().all(|(i, m)| {
            m.iter().all(|(&q, &d)| {
                q.0 != i && self.adj.get(q.0).and_then(|n| n.get(&PointId(i))) == Some(&d)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{PointSet, Space};
    use crate::graph::exact::build_exact;

    fn path3() -> WeightedGraph {
        let mut g = WeightedGraph::empty(3, 1.0);
        g.insert_edge(PointId(0), PointId(1), 0.5);
        g.insert_edge(PointId(2), PointId(1), 0.25);
        g
    }

    #[test]
    fn edges_are_reported_once_and_symmetric() {
        let g = path3();
        assert_eq!(g.edge_count(), 2);
        assert!(g.is_symmetric());
        let edges: Vec<Edge> = g.edges().collect();
        assert_eq!(
            edges,
            vec![
                Edge { a: PointId(0), b: PointId(1), distance: 0.5 },
                Edge { a: PointId(1), b: PointId(2), distance: 0.25 },
            ]
        );
        assert_eq!(g.degree(PointId(1)), 2);
        assert_eq!(g.distance(PointId(1), PointId(0)), Some(0.5));
        assert_eq!(g.neighbors(PointId(9)).count(), 0);
    }

    #[test]
    fn merge_is_order_independent() {
        let mut a = WeightedGraph::empty(3, 1.0);
        a.insert_edge(PointId(0), PointId(1), 0.5);
        let mut b = WeightedGraph::empty(3, 1.0);
        b.insert_edge(PointId(1), PointId(2), 0.25);

        let mut ab = a.clone();
        ab.merge(&b).unwrap();
        let mut ba = b.clone();
        ba.merge(&a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab, path3());
        assert!(ab.merge(&WeightedGraph::empty(2, 1.0)).is_err());
    }

    #[test]
    fn merge_rejects_mismatched_epsilon() {
        let pts = PointSet::from_rows(Space::Affine, [[0.0], [0.5], [2.0]]).unwrap();
        let tight = build_exact(&pts, 0.3).unwrap();
        let loose = build_exact(&pts, 1.0).unwrap();
        assert_eq!(tight.edge_count(), 0);
        assert_eq!(loose.edge_count(), 1);

        let mut tl = tight.clone();
        assert!(tl.merge(&loose).unwrap_err().is_invalid_argument());
        assert_eq!(tl, tight);
        let mut lt = loose.clone();
        assert!(lt.merge(&tight).unwrap_err().is_invalid_argument());
        assert_eq!(lt, loose);
    }

    #[test]
    fn adjacency_export_lists_isolated_vertices() {
        let mut g = WeightedGraph::empty(4, 1.0);
        g.insert_edge(PointId(0), PointId(1), 0.5);
        let adj = g.to_adjacency();
        assert_eq!(adj.len(), 4);
        assert!(adj[&PointId(3)].is_empty());
        assert_eq!(adj[&PointId(1)], vec![(PointId(0), 0.5)]);
    }
}
