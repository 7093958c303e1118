//! Point clouds: identified coordinate vectors in affine or projective space.
//!
//! Purpose
//! - Hold the read-only input of the graph builders: an ordered list of points
//!   sharing one coordinate dimension, tagged with the ambient space.
//! - Identity is the `PointId` handed out on insertion (position in the set);
//!   coordinates never take part in equality or hashing.
//!
//! Assumptions and conventions
//! - Coordinates are finite reals. Complex rows are truncated to real parts on
//!   ingestion (`from_complex_rows`); filtering of near-real solutions lives in
//!   `filter`.
//! - The dimension of the first inserted row fixes the dimension of the set.
//!
//! References
//! - Code cross-refs: `crate::select`, `crate::graph`

pub mod filter;
pub mod rand;

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Complex, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Stable point identifier, unique within its `PointSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub usize);

/// Ambient space of a point set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    #[default]
    Affine,
    /// One coordinate is homogeneous; the free dimension is one less than the row length.
    Projective,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Affine => f.write_str("affine"),
            Space::Projective => f.write_str("projective"),
        }
    }
}

/// Identified, immutable coordinate vector.
///
/// Equality and hashing look at `id` only.
#[derive(Clone, Debug)]
pub struct Point {
    id: PointId,
    coords: DVector<f64>,
}

impl Point {
    #[inline]
    pub fn new(id: PointId, coords: DVector<f64>) -> Self {
        Self { id, coords }
    }
    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }
    #[inline]
    pub fn coords(&self) -> &DVector<f64> {
        &self.coords
    }
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }
    /// Coordinate along `axis`. Panics if `axis >= dim()`.
    #[inline]
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }
    /// Euclidean distance between coordinate vectors.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.coords.metric_distance(&other.coords)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Ordered point collection with a shared row length and a space tag.
///
/// Invariants:
/// - `points[i].id() == PointId(i)`.
/// - every point has `ambient_dim` finite coordinates (`ambient_dim == 0` only while empty).
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    space: Space,
    ambient_dim: usize,
    points: Vec<Point>,
}

impl PointSet {
    #[inline]
    pub fn new(space: Space) -> Self {
        Self {
            space,
            ambient_dim: 0,
            points: Vec::new(),
        }
    }

    /// Build from real rows; all rows must share one non-zero length.
    pub fn from_rows<I, R>(space: Space, rows: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut set = Self::new(space);
        for row in rows {
            set.push(row.as_ref())?;
        }
        Ok(set)
    }

    /// Build from complex rows, keeping only the real parts.
    pub fn from_complex_rows<I, R>(space: Space, rows: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Complex<f64>]>,
    {
        let mut set = Self::new(space);
        for row in rows {
            let re: Vec<f64> = row.as_ref().iter().map(|z| z.re).collect();
            set.push(&re)?;
        }
        Ok(set)
    }

    /// Append a point and return its id.
    pub fn push(&mut self, coords: &[f64]) -> GraphResult<PointId> {
        if coords.is_empty() {
            return Err(GraphError::invalid("points need at least one coordinate"));
        }
        if self.points.is_empty() {
            self.ambient_dim = coords.len();
        } else if coords.len() != self.ambient_dim {
            return Err(GraphError::invalid(format!(
                "dimension mismatch: expected {} coordinates, got {}",
                self.ambient_dim,
                coords.len()
            )));
        }
        if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
            return Err(GraphError::invalid(format!(
                "coordinate {bad} of point {} is not finite",
                self.points.len()
            )));
        }
        let id = PointId(self.points.len());
        self.points
            .push(Point::new(id, DVector::from_column_slice(coords)));
        Ok(id)
    }

    #[inline]
    pub fn space(&self) -> Space {
        self.space
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
    #[inline]
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.0)
    }
    /// Coordinates of the point at position `i` as a slice.
    #[inline]
    pub fn coords(&self, i: usize) -> Option<&[f64]> {
        self.points.get(i).map(|p| p.coords.as_slice())
    }
    /// Row length shared by all points (0 while empty).
    #[inline]
    pub fn ambient_dim(&self) -> usize {
        self.ambient_dim
    }
    /// Free dimension: row length for affine space, one less for projective space.
    #[inline]
    pub fn dimension(&self) -> usize {
        match self.space {
            Space::Affine => self.ambient_dim,
            Space::Projective => self.ambient_dim.saturating_sub(1),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point cloud with {} points in real {} space of dimension {}",
            self.len(),
            self.space,
            self.dimension()
        )
    }
}
