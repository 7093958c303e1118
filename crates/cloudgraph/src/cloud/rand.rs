//! Seeded samplers for reference clouds (box, sphere, torus).
//!
//! Model
//! - Stand-ins for solver-sampled varieties in tests and benches: the unit
//!   sphere `x²+y²+z² = 1` and the torus `16x²+16y² = (x²+y²+z²+3)²`
//!   (major radius 2, minor radius 1), both sampled area-uniformly.
//! - Every draw is reproducible from its `seed`.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{PointSet, Space};
use crate::error::{GraphError, GraphResult};

const TORUS_MAJOR: f64 = 2.0;
const TORUS_MINOR: f64 = 1.0;

/// `n` points uniform in the cube `[-half_width, half_width]^dim`.
pub fn uniform_box(n: usize, dim: usize, half_width: f64, seed: u64) -> GraphResult<PointSet> {
    if dim == 0 {
        return Err(GraphError::invalid("box dimension must be positive"));
    }
    if !(half_width.is_finite() && half_width > 0.0) {
        return Err(GraphError::invalid("box half width must be positive"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n).map(|_| {
        (0..dim)
            .map(|_| rng.gen_range(-half_width..half_width))
            .collect::<Vec<f64>>()
    });
    PointSet::from_rows(Space::Affine, rows)
}

/// `n` points on the unit 2-sphere (Archimedes: uniform height, uniform angle).
pub fn sphere(n: usize, seed: u64) -> GraphResult<PointSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n).map(|_| {
        let z: f64 = rng.gen_range(-1.0..=1.0);
        let phi = rng.gen::<f64>() * TAU;
        let r = (1.0 - z * z).max(0.0).sqrt();
        [r * phi.cos(), r * phi.sin(), z]
    });
    PointSet::from_rows(Space::Affine, rows)
}

/// `n` points on the (2, 1) torus; tube angle accepted with density ∝ `R + r cos v`.
pub fn torus(n: usize, seed: u64) -> GraphResult<PointSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(n);
    while rows.len() < n {
        let u = rng.gen::<f64>() * TAU;
        let v = rng.gen::<f64>() * TAU;
        let w: f64 = rng.gen();
        let ring = TORUS_MAJOR + TORUS_MINOR * v.cos();
        if w * (TORUS_MAJOR + TORUS_MINOR) > ring {
            continue;
        }
        rows.push([ring * u.cos(), ring * u.sin(), TORUS_MINOR * v.sin()]);
    }
    PointSet::from_rows(Space::Affine, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samplers_replay_from_seed() {
        let a = torus(50, 7).unwrap();
        let b = torus(50, 7).unwrap();
        assert!(a.iter().zip(b.iter()).all(|(p, q)| p.coords() == q.coords()));
        let c = torus(50, 8).unwrap();
        assert!(a.iter().zip(c.iter()).any(|(p, q)| p.coords() != q.coords()));
    }

    #[test]
    fn samples_lie_on_their_varieties() {
        for p in sphere(100, 1).unwrap().iter() {
            assert!((p.coords().norm() - 1.0).abs() < 1e-12);
        }
        for p in torus(100, 2).unwrap().iter() {
            let (x, y, z) = (p.coord(0), p.coord(1), p.coord(2));
            let s = x * x + y * y + z * z + 3.0;
            let residual = 16.0 * (x * x + y * y) - s * s;
            assert!(residual.abs() < 1e-9, "residual {residual}");
        }
    }

    #[test]
    fn box_respects_bounds_and_dimension() {
        let set = uniform_box(64, 4, 0.5, 3).unwrap();
        assert_eq!(set.len(), 64);
        assert_eq!(set.dimension(), 4);
        assert!(set
            .iter()
            .all(|p| p.coords().iter().all(|c| (-0.5..0.5).contains(c))));
        assert!(uniform_box(1, 0, 1.0, 0).is_err());
    }
}
