/// Fixed-size homogeneous point and 4x4 transform
use nalgebra::{Matrix4, Vector4};
use std::ops::Mul;

/// A point in 3D homogeneous coordinates (x, y, z, w)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneousPoint(Vector4<f64>);

impl HomogeneousPoint {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(Vector4::new(x, y, z, w))
    }

    /// A Euclidean point lifted to w = 1
    pub fn from_euclidean(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn w(&self) -> f64 {
        self.0.w
    }

    pub fn as_vector(&self) -> &Vector4<f64> {
        &self.0
    }

    /// Copy of this point with the given offset added to x, y and z
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x() + dx, self.y() + dy, self.z() + dz, self.w())
    }
}

/// A 4x4 transform acting on homogeneous points by left-multiplication.
///
/// `a.multiply(&b)` is the transform that applies `b` first and then `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Matrix4<f64>);

impl Transform {
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Build a transform from 16 entries in row-major order
    #[rustfmt::skip]
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self(Matrix4::new(
            r0[0], r0[1], r0[2], r0[3],
            r1[0], r1[1], r1[2], r1[3],
            r2[0], r2[1], r2[2], r2[3],
            r3[0], r3[1], r3[2], r3[3],
        ))
    }

    pub fn as_matrix(&self) -> &Matrix4<f64> {
        &self.0
    }

    pub fn multiply(&self, other: &Transform) -> Transform {
        Transform(self.0 * other.0)
    }

    pub fn apply(&self, point: &HomogeneousPoint) -> HomogeneousPoint {
        HomogeneousPoint(self.0 * point.0)
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.multiply(&rhs)
    }
}

impl Mul<HomogeneousPoint> for Transform {
    type Output = HomogeneousPoint;

    fn mul(self, rhs: HomogeneousPoint) -> HomogeneousPoint {
        self.apply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(seed: f64) -> Transform {
        Transform::from_rows([
            [1.0, seed, 0.5, 2.0],
            [0.0, 1.0, -seed, 1.0],
            [seed * 0.25, 0.0, 1.0, -3.0],
            [0.0, 0.01 * seed, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let t = Transform::from_rows([
            [1.0, 0.0, 0.0, 7.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let p = t.apply(&HomogeneousPoint::origin());
        assert_eq!(p, HomogeneousPoint::new(7.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_identity_apply() {
        let p = HomogeneousPoint::new(1.5, -2.0, 3.25, 1.0);
        assert_eq!(Transform::identity().apply(&p), p);
    }

    #[test]
    fn test_composition_is_associative() {
        let (a, b, c) = (sample(0.3), sample(-1.2), sample(2.0));
        let p = HomogeneousPoint::new(4.0, -1.0, 0.5, 1.0);

        let left = a.multiply(&b).multiply(&c).apply(&p);
        let right = a.multiply(&b.multiply(&c)).apply(&p);
        assert_relative_eq!(*left.as_vector(), *right.as_vector(), epsilon = 1e-9);
    }

    #[test]
    fn test_rightmost_applied_first() {
        let a = sample(0.7);
        let b = sample(-0.4);
        let p = HomogeneousPoint::new(1.0, 2.0, 3.0, 1.0);

        let chained = (a * b) * p;
        let stepwise = a.apply(&b.apply(&p));
        assert_relative_eq!(*chained.as_vector(), *stepwise.as_vector(), epsilon = 1e-9);
    }

    #[test]
    fn test_composition_not_commutative() {
        let a = sample(0.7);
        let b = sample(-0.4);
        assert!((a.multiply(&b).as_matrix() - b.multiply(&a).as_matrix()).norm() > 1e-6);
    }
}
