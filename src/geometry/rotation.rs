use nalgebra::{RealField, Rotation3, Scalar, Vector3};

use super::Coordinates;

/// Fixed 3D rotation built from three elementary angles.
///
/// The matrix is `Rx(alpha) · Ry(beta) · Rz(gamma)` where each factor is a
/// frame (passive) rotation:
///
/// ```text
///       ⎡1   0    0 ⎤        ⎡cβ  0  -sβ⎤        ⎡ cγ  sγ  0⎤
/// Rx =  ⎢0   cα   sα⎥   Ry = ⎢0   1   0 ⎥   Rz = ⎢-sγ  cγ  0⎥
///       ⎣0  -sα   cα⎦        ⎣sβ  0   cβ⎦        ⎣ 0   0   1⎦
/// ```
///
/// so a positive angle re-expresses a point in a frame turned by that
/// angle, and the `gamma` rotation is applied first. Each factor is the
/// active rotation by the negated angle.
///
/// # Example
///
/// ```
/// use balltrack::geometry::Rotation;
/// use core::f64::consts::FRAC_PI_2;
///
/// let r = Rotation::new(FRAC_PI_2, 0.0, 0.0);
/// let p = r.rotated([0.0_f64, 1.0, 0.0]);
/// assert!(p[0].abs() < 1e-12);
/// assert!(p[1].abs() < 1e-12);
/// assert!((p[2] + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T: Scalar> {
    inner: Rotation3<T>,
}

impl<T: RealField + Copy> Rotation<T> {
    /// Build the rotation from angles (radians) around x, y and z.
    pub fn new(alpha: T, beta: T, gamma: T) -> Self {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), -alpha);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), -beta);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), -gamma);
        Self {
            inner: rx * ry * rz,
        }
    }

    /// No rotation.
    pub fn identity() -> Self {
        Self {
            inner: Rotation3::identity(),
        }
    }

    /// Rotation matrix, row-major.
    pub fn matrix(&self) -> [[T; 3]; 3] {
        let m = self.inner.matrix();
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    /// Inverse rotation (transpose).
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            inner: self.inner.inverse(),
        }
    }

    /// Rotation applying `other` first, then `self`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            inner: self.inner * other.inner,
        }
    }

    /// Rotate `coordinates` in place.
    #[inline]
    pub fn rotate(&self, coordinates: &mut Coordinates<T>) {
        *coordinates = self.rotated(*coordinates);
    }

    /// Rotated copy of `coordinates`.
    #[inline]
    pub fn rotated(&self, coordinates: Coordinates<T>) -> Coordinates<T> {
        (self.inner * Vector3::from(coordinates)).into()
    }

    /// The underlying nalgebra rotation.
    #[inline]
    pub fn as_rotation3(&self) -> &Rotation3<T> {
        &self.inner
    }
}

impl<T: Scalar> From<Rotation3<T>> for Rotation<T> {
    fn from(inner: Rotation3<T>) -> Self {
        Self { inner }
    }
}
