use nalgebra::{IsometryMatrix3, Point3, RealField, Translation3};

use super::{Coordinates, Rotation};

/// Rigid transform: a [`Rotation`] followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform<T: RealField> {
    isometry: IsometryMatrix3<T>,
}

impl<T: RealField + Copy> Transform<T> {
    /// Rotation from angles around x, y and z (see [`Rotation::new`]), then
    /// `translation`.
    pub fn new(alpha: T, beta: T, gamma: T, translation: Coordinates<T>) -> Self {
        Self::from_parts(Rotation::new(alpha, beta, gamma), translation)
    }

    pub fn from_parts(rotation: Rotation<T>, translation: Coordinates<T>) -> Self {
        Self {
            isometry: IsometryMatrix3::from_parts(
                Translation3::new(translation[0], translation[1], translation[2]),
                *rotation.as_rotation3(),
            ),
        }
    }

    #[inline]
    pub fn rotation(&self) -> Rotation<T> {
        Rotation::from(self.isometry.rotation)
    }

    #[inline]
    pub fn translation(&self) -> Coordinates<T> {
        self.isometry.translation.vector.into()
    }

    /// Transform `coordinates` in place.
    #[inline]
    pub fn apply(&self, coordinates: &mut Coordinates<T>) {
        *coordinates = self.applied(*coordinates);
    }

    /// Transformed copy of `coordinates`.
    #[inline]
    pub fn applied(&self, coordinates: Coordinates<T>) -> Coordinates<T> {
        self.isometry
            .transform_point(&Point3::from(coordinates))
            .coords
            .into()
    }

    /// Transform undoing `self`: subtract the translation, then rotate back.
    ///
    /// ```
    /// use balltrack::geometry::Transform;
    ///
    /// let t = Transform::new(0.3_f64, -1.1, 2.0, [0.5, -2.0, 4.0]);
    /// let p = [1.0, 2.0, 3.0];
    /// let back = t.inverse().applied(t.applied(p));
    /// for i in 0..3 {
    ///     assert!((back[i] - p[i]).abs() < 1e-12);
    /// }
    /// ```
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            isometry: self.isometry.inverse(),
        }
    }

    /// The underlying nalgebra isometry.
    #[inline]
    pub fn as_isometry(&self) -> &IsometryMatrix3<T> {
        &self.isometry
    }
}
