//! Fixed 3D rotations and rigid transforms applied to coordinate triples.
//!
//! Coordinates are plain `[T; 3]` arrays (`x`, `y`, `z`), the same
//! representation the estimators use, so positions can be transformed
//! between frames in place before or after estimation. [`Rotation`] and
//! [`Transform`] wrap nalgebra's `Rotation3` and `IsometryMatrix3`, reachable
//! through `as_rotation3` and `as_isometry`.
//!
//! # Example
//!
//! ```
//! use balltrack::geometry::Transform;
//! use core::f64::consts::FRAC_PI_2;
//!
//! // quarter turn around z, then shift along x
//! let t = Transform::new(0.0, 0.0, FRAC_PI_2, [1.0, 0.0, 0.0]);
//! let mut p = [1.0_f64, 0.0, 0.0];
//! t.apply(&mut p);
//! assert!((p[0] - 1.0).abs() < 1e-12);
//! assert!((p[1] + 1.0).abs() < 1e-12);
//! assert!(p[2].abs() < 1e-12);
//! ```

mod rotation;
mod transform;


pub use rotation::Rotation;
pub use transform::Transform;

/// `[x, y, z]`.
pub type Coordinates<T> = [T; 3];

/// Coordinates with the integer time stamp they were observed at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StampedCoordinates<T> {
    pub coordinates: Coordinates<T>,
    pub stamp: i64,
}

impl<T> StampedCoordinates<T> {
    #[inline]
    pub fn new(coordinates: Coordinates<T>, stamp: i64) -> Self {
        Self { coordinates, stamp }
    }
}
