use core::fmt;

use crate::geometry::Coordinates;
use crate::traits::FloatScalar;

/// Position and velocity snapshot of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State<T> {
    pub position: Coordinates<T>,
    pub velocity: Coordinates<T>,
}

impl<T: FloatScalar> State<T> {
    #[inline]
    pub fn new(position: Coordinates<T>, velocity: Coordinates<T>) -> Self {
        Self { position, velocity }
    }

    /// Overwrite both position and velocity.
    #[inline]
    pub fn set(&mut self, position: Coordinates<T>, velocity: Coordinates<T>) {
        self.position = position;
        self.velocity = velocity;
    }

    /// `[position, velocity]`.
    #[inline]
    pub fn get(&self) -> [Coordinates<T>; 2] {
        [self.position, self.velocity]
    }

    #[inline]
    pub fn set_position(&mut self, x: T, y: T, z: T) {
        self.position = [x, y, z];
    }

    #[inline]
    pub fn set_velocity(&mut self, x: T, y: T, z: T) {
        self.velocity = [x, y, z];
    }
}

/// Renders each axis as `position (velocity) `, e.g. `1 (0.5) 2 (0) 3 (-1) `.
///
/// Values use the shortest representation that round-trips, so `10.0 / 3.0`
/// prints as `3.3333333333333335`. A precision (`{:.6}`) applies to every
/// value.
impl<T: fmt::Display> fmt::Display for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, v) in self.position.iter().zip(self.velocity.iter()) {
            match f.precision() {
                Some(precision) => write!(f, "{:.*} ({:.*}) ", precision, p, precision, v)?,
                None => write!(f, "{} ({}) ", p, v)?,
            }
        }
        Ok(())
    }
}
