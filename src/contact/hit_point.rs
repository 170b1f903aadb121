use log::debug;

use super::ContactInformation;
use crate::geometry::Coordinates;
use crate::traits::FloatScalar;

/// Height above the table below which a returned ball counts as landed.
pub const TABLE_MARGIN: f64 = 0.02;

/// Where the ball first comes down onto the table after being hit by the
/// racket.
///
/// Until that happens, [`update`](Self::update) returns a default position.
/// Once found, the hit point is latched until [`reset`](Self::reset).
///
/// # Example
///
/// ```
/// use balltrack::contact::{ContactInformation, HitPoint};
///
/// let mut hp = HitPoint::new(0.76_f64, [-10.0, -10.0, -10.0]);
/// let mut racket = ContactInformation::new();
///
/// // ball low, but not hit yet
/// assert_eq!(hp.update([0.0, 1.0, 0.7], &racket), [-10.0, -10.0, -10.0]);
///
/// racket.register_contact([0.0, 0.5, 1.0], 3.0);
/// assert_eq!(hp.update([0.0, 1.5, 1.1], &racket), [-10.0, -10.0, -10.0]);
/// assert_eq!(hp.update([0.1, 2.5, 0.77], &racket), [0.1, 2.5, 0.77]);
/// assert_eq!(hp.update([0.2, 3.0, 0.5], &racket), [0.1, 2.5, 0.77]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPoint<T> {
    table_height: T,
    default_position: Coordinates<T>,
    hit_position: Option<Coordinates<T>>,
}

impl<T: FloatScalar> HitPoint<T> {
    pub fn new(table_height: T, default_position: Coordinates<T>) -> Self {
        Self {
            table_height,
            default_position,
            hit_position: None,
        }
    }

    /// Forget the latched hit point.
    pub fn reset(&mut self) {
        self.hit_position = None;
    }

    /// Feed the current ball position and racket contact record; returns
    /// the hit point if known, the default position otherwise.
    pub fn update(
        &mut self,
        ball_position: Coordinates<T>,
        racket: &ContactInformation<T>,
    ) -> Coordinates<T> {
        if let Some(hit) = self.hit_position {
            return hit;
        }
        if !racket.contact_occurred {
            return self.default_position;
        }
        if ball_position[2] < self.table_height + T::constant(TABLE_MARGIN) {
            debug!(
                "hit point found at ({}, {}, {})",
                ball_position[0], ball_position[1], ball_position[2]
            );
            self.hit_position = Some(ball_position);
            return ball_position;
        }
        self.default_position
    }

    /// The latched hit point, if any.
    #[inline]
    pub fn get(&self) -> Option<Coordinates<T>> {
        self.hit_position
    }
}
