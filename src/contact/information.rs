use log::trace;

use crate::geometry::Coordinates;
use crate::traits::FloatScalar;

/// Record of the interaction between the ball and a contact surface
/// (typically the racket) during one episode.
///
/// Tracks the smallest distance seen so far and, once contact occurred,
/// where and when it happened.
///
/// # Example
///
/// ```
/// use balltrack::contact::ContactInformation;
///
/// let mut info = ContactInformation::<f64>::new();
/// info.register_distance(0.4);
/// info.register_distance(0.1);
/// info.register_distance(0.3);
/// assert_eq!(info.minimal_distance, Some(0.1));
///
/// info.register_contact([0.0, 1.0, 0.5], 12.5);
/// assert!(info.contact_occurred);
/// assert_eq!(info.minimal_distance, Some(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactInformation<T> {
    /// Ball position at contact.
    pub position: Coordinates<T>,
    pub contact_occurred: bool,
    /// Time of contact, in the caller's time unit.
    pub time_stamp: Option<T>,
    /// Smallest distance registered, `Some(0)` after a contact.
    pub minimal_distance: Option<T>,
    /// Set by the caller to ignore this surface.
    pub disabled: bool,
}

impl<T: FloatScalar> ContactInformation<T> {
    /// No contact, no distance registered.
    pub fn new() -> Self {
        Self {
            position: [T::zero(); 3],
            contact_occurred: false,
            time_stamp: None,
            minimal_distance: None,
            disabled: false,
        }
    }

    /// Keep `distance` if it is the smallest seen so far.
    pub fn register_distance(&mut self, distance: T) {
        self.minimal_distance = Some(match self.minimal_distance {
            Some(current) => current.min(distance),
            None => distance,
        });
    }

    /// Record a contact at `position` and `time_stamp`.
    pub fn register_contact(&mut self, position: Coordinates<T>, time_stamp: T) {
        trace!("contact registered at {}", time_stamp);
        self.contact_occurred = true;
        self.minimal_distance = Some(T::zero());
        self.position = position;
        self.time_stamp = Some(time_stamp);
    }
}
