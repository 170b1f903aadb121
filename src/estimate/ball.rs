use log::{debug, trace};

use super::{EstimatorError, State, VelocityComputer};
use crate::geometry::{Coordinates, StampedCoordinates};
use crate::traits::FloatScalar;

/// Configuration for a [`Ball`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallSettings {
    /// Moving-average window applied to the velocity of every axis.
    pub window_size: usize,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self { window_size: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Clock {
    Uninitialized,
    Tracking { previous_time_stamp: i64 },
}

/// Position and smoothed velocity of a ball, updated from time-stamped
/// position samples.
///
/// Each axis owns its own [`VelocityComputer`]; they share the configured
/// window size but no state. The velocity reported by the first update is
/// always zero.
///
/// # Example
///
/// ```
/// use balltrack::estimate::Ball;
///
/// let mut ball = Ball::<f64>::new(1).unwrap();
/// ball.update(0, [0.0, 0.0, 0.0]);
/// let state = ball.update(10, [1.0, 2.0, 3.0]);
/// assert_eq!(state.velocity, [0.1, 0.2, 0.3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: FloatScalar + serde::Deserialize<'de>"))
)]
pub struct Ball<T> {
    state: State<T>,
    velocity_computers: [VelocityComputer<T>; 3],
    clock: Clock,
}

impl<T: FloatScalar> Ball<T> {
    /// Create a ball smoothing each velocity component over `window_size`
    /// samples.
    ///
    /// Returns [`EstimatorError::InvalidConfiguration`] if `window_size == 0`.
    pub fn new(window_size: usize) -> Result<Self, EstimatorError> {
        Ok(Self {
            state: State::default(),
            velocity_computers: [
                VelocityComputer::new(window_size)?,
                VelocityComputer::new(window_size)?,
                VelocityComputer::new(window_size)?,
            ],
            clock: Clock::Uninitialized,
        })
    }

    /// Create a ball from [`BallSettings`].
    pub fn with_settings(settings: &BallSettings) -> Result<Self, EstimatorError> {
        Self::new(settings.window_size)
    }

    /// Record a new position and recompute the velocity.
    ///
    /// The position is copied as is. The velocity of each axis is the
    /// filtered finite difference with the previous position, in position
    /// units per time-stamp tick.
    ///
    /// Time stamps must strictly increase after the first call. A repeated
    /// stamp divides by zero; see [`try_update`](Self::try_update). The
    /// elapsed time saturates at the `i64` bounds instead of overflowing.
    pub fn update(&mut self, time_stamp: i64, position: Coordinates<T>) -> &State<T> {
        self.state.position = position;

        // On the first update the elapsed time is zero; the velocity
        // computers are uninitialized too and report zero regardless.
        let previous_time_stamp = match self.clock {
            Clock::Uninitialized => {
                trace!("ball tracking started at time stamp {}", time_stamp);
                time_stamp
            }
            Clock::Tracking {
                previous_time_stamp,
            } => previous_time_stamp,
        };
        let elapsed = time_stamp.saturating_sub(previous_time_stamp);
        self.clock = Clock::Tracking {
            previous_time_stamp: time_stamp,
        };

        for (axis, computer) in self.velocity_computers.iter_mut().enumerate() {
            self.state.velocity[axis] = computer.get(elapsed, position[axis]);
        }
        &self.state
    }

    /// Like [`update`](Self::update), but rejects a time stamp that does not
    /// advance past the previous one, or whose elapsed time does not fit in
    /// an `i64`, with [`EstimatorError::DegenerateTimeStep`], leaving the
    /// ball untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use balltrack::estimate::{Ball, EstimatorError};
    ///
    /// let mut ball = Ball::<f64>::new(1).unwrap();
    /// ball.try_update(5, [0.0; 3]).unwrap();
    /// assert_eq!(ball.try_update(5, [1.0; 3]), Err(EstimatorError::DegenerateTimeStep));
    /// assert_eq!(ball.get().position, [0.0; 3]);
    /// ```
    pub fn try_update(
        &mut self,
        time_stamp: i64,
        position: Coordinates<T>,
    ) -> Result<&State<T>, EstimatorError> {
        if let Clock::Tracking {
            previous_time_stamp,
        } = self.clock
        {
            match time_stamp.checked_sub(previous_time_stamp) {
                Some(elapsed) if elapsed > 0 => {}
                _ => return Err(EstimatorError::DegenerateTimeStep),
            }
        }
        Ok(self.update(time_stamp, position))
    }

    /// [`update`](Self::update) from a time-stamped sample.
    #[inline]
    pub fn update_stamped(&mut self, sample: &StampedCoordinates<T>) -> &State<T> {
        self.update(sample.stamp, sample.coordinates)
    }

    /// State computed by the latest update, or all zeros before the first.
    #[inline]
    pub fn get(&self) -> &State<T> {
        &self.state
    }

    /// Resize the velocity smoothing window of all three axes.
    ///
    /// Clears the filters; positions and the clock are kept.
    pub fn set_window_size(&mut self, window_size: usize) -> Result<(), EstimatorError> {
        if window_size == 0 {
            return Err(EstimatorError::InvalidConfiguration);
        }
        for computer in self.velocity_computers.iter_mut() {
            computer.set_window_size(window_size)?;
        }
        Ok(())
    }

    /// Back to the uninitialized state with a zeroed [`State`].
    pub fn reset(&mut self) {
        debug!("ball estimator reset");
        self.state = State::default();
        self.clock = Clock::Uninitialized;
        for computer in self.velocity_computers.iter_mut() {
            computer.reset();
        }
    }

    /// `true` once [`update`](Self::update) has been called.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self.clock, Clock::Tracking { .. })
    }

    /// Time stamp of the latest update.
    #[inline]
    pub fn previous_time_stamp(&self) -> Option<i64> {
        match self.clock {
            Clock::Uninitialized => None,
            Clock::Tracking {
                previous_time_stamp,
            } => Some(previous_time_stamp),
        }
    }

    /// Window size shared by the three axes.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.velocity_computers[0].filter().window_size()
    }

    /// The velocity computer of axis `0`, `1` or `2`, `None` for any other
    /// axis.
    #[inline]
    pub fn velocity_computer(&self, axis: usize) -> Option<&VelocityComputer<T>> {
        self.velocity_computers.get(axis)
    }
}
