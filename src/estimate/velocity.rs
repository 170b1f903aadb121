use log::trace;

use super::{EstimatorError, LowPassFilter};
use crate::traits::FloatScalar;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Tracking<T> {
    Uninitialized,
    Tracking { previous_position: T },
}

/// Finite-difference velocity of a single coordinate, smoothed by a
/// [`LowPassFilter`].
///
/// The first sample has no predecessor and always yields a raw velocity of
/// exactly zero, whatever the elapsed time.
///
/// # Example
///
/// ```
/// use balltrack::estimate::VelocityComputer;
///
/// let mut vc = VelocityComputer::<f64>::new(1).unwrap();
/// assert_eq!(vc.get(10, 0.0), 0.0);
/// assert_eq!(vc.get(10, 10.0), 1.0);
/// assert_eq!(vc.get(10, 20.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: FloatScalar + serde::Deserialize<'de>"))
)]
pub struct VelocityComputer<T> {
    filter: LowPassFilter<T>,
    tracking: Tracking<T>,
}

impl<T: FloatScalar> VelocityComputer<T> {
    /// Create a computer smoothing its output over `window_size` samples.
    ///
    /// Returns [`EstimatorError::InvalidConfiguration`] if `window_size == 0`.
    pub fn new(window_size: usize) -> Result<Self, EstimatorError> {
        Ok(Self {
            filter: LowPassFilter::new(window_size)?,
            tracking: Tracking::Uninitialized,
        })
    }

    /// Resize the smoothing window. Clears the filter but keeps the last
    /// position, so the next call still differentiates.
    pub fn set_window_size(&mut self, window_size: usize) -> Result<(), EstimatorError> {
        self.filter.set_window_size(window_size)
    }

    /// Feed a position observed `elapsed` ticks after the previous one and
    /// return the smoothed velocity, in position units per tick.
    ///
    /// After the first call, `elapsed == 0` divides by zero and the IEEE
    /// result (infinite or NaN) enters the filter. Use
    /// [`try_get`](Self::try_get) to reject such steps instead.
    #[inline]
    pub fn get(&mut self, elapsed: i64, position: T) -> T {
        let raw = match self.tracking {
            Tracking::Uninitialized => {
                trace!("velocity computer initialized at {}", position);
                T::zero()
            }
            Tracking::Tracking { previous_position } => {
                (position - previous_position) / T::from_ticks(elapsed)
            }
        };
        self.tracking = Tracking::Tracking {
            previous_position: position,
        };
        self.filter.get(raw)
    }

    /// Like [`get`](Self::get), but once initialized a non-positive `elapsed`
    /// is rejected with [`EstimatorError::DegenerateTimeStep`] and nothing
    /// is updated.
    ///
    /// # Example
    ///
    /// ```
    /// use balltrack::estimate::{EstimatorError, VelocityComputer};
    ///
    /// let mut vc = VelocityComputer::<f64>::new(1).unwrap();
    /// assert_eq!(vc.try_get(0, 1.0), Ok(0.0));
    /// assert_eq!(vc.try_get(0, 2.0), Err(EstimatorError::DegenerateTimeStep));
    /// assert_eq!(vc.try_get(2, 2.0), Ok(0.5));
    /// ```
    pub fn try_get(&mut self, elapsed: i64, position: T) -> Result<T, EstimatorError> {
        if self.is_initialized() && elapsed <= 0 {
            return Err(EstimatorError::DegenerateTimeStep);
        }
        Ok(self.get(elapsed, position))
    }

    /// Forget the previous position and clear the filter.
    pub fn reset(&mut self) {
        self.tracking = Tracking::Uninitialized;
        self.filter.reset();
    }

    /// `true` once at least one position has been fed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self.tracking, Tracking::Tracking { .. })
    }

    /// Last position fed, if any.
    #[inline]
    pub fn previous_position(&self) -> Option<T> {
        match self.tracking {
            Tracking::Uninitialized => None,
            Tracking::Tracking { previous_position } => Some(previous_position),
        }
    }

    /// The smoothing filter.
    #[inline]
    pub fn filter(&self) -> &LowPassFilter<T> {
        &self.filter
    }
}

impl<T: FloatScalar> Default for VelocityComputer<T> {
    /// Unsmoothed computer (window of 1).
    fn default() -> Self {
        Self {
            filter: LowPassFilter::default(),
            tracking: Tracking::Uninitialized,
        }
    }
}
