//! Sampled ball trajectories: straight-line generators and conversions
//! between the duration and time-stamp representations.
//!
//! A [`DurationTrajectory`] stores, for each sample, the time until the
//! next sample (in microseconds), the position and the velocity. A
//! [`StampedTrajectory`] stores absolute time stamps and positions only,
//! the form in which a tracker observes a ball and which a
//! [`Ball`](crate::estimate::Ball) consumes.
//!
//! # Example
//!
//! ```
//! use balltrack::estimate::Ball;
//! use balltrack::trajectory::{to_stamped_trajectory, velocity_line_trajectory};
//!
//! // 0.5 m/s along y, sampled every 10 ms
//! let line = velocity_line_trajectory([1.0_f64, 2.0, 1.0], [1.0, 4.0, 1.0], 0.5, 0.01).unwrap();
//! let stamped = to_stamped_trajectory(&line);
//!
//! let mut ball = Ball::new(1).unwrap();
//! for sample in stamped.iter() {
//!     ball.update_stamped(&sample);
//! }
//! // velocity in metres per microsecond
//! assert!((ball.get().velocity[1] * 1e6 - 0.5).abs() < 1e-9);
//! ```

mod line;


use alloc::vec::Vec;

pub use line::{duration_line_trajectory, velocity_line_trajectory};

use crate::geometry::{Coordinates, StampedCoordinates};
use crate::traits::FloatScalar;

/// Microseconds per second.
pub const MICROS_PER_SECOND: f64 = 1e6;

/// Errors from trajectory generation and conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    /// Requested speed is zero, negative or not finite.
    NonPositiveVelocity,
    /// Requested duration is zero, negative or not finite.
    NonPositiveDuration,
    /// Sampling period is zero, negative or not finite.
    NonPositiveSamplingPeriod,
    /// Start and end points coincide.
    ZeroLength,
    /// The number of samples does not fit in memory indices.
    TooManySamples,
    /// Time stamps are not strictly increasing.
    NotSorted,
    /// Stamps and positions have different lengths.
    LengthMismatch,
}

impl core::fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TrajectoryError::NonPositiveVelocity => write!(f, "velocity must be positive"),
            TrajectoryError::NonPositiveDuration => write!(f, "duration must be positive"),
            TrajectoryError::NonPositiveSamplingPeriod => {
                write!(f, "sampling period must be positive")
            }
            TrajectoryError::ZeroLength => write!(f, "start and end points must differ"),
            TrajectoryError::TooManySamples => write!(f, "too many samples requested"),
            TrajectoryError::NotSorted => write!(f, "time stamps must be strictly increasing"),
            TrajectoryError::LengthMismatch => {
                write!(f, "stamps and positions must have the same length")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TrajectoryError {}

/// Samples as (duration to next sample, position, velocity).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DurationTrajectory<T> {
    /// Microseconds.
    pub durations: Vec<i64>,
    pub positions: Vec<Coordinates<T>>,
    pub velocities: Vec<Coordinates<T>>,
}

impl<T> DurationTrajectory<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Samples as (time stamp, position).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StampedTrajectory<T> {
    /// Microseconds.
    pub stamps: Vec<i64>,
    pub positions: Vec<Coordinates<T>>,
}

impl<T: Copy> StampedTrajectory<T> {
    /// Pair up stamps and positions.
    ///
    /// Returns `TrajectoryError::LengthMismatch` if the lengths differ,
    /// `TrajectoryError::NotSorted` if the stamps are not strictly increasing.
    pub fn new(stamps: Vec<i64>, positions: Vec<Coordinates<T>>) -> Result<Self, TrajectoryError> {
        if stamps.len() != positions.len() {
            return Err(TrajectoryError::LengthMismatch);
        }
        validate_sorted(&stamps)?;
        Ok(Self { stamps, positions })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate the samples in order.
    pub fn iter(&self) -> impl Iterator<Item = StampedCoordinates<T>> + '_ {
        self.stamps
            .iter()
            .zip(self.positions.iter())
            .map(|(&stamp, &coordinates)| StampedCoordinates::new(coordinates, stamp))
    }
}

fn validate_sorted(stamps: &[i64]) -> Result<(), TrajectoryError> {
    if stamps.windows(2).any(|w| w[1] <= w[0]) {
        return Err(TrajectoryError::NotSorted);
    }
    Ok(())
}

/// Time stamps from durations: the first sample is at 0, each following one
/// after the duration of its predecessor.
pub fn to_stamped_trajectory<T: Copy>(input: &DurationTrajectory<T>) -> StampedTrajectory<T> {
    let mut stamps = Vec::with_capacity(input.durations.len());
    let mut stamp = 0;
    for &duration in &input.durations {
        stamps.push(stamp);
        stamp += duration;
    }
    StampedTrajectory {
        stamps,
        positions: input.positions.clone(),
    }
}

/// Durations and finite-difference velocities (units per second) from time
/// stamps. The last sample has no successor and is dropped.
///
/// Returns `TrajectoryError::NotSorted` if the stamps are not strictly
/// increasing, `TrajectoryError::LengthMismatch` if stamps and positions
/// differ in length.
///
/// # Example
///
/// ```
/// use balltrack::trajectory::{to_duration_trajectory, StampedTrajectory};
///
/// let stamped = StampedTrajectory::new(
///     vec![0, 500_000, 1_000_000],
///     vec![[0.0_f64, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 2.0, 0.0]],
/// ).unwrap();
/// let d = to_duration_trajectory(&stamped).unwrap();
/// assert_eq!(d.durations, vec![500_000, 500_000]);
/// assert_eq!(d.velocities, vec![[2.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
/// assert_eq!(d.positions.len(), 2);
/// ```
pub fn to_duration_trajectory<T: FloatScalar>(
    input: &StampedTrajectory<T>,
) -> Result<DurationTrajectory<T>, TrajectoryError> {
    if input.stamps.len() != input.positions.len() {
        return Err(TrajectoryError::LengthMismatch);
    }
    validate_sorted(&input.stamps)?;

    let n = input.len().saturating_sub(1);
    let mut durations = Vec::with_capacity(n);
    let mut velocities = Vec::with_capacity(n);
    let micros = T::constant(MICROS_PER_SECOND);
    for (stamps, positions) in input.stamps.windows(2).zip(input.positions.windows(2)) {
        let dt = stamps[1] - stamps[0];
        let seconds = T::from_ticks(dt) / micros;
        let mut velocity = [T::zero(); 3];
        for (axis, v) in velocity.iter_mut().enumerate() {
            *v = (positions[1][axis] - positions[0][axis]) / seconds;
        }
        durations.push(dt);
        velocities.push(velocity);
    }
    Ok(DurationTrajectory {
        durations,
        positions: input.positions[..n].to_vec(),
        velocities,
    })
}
