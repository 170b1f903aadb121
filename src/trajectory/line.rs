use alloc::vec;
use alloc::vec::Vec;

use super::{DurationTrajectory, TrajectoryError, MICROS_PER_SECOND};
use crate::geometry::Coordinates;
use crate::traits::FloatScalar;

fn is_positive<T: FloatScalar>(x: T) -> bool {
    x > T::zero() && x.is_finite()
}

/// Straight line from `start` to `end` travelled at `speed` (units per
/// second), sampled every `sampling_period` seconds.
///
/// Samples are the points reached after each step, so `start` itself is not
/// included and the last sample is `end`. Every sample carries the constant
/// velocity vector and a duration of `sampling_period` in microseconds.
///
/// # Example
///
/// ```
/// use balltrack::trajectory::velocity_line_trajectory;
///
/// let t = velocity_line_trajectory([0.0_f64, 0.0, 0.0], [3.0, 4.0, 0.0], 5.0, 0.1).unwrap();
/// assert_eq!(t.len(), 10);
/// assert_eq!(t.durations[0], 100_000);
/// assert!((t.velocities[0][0] - 3.0).abs() < 1e-12);
/// assert!((t.positions[9][1] - 4.0).abs() < 1e-12);
/// ```
pub fn velocity_line_trajectory<T: FloatScalar>(
    start: Coordinates<T>,
    end: Coordinates<T>,
    speed: T,
    sampling_period: T,
) -> Result<DurationTrajectory<T>, TrajectoryError> {
    if !is_positive(speed) {
        return Err(TrajectoryError::NonPositiveVelocity);
    }
    let vector = difference(&start, &end);
    let distance = vector
        .iter()
        .fold(T::zero(), |acc, &v| acc + v * v)
        .sqrt();
    if distance == T::zero() {
        return Err(TrajectoryError::ZeroLength);
    }
    line(start, vector, distance / speed, sampling_period)
}

/// Straight line from `start` to `end` covered in `duration_ms`
/// milliseconds, sampled every `sampling_period` seconds.
///
/// At least one sample is produced, even when `duration_ms` is shorter than
/// the sampling period.
///
/// # Example
///
/// ```
/// use balltrack::trajectory::duration_line_trajectory;
///
/// let t = duration_line_trajectory([0.0_f64, 0.0, 0.0], [0.0, 0.0, 1.0], 500.0, 0.01).unwrap();
/// assert_eq!(t.len(), 50);
/// assert!((t.velocities[0][2] - 2.0).abs() < 1e-12);
/// ```
pub fn duration_line_trajectory<T: FloatScalar>(
    start: Coordinates<T>,
    end: Coordinates<T>,
    duration_ms: T,
    sampling_period: T,
) -> Result<DurationTrajectory<T>, TrajectoryError> {
    if !is_positive(duration_ms) {
        return Err(TrajectoryError::NonPositiveDuration);
    }
    let duration = duration_ms / T::constant(1000.0);
    line(start, difference(&start, &end), duration, sampling_period)
}

fn difference<T: FloatScalar>(start: &Coordinates<T>, end: &Coordinates<T>) -> Coordinates<T> {
    [end[0] - start[0], end[1] - start[1], end[2] - start[2]]
}

/// Shared sampler: `duration` in seconds.
fn line<T: FloatScalar>(
    start: Coordinates<T>,
    vector: Coordinates<T>,
    duration: T,
    sampling_period: T,
) -> Result<DurationTrajectory<T>, TrajectoryError> {
    if !is_positive(sampling_period) {
        return Err(TrajectoryError::NonPositiveSamplingPeriod);
    }
    let half = T::constant(0.5);
    let steps = (duration / sampling_period + half)
        .floor()
        .to_usize()
        .ok_or(TrajectoryError::TooManySamples)?
        .max(1);
    let period_us = (sampling_period * T::constant(MICROS_PER_SECOND))
        .to_i64()
        .ok_or(TrajectoryError::TooManySamples)?;

    let count = T::from_count(steps);
    let step = [vector[0] / count, vector[1] / count, vector[2] / count];
    let velocity = [
        vector[0] / duration,
        vector[1] / duration,
        vector[2] / duration,
    ];

    let mut positions = Vec::new();
    positions
        .try_reserve_exact(steps)
        .map_err(|_| TrajectoryError::TooManySamples)?;
    let mut point = start;
    for _ in 0..steps {
        for axis in 0..3 {
            point[axis] = point[axis] + step[axis];
        }
        positions.push(point);
    }

    Ok(DurationTrajectory {
        durations: vec![period_us; steps],
        positions,
        velocities: vec![velocity; steps],
    })
}
