//! Velocity estimation: moving-average filtering, finite differences and
//! the [`Ball`] state aggregator.
//!
//! Position samples enter a [`Ball`] together with an integer time stamp.
//! Each axis is differentiated by its own [`VelocityComputer`], whose raw
//! output is smoothed by a [`LowPassFilter`]. The result is a [`State`]
//! holding the latest position and smoothed velocity.
//!
//! All operations are synchronous and allocation-free once constructed;
//! only resizing a filter window may allocate.
//!
//! # Example
//!
//! ```
//! use balltrack::estimate::Ball;
//!
//! // ball moving at (0.1, 0.2, 0.3) units per tick, sampled every 10 ticks
//! let velocity = [0.1_f64, 0.2, 0.3];
//! let mut ball = Ball::new(1).unwrap();
//! let mut position = [0.0; 3];
//! for tick in 0..5 {
//!     let state = ball.update(tick * 10, position);
//!     if tick > 0 {
//!         for i in 0..3 {
//!             assert!((state.velocity[i] - velocity[i]).abs() < 1e-12);
//!         }
//!     }
//!     for i in 0..3 {
//!         position[i] += velocity[i] * 10.0;
//!     }
//! }
//! ```

mod ball;
mod low_pass;
mod state;
mod velocity;


pub use ball::{Ball, BallSettings};
pub use low_pass::LowPassFilter;
pub use state::State;
pub use velocity::VelocityComputer;

/// Errors from estimator configuration and checked updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorError {
    /// Moving-average window size is zero.
    InvalidConfiguration,
    /// Elapsed time since the previous sample is zero or negative.
    DegenerateTimeStep,
}

impl core::fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EstimatorError::InvalidConfiguration => {
                write!(f, "filter window size must be at least 1")
            }
            EstimatorError::DegenerateTimeStep => {
                write!(f, "time stamp must advance past the previous sample")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EstimatorError {}
