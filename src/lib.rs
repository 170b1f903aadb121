//! # balltrack
//!
//! Real-time-safe ball state estimation for robotics control loops,
//! no-std compatible. Feed time-stamped 3D positions, get back the position
//! and a smoothed finite-difference velocity.
//!
//! ## Quick start
//!
//! ```
//! use balltrack::Ball;
//!
//! // average the velocity over the last 3 samples
//! let mut ball = Ball::<f64>::new(3).unwrap();
//!
//! // time stamps in microseconds, positions in metres
//! ball.update(0, [0.0, 0.0, 1.0]);
//! let state = ball.update(10_000, [0.01, 0.0, 1.0]);
//! assert_eq!(state.position, [0.01, 0.0, 1.0]);
//! // first update contributes a zero velocity to the average
//! assert!((state.velocity[0] - 0.5e-6).abs() < 1e-18);
//! ```
//!
//! ## Modules
//!
//! - [`estimate`]: [`LowPassFilter`] (moving average), [`VelocityComputer`]
//!   (filtered finite difference of one coordinate) and [`Ball`], which runs
//!   one computer per axis and produces a [`State`] snapshot. The first
//!   update of a ball always reports a zero velocity. Checked entry points
//!   (`try_get`, `try_update`) reject time stamps that do not advance.
//!
//! - [`geometry`]: [`Rotation`] from three elementary angles and rigid
//!   [`Transform`]s applied to `[x, y, z]` coordinates, plus
//!   [`StampedCoordinates`].
//!
//! - [`contact`]: [`ContactInformation`] (closest approach and contact with
//!   the racket), [`HitPoint`] (where a return lands on the table) and
//!   [`BallStatus`] (episode statistics).
//!
//! - [`trajectory`]: straight-line trajectory generators and conversions
//!   between duration-based and time-stamped samples.
//!
//! - [`traits`]: [`FloatScalar`], implemented for `f32` and `f64`.
//!
//! ## Real-time use
//!
//! After construction, [`Ball::update`], [`VelocityComputer::get`] and
//! [`LowPassFilter::get`] run in constant time and never allocate. Resizing
//! a filter window may allocate.
//!
//! ## Logging
//!
//! State-machine transitions are reported at `trace` level and
//! configuration changes at `debug` level through the [`log`] facade. No
//! logger is installed by this crate.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`  | no      | Pure-Rust float fallback, required without `std` |
//! | `serde` | no      | `Serialize`/`Deserialize` for estimator state and contact records |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod contact;
pub mod estimate;
pub mod geometry;
pub mod trajectory;
pub mod traits;

pub use contact::{BallStatus, ContactInformation, HitPoint};
pub use estimate::{Ball, BallSettings, EstimatorError, LowPassFilter, State, VelocityComputer};
pub use geometry::{Coordinates, Rotation, StampedCoordinates, Transform};
pub use trajectory::TrajectoryError;
pub use traits::FloatScalar;
