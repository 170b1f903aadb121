//! Ball/racket interaction bookkeeping.
//!
//! [`ContactInformation`] records the closest approach and the contact
//! between the ball and a surface. [`HitPoint`] and [`BallStatus`] consume
//! it, together with the estimated ball state, to locate where a return
//! lands and to summarize an episode.

mod ball_status;
mod hit_point;
mod information;

#[cfg(test)]
mod tests;

pub use ball_status::BallStatus;
pub use hit_point::{HitPoint, TABLE_MARGIN};
pub use information::ContactInformation;
