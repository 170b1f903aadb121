use super::ContactInformation;
use crate::geometry::Coordinates;
use crate::traits::FloatScalar;

fn distance<T: FloatScalar>(a: &Coordinates<T>, b: &Coordinates<T>) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + (y - x) * (y - x))
        .sqrt()
}

fn norm<T: FloatScalar>(v: &Coordinates<T>) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Statistics of one ball episode, used to score a return.
///
/// Before the racket touches the ball, only the racket distance and the
/// position extrema are tracked. Afterwards the distance to the target and
/// the peak speed are tracked too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallStatus<T> {
    pub target_position: Coordinates<T>,
    /// Smallest ball/racket distance reported by the racket contact record,
    /// or `None` once the racket hit the ball. Infinity until the record
    /// reports a first distance.
    pub min_distance_ball_racket: Option<T>,
    /// Smallest ball/target distance observed after the racket hit.
    pub min_distance_ball_target: T,
    /// Largest speed observed after the racket hit.
    pub max_ball_velocity: T,
    /// Lowest height ever observed.
    pub min_z: T,
    /// Furthest `y` ever observed.
    pub max_y: T,
    pub ball_position: Option<Coordinates<T>>,
    pub ball_velocity: Option<Coordinates<T>>,
}

impl<T: FloatScalar> BallStatus<T> {
    pub fn new(target_position: Coordinates<T>) -> Self {
        Self {
            target_position,
            min_distance_ball_racket: Some(T::infinity()),
            min_distance_ball_target: T::infinity(),
            max_ball_velocity: T::zero(),
            min_z: T::infinity(),
            max_y: T::neg_infinity(),
            ball_position: None,
            ball_velocity: None,
        }
    }

    /// Start a new episode, keeping the target.
    pub fn reset(&mut self) {
        self.min_distance_ball_racket = Some(T::infinity());
        self.min_distance_ball_target = T::infinity();
        self.max_ball_velocity = T::zero();
        self.min_z = T::infinity();
        self.max_y = T::neg_infinity();
        self.ball_position = None;
        self.ball_velocity = None;
    }

    /// Fold in one observation of the ball and of the racket contact record.
    ///
    /// # Example
    ///
    /// ```
    /// use balltrack::contact::{BallStatus, ContactInformation};
    ///
    /// let mut status = BallStatus::new([0.0_f64, 3.0, 0.0]);
    /// let mut racket = ContactInformation::new();
    /// racket.register_distance(0.2);
    ///
    /// status.update([0.0, 0.0, 1.0], [0.0, 2.0, 0.0], &racket);
    /// assert_eq!(status.min_distance_ball_racket, Some(0.2));
    /// assert_eq!(status.max_ball_velocity, 0.0);
    ///
    /// racket.register_contact([0.0, 0.0, 1.0], 1.0);
    /// status.update([0.0, 1.0, 1.0], [0.0, 3.0, 4.0], &racket);
    /// assert!(status.hit_racket());
    /// assert_eq!(status.max_ball_velocity, 5.0);
    /// ```
    pub fn update(
        &mut self,
        ball_position: Coordinates<T>,
        ball_velocity: Coordinates<T>,
        racket: &ContactInformation<T>,
    ) {
        self.ball_position = Some(ball_position);
        self.ball_velocity = Some(ball_velocity);

        self.min_z = self.min_z.min(ball_position[2]);
        self.max_y = self.max_y.max(ball_position[1]);

        if !racket.contact_occurred {
            self.min_distance_ball_racket =
                Some(racket.minimal_distance.unwrap_or_else(T::infinity));
            return;
        }
        self.min_distance_ball_racket = None;

        let d = distance(&ball_position, &self.target_position);
        self.min_distance_ball_target = self.min_distance_ball_target.min(d);
        self.max_ball_velocity = self.max_ball_velocity.max(norm(&ball_velocity));
    }

    /// `true` once an update reported a racket contact.
    #[inline]
    pub fn hit_racket(&self) -> bool {
        self.min_distance_ball_racket.is_none()
    }
}
