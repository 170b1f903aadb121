use super::*;

// ═══════════════════════════════════════════════════════════════════
// ContactInformation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn contact_information_starts_empty() {
    let info = ContactInformation::<f64>::new();
    assert_eq!(info.position, [0.0; 3]);
    assert!(!info.contact_occurred);
    assert_eq!(info.time_stamp, None);
    assert_eq!(info.minimal_distance, None);
    assert!(!info.disabled);
    assert_eq!(info, ContactInformation::default());
}

#[test]
fn register_distance_keeps_minimum() {
    let mut info = ContactInformation::<f64>::new();
    info.register_distance(1.5);
    assert_eq!(info.minimal_distance, Some(1.5));
    info.register_distance(2.0);
    assert_eq!(info.minimal_distance, Some(1.5));
    info.register_distance(0.25);
    assert_eq!(info.minimal_distance, Some(0.25));
}

#[test]
fn register_distance_accepts_zero_first() {
    let mut info = ContactInformation::<f64>::new();
    info.register_distance(0.0);
    info.register_distance(1.0);
    assert_eq!(info.minimal_distance, Some(0.0));
}

#[test]
fn register_contact() {
    let mut info = ContactInformation::<f64>::new();
    info.register_distance(0.3);
    info.register_contact([1.0, 2.0, 3.0], 0.75);
    assert!(info.contact_occurred);
    assert_eq!(info.position, [1.0, 2.0, 3.0]);
    assert_eq!(info.time_stamp, Some(0.75));
    assert_eq!(info.minimal_distance, Some(0.0));
    // later distances cannot undo the contact
    info.register_distance(0.5);
    assert_eq!(info.minimal_distance, Some(0.0));
}

// ═══════════════════════════════════════════════════════════════════
// HitPoint
// ═══════════════════════════════════════════════════════════════════

const TABLE: f64 = 0.76;
const DEFAULT: [f64; 3] = [-10.0, -10.0, -10.0];

#[test]
fn hit_point_default_without_contact() {
    let mut hp = HitPoint::new(TABLE, DEFAULT);
    let racket = ContactInformation::new();
    assert_eq!(hp.update([0.0, 0.0, 0.0], &racket), DEFAULT);
    assert_eq!(hp.get(), None);
}

#[test]
fn hit_point_waits_for_ball_to_come_down() {
    let mut hp = HitPoint::new(TABLE, DEFAULT);
    let mut racket = ContactInformation::new();
    racket.register_contact([0.0; 3], 1.0);
    assert_eq!(hp.update([0.0, 1.0, TABLE + 0.5], &racket), DEFAULT);
    assert_eq!(hp.update([0.0, 1.0, TABLE + 0.021], &racket), DEFAULT);
    assert_eq!(hp.update([0.0, 2.0, TABLE + 0.01], &racket), [0.0, 2.0, TABLE + 0.01]);
    assert_eq!(hp.get(), Some([0.0, 2.0, TABLE + 0.01]));
}

#[test]
fn hit_point_is_latched() {
    let mut hp = HitPoint::new(TABLE, DEFAULT);
    let mut racket = ContactInformation::new();
    racket.register_contact([0.0; 3], 1.0);
    let first = hp.update([0.5, 2.0, 0.7], &racket);
    let later = hp.update([3.0, 4.0, 0.1], &ContactInformation::new());
    assert_eq!(first, later);
}

#[test]
fn hit_point_reset() {
    let mut hp = HitPoint::new(TABLE, DEFAULT);
    let mut racket = ContactInformation::new();
    racket.register_contact([0.0; 3], 1.0);
    hp.update([0.5, 2.0, 0.7], &racket);
    hp.reset();
    assert_eq!(hp.get(), None);
    assert_eq!(hp.update([0.5, 2.0, 0.7], &ContactInformation::new()), DEFAULT);
}

// ═══════════════════════════════════════════════════════════════════
// BallStatus
// ═══════════════════════════════════════════════════════════════════

#[test]
fn ball_status_initial() {
    let status = BallStatus::new([1.0_f64, 2.0, 3.0]);
    assert_eq!(status.min_distance_ball_racket, Some(f64::INFINITY));
    assert_eq!(status.min_distance_ball_target, f64::INFINITY);
    assert_eq!(status.max_ball_velocity, 0.0);
    assert_eq!(status.min_z, f64::INFINITY);
    assert_eq!(status.max_y, f64::NEG_INFINITY);
    assert_eq!(status.ball_position, None);
    assert!(!status.hit_racket());
}

#[test]
fn ball_status_before_contact() {
    let mut status = BallStatus::new([0.0_f64, 3.0, 0.0]);
    let mut racket = ContactInformation::new();
    status.update([0.0, 1.0, 2.0], [9.0, 9.0, 9.0], &racket);
    assert_eq!(status.min_distance_ball_racket, Some(f64::INFINITY));
    racket.register_distance(0.4);
    status.update([0.0, 0.5, 1.0], [9.0, 9.0, 9.0], &racket);
    assert_eq!(status.min_distance_ball_racket, Some(0.4));
    assert_eq!(status.min_z, 1.0);
    assert_eq!(status.max_y, 1.0);
    // target distance and speed only count after the hit
    assert_eq!(status.min_distance_ball_target, f64::INFINITY);
    assert_eq!(status.max_ball_velocity, 0.0);
    assert_eq!(status.ball_velocity, Some([9.0, 9.0, 9.0]));
}

#[test]
fn ball_status_after_contact() {
    let mut status = BallStatus::new([0.0_f64, 3.0, 0.0]);
    let mut racket = ContactInformation::new();
    racket.register_contact([0.0; 3], 2.0);

    status.update([0.0, 0.0, 4.0], [0.0, 3.0, 4.0], &racket);
    assert!(status.hit_racket());
    assert_eq!(status.min_distance_ball_target, 5.0);
    assert_eq!(status.max_ball_velocity, 5.0);

    status.update([0.0, 3.0, 1.0], [1.0, 0.0, 0.0], &racket);
    assert_eq!(status.min_distance_ball_target, 1.0);
    assert_eq!(status.max_ball_velocity, 5.0);
    assert_eq!(status.max_y, 3.0);
    assert_eq!(status.min_z, 1.0);
}

#[test]
fn ball_status_reset_keeps_target() {
    let mut status = BallStatus::new([0.0_f64, 3.0, 0.0]);
    let mut racket = ContactInformation::new();
    racket.register_contact([0.0; 3], 2.0);
    status.update([0.0, 0.0, 4.0], [0.0, 3.0, 4.0], &racket);
    status.reset();
    assert_eq!(status, BallStatus::new([0.0, 3.0, 0.0]));
}
