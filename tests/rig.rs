//! Feature Placement Tests
//!
//! Verifies that the rig anchors each feature to the head's reference
//! points: mirrored eyes, lifted crown and brows, the parabolic mouth, and
//! drift-free orientation across repeated updates.

use glam::Vec2;
use narrator_engine::rig::{LEFT, RIGHT};
use narrator_engine::Narrator;

const EPS: f32 = 1e-5;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn head_follows_body_shift_and_escalation() {
    let mut narrator = Narrator::new();
    narrator.params.head_shift = 0.5;
    narrator.params.head_escalation = 1.0;
    narrator.update().unwrap();

    // Body half-height (1.5) plus the escalation.
    assert_eq!(narrator.head.pos, Vec2::new(0.5, 2.5));
}

#[test]
fn eyes_are_mirrored_about_the_head_center() {
    let mut narrator = Narrator::new();
    narrator.update().unwrap();

    let head_x = narrator.head.pos.x;
    let right = narrator.eyes[RIGHT].pos;
    let left = narrator.eyes[LEFT].pos;

    assert!(close(right.x - head_x, -(left.x - head_x)));
    assert!(close(right.y, left.y));
    assert!(right.x > left.x);
}

#[test]
fn eye_height_tracks_per_eye_openness() {
    let mut narrator = Narrator::new();
    narrator.params.eye_openness = [0.5, 1.0];
    narrator.update().unwrap();

    let span = |points: &[Vec2]| {
        let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
        ys.iter().cloned().fold(f32::MIN, f32::max) - ys.iter().cloned().fold(f32::MAX, f32::min)
    };

    let eye_size = narrator.params.eye_size;
    assert!(close(span(&narrator.eyes[RIGHT].points), eye_size * 0.5));
    assert!(close(span(&narrator.eyes[LEFT].points), eye_size));
}

#[test]
fn crown_sits_above_the_head() {
    let mut narrator = Narrator::new();
    narrator.update().unwrap();

    // Above the head's top edge (half the unit head).
    assert!(narrator.crown.pos.y > narrator.head.pos.y + 0.5);
}

#[test]
fn mouth_sits_below_the_head_center() {
    let mut narrator = Narrator::new();
    narrator.update().unwrap();

    assert!(narrator.mouth.pos.y < narrator.head.pos.y);
}

#[test]
fn mouth_curve_has_two_branches_with_a_lip_gap() {
    let mut narrator = Narrator::new();
    narrator.update().unwrap();

    let points = &narrator.mouth.points;
    assert_eq!(points.len(), 42);

    // Lower lip midpoint drops by half the mouth height; upper lip midpoint
    // sits on the curve baseline.
    assert!(close(points[10].x, 0.0));
    assert!(close(points[10].y, -0.05));
    assert!(close(points[31].x, 0.0));
    assert!(close(points[31].y, 0.0));

    // Width-scaled domain.
    let max_x = points.iter().map(|p| p.x).fold(f32::MIN, f32::max);
    assert!(close(max_x, narrator.params.mouth_width));
}

#[test]
fn smile_amount_curves_the_lips() {
    let mut narrator = Narrator::new();
    narrator.params.smile_amount = 2.0;
    narrator.update().unwrap();

    // Upper lip at the widest sample: y = smile * x^2.
    let corner = narrator.mouth.points[21];
    assert!(close(corner.y, 2.0 * corner.x * corner.x));
}

#[test]
fn brows_ride_above_the_eyes_with_their_own_tilt() {
    let mut narrator = Narrator::new();
    narrator.params.head_rotation = 0.5;
    narrator.update().unwrap();

    assert!(close(narrator.brows[RIGHT].orientation, 0.5 + 0.1));
    assert!(close(narrator.brows[LEFT].orientation, 0.5 - 0.1));
}

#[test]
fn brow_elevation_lifts_the_brow() {
    let mut narrator = Narrator::new();
    narrator.update().unwrap();

    assert!(narrator.brows[RIGHT].pos.y > narrator.eyes[RIGHT].pos.y);
    assert!(narrator.brows[LEFT].pos.y > narrator.eyes[LEFT].pos.y);
}

#[test]
fn repeated_updates_do_not_drift_orientation_or_points() {
    let mut narrator = Narrator::new();
    narrator.params.head_rotation = 0.6;

    narrator.update().unwrap();
    let head_points = narrator.head.points.clone();
    let crown_points = narrator.crown.points.clone();

    for _ in 0..10 {
        narrator.update().unwrap();
    }

    assert!(close(narrator.head.orientation, 0.6));
    for (a, b) in narrator.head.points.iter().zip(&head_points) {
        assert!((*a - *b).length() < EPS);
    }
    for (a, b) in narrator.crown.points.iter().zip(&crown_points) {
        assert!((*a - *b).length() < EPS);
    }
}

#[test]
fn features_follow_head_rotation() {
    let mut narrator = Narrator::new();
    narrator.params.head_rotation = 0.8;
    narrator.update().unwrap();

    assert!(close(narrator.head.orientation, 0.8));
    assert!(close(narrator.crown.orientation, 0.8));
    assert!(close(narrator.mouth.orientation, 0.8));
    assert!(close(narrator.eyes[RIGHT].orientation, 0.8));
    assert!(close(narrator.eyes[LEFT].orientation, 0.8));
}
