use crate::prelude::*;

/// default pippi radius, used when a negative radius is asked for
pub const PIPPI_RADIUS: f32 = OBJECT_RADIUS / 2.0 * 0.98;
/// how long (ms) pippi takes to turn one radian
const PIPPI_TIME_PER_RADIAN: f64 = 100.0;

/// circles closer together than this (in time) can be a stream
const STREAM_MAX_GAP: f64 = 130.0;
/// and they have to be within this many radii of each other
const STREAM_MAX_SPACING: f32 = 2.0;

pub fn circle_position(angle: f32, radius: f32) -> Vector2 {
    Vector2::from_angle(angle) * radius
}

/// wobble `pos` around a small circle that turns with time.
/// a radius of 0 leaves the position alone, a negative radius uses the default size
pub fn apply_pippi_offset(pos: Vector2, time: f64, radius: f32) -> Vector2 {
    let radius = if radius < 0.0 { PIPPI_RADIUS } else { radius };
    if radius == 0.0 { return pos }

    let angle = ((time / PIPPI_TIME_PER_RADIAN) % std::f64::consts::TAU) as f32;
    pos + circle_position(angle, radius)
}

/// are these two objects part of a stream?
pub fn is_stream(current: &DanceHitObject, next: &DanceHitObject) -> bool {
    if !current.is_circle() || !next.is_circle() { return false }
    if next.time <= current.time { return false }

    next.time - current.end_time() <= STREAM_MAX_GAP
    && current.stacked_end_pos().distance(next.stacked_pos()) <= current.radius() * STREAM_MAX_SPACING
}

pub fn cubic_bezier(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2, t: f32) -> Vector2 {
    let u = 1.0 - t;
    p0 * (u * u * u)
    + p1 * (3.0 * u * u * t)
    + p2 * (3.0 * u * t * t)
    + p3 * (t * t * t)
}


#[test]
fn test_pippi_offset() {
    let pos = Vector2::new(100.0, 100.0);
    assert_eq!(apply_pippi_offset(pos, 1234.0, 0.0), pos);

    let offset = apply_pippi_offset(pos, 1234.0, 10.0);
    assert!((offset.distance(pos) - 10.0).abs() < 1e-3);

    let offset = apply_pippi_offset(pos, 1234.0, -1.0);
    assert!((offset.distance(pos) - PIPPI_RADIUS).abs() < 1e-3);
}

#[test]
fn test_is_stream() {
    let a = DanceHitObject::circle(0.0, Vector2::new(100.0, 100.0));
    let b = DanceHitObject::circle(100.0, Vector2::new(120.0, 100.0));
    let far = DanceHitObject::circle(100.0, Vector2::new(400.0, 100.0));
    let slow = DanceHitObject::circle(300.0, Vector2::new(120.0, 100.0));

    assert!(is_stream(&a, &b));
    assert!(!is_stream(&a, &far));
    assert!(!is_stream(&a, &slow));
    // the last object has nothing after it
    assert!(!is_stream(&a, &a));
}
