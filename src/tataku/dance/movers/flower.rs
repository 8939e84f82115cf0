use crate::prelude::*;

/// how far the control points swing away from the straight line
const PETAL_ANGLE: f32 = PI / 3.0;
/// control point distance, as a fraction of the distance between the objects
const PETAL_LENGTH: f32 = 0.66;

/// draws petals between objects, alternating which side they bulge out on
#[derive(Clone, Debug)]
pub struct FlowerMover {
    invert: f32,
    p1: Vector2,
    p2: Vector2,
}
impl FlowerMover {
    pub fn new() -> Self {
        Self {
            invert: 1.0,
            p1: Vector2::ZERO,
            p2: Vector2::ZERO,
        }
    }
}
impl Default for FlowerMover {
    fn default() -> Self { Self::new() }
}

impl Mover for FlowerMover {
    fn on_object_change(&mut self, _timeline: &Timeline, segment: &Segment) {
        self.invert = -self.invert;

        let start = segment.start_pos;
        let end = segment.end_pos;
        let length = start.distance(end) * PETAL_LENGTH;
        let angle = start.angle_to(end);

        // both control points lean to the same side, mirrored across the middle
        self.p1 = start + Vector2::from_angle(angle + PETAL_ANGLE * self.invert) * length;
        self.p2 = end + Vector2::from_angle(angle + PI - PETAL_ANGLE * self.invert) * length;
    }

    fn position_at(&self, segment: &Segment, progress: f32, _time: f64) -> Vector2 {
        cubic_bezier(segment.start_pos, self.p1, self.p2, segment.end_pos, progress)
    }
}


#[test]
fn test_petals_alternate() {
    let objects = vec![
        DanceHitObject::circle(0.0, Vector2::new(100.0, 200.0)),
        DanceHitObject::circle(500.0, Vector2::new(300.0, 200.0)),
    ];
    let timeline = Timeline::new(objects).unwrap();
    let segment = Segment::new(&timeline, &MoverState::default());

    let mut mover = FlowerMover::new();
    mover.on_object_change(&timeline, &segment);
    let first = mover.position_at(&segment, 0.5, 250.0);

    mover.on_object_change(&timeline, &segment);
    let second = mover.position_at(&segment, 0.5, 250.0);

    // same distance off the line, opposite sides
    assert!((first.x - 200.0).abs() < 1e-3);
    assert!((second.x - 200.0).abs() < 1e-3);
    assert!(((first.y - 200.0) + (second.y - 200.0)).abs() < 1e-3);
    assert!((first.y - 200.0).abs() > 10.0);
}
