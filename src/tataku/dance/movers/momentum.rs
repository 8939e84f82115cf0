use crate::prelude::*;

/// control point distance, as a fraction of the distance between the objects
const MOMENTUM_LENGTH: f32 = 0.5;

/// keeps the direction the cursor was already moving in, and leaves each object heading for the one after
#[derive(Clone, Debug)]
pub struct MomentumMover {
    /// direction the cursor was moving when it reached the last object
    exit_direction: Option<Vector2>,
    p1: Vector2,
    p2: Vector2,
}
impl MomentumMover {
    pub fn new() -> Self {
        Self {
            exit_direction: None,
            p1: Vector2::ZERO,
            p2: Vector2::ZERO,
        }
    }
}
impl Default for MomentumMover {
    fn default() -> Self { Self::new() }
}

impl Mover for MomentumMover {
    fn on_object_change(&mut self, timeline: &Timeline, segment: &Segment) {
        let start = segment.start_pos;
        let end = segment.end_pos;
        let length = start.distance(end) * MOMENTUM_LENGTH;

        // carry on the way we were already going
        self.p1 = match self.exit_direction {
            Some(dir) => start + dir * length,
            None => Vector2::lerp(start, end, 1.0 / 3.0),
        };

        // arrive moving towards whatever comes after the end object
        let next_index = timeline.next_index(segment.end_index);
        let next_pos = timeline.get(next_index).stacked_pos();
        let towards_next = (next_pos - end).normalize();

        self.p2 = if next_index == segment.end_index || towards_next == Vector2::ZERO {
            Vector2::lerp(start, end, 2.0 / 3.0)
        } else {
            end - towards_next * length
        };

        let exit = (end - self.p2).normalize();
        if exit != Vector2::ZERO {
            self.exit_direction = Some(exit);
        }
    }

    fn position_at(&self, segment: &Segment, progress: f32, _time: f64) -> Vector2 {
        cubic_bezier(segment.start_pos, self.p1, self.p2, segment.end_pos, progress)
    }
}


#[test]
fn test_momentum_carries_direction() {
    let objects = vec![
        DanceHitObject::circle(0.0, Vector2::new(100.0, 100.0)),
        DanceHitObject::circle(500.0, Vector2::new(300.0, 100.0)),
        DanceHitObject::circle(1000.0, Vector2::new(300.0, 300.0)),
    ];
    let timeline = Timeline::new(objects).unwrap();
    let mut mover = MomentumMover::new();

    let first = Segment::new(&timeline, &MoverState { object_index: 0, last_pos: Vector2::ZERO });
    mover.on_object_change(&timeline, &first);
    // heads into the second object moving down, towards the third
    assert_eq!(mover.exit_direction, Some(Vector2::new(0.0, 1.0)));

    let second = Segment::new(&timeline, &MoverState { object_index: 1, last_pos: Vector2::ZERO });
    mover.on_object_change(&timeline, &second);
    // and leaves it still moving down
    assert_eq!(mover.p1, Vector2::new(300.0, 200.0));
}
