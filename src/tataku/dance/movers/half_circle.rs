use crate::prelude::*;

/// swings around half of a circle between the two objects, alternating sides each time
#[derive(Clone, Debug)]
pub struct HalfCircleMover {
    invert: f32,
    middle: Vector2,
    radius: f32,
    start_angle: f32,
}
impl HalfCircleMover {
    pub fn new() -> Self {
        Self {
            invert: 1.0,
            middle: Vector2::ZERO,
            radius: 0.0,
            start_angle: 0.0,
        }
    }
}
impl Default for HalfCircleMover {
    fn default() -> Self { Self::new() }
}

impl Mover for HalfCircleMover {
    fn on_object_change(&mut self, _timeline: &Timeline, segment: &Segment) {
        self.invert = -self.invert;
        self.middle = (segment.start_pos + segment.end_pos) / 2.0;
        self.radius = segment.start_pos.distance(segment.end_pos) / 2.0;
        self.start_angle = self.middle.angle_to(segment.start_pos);
    }

    fn position_at(&self, _segment: &Segment, progress: f32, _time: f64) -> Vector2 {
        let t = Easing::EaseInOutSine.ease(progress);
        let angle = self.start_angle + PI * t * self.invert;

        self.middle + circle_position(angle, self.radius)
    }
}
