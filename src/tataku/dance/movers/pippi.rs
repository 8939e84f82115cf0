use crate::prelude::*;

/// straight line, with the cursor spinning in tight little circles along the way
#[derive(Copy, Clone, Debug, Default)]
pub struct PippiMover;

impl Mover for PippiMover {
    fn position_at(&self, segment: &Segment, progress: f32, time: f64) -> Vector2 {
        let pos = Vector2::lerp(segment.start_pos, segment.end_pos, progress);

        // fade the wobble in and out so we still land on the objects
        let envelope = (progress * PI).sin().max(0.0);
        apply_pippi_offset(pos, time, PIPPI_RADIUS * envelope)
    }
}
