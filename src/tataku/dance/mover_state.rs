use crate::prelude::*;

/// state carried between frames while generating
#[derive(Copy, Clone, Debug, Default)]
pub struct MoverState {
    /// index of the object the cursor is currently travelling away from
    pub object_index: usize,
    /// last position emitted while following a slider
    pub last_pos: Vector2,
}

/// the two objects the cursor is travelling between
#[derive(Clone, Debug)]
pub struct Segment<'a> {
    pub start: &'a DanceHitObject,
    pub end: &'a DanceHitObject,
    pub end_index: usize,

    /// when the start object ends
    pub start_time: f64,
    /// when the end object starts
    pub end_time: f64,

    pub start_pos: Vector2,
    pub end_pos: Vector2,
}
impl<'a> Segment<'a> {
    pub fn new(timeline: &'a Timeline, state: &MoverState) -> Self {
        let index = state.object_index;
        let current = timeline.get(index);

        // placeholder spinners dont count, so travel from whatever was before them
        let start = if current.is_empty_spinner() {
            timeline.get(index.saturating_sub(1))
        } else {
            current
        };

        // and if the next object is a placeholder, stay put until we reach it
        let end_index = if index + 1 >= timeline.len() || timeline.get(index + 1).is_empty_spinner() {
            index
        } else {
            index + 1
        };
        let end = timeline.get(end_index);

        let start_pos = if timeline.overlaps_next(index) {
            start.stacked_pos()
        } else if start.is_slider() {
            state.last_pos
        } else {
            start.stacked_end_pos()
        };

        Self {
            start,
            end,
            end_index,
            start_time: start.end_time(),
            end_time: end.time,
            start_pos,
            end_pos: end.stacked_pos(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// how far through the segment `time` is. segments with no duration are always complete
    pub fn progress(&self, time: f64) -> f32 {
        let duration = self.duration();
        if duration <= 0.0 { return 1.0 }

        ((time - self.start_time) / duration) as f32
    }
}


#[test]
fn test_segment_bounds() {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(100.0, 0.0)]);
    let objects = vec![
        DanceHitObject::slider(0.0, Vector2::ZERO, path, 1, 500.0),
        DanceHitObject::spinner(600.0, Vector2::ZERO, 100.0, 0),
        DanceHitObject::circle(1000.0, Vector2::new(300.0, 300.0)),
    ];
    let timeline = Timeline::new(objects).unwrap();

    // sliders travel from wherever the slider left the cursor
    let state = MoverState { object_index: 0, last_pos: Vector2::new(95.0, 0.0) };
    let segment = Segment::new(&timeline, &state);
    assert_eq!(segment.start_pos, Vector2::new(95.0, 0.0));
    // the placeholder is next, so there is nowhere to go yet
    assert_eq!(segment.end_index, 0);
    assert_eq!(segment.progress(700.0), 1.0);

    // from the placeholder, travel from the slider to the circle
    let state = MoverState { object_index: 1, last_pos: Vector2::new(95.0, 0.0) };
    let segment = Segment::new(&timeline, &state);
    assert_eq!(segment.start_time, 500.0);
    assert_eq!(segment.end_time, 1000.0);
    assert_eq!(segment.end_pos, Vector2::new(300.0, 300.0));
    assert_eq!(segment.progress(750.0), 0.5);
}
