use crate::prelude::*;

/// an object counts as overlapping the next one if the next starts at least this long before it ends
pub const OVERLAP_GUARD: f64 = 1.0;
/// objects have to start and end within this many ms of zero
pub const MAX_OBJECT_TIME: f64 = i32::MAX as f64;

/// the validated list of hit objects the generator walks over
#[derive(Clone, Debug)]
pub struct Timeline {
    objects: Vec<DanceHitObject>,
    /// for each object, does a later object start before this one ends?
    overlaps: Vec<bool>,
    /// the area objects are placed in
    playfield: Bounds,
}
impl Timeline {
    /// validate the objects and precompute which ones overlap the next
    pub fn new(objects: Vec<DanceHitObject>) -> Result<Self, TimelineError> {
        Self::with_playfield(objects, Bounds::new(Vector2::ZERO, PLAYFIELD_SIZE))
    }

    pub fn with_playfield(objects: Vec<DanceHitObject>, playfield: Bounds) -> Result<Self, TimelineError> {
        validate(&objects)?;
        let overlaps = compute_overlaps(&objects);

        Ok(Self {
            objects,
            overlaps,
            playfield,
        })
    }

    pub fn objects(&self) -> &[DanceHitObject] { &self.objects }
    pub fn overlaps(&self) -> &[bool] { &self.overlaps }
    pub fn playfield(&self) -> Bounds { self.playfield }

    pub fn len(&self) -> usize { self.objects.len() }
    pub fn is_empty(&self) -> bool { self.objects.is_empty() }

    pub fn get(&self, index: usize) -> &DanceHitObject { &self.objects[index] }
    pub fn last(&self) -> &DanceHitObject { &self.objects[self.objects.len() - 1] }

    /// is the object at `index` still active when a later object starts?
    pub fn overlaps_next(&self, index: usize) -> bool { self.overlaps[index] }

    /// spinners spin around the middle of the playfield
    pub fn spinner_center(&self) -> Vector2 { self.playfield.center() }

    /// the index of the next object after `index`, skipping placeholder spinners.
    /// stays on the last object if there is nothing after it
    pub fn next_index(&self, index: usize) -> usize {
        let last = self.objects.len() - 1;
        let mut next = (index + 1).min(last);

        while next < last && self.objects[next].is_empty_spinner() {
            next += 1;
        }
        next
    }
    pub fn next_object(&self, index: usize) -> &DanceHitObject {
        &self.objects[self.next_index(index)]
    }
}

fn validate(objects: &[DanceHitObject]) -> Result<(), TimelineError> {
    if objects.is_empty() { return Err(TimelineError::NoObjects) }

    for (index, obj) in objects.iter().enumerate() {
        let finite = obj.time.is_finite()
            && obj.duration().is_finite()
            && obj.pos.x.is_finite()
            && obj.pos.y.is_finite();
        if !finite { return Err(TimelineError::NonFinite { index }) }

        if obj.time.abs() > MAX_OBJECT_TIME || obj.end_time().abs() > MAX_OBJECT_TIME {
            return Err(TimelineError::TimeOutOfRange { index });
        }

        if index > 0 && obj.time < objects[index - 1].time {
            return Err(TimelineError::OutOfOrder { index });
        }

        match &obj.kind {
            HitObjectKind::Circle => {}
            HitObjectKind::Slider(slider) => {
                if slider.duration < 0.0 { return Err(TimelineError::NegativeDuration { index }) }
                if slider.duration == 0.0 { return Err(TimelineError::ZeroDuration { index }) }
                if slider.path.control_points().is_empty() { return Err(TimelineError::InvalidSliderPath { index }) }
            }
            HitObjectKind::Spinner(spinner) => {
                if spinner.duration < 0.0 { return Err(TimelineError::NegativeDuration { index }) }
                if spinner.duration == 0.0 && spinner.spins_required > 0 { return Err(TimelineError::ZeroDuration { index }) }
            }
        }
    }

    Ok(())
}

fn compute_overlaps(objects: &[DanceHitObject]) -> Vec<bool> {
    let mut overlaps = vec![false; objects.len()];

    for i in 0..objects.len().saturating_sub(1) {
        let end_time = objects[i].end_time();
        overlaps[i] = objects[i + 1..].iter().any(|o| o.time + OVERLAP_GUARD <= end_time);
    }

    overlaps
}


#[test]
fn test_validation() {
    assert_eq!(Timeline::new(Vec::new()).unwrap_err(), TimelineError::NoObjects);

    let objects = vec![
        DanceHitObject::circle(100.0, Vector2::ZERO),
        DanceHitObject::circle(50.0, Vector2::ZERO),
    ];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::OutOfOrder { index: 1 });

    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(10.0, 0.0)]);
    let objects = vec![
        DanceHitObject::circle(0.0, Vector2::ZERO),
        DanceHitObject::slider(100.0, Vector2::ZERO, path, 1, 0.0),
    ];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::ZeroDuration { index: 1 });

    let objects = vec![DanceHitObject::slider(0.0, Vector2::ZERO, SliderPath::linear(Vec::new()), 1, 100.0)];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::InvalidSliderPath { index: 0 });

    // placeholder spinners dont need a duration
    let objects = vec![DanceHitObject::spinner(0.0, Vector2::ZERO, 0.0, 0)];
    assert!(Timeline::new(objects).is_ok());
}

#[test]
fn test_non_finite_objects() {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(10.0, 0.0)]);

    let objects = vec![
        DanceHitObject::circle(100.0, Vector2::ZERO),
        DanceHitObject::circle(f64::NAN, Vector2::ZERO),
        DanceHitObject::circle(0.0, Vector2::ZERO),
    ];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::NonFinite { index: 1 });

    let objects = vec![
        DanceHitObject::circle(0.0, Vector2::ZERO),
        DanceHitObject::circle(f64::INFINITY, Vector2::ZERO),
    ];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::NonFinite { index: 1 });

    let objects = vec![DanceHitObject::slider(0.0, Vector2::ZERO, path.clone(), 1, f64::INFINITY)];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::NonFinite { index: 0 });

    let objects = vec![DanceHitObject::spinner(0.0, Vector2::ZERO, f64::NAN, 5)];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::NonFinite { index: 0 });

    let objects = vec![DanceHitObject::circle(0.0, Vector2::new(f32::NAN, 0.0))];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::NonFinite { index: 0 });

    // finite, but far enough out that frame steps stop moving time forward
    let objects = vec![
        DanceHitObject::circle(0.0, Vector2::ZERO),
        DanceHitObject::circle(1e20, Vector2::ZERO),
    ];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::TimeOutOfRange { index: 1 });

    let objects = vec![DanceHitObject::slider(0.0, Vector2::ZERO, path, 1, MAX_OBJECT_TIME * 2.0)];
    assert_eq!(Timeline::new(objects).unwrap_err(), TimelineError::TimeOutOfRange { index: 0 });
}

#[test]
fn test_overlaps() {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(100.0, 0.0)]);
    let objects = vec![
        DanceHitObject::slider(0.0, Vector2::ZERO, path.clone(), 1, 500.0),
        // starts during the slider
        DanceHitObject::circle(400.0, Vector2::ZERO),
        DanceHitObject::slider(600.0, Vector2::ZERO, path, 1, 100.0),
        // starts exactly 1ms before the slider ends, still counts
        DanceHitObject::circle(699.0, Vector2::ZERO),
        // 0.5ms before the end is inside the guard, so it doesnt
        DanceHitObject::spinner(700.0, Vector2::ZERO, 1000.0, 3),
        DanceHitObject::circle(1699.5, Vector2::ZERO),
    ];
    let timeline = Timeline::new(objects).unwrap();
    assert_eq!(timeline.overlaps(), &[true, false, true, false, false, false]);
}

#[test]
fn test_next_object() {
    let objects = vec![
        DanceHitObject::circle(0.0, Vector2::ZERO),
        DanceHitObject::spinner(100.0, Vector2::ZERO, 100.0, 0),
        DanceHitObject::spinner(300.0, Vector2::ZERO, 100.0, 0),
        DanceHitObject::circle(500.0, Vector2::ONE),
    ];
    let timeline = Timeline::new(objects).unwrap();
    assert_eq!(timeline.next_index(0), 3);
    assert_eq!(timeline.next_index(3), 3);
    assert_eq!(timeline.next_object(1).pos, Vector2::ONE);
    assert_eq!(timeline.spinner_center(), Vector2::new(256.0, 192.0));
}
