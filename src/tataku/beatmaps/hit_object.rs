use crate::prelude::*;

/// radius of a hit circle at scale 1
pub const OBJECT_RADIUS: f32 = 64.0;
/// size of the osu playfield, in osu pixels
pub const PLAYFIELD_SIZE: Vector2 = Vector2::new(512.0, 384.0);
/// how far each stack level moves an object (multiplied by the object's scale)
const STACK_OFFSET: f32 = -6.4;

/// hit object scale for a circle size
pub fn scale_for_circle_size(cs: f32) -> f32 {
    (1.0 - 0.7 * (cs - 5.0) / 5.0) / 2.0
}
fn default_scale() -> f32 { scale_for_circle_size(4.0) }


#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
pub struct SliderDef {
    pub path: SliderPath,
    /// how many times the slider is travelled (repeats + 1)
    pub span_count: u32,
    /// how long the slider lasts, in ms
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct SpinnerDef {
    pub duration: f64,
    /// spinners that require no spins are placeholders and get skipped entirely
    pub spins_required: u32,
}

#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
pub enum HitObjectKind {
    Circle,
    Slider(SliderDef),
    Spinner(SpinnerDef),
}

/// a hit object, as the dance generator sees it
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
pub struct DanceHitObject {
    /// start time, in ms
    pub time: f64,
    /// unstacked position
    pub pos: Vector2,
    #[serde(default)]
    pub stack_height: i32,
    #[serde(default = "default_scale")]
    pub scale: f32,

    pub kind: HitObjectKind,
}
impl DanceHitObject {
    pub fn circle(time: f64, pos: Vector2) -> Self {
        Self {
            time,
            pos,
            stack_height: 0,
            scale: default_scale(),
            kind: HitObjectKind::Circle,
        }
    }
    pub fn slider(time: f64, pos: Vector2, path: SliderPath, span_count: u32, duration: f64) -> Self {
        Self {
            kind: HitObjectKind::Slider(SliderDef { path, span_count, duration }),
            ..Self::circle(time, pos)
        }
    }
    pub fn spinner(time: f64, pos: Vector2, duration: f64, spins_required: u32) -> Self {
        Self {
            kind: HitObjectKind::Spinner(SpinnerDef { duration, spins_required }),
            ..Self::circle(time, pos)
        }
    }

    pub fn with_stack_height(mut self, stack_height: i32) -> Self {
        self.stack_height = stack_height;
        self
    }
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn duration(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => 0.0,
            HitObjectKind::Slider(slider) => slider.duration,
            HitObjectKind::Spinner(spinner) => spinner.duration,
        }
    }
    pub fn end_time(&self) -> f64 {
        self.time + self.duration()
    }

    pub fn is_circle(&self) -> bool { matches!(self.kind, HitObjectKind::Circle) }
    pub fn is_slider(&self) -> bool { matches!(self.kind, HitObjectKind::Slider(_)) }
    pub fn is_spinner(&self) -> bool { matches!(self.kind, HitObjectKind::Spinner(_)) }

    /// a spinner that needs no spins. these get skipped like they arent there
    pub fn is_empty_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner(SpinnerDef { spins_required: 0, .. }))
    }

    /// radius of this object in osu pixels
    pub fn radius(&self) -> f32 {
        OBJECT_RADIUS * self.scale
    }

    pub fn stack_offset(&self) -> Vector2 {
        Vector2::ONE * (self.stack_height as f32 * self.scale * STACK_OFFSET)
    }
    pub fn stacked_pos(&self) -> Vector2 {
        self.pos + self.stack_offset()
    }
    pub fn stacked_end_pos(&self) -> Vector2 {
        self.stacked_pos_at(1.0)
    }

    /// position along the object, where `progress` is 0..1 over the object's whole duration.
    /// sliders follow their path (including repeats), everything else stays put
    pub fn stacked_pos_at(&self, progress: f64) -> Vector2 {
        let HitObjectKind::Slider(slider) = &self.kind else { return self.stacked_pos() };

        let span_count = slider.span_count.max(1) as f64;
        let mut p = (progress * span_count) % 1.0;
        let span = (progress * span_count) as u32;
        if span % 2 == 1 { p = 1.0 - p }

        self.stacked_pos() + slider.path.position_at(p)
    }
}


#[test]
fn test_slider_spans() {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(100.0, 0.0)]);
    let pos = Vector2::new(50.0, 50.0);

    let once = DanceHitObject::slider(0.0, pos, path.clone(), 1, 1000.0);
    assert_eq!(once.end_time(), 1000.0);
    assert_eq!(once.stacked_end_pos(), Vector2::new(150.0, 50.0));
    assert_eq!(once.stacked_pos_at(0.5), Vector2::new(100.0, 50.0));

    // a repeat comes back to the head
    let repeat = DanceHitObject::slider(0.0, pos, path, 2, 1000.0);
    assert_eq!(repeat.stacked_pos_at(0.5), Vector2::new(150.0, 50.0));
    assert_eq!(repeat.stacked_pos_at(0.75), Vector2::new(100.0, 50.0));
    assert_eq!(repeat.stacked_end_pos(), pos);
}

#[test]
fn test_stacking() {
    let circle = DanceHitObject::circle(0.0, Vector2::new(100.0, 100.0))
        .with_scale(0.5)
        .with_stack_height(2);
    assert!(circle.stacked_pos().almost_eq(Vector2::new(93.6, 93.6), 1e-4));
    assert_eq!(circle.stacked_end_pos(), circle.stacked_pos());
    assert_eq!(circle.radius(), 32.0);

    assert!(DanceHitObject::spinner(0.0, Vector2::ZERO, 1000.0, 0).is_empty_spinner());
    assert!(!DanceHitObject::spinner(0.0, Vector2::ZERO, 1000.0, 3).is_empty_spinner());
}
