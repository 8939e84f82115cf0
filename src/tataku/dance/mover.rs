use crate::prelude::*;

/// something that moves the cursor from one object to the next
pub trait Mover {
    /// called when the cursor starts travelling along a new segment
    fn on_object_change(&mut self, _timeline: &Timeline, _segment: &Segment) {}

    /// cursor position at `progress` (0..1) through the segment
    fn position_at(&self, segment: &Segment, progress: f32, time: f64) -> Vector2;
}


#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DanceMoverKind {
    HalfCircle,
    Flower,
    #[default]
    Momentum,
    Pippi,
}
impl DanceMoverKind {
    pub const ALL: [Self; 4] = [Self::HalfCircle, Self::Flower, Self::Momentum, Self::Pippi];

    /// look up a mover by name. anything unknown gets the momentum mover
    pub fn from_name(name: &str) -> Self {
        let key = name.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase();

        match &*key {
            "halfcircle" => Self::HalfCircle,
            "flower" => Self::Flower,
            "momentum" => Self::Momentum,
            "pippi" => Self::Pippi,
            _ => {
                warn!("Unknown dance mover '{name}', using {}", Self::Momentum);
                Self::Momentum
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HalfCircle => "HalfCircle",
            Self::Flower => "Flower",
            Self::Momentum => "Momentum",
            Self::Pippi => "Pippi",
        }
    }
}
impl Display for DanceMoverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl From<String> for DanceMoverKind {
    fn from(value: String) -> Self { Self::from_name(&value) }
}
impl From<DanceMoverKind> for String {
    fn from(value: DanceMoverKind) -> Self { value.name().to_owned() }
}


/// the selected mover
#[derive(Clone, Debug)]
pub enum DanceMover {
    HalfCircle(HalfCircleMover),
    Flower(FlowerMover),
    Momentum(MomentumMover),
    Pippi(PippiMover),
}
impl DanceMover {
    pub fn new(kind: DanceMoverKind) -> Self {
        match kind {
            DanceMoverKind::HalfCircle => Self::HalfCircle(HalfCircleMover::new()),
            DanceMoverKind::Flower => Self::Flower(FlowerMover::new()),
            DanceMoverKind::Momentum => Self::Momentum(MomentumMover::new()),
            DanceMoverKind::Pippi => Self::Pippi(PippiMover),
        }
    }

    pub fn kind(&self) -> DanceMoverKind {
        match self {
            Self::HalfCircle(_) => DanceMoverKind::HalfCircle,
            Self::Flower(_) => DanceMoverKind::Flower,
            Self::Momentum(_) => DanceMoverKind::Momentum,
            Self::Pippi(_) => DanceMoverKind::Pippi,
        }
    }

    fn mover(&self) -> &dyn Mover {
        match self {
            Self::HalfCircle(m) => m,
            Self::Flower(m) => m,
            Self::Momentum(m) => m,
            Self::Pippi(m) => m,
        }
    }
    fn mover_mut(&mut self) -> &mut dyn Mover {
        match self {
            Self::HalfCircle(m) => m,
            Self::Flower(m) => m,
            Self::Momentum(m) => m,
            Self::Pippi(m) => m,
        }
    }

    pub fn on_object_change(&mut self, timeline: &Timeline, segment: &Segment) {
        // nowhere to go, nothing to set up
        if segment.duration() <= 0.0 { return }

        self.mover_mut().on_object_change(timeline, segment)
    }

    /// cursor position at `time`. always lands exactly on the end object once its time is reached
    pub fn update(&self, segment: &Segment, time: f64) -> Vector2 {
        if time >= segment.end_time || segment.duration() <= 0.0 { return segment.end_pos }

        let progress = segment.progress(time);
        if progress <= 0.0 { return segment.start_pos }
        if progress >= 1.0 { return segment.end_pos }

        self.mover().position_at(segment, progress, time)
    }
}


#[test]
fn test_mover_names() {
    for kind in DanceMoverKind::ALL {
        assert_eq!(DanceMoverKind::from_name(kind.name()), kind);
        assert_eq!(DanceMover::new(kind).kind(), kind);
    }

    assert_eq!(DanceMoverKind::from_name("half_circle"), DanceMoverKind::HalfCircle);
    assert_eq!(DanceMoverKind::from_name("not a mover"), DanceMoverKind::Momentum);
    assert_eq!(DanceMoverKind::from_name(""), DanceMoverKind::Momentum);
}

#[test]
fn test_movers_snap() {
    let objects = vec![
        DanceHitObject::circle(0.0, Vector2::new(50.0, 60.0)),
        DanceHitObject::circle(1000.0, Vector2::new(400.0, 300.0)),
        DanceHitObject::circle(1500.0, Vector2::new(100.0, 300.0)),
    ];
    let timeline = Timeline::new(objects).unwrap();
    let state = MoverState::default();
    let segment = Segment::new(&timeline, &state);

    for kind in DanceMoverKind::ALL {
        let mut mover = DanceMover::new(kind);
        mover.on_object_change(&timeline, &segment);

        assert_eq!(mover.update(&segment, 0.0), segment.start_pos, "{kind}");
        assert_eq!(mover.update(&segment, 1000.0), segment.end_pos, "{kind}");

        // close to the end should be close to the target
        let near_end = mover.update(&segment, 999.0);
        assert!(near_end.distance(segment.end_pos) < 15.0, "{kind} {near_end}");

        // no teleporting along the way
        let mut last = segment.start_pos;
        for t in 1..1000 {
            let pos = mover.update(&segment, t as f64);
            assert!(pos.x.is_finite() && pos.y.is_finite(), "{kind}");
            assert!(pos.distance(last) < 20.0, "{kind} jumped at {t}: {last} -> {pos}");
            last = pos;
        }
    }
}
