use crate::prelude::*;

const EPSILON: f32 = 1e-3;

fn settings(mover: DanceMoverKind) -> DanceSettings {
    DanceSettings {
        replay_framerate: 20.0,
        mover,
        ..Default::default()
    }
}

fn generate(objects: Vec<DanceHitObject>, settings: &DanceSettings) -> Replay {
    generate_replay(objects, &GameplayMods::new(), settings).unwrap()
}

fn keyed_frames(replay: &Replay) -> Vec<ReplayFrame> {
    replay.frames().iter().filter(|f| f.key.is_some()).copied().collect()
}

/// the last frame at or before `time`
fn frame_at(replay: &Replay, time: f64) -> ReplayFrame {
    *replay.frames().iter().filter(|f| f.time <= time).last().unwrap()
}

fn assert_ordered(replay: &Replay) {
    for pair in replay.frames().windows(2) {
        assert!(pair[1].time >= pair[0].time, "frames out of order: {} then {}", pair[0].time, pair[1].time);
    }
}

fn circle(time: f64, x: f32, y: f32) -> DanceHitObject {
    DanceHitObject::circle(time, Vector2::new(x, y))
}

fn mixed_map() -> Vec<DanceHitObject> {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(100.0, 0.0)]);
    vec![
        circle(0.0, 100.0, 100.0),
        circle(250.0, 200.0, 120.0),
        DanceHitObject::slider(600.0, Vector2::new(300.0, 200.0), path, 2, 400.0),
        circle(1300.0, 50.0, 300.0),
        DanceHitObject::spinner(1500.0, Vector2::new(256.0, 192.0), 200.0, 0),
        DanceHitObject::spinner(2000.0, Vector2::new(256.0, 192.0), 1000.0, 5),
        circle(6500.0, 400.0, 50.0),
        circle(6700.0, 420.0, 80.0),
    ]
}


#[test]
fn test_snaps_to_every_object() {
    for kind in DanceMoverKind::ALL {
        let objects = mixed_map();
        let replay = generate(objects.clone(), &settings(kind));
        assert_ordered(&replay);

        for obj in objects.iter().filter(|o| !o.is_empty_spinner()) {
            let frame = frame_at(&replay, obj.time);
            assert!(frame.pos.almost_eq(obj.stacked_pos(), EPSILON), "{kind}: expected {} at {}, got {}", obj.stacked_pos(), obj.time, frame.pos);
        }

        // the placeholder spinner never gets pressed
        assert!(keyed_frames(&replay).iter().all(|f| f.time < 1500.0 || f.time > 1700.0), "{kind}");

        let last = replay.last_frame().unwrap();
        assert_eq!(last.time, 6700.0);
        assert_eq!(last.pos, Vector2::new(420.0, 80.0));
    }
}

#[test]
fn test_frames_ordered_with_speed_mods() {
    let mods = GameplayMods::new().with_rate(RateAdjust::Ramp {
        initial_rate: 0.75,
        final_rate: 1.5,
        start_time: 0.0,
        end_time: 7000.0,
    });

    for kind in DanceMoverKind::ALL {
        let mut settings = settings(kind);
        settings.slider_dance = true;
        settings.pippi_spinner = true;
        settings.pippi_stream = true;

        let replay = generate_replay(mixed_map(), &mods, &settings).unwrap();
        assert_ordered(&replay);
    }
}

#[test]
fn test_placeholder_spinner_changes_nothing() {
    for kind in DanceMoverKind::ALL {
        let with_spinner = generate(vec![
            circle(0.0, 100.0, 100.0),
            DanceHitObject::spinner(500.0, Vector2::new(256.0, 192.0), 500.0, 0),
            circle(1500.0, 400.0, 300.0),
            circle(1700.0, 300.0, 300.0),
        ], &settings(kind));

        let without_spinner = generate(vec![
            circle(0.0, 100.0, 100.0),
            circle(1500.0, 400.0, 300.0),
            circle(1700.0, 300.0, 300.0),
        ], &settings(kind));

        assert_eq!(with_spinner.frames(), without_spinner.frames(), "{kind}");
    }
}

#[test]
fn test_key_alternation() {
    let objects = vec![
        circle(0.0, 100.0, 100.0),
        circle(100.0, 150.0, 100.0),
        circle(200.0, 200.0, 100.0),
        // 400ms gap resets
        circle(600.0, 250.0, 100.0),
        circle(700.0, 300.0, 100.0),
        // exactly 300ms keeps alternating
        circle(1000.0, 350.0, 100.0),
        circle(1100.0, 400.0, 100.0),
        // 301ms resets
        circle(1401.0, 450.0, 100.0),
    ];
    let replay = generate(objects, &settings(DanceMoverKind::Momentum));

    use KeyPress::*;
    let keys = keyed_frames(&replay).iter().filter_map(|f| f.key).collect::<Vec<_>>();
    assert_eq!(keys, vec![LeftMouse, RightMouse, LeftMouse, LeftMouse, RightMouse, LeftMouse, RightMouse, LeftMouse]);
}

#[test]
fn test_key_alternation_uses_real_time() {
    let objects = vec![
        circle(0.0, 100.0, 100.0),
        circle(400.0, 300.0, 100.0),
    ];
    let settings = settings(DanceMoverKind::Momentum);

    let nomod = generate_replay(objects.clone(), &GameplayMods::new(), &settings).unwrap();
    let keys = keyed_frames(&nomod).iter().filter_map(|f| f.key).collect::<Vec<_>>();
    assert_eq!(keys, vec![KeyPress::LeftMouse, KeyPress::LeftMouse]);

    // 400ms at 1.5x is under 300ms of real time
    let dt = GameplayMods::new().with_rate(RateAdjust::DOUBLE_TIME);
    let replay = generate_replay(objects, &dt, &settings).unwrap();
    let keys = keyed_frames(&replay).iter().filter_map(|f| f.key).collect::<Vec<_>>();
    assert_eq!(keys, vec![KeyPress::LeftMouse, KeyPress::RightMouse]);
}

#[test]
fn test_three_circles() {
    let objects = vec![
        circle(0.0, 100.0, 100.0),
        circle(500.0, 300.0, 200.0),
        circle(1300.0, 150.0, 300.0),
    ];

    for kind in DanceMoverKind::ALL {
        let replay = generate(objects.clone(), &settings(kind));
        assert_ordered(&replay);

        let between = replay.frames().iter().filter(|f| f.time >= 500.0 && f.time < 1300.0).count();
        assert!(between >= 16, "{kind}: only {between} frames");

        let keyed = keyed_frames(&replay);
        assert_eq!(keyed.len(), 3);
        for (frame, obj) in keyed.iter().zip(objects.iter()) {
            assert_eq!(frame.time, obj.time);
            assert!(frame.pos.almost_eq(obj.pos, EPSILON), "{kind}");
            // every gap is over 300ms
            assert_eq!(frame.key, Some(KeyPress::LeftMouse));
        }
    }
}

#[test]
fn test_spinner_radius() {
    let settings = DanceSettings {
        spinner_radius_start: 50.0,
        spinner_radius_end: 20.0,
        ..Default::default()
    };
    let spinner = SpinnerDef { duration: 2000.0, spins_required: 5 };

    assert_eq!(spinner_radius(&settings, 0.0, &spinner, 0.0), 50.0);

    // eased in, not quite settled yet
    let before = spinner_radius(&settings, 0.0, &spinner, 1380.0);
    let amount = (1380.0f32 / 1400.0).powi(2);
    assert!((before - (50.0 - 30.0 * amount)).abs() < EPSILON);
    assert!(before > 20.0 && before < 50.0);

    // settled
    assert_eq!(spinner_radius(&settings, 0.0, &spinner, 1420.0), 20.0);

    // short spinners stay small the whole time
    let short = SpinnerDef { duration: 2000.0, spins_required: 3 };
    assert_eq!(spinner_radius(&settings, 0.0, &short, 100.0), 20.0);
}

#[test]
fn test_spinner_frames() {
    let settings = DanceSettings {
        spinner_radius_start: 50.0,
        spinner_radius_end: 20.0,
        ..settings(DanceMoverKind::Momentum)
    };
    let center = Vector2::new(256.0, 192.0);
    let replay = generate(vec![DanceHitObject::spinner(0.0, center, 2000.0, 5)], &settings);
    assert_ordered(&replay);

    let spins = keyed_frames(&replay).into_iter().filter(|f| f.time > 0.0).collect::<Vec<_>>();
    assert!(spins.len() > 100);

    for frame in spins.iter() {
        let distance = frame.pos.distance(center);
        assert!(frame.time < 2000.0);

        if frame.time > 1400.0 {
            assert!((distance - 20.0).abs() < EPSILON, "{} at {}", distance, frame.time);
        } else {
            assert!(distance >= 20.0 - EPSILON && distance <= 50.0 + EPSILON);
        }
    }

    // the cursor actually goes around
    let angles = spins.iter().map(|f| (f.pos - center).atan2()).collect::<Vec<_>>();
    assert!(angles.windows(2).any(|a| (a[0] - a[1]).abs() > 0.1));
}

#[test]
fn test_border_bounce() {
    let objects = vec![
        circle(0.0, 0.0, 192.0),
        circle(1000.0, 512.0, 192.0),
    ];
    let bounds = screen_bounds(Bounds::new(Vector2::ZERO, PLAYFIELD_SIZE));
    let padded = Bounds::new(bounds.pos - 0.01, bounds.size + 0.02);

    let mut settings = settings(DanceMoverKind::HalfCircle);
    settings.border_bounce = true;
    let replay = generate(objects.clone(), &settings);
    assert!(replay.frames().iter().all(|f| padded.contains(f.pos)));

    // the half circle leaves the screen without bouncing
    settings.border_bounce = false;
    let replay = generate(objects, &settings);
    assert!(replay.frames().iter().any(|f| !padded.contains(f.pos)));
}

#[test]
fn test_long_breaks_wait_before_moving() {
    let start = Vector2::new(100.0, 100.0);
    let objects = vec![
        DanceHitObject::circle(0.0, start),
        circle(5000.0, 400.0, 300.0),
    ];
    let replay = generate(objects, &settings(DanceMoverKind::Momentum));
    assert_ordered(&replay);

    // one waiting frame, then nothing until the cursor sets off
    let waiting = replay.frames().iter().filter(|f| f.time > 0.0 && f.time < 2000.0).collect::<Vec<_>>();
    assert_eq!(waiting.len(), 1);
    assert!((waiting[0].time - 1040.0).abs() < 1e-6);
    assert_eq!(waiting[0].pos, start);

    let set_off = replay.frames().iter().find(|f| f.time >= 2000.0).unwrap();
    assert!((set_off.time - 2030.0).abs() < 1e-6);
}

#[test]
fn test_very_long_breaks_keep_waiting() {
    let start = Vector2::new(100.0, 100.0);
    let objects = vec![
        DanceHitObject::circle(0.0, start),
        circle(10000.0, 400.0, 300.0),
    ];
    let replay = generate(objects, &settings(DanceMoverKind::Flower));
    assert_ordered(&replay);

    let waiting = replay.frames().iter().filter(|f| f.time > 0.0 && f.time < 7800.0).collect::<Vec<_>>();
    assert_eq!(waiting.len(), 3);
    assert!(waiting.iter().all(|f| f.pos == start));
}

#[test]
fn test_slider_frames() {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(200.0, 0.0)]);
    let slider = DanceHitObject::slider(0.0, Vector2::new(100.0, 100.0), path, 1, 1000.0);
    let objects = vec![slider.clone(), circle(2000.0, 100.0, 300.0)];

    // following the ball
    let replay = generate(objects.clone(), &settings(DanceMoverKind::Momentum));
    let body = keyed_frames(&replay).into_iter().filter(|f| f.time > 0.0 && f.time < 1000.0).collect::<Vec<_>>();
    assert!(!body.is_empty());
    for frame in body.iter() {
        assert!(frame.pos.almost_eq(slider.stacked_pos_at(frame.time / 1000.0), EPSILON));
    }

    // dancing stays close to the ball
    let mut dance_settings = settings(DanceMoverKind::Momentum);
    dance_settings.slider_dance = true;
    let replay = generate(objects, &dance_settings);
    let radius = slider.radius() * 1.2 + EPSILON;
    let body = keyed_frames(&replay).into_iter().filter(|f| f.time > 0.0 && f.time < 1000.0).collect::<Vec<_>>();

    let mut any_off_ball = false;
    for frame in body.iter() {
        let ball = slider.stacked_pos_at(frame.time / 1000.0);
        assert!((frame.pos.x - ball.x).abs() <= radius && (frame.pos.y - ball.y).abs() <= radius);
        any_off_ball |= !frame.pos.almost_eq(ball, 1.0);
    }
    assert!(any_off_ball);
}

#[test]
fn test_overlapped_slider_only_presses() {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(200.0, 0.0)]);
    let objects = vec![
        DanceHitObject::slider(0.0, Vector2::new(100.0, 100.0), path, 1, 1000.0),
        circle(500.0, 100.0, 300.0),
    ];
    let replay = generate(objects, &settings(DanceMoverKind::HalfCircle));
    assert_ordered(&replay);

    let keyed = keyed_frames(&replay);
    assert_eq!(keyed.len(), 2);
    assert_eq!(keyed[0].time, 0.0);
    assert_eq!(keyed[1].time, 500.0);
    assert!(keyed[1].pos.almost_eq(Vector2::new(100.0, 300.0), EPSILON));
}

#[test]
fn test_pippi_streams() {
    let objects = vec![
        circle(0.0, 100.0, 100.0),
        circle(100.0, 120.0, 100.0),
        circle(200.0, 140.0, 100.0),
    ];

    let mut settings = settings(DanceMoverKind::Momentum);
    settings.pippi_stream = true;
    let replay = generate(objects.clone(), &settings);

    let keyed = keyed_frames(&replay);
    assert!((keyed[0].pos.distance(objects[0].pos) - PIPPI_RADIUS).abs() < EPSILON);
    assert!((keyed[1].pos.distance(objects[1].pos) - PIPPI_RADIUS).abs() < EPSILON);
    // nothing after the last circle, so its not part of a stream
    assert!(keyed[2].pos.almost_eq(objects[2].pos, EPSILON));

    // the pippi mover wobbles on its own
    settings.mover = DanceMoverKind::Pippi;
    let replay = generate(objects.clone(), &settings);
    for (frame, obj) in keyed_frames(&replay).iter().zip(objects.iter()) {
        assert!(frame.pos.almost_eq(obj.pos, EPSILON));
    }
}

#[test]
fn test_deterministic() {
    for kind in DanceMoverKind::ALL {
        let a = generate(mixed_map(), &settings(kind));
        let b = generate(mixed_map(), &settings(kind));
        assert_eq!(a.frames(), b.frames());
    }
}

#[test]
fn test_invalid_timeline() {
    let settings = DanceSettings::default();
    let result = generate_replay(Vec::new(), &GameplayMods::new(), &settings);
    assert!(matches!(result, Err(DanceError::Timeline(TimelineError::NoObjects))));

    let result = generate_replay(vec![circle(100.0, 0.0, 0.0), circle(0.0, 0.0, 0.0)], &GameplayMods::new(), &settings);
    assert!(matches!(result, Err(DanceError::Timeline(TimelineError::OutOfOrder { index: 1 }))));

    // these would never finish stepping through the frames
    let result = generate_replay(vec![circle(0.0, 0.0, 0.0), circle(f64::INFINITY, 0.0, 0.0)], &GameplayMods::new(), &settings);
    assert!(matches!(result, Err(DanceError::Timeline(TimelineError::NonFinite { index: 1 }))));

    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(100.0, 0.0)]);
    let slider = DanceHitObject::slider(0.0, Vector2::ZERO, path, 1, f64::INFINITY);
    let result = generate_replay(vec![slider], &GameplayMods::new(), &settings);
    assert!(matches!(result, Err(DanceError::Timeline(TimelineError::NonFinite { index: 0 }))));
}

#[test]
fn test_extreme_framerate_still_finishes() {
    let mut settings = settings(DanceMoverKind::Momentum);
    settings.replay_framerate = f32::INFINITY;

    let replay = generate(vec![circle(0.0, 100.0, 100.0), circle(500.0, 300.0, 100.0)], &settings);
    assert_ordered(&replay);
    assert_eq!(replay.last_frame().unwrap().time, 500.0);
}

#[tokio::test]
async fn test_generate_async() {
    let settings = settings(DanceMoverKind::Flower);
    let timeline = Arc::new(Timeline::new(mixed_map()).unwrap());

    let expected = DanceAutoGenerator::new(&timeline, &GameplayMods::new(), &settings).generate();
    let replay = DanceAutoGenerator::generate_async(timeline, GameplayMods::new(), settings).await.unwrap();
    assert_eq!(replay.frames(), expected.frames());
}
