use crate::prelude::*;

/// time between frames while inside sliders and spinners (before speed mods)
const KEY_FRAME_DELAY: f64 = 1000.0 / 60.0;
/// the first frame of every replay is this far before the map starts
const REPLAY_START_TIME: f64 = -10000.0;

/// objects further apart than this (in real time) reset the key alternation
const KEY_RESET_GAP: f64 = 300.0;

/// how far through the slider the dancing cursor has caught up to the ball
const SLIDER_MULT: f64 = 1.0;
/// dancing inside a slider stays within this many object radii of the ball
const SLIDER_DANCE_RADIUS: f32 = 1.2;

/// spinners that need more spins than this start at the wider radius
const SPINNER_LONG_SPINS: u32 = 3;
/// how far through the spinner the radius stops shrinking
const SPINNER_RADIUS_SETTLE: f64 = 0.7;
/// real time (ms) it takes to turn one radian
const SPINNER_TIME_PER_RADIAN: f64 = 20.0;

/// travel longer than this waits at the previous object for a bit first
const PARK_THRESHOLD: f64 = 3000.0;
/// fraction of the remaining time left once we stop waiting
const PARK_RESUME: f64 = 0.6;
/// fraction of the remaining time left at the last waiting frame
const PARK_HOLD: f64 = 0.8;

/// the playfield takes up this much of the screen's height
const SCREEN_PLAYFIELD_SCALE: f32 = 0.8;
const SCREEN_ASPECT: f32 = 4.0 / 3.0;

/// the area the cursor can bounce around in, the whole (4:3) screen around the playfield
pub fn screen_bounds(playfield: Bounds) -> Bounds {
    playfield.scaled_around_center(Vector2::new(
        SCREEN_ASPECT / SCREEN_PLAYFIELD_SCALE,
        1.0 / SCREEN_PLAYFIELD_SCALE,
    ))
}

/// spinner radius at `time` for a spinner starting at `start_time`.
/// eases from the start radius down to the end radius, then holds it for the rest of the spinner
pub fn spinner_radius(settings: &DanceSettings, start_time: f64, spinner: &SpinnerDef, time: f64) -> f32 {
    let start_radius = if spinner.spins_required > SPINNER_LONG_SPINS {
        settings.spinner_radius_start
    } else {
        settings.spinner_radius_end
    };

    let settle_time = start_time + spinner.duration * SPINNER_RADIUS_SETTLE;
    if time > settle_time { return settings.spinner_radius_end }

    Easing::EaseInQuadratic.value_at(time, start_radius, settings.spinner_radius_end, start_time, settle_time)
}

/// validate the objects and generate a dance replay for them
pub fn generate_replay(objects: Vec<DanceHitObject>, mods: &GameplayMods, settings: &DanceSettings) -> DanceResult<Replay> {
    let timeline = Timeline::new(objects)?;
    Ok(DanceAutoGenerator::new(&timeline, mods, settings).generate())
}


/// generates an autoplay replay that dances between the objects
pub struct DanceAutoGenerator<'a> {
    timeline: &'a Timeline,
    mods: &'a GameplayMods,
    settings: &'a DanceSettings,

    mover: DanceMover,
    state: MoverState,
    replay: Replay,

    /// alternates keys, resets on breaks
    key_index: usize,
    /// is the current object part of a stream? (only with pippi streams on)
    is_stream: bool,
    screen_bounds: Bounds,
}
impl<'a> DanceAutoGenerator<'a> {
    pub fn new(timeline: &'a Timeline, mods: &'a GameplayMods, settings: &'a DanceSettings) -> Self {
        Self {
            timeline,
            mods,
            settings,

            mover: DanceMover::new(settings.mover),
            state: MoverState::default(),
            replay: Replay::new(),

            key_index: 0,
            is_stream: false,
            screen_bounds: screen_bounds(timeline.playfield()),
        }
    }

    /// generate on tokio's blocking pool, so we dont hold up whoever asked
    pub async fn generate_async(timeline: Arc<Timeline>, mods: GameplayMods, settings: DanceSettings) -> DanceResult<Replay> {
        tokio::task::spawn_blocking(move || {
            DanceAutoGenerator::new(&timeline, &mods, &settings).generate()
        })
        .await
        .map_err(DanceError::from_err)
    }

    pub fn generate(mut self) -> Replay {
        let timeline = self.timeline;
        let frame_delay = self.settings.frame_delay();
        debug!("Generating dance replay for {} objects with the {} mover ({frame_delay:.2}ms frames)", timeline.len(), self.mover.kind());

        let first = timeline.get(0);
        self.replay.add_frame(ReplayFrame::new(REPLAY_START_TIME, first.stacked_pos()));
        self.replay.add_frame(ReplayFrame::new(first.time, first.stacked_pos()));

        for i in 0..timeline.len() - 1 {
            let last_frame_time = self.replay.last_time().unwrap_or(REPLAY_START_TIME);
            self.is_stream = false;
            self.move_to_hit_object(i);

            self.state.object_index = i;
            let segment = Segment::new(timeline, &self.state);
            self.mover.on_object_change(timeline, &segment);

            let travel_start = if timeline.overlaps_next(i) {
                timeline.get(i).time
            } else {
                segment.start_time
            };
            self.add_travel_frames(&segment, travel_start + frame_delay, last_frame_time);
        }

        let last = timeline.last();
        self.move_to_hit_object(timeline.len() - 1);
        self.replay.add_frame(ReplayFrame::new(last.end_time(), last.stacked_end_pos()));

        debug!("Generated {} frames", self.replay.frames().len());
        self.replay
    }

    fn key_frame_delay(&self, time: f64) -> f64 {
        self.mods.apply_to_rate(time, KEY_FRAME_DELAY)
    }

    /// pippi radius for the current frame (-1 for the default size, 0 for none)
    fn stream_offset(&self) -> f32 {
        if self.is_stream { -1.0 } else { 0.0 }
    }

    fn next_key(&mut self, index: usize) -> KeyPress {
        let timeline = self.timeline;

        // placeholder spinners dont count as the previous object
        let previous = (0..index).rev().find(|i| !timeline.get(*i).is_empty_spinner());

        match previous {
            Some(previous) if self.mods.time_delta(timeline.get(previous).time, timeline.get(index).time) <= KEY_RESET_GAP => self.key_index += 1,
            _ => self.key_index = 0,
        }

        if self.key_index % 2 == 0 {
            KeyPress::LeftMouse
        } else {
            KeyPress::RightMouse
        }
    }

    fn move_to_hit_object(&mut self, index: usize) {
        let timeline = self.timeline;
        let h = timeline.get(index);

        if h.is_empty_spinner() {
            trace!("Skipping spinner at {} (no spins required)", h.time);
            return;
        }

        let key = self.next_key(index);
        match &h.kind {
            HitObjectKind::Circle => self.add_circle_frame(index, h, key),
            HitObjectKind::Slider(slider) => self.add_slider_frames(index, h, slider, key),
            HitObjectKind::Spinner(spinner) => self.add_spinner_frames(h, spinner, key),
        }
    }

    fn add_circle_frame(&mut self, index: usize, h: &DanceHitObject, key: KeyPress) {
        self.is_stream = self.settings.pippi_stream
            && self.mover.kind() != DanceMoverKind::Pippi
            && is_stream(h, self.timeline.next_object(index));

        let segment = Segment::new(self.timeline, &self.state);
        let pos = apply_pippi_offset(self.mover.update(&segment, h.time), h.time, self.stream_offset());
        self.replay.add_frame(ReplayFrame::with_key(h.time, pos, key));
    }

    fn add_slider_frames(&mut self, index: usize, h: &DanceHitObject, slider: &SliderDef, key: KeyPress) {
        let head = h.stacked_pos();
        self.replay.add_frame(ReplayFrame::with_key(h.time, head, key));
        self.state.last_pos = head;

        // something else needs the cursor before the slider is done
        if self.timeline.overlaps_next(index) { return }

        let radius = h.radius() * SLIDER_DANCE_RADIUS;
        let mut j = self.key_frame_delay(h.time);
        while j < slider.duration {
            let progress = j / slider.duration;
            let ball = h.stacked_pos_at(progress);

            let pos = if self.settings.slider_dance {
                let v = head + (ball - head) * (progress * SLIDER_MULT) as f32;
                Vector2::new(
                    v.x.clamp(ball.x - radius, ball.x + radius),
                    v.y.clamp(ball.y - radius, ball.y + radius),
                )
            } else {
                ball
            };

            self.replay.add_frame(ReplayFrame::with_key(h.time + j, pos, key));
            self.state.last_pos = pos;

            j += self.key_frame_delay(h.time + j);
        }
    }

    fn add_spinner_frames(&mut self, h: &DanceHitObject, spinner: &SpinnerDef, key: KeyPress) {
        let center = self.timeline.spinner_center();
        let start_pos = h.stacked_pos();
        self.replay.add_frame(ReplayFrame::with_key(h.time, start_pos, key));

        let difference = start_pos - center;
        let mut angle = if difference.length() == 0.0 { 0.0 } else { difference.atan2() };

        let end_time = h.end_time();
        let mut previous_time = h.time;
        let mut time = h.time + self.key_frame_delay(h.time);

        while time < end_time {
            // spin anticlockwise at a fixed real-time speed
            angle -= (self.mods.time_delta(previous_time, time) / SPINNER_TIME_PER_RADIAN) as f32;

            let radius = spinner_radius(self.settings, h.time, spinner, time);
            let pippi = if self.settings.pippi_spinner { radius } else { 0.0 };
            let pos = apply_pippi_offset(center + circle_position(angle, radius), time, pippi);
            self.replay.add_frame(ReplayFrame::with_key(time, pos, key));

            previous_time = time;
            time += self.key_frame_delay(time);
        }
    }

    /// frames between the end of one object and the start of the next
    fn add_travel_frames(&mut self, segment: &Segment, mut time: f64, last_frame_time: f64) {
        let frame_delay = self.settings.frame_delay();
        let park_pos = segment.start.stacked_end_pos();
        let mut parked = false;

        while time < segment.end_time {
            let time_to_next = segment.end_time - time;

            // long way to go, hang around at the last object before setting off
            if time_to_next > PARK_THRESHOLD && last_frame_time < segment.end_time - time_to_next * PARK_RESUME {
                if !parked {
                    trace!("Parking at {park_pos} until {}", segment.end_time - time_to_next * PARK_RESUME);
                    self.replay.add_frame(ReplayFrame::new(segment.start.end_time(), park_pos));
                    parked = true;
                }

                self.replay.add_frame(ReplayFrame::new(segment.end_time - time_to_next * PARK_HOLD, park_pos));
                time = segment.end_time - time_to_next * PARK_RESUME;
                continue;
            }

            let mut pos = apply_pippi_offset(self.mover.update(segment, time), time, self.stream_offset());
            if self.settings.border_bounce {
                pos = self.screen_bounds.bounce(pos);
            }

            self.replay.add_frame(ReplayFrame::new(time, pos));
            time += frame_delay;
        }
    }
}
