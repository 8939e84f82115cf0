use crate::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub enum KeyPress {
    LeftMouse,
    RightMouse,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct ReplayFrame {
    /// map time, in ms
    pub time: f64,
    pub pos: Vector2,
    /// the key being held, if any
    pub key: Option<KeyPress>,
}
impl ReplayFrame {
    pub fn new(time: f64, pos: Vector2) -> Self {
        Self { time, pos, key: None }
    }
    pub fn with_key(time: f64, pos: Vector2, key: KeyPress) -> Self {
        Self { time, pos, key: Some(key) }
    }
}

/// a generated replay. frames are always in time order
#[derive(Clone, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub struct Replay {
    frames: Vec<ReplayFrame>,
}
impl Replay {
    pub fn new() -> Self { Self::default() }

    pub fn frames(&self) -> &[ReplayFrame] { &self.frames }
    pub fn into_frames(self) -> Vec<ReplayFrame> { self.frames }
    pub fn last_frame(&self) -> Option<&ReplayFrame> { self.frames.last() }
    pub fn last_time(&self) -> Option<f64> { self.frames.last().map(|f| f.time) }

    /// add a frame to the end of the replay.
    /// frames that would go back in time are dropped
    pub fn add_frame(&mut self, frame: ReplayFrame) {
        if let Some(last) = self.last_time() {
            if frame.time < last {
                trace!("dropping frame at {} (last frame is at {last})", frame.time);
                return;
            }
        }

        self.frames.push(frame);
    }
}


#[test]
fn test_frames_stay_ordered() {
    let mut replay = Replay::new();
    replay.add_frame(ReplayFrame::new(0.0, Vector2::ZERO));
    replay.add_frame(ReplayFrame::with_key(10.0, Vector2::ONE, KeyPress::LeftMouse));
    replay.add_frame(ReplayFrame::new(5.0, Vector2::ZERO));
    replay.add_frame(ReplayFrame::new(10.0, Vector2::ZERO));

    let times = replay.frames().iter().map(|f| f.time).collect::<Vec<_>>();
    assert_eq!(times, vec![0.0, 10.0, 10.0]);
    assert_eq!(replay.frames()[1].key, Some(KeyPress::LeftMouse));
}
