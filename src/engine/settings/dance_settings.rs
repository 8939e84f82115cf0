use crate::prelude::*;

const MIN_FRAMERATE: f32 = 1.0;
const MAX_FRAMERATE: f32 = 1000.0;

/// settings for the dance autoplay generator
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DanceSettings {
    /// how many travel frames per second to generate
    pub replay_framerate: f32,

    /// spinner radius at the start of long spinners
    pub spinner_radius_start: f32,
    /// spinner radius once the spin has settled
    pub spinner_radius_end: f32,

    /// wander around inside the follow circle instead of tracking the slider ball
    pub slider_dance: bool,
    /// wobble around while spinning
    pub pippi_spinner: bool,
    /// wobble around during streams
    pub pippi_stream: bool,
    /// bounce off of the screen edges instead of leaving the screen
    pub border_bounce: bool,

    pub mover: DanceMoverKind,
}
impl DanceSettings {
    /// time between travel frames, in ms
    pub fn frame_delay(&self) -> f64 {
        let framerate = if self.replay_framerate.is_finite() {
            self.replay_framerate.clamp(MIN_FRAMERATE, MAX_FRAMERATE)
        } else {
            Self::default().replay_framerate
        };

        1000.0 / framerate as f64
    }

    pub fn load(path: impl AsRef<Path>) -> DanceResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// load the settings file, falling back to defaults if it cant be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path)
            .log_error_message("Error reading dance settings, loading defaults")
            .unwrap_or_default()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> DanceResult {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
impl Default for DanceSettings {
    fn default() -> Self {
        Self {
            replay_framerate: 120.0,

            spinner_radius_start: 100.0,
            spinner_radius_end: 40.0,

            slider_dance: false,
            pippi_spinner: false,
            pippi_stream: false,
            border_bounce: true,

            mover: DanceMoverKind::Momentum,
        }
    }
}


#[test]
fn test_partial_settings() {
    let s:DanceSettings = serde_json::from_str(r#"{"replay_framerate": 20, "mover": "Flower"}"#).unwrap();
    assert_eq!(s.frame_delay(), 50.0);
    assert_eq!(s.mover, DanceMoverKind::Flower);
    assert_eq!(s.spinner_radius_end, DanceSettings::default().spinner_radius_end);

    // unknown movers fall back to momentum
    let s:DanceSettings = serde_json::from_str(r#"{"mover": "Teleport"}"#).unwrap();
    assert_eq!(s.mover, DanceMoverKind::Momentum);
}

#[test]
fn test_framerate_limits() {
    let mut s = DanceSettings::default();
    s.replay_framerate = 0.0;
    assert_eq!(s.frame_delay(), 1000.0);

    s.replay_framerate = 1e30;
    assert_eq!(s.frame_delay(), 1.0);

    s.replay_framerate = f32::INFINITY;
    assert_eq!(s.frame_delay(), DanceSettings::default().frame_delay());

    s.replay_framerate = f32::NAN;
    assert_eq!(s.frame_delay(), DanceSettings::default().frame_delay());
}

#[test]
fn test_save_load() {
    let path = std::env::temp_dir().join(format!("tataku_dance_settings_{}.json", std::process::id()));

    let mut settings = DanceSettings::default();
    settings.pippi_stream = true;
    settings.mover = DanceMoverKind::HalfCircle;
    settings.save(&path).unwrap();

    assert_eq!(DanceSettings::load(&path).unwrap(), settings);
    let _ = std::fs::remove_file(&path);

    // missing file gives defaults
    assert_eq!(DanceSettings::load_or_default(&path), DanceSettings::default());
}
