use crate::prelude::*;

/// lowest playback rate allowed
const MIN_RATE: f64 = 0.01;

/// a mod that changes how fast the map plays
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub enum RateAdjust {
    /// constant speed (double time is 1.5, half time is 0.75)
    Fixed(f64),
    /// speed moves from `initial_rate` to `final_rate` between `start_time` and `end_time` (wind up/down)
    Ramp {
        initial_rate: f64,
        final_rate: f64,
        start_time: f64,
        end_time: f64,
    },
}
impl RateAdjust {
    pub const DOUBLE_TIME: Self = Self::Fixed(1.5);
    pub const HALF_TIME: Self = Self::Fixed(0.75);

    pub fn rate_at(&self, time: f64) -> f64 {
        match *self {
            Self::Fixed(rate) => rate,
            Self::Ramp { initial_rate, final_rate, start_time, end_time } => {
                if end_time <= start_time { return final_rate }

                let amount = ((time - start_time) / (end_time - start_time)).clamp(0.0, 1.0);
                initial_rate + (final_rate - initial_rate) * amount
            }
        }
    }
}

/// the mods that matter to autoplay generation
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayMods {
    pub rates: Vec<RateAdjust>,
}
impl GameplayMods {
    pub fn new() -> Self { Self::default() }

    pub fn with_rate(mut self, rate: RateAdjust) -> Self {
        self.rates.push(rate);
        self
    }

    /// combined playback rate at `time`
    pub fn rate_at(&self, time: f64) -> f64 {
        self.rates.iter()
            .fold(1.0, |rate, m| rate * m.rate_at(time))
            .max(MIN_RATE)
    }

    /// scale a value by the playback rate at `time`
    pub fn apply_to_rate(&self, time: f64, value: f64) -> f64 {
        value * self.rate_at(time)
    }

    /// how much real time passes between two map times
    pub fn time_delta(&self, start_time: f64, end_time: f64) -> f64 {
        (end_time - start_time) / self.rate_at(start_time)
    }
}


#[test]
fn test_rates() {
    let nomod = GameplayMods::new();
    assert_eq!(nomod.time_delta(100.0, 400.0), 300.0);
    assert_eq!(nomod.apply_to_rate(0.0, 10.0), 10.0);

    let dt = GameplayMods::new().with_rate(RateAdjust::DOUBLE_TIME);
    assert_eq!(dt.time_delta(0.0, 450.0), 300.0);
    assert_eq!(dt.apply_to_rate(0.0, 10.0), 15.0);

    let wind_up = GameplayMods::new().with_rate(RateAdjust::Ramp {
        initial_rate: 1.0,
        final_rate: 2.0,
        start_time: 0.0,
        end_time: 1000.0,
    });
    assert_eq!(wind_up.rate_at(-50.0), 1.0);
    assert_eq!(wind_up.rate_at(500.0), 1.5);
    assert_eq!(wind_up.rate_at(5000.0), 2.0);
}
