use crate::prelude::*;

/// values and equations taken from https://easings.net/
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    // sine
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    // quadratic
    EaseInQuadratic,
    EaseOutQuadratic,
    EaseInOutQuadratic,
    // cubic
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}
impl Easing {
    pub fn run_easing<I:Interpolation>(self, start:I, end:I, amount: f32) -> I {
        match self {
            Easing::Linear => Interpolation::lerp(start, end, amount),

            Easing::EaseInSine => Interpolation::easein_sine(start, end, amount),
            Easing::EaseOutSine => Interpolation::easeout_sine(start, end, amount),
            Easing::EaseInOutSine => Interpolation::easeinout_sine(start, end, amount),

            Easing::EaseInQuadratic => Interpolation::easein_quadratic(start, end, amount),
            Easing::EaseOutQuadratic => Interpolation::easeout_quadratic(start, end, amount),
            Easing::EaseInOutQuadratic => Interpolation::easeinout_quadratic(start, end, amount),

            Easing::EaseInCubic => Interpolation::easein_cubic(start, end, amount),
            Easing::EaseOutCubic => Interpolation::easeout_cubic(start, end, amount),
            Easing::EaseInOutCubic => Interpolation::easeinout_cubic(start, end, amount),
        }
    }

    /// ease a 0..1 progress value
    pub fn ease(self, amount: f32) -> f32 {
        self.run_easing(0.0, 1.0, amount)
    }

    /// get an eased value between `start` and `end` based on where `time` is in `start_time..end_time`
    pub fn value_at(self, time: f64, start: f32, end: f32, start_time: f64, end_time: f64) -> f32 {
        if start_time >= end_time { return end }

        let amount = ((time - start_time) / (end_time - start_time)).clamp(0.0, 1.0) as f32;
        self.run_easing(start, end, amount)
    }
}


#[test]
fn test_value_at() {
    let e = Easing::EaseInQuadratic;
    assert_eq!(e.value_at(0.0, 50.0, 20.0, 0.0, 1000.0), 50.0);
    assert_eq!(e.value_at(1000.0, 50.0, 20.0, 0.0, 1000.0), 20.0);
    assert_eq!(e.value_at(500.0, 50.0, 20.0, 0.0, 1000.0), 42.5);

    // clamped past the end
    assert_eq!(e.value_at(5000.0, 50.0, 20.0, 0.0, 1000.0), 20.0);
    assert_eq!(Easing::Linear.ease(0.25), 0.25);
}
