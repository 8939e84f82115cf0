use crate::prelude::PI;

macro_rules! check_bounds {
    ($current:expr, $target:expr, $amount:expr) => {
        if $amount == 0.0 {
            return $current
        }
        if $amount == 1.0 {
            return $target
        }
    };
}


pub trait Interpolation {
    fn lerp(current: Self, target: Self, amount: f32) -> Self;

    // helpers since many of the easing fns are just different powers
    fn ease_in_exp(current: Self, target: Self, amount: f32, pow: i32) -> Self;
    fn ease_out_exp(current: Self, target: Self, amount: f32, pow: i32) -> Self;
    fn ease_inout_exp(current: Self, target: Self, amount: f32, pow: i32) -> Self;

    // sine
    fn easein_sine(current:Self, target: Self, amount: f32) -> Self;
    fn easeout_sine(current:Self, target: Self, amount: f32) -> Self;
    fn easeinout_sine(current:Self, target: Self, amount: f32) -> Self;

    // quadratic
    fn easein_quadratic(current:Self, target: Self, amount: f32) -> Self;
    fn easeout_quadratic(current:Self, target: Self, amount: f32) -> Self;
    fn easeinout_quadratic(current:Self, target: Self, amount: f32) -> Self;

    // cubic
    fn easein_cubic(current:Self, target: Self, amount: f32) -> Self;
    fn easeout_cubic(current:Self, target: Self, amount: f32) -> Self;
    fn easeinout_cubic(current:Self, target: Self, amount: f32) -> Self;
}
impl<T> Interpolation for T where T: Copy + std::ops::Add<Output=T> + std::ops::Sub<Output=T> + std::ops::Mul<f32, Output=T> {
    fn lerp(current:T, target:T, amount:f32) -> T {
        current + (target - current) * amount
    }

    // helpers
    fn ease_in_exp(current:T, target:T, amount:f32, pow:i32) -> T {
        check_bounds!(current, target, amount);
        Self::lerp(current, target, amount.powi(pow))
    }
    fn ease_out_exp(current:T, target:T, amount:f32, pow:i32) -> T {
        check_bounds!(current, target, amount);
        Self::lerp(current, target, 1.0 - (1.0 - amount).powi(pow))
    }
    fn ease_inout_exp(current:T, target:T, amount:f32, pow:i32) -> T {
        check_bounds!(current, target, amount);
        let amount = if amount < 0.5 {
            2.0f32.powi(pow - 1) * amount.powi(pow)
        } else {
            1.0 - (-2.0 * amount + 2.0).powi(pow) / 2.0
        };
        Self::lerp(current, target, amount)
    }

    // sine
    fn easein_sine(current:T, target:T, amount:f32) -> T {
        check_bounds!(current, target, amount);
        Self::lerp(current, target, 1.0 - ((amount * PI) / 2.0).cos())
    }
    fn easeout_sine(current:T, target:T, amount:f32) -> T {
        check_bounds!(current, target, amount);
        Self::lerp(current, target, ((amount * PI) / 2.0).sin())
    }
    fn easeinout_sine(current:T, target:T, amount:f32) -> T {
        check_bounds!(current, target, amount);
        Self::lerp(current, target, -((amount * PI).cos() - 1.0) / 2.0)
    }

    // quad
    fn easein_quadratic(current:T, target:T, amount:f32) -> T {
        Self::ease_in_exp(current, target, amount, 2)
    }
    fn easeout_quadratic(current:T, target:T, amount:f32) -> T {
        Self::ease_out_exp(current, target, amount, 2)
    }
    fn easeinout_quadratic(current:T, target:T, amount:f32) -> T {
        Self::ease_inout_exp(current, target, amount, 2)
    }

    // cubic
    fn easein_cubic(current:T, target:T, amount:f32) -> T {
        Self::ease_in_exp(current, target, amount, 3)
    }
    fn easeout_cubic(current:T, target:T, amount:f32) -> T {
        Self::ease_out_exp(current, target, amount, 3)
    }
    fn easeinout_cubic(current:T, target:T, amount:f32) -> T {
        Self::ease_inout_exp(current, target, amount, 3)
    }
}


#[test]
fn test_easing_bounds() {
    assert_eq!(f32::easein_quadratic(50.0, 20.0, 0.0), 50.0);
    assert_eq!(f32::easein_quadratic(50.0, 20.0, 1.0), 20.0);
    assert_eq!(f32::easein_quadratic(50.0, 20.0, 0.5), 42.5);

    use crate::prelude::Vector2;
    let v = Vector2::lerp(Vector2::ZERO, Vector2::new(10.0, -4.0), 0.5);
    assert_eq!(v, Vector2::new(5.0, -2.0));
}
