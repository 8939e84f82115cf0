use std::ops::*;

#[derive(Copy, Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f32;2]", into = "[f32;2]")]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}
impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// angle of this vector from the positive x axis (y down, like the playfield)
    pub fn atan2(self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn from_angle(a:f32) -> Self {
        Self::new(a.cos(), a.sin())
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn normalize(self) -> Self {
        let magnitude = self.length();
        if magnitude == 0.0 { self }
        else { self / magnitude }
    }

    pub fn distance(&self, p2: Self) -> f32 {
        self.distance_squared(p2).sqrt()
    }
    pub fn distance_squared(&self, p2: Self) -> f32 {
        (self.x - p2.x).powi(2) + (self.y - p2.y).powi(2)
    }

    /// angle of the line from self to `other`
    pub fn angle_to(&self, other: Self) -> f32 {
        (other - *self).atan2()
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// check if both coords are within `epsilon` of the other vector
    pub fn almost_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<[f32;2]> for Vector2 {
    fn from(value: [f32;2]) -> Self {
        Self::new(value[0], value[1])
    }
}
impl From<Vector2> for [f32;2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl Default for Vector2 {
    fn default() -> Self { Self::ZERO }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

// negative nancy
impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

// add
impl Add<f32> for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x + rhs, self.y + rhs)
    }
}
impl Add<Vector2> for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// sub
impl Sub<f32> for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: f32) -> Self::Output {
        self + -rhs
    }
}
impl Sub<Vector2> for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// mul
impl Mul<f32> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}
impl Mul<Vector2> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

// div
impl Div<f32> for Vector2 {
    type Output = Vector2;
    fn div(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}


#[test]
fn test_vector_math() {
    let a = Vector2::new(3.0, 4.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(a.normalize(), Vector2::new(0.6, 0.8));
    assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    assert_eq!(a - Vector2::ONE, Vector2::new(2.0, 3.0));

    assert!(Vector2::from_angle(std::f32::consts::FRAC_PI_2).almost_eq(Vector2::new(0.0, 1.0), 1e-6));
    assert_eq!(Vector2::ZERO.angle_to(Vector2::new(0.0, -2.0)), -std::f32::consts::FRAC_PI_2);

    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[3.0,4.0]");
}
