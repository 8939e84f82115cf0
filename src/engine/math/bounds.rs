use crate::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Bounds {
    pub pos: Vector2,
    pub size: Vector2,
}
impl Bounds {
    pub fn new(pos: Vector2, size: Vector2) -> Self {
        Self { pos, size }
    }

    /// check if these bounds contain a point (edges included)
    pub fn contains(&self, p:Vector2) -> bool {
        p.x >= self.pos.x && p.x <= self.pos.x + self.size.x && p.y >= self.pos.y && p.y <= self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vector2 {
        self.pos + self.size / 2.0
    }

    /// grow (or shrink) these bounds around their center
    pub fn scaled_around_center(&self, scale: Vector2) -> Self {
        let size = self.size * scale;
        Self::new(self.pos + (self.size - size) / 2.0, size)
    }

    /// reflect a point back into these bounds.
    /// 
    /// each axis is folded like a triangle wave, so a point that travels
    /// past an edge comes back in as if it bounced off of it
    pub fn bounce(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            fold_axis(p.x, self.pos.x, self.size.x),
            fold_axis(p.y, self.pos.y, self.size.y),
        )
    }
}

fn fold_axis(v: f32, min: f32, size: f32) -> f32 {
    if v >= min && v <= min + size { return v }
    if size <= 0.0 { return min }

    // off the low edge mirrors up, then both sides fold the same way
    let x = (v - min).abs();
    let m = (x / size) as i64;
    let x = x % size;

    if m % 2 == 0 { min + x } else { min + size - x }
}


#[test]
fn test_bounce() {
    let b = Bounds::new(Vector2::new(-10.0, 0.0), Vector2::new(100.0, 50.0));

    // inside is untouched
    for p in [Vector2::new(-10.0, 0.0), Vector2::new(90.0, 50.0), Vector2::new(33.3, 12.1)] {
        assert_eq!(b.bounce(p), p);
    }

    // past the right edge reflects back in
    assert!(b.bounce(Vector2::new(100.0, 25.0)).almost_eq(Vector2::new(80.0, 25.0), 1e-3));
    // past the left edge
    assert!(b.bounce(Vector2::new(-15.0, 25.0)).almost_eq(Vector2::new(-5.0, 25.0), 1e-3));
    // past the bottom
    assert!(b.bounce(Vector2::new(0.0, 60.0)).almost_eq(Vector2::new(0.0, 40.0), 1e-3));

    // two widths out lands back on the same side
    assert!(b.bounce(Vector2::new(210.0, 25.0)).almost_eq(Vector2::new(10.0, 25.0), 1e-3));
}
