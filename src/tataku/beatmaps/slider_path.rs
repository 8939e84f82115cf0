use crate::prelude::*;

const BEZIER_DETAIL: usize = 25;
const CATMULL_DETAIL: usize = 50;
const CIRCLE_SEGMENT_LENGTH: f32 = 4.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub enum PathType {
    Linear,
    Bezier,
    Catmull,
    PerfectCurve,
}

/// the serialized form of a slider path
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct SliderPathDef {
    pub kind: PathType,
    /// control points, relative to the slider's head
    pub control_points: Vec<Vector2>,
    /// length the path should be, if the map says so
    #[serde(default)]
    pub expected_distance: Option<f32>,
}

/// a slider's path, flattened to a polyline
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(from = "SliderPathDef", into = "SliderPathDef")]
pub struct SliderPath {
    def: SliderPathDef,

    points: Vec<Vector2>,
    /// length along the path at each point
    lengths: Vec<f32>,
}
impl SliderPath {
    pub fn new(kind: PathType, control_points: Vec<Vector2>, expected_distance: Option<f32>) -> Self {
        Self::from(SliderPathDef { kind, control_points, expected_distance })
    }
    pub fn linear(control_points: Vec<Vector2>) -> Self {
        Self::new(PathType::Linear, control_points, None)
    }

    pub fn kind(&self) -> PathType { self.def.kind }
    pub fn control_points(&self) -> &[Vector2] { &self.def.control_points }

    /// total length of the path
    pub fn distance(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// position along the path, where `progress` is 0..1 from head to tail
    pub fn position_at(&self, progress: f64) -> Vector2 {
        let progress = progress.clamp(0.0, 1.0) as f32;
        self.position_at_length(self.distance() * progress)
    }

    pub fn position_at_length(&self, length: f32) -> Vector2 {
        if self.points.is_empty() { return Vector2::ZERO }
        if length <= 0.0 { return self.points[0] }

        let i = self.lengths.partition_point(|l| *l < length);
        if i >= self.points.len() { return self.points[self.points.len() - 1] }
        if i == 0 { return self.points[0] }

        let length_next = self.lengths[i];
        let length_previous = self.lengths[i - 1];
        let res = self.points[i - 1];

        if length_next == length_previous { return res }

        res + (self.points[i] - res) * ((length - length_previous) / (length_next - length_previous))
    }

    fn calculate(&mut self) {
        let cp = &self.def.control_points;

        self.points = match (self.def.kind, cp.len()) {
            (_, 0) => Vec::new(),
            (_, 1) => vec![cp[0]],
            (PathType::Linear, _) => cp.clone(),
            (PathType::Catmull, _) => catmull(cp),
            (PathType::PerfectCurve, 3) => perfect(cp).unwrap_or_else(|| bezier(cp)),
            (PathType::Bezier | PathType::PerfectCurve, _) => bezier(cp),
        };

        self.lengths = Vec::with_capacity(self.points.len());
        let mut total = 0.0;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 { total += p.distance(self.points[i - 1]) }
            self.lengths.push(total);
        }

        if let Some(expected) = self.def.expected_distance {
            self.fit_to_distance(expected);
        }
    }

    /// trim or extend the path so its length matches the expected distance
    fn fit_to_distance(&mut self, expected: f32) {
        if self.points.len() < 2 || expected <= 0.0 { return }

        // trim any points past the expected distance
        while self.lengths.len() > 2 && self.lengths[self.lengths.len() - 2] >= expected {
            self.lengths.pop();
            self.points.pop();
        }

        let last = self.points.len() - 1;
        let prev_length = self.lengths[last - 1];
        let dir = (self.points[last] - self.points[last - 1]).normalize();
        if dir == Vector2::ZERO { return }

        self.points[last] = self.points[last - 1] + dir * (expected - prev_length);
        self.lengths[last] = expected;
    }
}

impl From<SliderPathDef> for SliderPath {
    fn from(def: SliderPathDef) -> Self {
        let mut path = Self {
            def,
            points: Vec::new(),
            lengths: Vec::new(),
        };
        path.calculate();
        path
    }
}
impl From<SliderPath> for SliderPathDef {
    fn from(path: SliderPath) -> Self {
        path.def
    }
}


/// binomial coefficient
fn cpn(p: usize, n: usize) -> f32 {
    if p > n { return 0.0 }

    let p = p.min(n - p);
    let mut out = 1.0;
    for i in 1..=p {
        out *= (n - p + i) as f32 / i as f32;
    }
    out
}

/// bezier curves, split into sub-curves at repeated points
fn bezier(points: &[Vector2]) -> Vec<Vector2> {
    let mut result = Vec::new();
    let mut start = 0;

    for end in 1..points.len() {
        if end - start > 1 && points[end] == points[end - 1] {
            bezier_segment(&mut result, &points[start..end]);
            start = end;
        }
    }
    bezier_segment(&mut result, &points[start..]);

    result
}

fn bezier_segment(result: &mut Vec<Vector2>, points: &[Vector2]) {
    if points.is_empty() { return }

    let n = points.len() - 1;
    let steps = (BEZIER_DETAIL * points.len()).max(2);

    for step in 0..=steps {
        let t = step as f32 / steps as f32;

        let point = points.iter().enumerate().fold(Vector2::ZERO, |acc, (p, point)| {
            let factor = cpn(p, n) * (1.0 - t).powi((n - p) as i32) * t.powi(p as i32);
            acc + *point * factor
        });

        // sub-curves share their end points
        if result.last() != Some(&point) {
            result.push(point);
        }
    }
}

fn catmull(points: &[Vector2]) -> Vec<Vector2> {
    let order = points.len();
    let mut result = Vec::with_capacity((order - 1) * CATMULL_DETAIL + 1);

    for i in 0..order - 1 {
        let v1 = points[i.saturating_sub(1)];
        let v2 = points[i];
        let v3 = points[i + 1];
        let v4 = if i + 2 < order { points[i + 2] } else { v3 * 2.0 - v2 };

        for c in 0..CATMULL_DETAIL {
            result.push(catmull_point(v1, v2, v3, v4, c as f32 / CATMULL_DETAIL as f32));
        }
    }
    result.push(points[order - 1]);

    result
}

fn catmull_point(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2, t: f32) -> Vector2 {
    let t2 = t * t;
    let t3 = t2 * t;

    (
        p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3
    ) * 0.5
}

/// arc through 3 points. none if the points are on a line
fn perfect(points: &[Vector2]) -> Option<Vec<Vector2>> {
    let (a, b, c) = (points[0], points[1], points[2]);

    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < 0.001 { return None }

    let a_sq = a.length_squared();
    let b_sq = b.length_squared();
    let c_sq = c.length_squared();
    let center = Vector2::new(
        (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
        (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
    );
    let radius = a.distance(center);

    let theta_start = (a - center).atan2();
    let mut theta_end = (c - center).atan2();
    while theta_end < theta_start { theta_end += 2.0 * PI }

    let mut direction = 1.0;
    let mut theta_range = theta_end - theta_start;

    // decide which way around the circle we go, based on which side b is on
    let ortho_a_to_c = c - a;
    let ortho_a_to_c = Vector2::new(ortho_a_to_c.y, -ortho_a_to_c.x);
    if ortho_a_to_c.dot(b - a) < 0.0 {
        direction = -direction;
        theta_range = 2.0 * PI - theta_range;
    }

    let count = ((theta_range * radius / CIRCLE_SEGMENT_LENGTH).ceil() as usize).max(2);
    Some((0..=count).map(|i| {
        let theta = theta_start + direction * (i as f32 / count as f32) * theta_range;
        center + Vector2::from_angle(theta) * radius
    }).collect())
}


#[test]
fn test_linear_path() {
    let path = SliderPath::linear(vec![Vector2::ZERO, Vector2::new(100.0, 0.0), Vector2::new(100.0, 100.0)]);
    assert_eq!(path.distance(), 200.0);
    assert_eq!(path.position_at(0.0), Vector2::ZERO);
    assert_eq!(path.position_at(0.25), Vector2::new(50.0, 0.0));
    assert_eq!(path.position_at(0.75), Vector2::new(100.0, 50.0));
    assert_eq!(path.position_at(1.0), Vector2::new(100.0, 100.0));
}

#[test]
fn test_expected_distance() {
    // trimmed
    let path = SliderPath::new(PathType::Linear, vec![Vector2::ZERO, Vector2::new(100.0, 0.0), Vector2::new(100.0, 100.0)], Some(50.0));
    assert_eq!(path.distance(), 50.0);
    assert!(path.position_at(1.0).almost_eq(Vector2::new(50.0, 0.0), 1e-4));

    // extended
    let path = SliderPath::new(PathType::Linear, vec![Vector2::ZERO, Vector2::new(100.0, 0.0)], Some(150.0));
    assert!(path.position_at(1.0).almost_eq(Vector2::new(150.0, 0.0), 1e-4));
}

#[test]
fn test_curved_paths() {
    // half circle from (0,0) through (50,50) to (100,0)
    let path = SliderPath::new(PathType::PerfectCurve, vec![Vector2::ZERO, Vector2::new(50.0, 50.0), Vector2::new(100.0, 0.0)], None);
    assert!(path.position_at(1.0).almost_eq(Vector2::new(100.0, 0.0), 1e-2));
    assert!(path.position_at(0.5).almost_eq(Vector2::new(50.0, 50.0), 0.5));
    assert!((path.distance() - 50.0 * PI).abs() < 1.0);

    // collinear perfect curves fall back to a bezier (a straight line here)
    let path = SliderPath::new(PathType::PerfectCurve, vec![Vector2::ZERO, Vector2::new(50.0, 0.0), Vector2::new(100.0, 0.0)], None);
    assert!(path.position_at(1.0).almost_eq(Vector2::new(100.0, 0.0), 1e-3));

    let path = SliderPath::new(PathType::Bezier, vec![Vector2::ZERO, Vector2::new(50.0, 100.0), Vector2::new(100.0, 0.0)], None);
    assert!(path.position_at(1.0).almost_eq(Vector2::new(100.0, 0.0), 1e-3));
    assert!(path.position_at(0.5).almost_eq(Vector2::new(50.0, 50.0), 1.0));

    let path = SliderPath::new(PathType::Catmull, vec![Vector2::ZERO, Vector2::new(50.0, 20.0), Vector2::new(100.0, 0.0)], None);
    assert!(path.position_at(1.0).almost_eq(Vector2::new(100.0, 0.0), 1e-3));
}
