use crate::serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> <Self as std::ops::Add>::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> <Self as std::ops::Add>::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, num: f64) -> <Self as std::ops::Mul<f64>>::Output {
        Self::new(self.x * num, self.y * num)
    }
}

impl std::convert::From<Point> for Vector {
    fn from(point: Point) -> Self {
        Self::new(point.x as f64, point.y as f64)
    }
}

/// A pixel coordinate. Signed so centering translations can be computed
/// without underflow; clipping to the canvas happens when plotting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "({:>6}, {:>6})", self.x, self.y)
    }
}

/// One link of a chain: an ordered pair of endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment(pub Point, pub Point);

impl Segment {
    pub fn bounds(&self) -> (Point, Point) {
        (
            Point::new(i64::min(self.0.x, self.1.x), i64::min(self.0.y, self.1.y)),
            Point::new(i64::max(self.0.x, self.1.x), i64::max(self.0.y, self.1.y)),
        )
    }

    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self(
            Point::new(self.0.x + dx, self.0.y + dy),
            Point::new(self.1.x + dx, self.1.y + dy),
        )
    }

    /// Distance from an arbitrary position to the nearest point on this
    /// segment. Positions past either endpoint measure to that endpoint,
    /// which gives strokes round caps.
    pub fn distance_to(&self, position: Vector) -> f64 {
        let a = Vector::from(self.0);
        let b = Vector::from(self.1);
        let ab = b - a;
        let len_squared = ab.dot(ab);

        if len_squared == 0.0 {
            return (position - a).len();
        }

        let t = ((position - a).dot(ab) / len_squared).clamp(0.0, 1.0);
        (position - (a + ab * t)).len()
    }
}
