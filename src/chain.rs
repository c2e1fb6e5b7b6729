use crate::geometry::{Point, Segment};
use rand::Rng;

/// Uniform random point with both coordinates in [padding, size - padding].
/// Callers validate `2 * padding < size` up front, so the range is never
/// empty.
pub fn random_point(padding: i64, size: i64, rng: &mut impl Rng) -> Point {
    Point::new(
        rng.gen_range(padding..=size - padding),
        rng.gen_range(padding..=size - padding),
    )
}

/// Generate `count` connected segments: the first takes two independent
/// random endpoints, each later one starts where the previous ended.
pub fn generate(count: usize, padding: i64, size: i64, rng: &mut impl Rng) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(count);
    let mut anchor = random_point(padding, size, rng);

    for _ in 0..count {
        let next = random_point(padding, size, rng);
        segments.push(Segment(anchor, next));
        anchor = next;
    }

    segments
}

pub fn bounds(segments: &[Segment]) -> Option<(Point, Point)> {
    segments
        .iter()
        .map(|s| s.bounds())
        .reduce(|(min, max), (smin, smax)| {
            (
                Point::new(i64::min(min.x, smin.x), i64::min(min.y, smin.y)),
                Point::new(i64::max(max.x, smax.x), i64::max(max.y, smax.y)),
            )
        })
}

/// Translate the chain so its bounding box sits centered in a canvas of
/// `size` pixels. Odd margins leave a one-pixel bias toward the origin.
pub fn recenter(segments: Vec<Segment>, size: i64) -> Vec<Segment> {
    let (min, max) = match bounds(&segments) {
        Some(b) => b,
        None => return segments,
    };

    let delta_x = min.x - (size - max.x);
    let delta_y = min.y - (size - max.y);

    segments
        .into_iter()
        .map(|s| s.translated(-delta_x / 2, -delta_y / 2))
        .collect()
}
