use egui::{Pos2, Rect};

/// Shortest distance from `point` to the segment `[start, end]`.
///
/// Projects onto the infinite line, clamps the projection to the segment
/// and measures to the clamped point. A zero-length segment degrades to
/// the distance to `start`.
pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_sq();
    if length_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

/// Inclusive containment test for a disc
pub fn point_in_circle(point: Pos2, center: Pos2, radius: f32) -> bool {
    point.distance_sq(center) <= radius * radius
}

pub fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    a + (b - a) * 0.5
}

/// Bounding box of a set of points, grown by `padding` on every side
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}
