use egui::Pos2;

/// Below this squared length a segment is treated as a point and never
/// intersects anything.
const MIN_SEGMENT_LENGTH_SQ: f32 = 1e-9;

/// A point where a segment crosses a circle boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: Pos2,
    /// Position along the segment, in `[0, 1]`
    pub t: f32,
}

/// Where the segment `[p1, p2]` crosses the circle boundary.
///
/// Substitutes `p1 + t * (p2 - p1)` into the circle equation and keeps
/// the roots with `t` in `[0, 1]`, ascending. Returns one hit for a
/// tangent and nothing when both ends lie inside the circle.
pub fn circle_segment_intersections(
    p1: Pos2,
    p2: Pos2,
    center: Pos2,
    radius: f32,
) -> Vec<Intersection> {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.dot(d);
    if a < MIN_SEGMENT_LENGTH_SQ {
        return Vec::new();
    }
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let root = discriminant.sqrt();
    let roots = if root == 0.0 {
        [Some(-b / (2.0 * a)), None]
    } else {
        [Some((-b - root) / (2.0 * a)), Some((-b + root) / (2.0 * a))]
    };

    roots
        .into_iter()
        .flatten()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| Intersection {
            point: p1 + d * t,
            t,
        })
        .collect()
}
