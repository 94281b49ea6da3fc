use egui::Pos2;

use crate::geometry::{circle_segment_intersections, midpoint, point_in_circle};

/// Hits closer than this to the start of the current piece are ignored,
/// otherwise a vertex sitting on the boundary would yield an empty piece.
const SAME_POINT_EPSILON: f32 = 1e-4;

/// A run of a polyline lying entirely inside or entirely outside the
/// eraser disc
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub points: Vec<Pos2>,
    pub inside: bool,
}

/// Cuts a polyline wherever it crosses the boundary of the disc.
///
/// Each crossing point ends one fragment and starts the next, so it shows
/// up in both. Returns `None` when the polyline neither crosses the disc
/// nor has any part inside it.
pub fn split_polyline(points: &[Pos2], center: Pos2, radius: f32) -> Option<Vec<Fragment>> {
    let (&first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut pieces: Vec<Vec<Pos2>> = Vec::new();
    let mut current = vec![first];
    let mut crossed = false;

    for (&a, &b) in points.iter().zip(rest) {
        let mut ended_on_b = false;

        for hit in circle_segment_intersections(a, b, center, radius) {
            if current.len() == 1 && current[0].distance(hit.point) < SAME_POINT_EPSILON {
                continue;
            }
            current.push(hit.point);
            pieces.push(std::mem::replace(&mut current, vec![hit.point]));
            crossed = true;
            ended_on_b = hit.point.distance(b) < SAME_POINT_EPSILON;
        }

        if !ended_on_b {
            current.push(b);
        }
    }

    // A trailing piece holding only the last crossing point adds nothing
    if current.len() > 1 || pieces.is_empty() {
        pieces.push(current);
    }

    let fragments: Vec<Fragment> = pieces
        .into_iter()
        .map(|points| Fragment {
            inside: lies_inside(&points, center, radius),
            points,
        })
        .collect();

    let touched = crossed || fragments.iter().any(|fragment| fragment.inside);
    touched.then_some(fragments)
}

/// Fragments never cross the boundary, so testing the middle of the first
/// non-degenerate segment classifies the whole run.
fn lies_inside(points: &[Pos2], center: Pos2, radius: f32) -> bool {
    let probe = points
        .windows(2)
        .find(|pair| pair[0].distance(pair[1]) >= SAME_POINT_EPSILON)
        .map(|pair| midpoint(pair[0], pair[1]))
        .or_else(|| points.first().copied());

    probe.is_some_and(|p| point_in_circle(p, center, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_straight_line_through_disc() {
        let fragments = split_polyline(&[pos2(0.0, 0.0), pos2(100.0, 0.0)], pos2(50.0, 0.0), 10.0).unwrap();
        assert_eq!(fragments.len(), 3);
        assert_eq!(
            fragments.iter().map(|f| f.inside).collect::<Vec<_>>(),
            [false, true, false]
        );
        assert!((fragments[1].points[0].x - 40.0).abs() < 1e-4);
        assert!((fragments[1].points[1].x - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_point_count_grows_by_two_per_crossing() {
        // Zig-zag that enters and leaves the disc twice
        let points = [
            pos2(0.0, 0.0),
            pos2(50.0, 0.0),
            pos2(50.0, 100.0),
            pos2(100.0, 100.0),
            pos2(100.0, 0.0),
            pos2(200.0, 0.0),
        ];
        let fragments = split_polyline(&points, pos2(75.0, 0.0), 30.0).unwrap();
        let crossings = fragments.len() - 1;
        let total: usize = fragments.iter().map(|f| f.points.len()).sum();
        assert_eq!(crossings, 4);
        assert_eq!(total, points.len() + 2 * crossings);
    }

    #[test]
    fn test_far_polyline_is_untouched() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(20.0, 5.0)];
        assert!(split_polyline(&points, pos2(100.0, 100.0), 10.0).is_none());
    }

    #[test]
    fn test_polyline_inside_disc() {
        let points = [pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 0.0)];
        let fragments = split_polyline(&points, pos2(1.0, 0.0), 5.0).unwrap();
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].inside);
        assert_eq!(fragments[0].points, points);
    }

    #[test]
    fn test_start_on_boundary_has_no_empty_piece() {
        let points = [pos2(40.0, 0.0), pos2(100.0, 0.0)];
        let fragments = split_polyline(&points, pos2(50.0, 0.0), 10.0).unwrap();
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].inside);
        assert!(!fragments[1].inside);
        assert!(fragments.iter().all(|f| f.points.len() == 2));
    }

    #[test]
    fn test_single_point_is_not_split() {
        assert!(split_polyline(&[pos2(0.0, 0.0)], pos2(0.0, 0.0), 5.0).is_none());
    }
}
