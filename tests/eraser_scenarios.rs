use std::sync::Arc;

use egui::{Pos2, pos2};
use tactics_board::{
    DrawingKind, DrawingSession, Eraser, PathEntity, PathId, PathKind, PathRef, StrokeSettings,
    Surface,
};

fn path(id: &str, kind: PathKind, points: Vec<Pos2>) -> PathRef {
    PathEntity::new_ref(PathId::new(id), kind, points, StrokeSettings::default())
}

fn session_with_line() -> DrawingSession {
    let mut session = DrawingSession::new(Surface::new(200.0, 100.0));
    session.set_drawing_mode(true);
    session.begin_gesture(pos2(0.0, 0.0), DrawingKind::Freehand, &StrokeSettings::default());
    session.update_gesture(pos2(100.0, 0.0));
    session.end_gesture(pos2(100.0, 0.0));
    session
}

fn eraser_settings(opacity: f32) -> StrokeSettings {
    let mut settings = StrokeSettings::default().with_opacity(opacity);
    settings.apply_kind_defaults(DrawingKind::Eraser);
    settings
}

#[test]
fn test_soft_erase_splits_line_in_three() {
    let mut session = session_with_line();
    let line_id = session.paths()[0].id().clone();

    // Width 6 gives radius 12, opacity 0.5 gives strength 0.5
    session.begin_gesture(pos2(50.0, 0.0), DrawingKind::Eraser, &eraser_settings(0.5));
    session.end_gesture(pos2(50.0, 0.0));

    let paths = session.paths();
    assert_eq!(paths.len(), 3);

    let opacities: Vec<f32> = paths.iter().map(|p| p.opacity()).collect();
    assert_eq!(opacities, [1.0, 0.5, 1.0]);

    let middle = paths[1].points();
    assert!((middle[0].x - 38.0).abs() < 1e-3);
    assert!((middle[middle.len() - 1].x - 62.0).abs() < 1e-3);

    assert!(paths.iter().all(|p| p.id() != &line_id));
    assert!(paths.iter().all(|p| p.kind() == PathKind::Freehand));
}

#[test]
fn test_split_matches_exact_radius() {
    let line = path("line", PathKind::Freehand, vec![pos2(0.0, 0.0), pos2(100.0, 0.0)]);
    let result = Eraser::new(10.0, 0.5).erase(pos2(50.0, 0.0), &[line]).unwrap();

    assert_eq!(result.len(), 3);
    let opacities: Vec<f32> = result.iter().map(|p| p.opacity()).collect();
    assert_eq!(opacities, [1.0, 0.5, 1.0]);
    let expected = [[0.0, 40.0], [40.0, 60.0], [60.0, 100.0]];
    for (path, xs) in result.iter().zip(expected) {
        assert_eq!(path.points().len(), 2);
        for (point, x) in path.points().iter().zip(xs) {
            assert!((point.x - x).abs() < 1e-3, "{point:?} vs {x}");
            assert!(point.y.abs() < 1e-3);
        }
    }
}

#[test]
fn test_full_strength_removes_inside_piece() {
    let line = path("line", PathKind::Freehand, vec![pos2(0.0, 0.0), pos2(100.0, 0.0)]);
    let result = Eraser::new(10.0, 1.0).erase(pos2(50.0, 0.0), &[line]).unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|p| p.opacity() == 1.0));
}

#[test]
fn test_repeated_passes_fade_monotonically() {
    let mut paths = vec![path("line", PathKind::Freehand, vec![pos2(0.0, 0.0), pos2(100.0, 0.0)])];
    let eraser = Eraser::new(10.0, 0.3);
    let covers_center = |p: &PathRef| p.points()[0].x < 50.0 && p.points()[p.points().len() - 1].x > 50.0;
    let mut last_opacity = 1.0;

    // 0.7, 0.4, 0.1: each pass strictly fades the piece under the eraser
    for _ in 0..3 {
        paths = eraser.erase(pos2(50.0, 0.0), &paths).unwrap();
        let inside: Vec<_> = paths.iter().filter(|p| covers_center(p)).collect();
        assert_eq!(inside.len(), 1);
        assert!(inside[0].opacity() < last_opacity);
        last_opacity = inside[0].opacity();
    }
    assert!((last_opacity - 0.1).abs() < 1e-4);

    // The fourth pass takes it below the drop threshold
    paths = eraser.erase(pos2(50.0, 0.0), &paths).unwrap();
    assert!(!paths.iter().any(|p| covers_center(p)));
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.opacity() == 1.0));
}

#[test]
fn test_short_arrow_under_eraser_is_deleted() {
    let arrow = path("arrow", PathKind::Arrow, vec![pos2(0.0, 0.0), pos2(10.0, 10.0)]);
    let result = Eraser::new(5.0, 0.5).erase(pos2(5.0, 5.0), &[arrow]).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_fragment_ids_stay_short_over_long_drag() {
    let mut paths = vec![path("line", PathKind::Freehand, vec![pos2(0.0, 0.0), pos2(1000.0, 0.0)])];
    let eraser = Eraser::new(10.0, 1.0);

    for step in 0..400 {
        if let Some(next) = eraser.erase(pos2(step as f32 * 2.0, 0.0), &paths) {
            paths = next;
        }
    }

    assert_eq!(paths.len(), 1);
    let max_len = paths.iter().map(|p| p.id().as_str().len()).max().unwrap();
    assert!(max_len <= 64, "id grew to {max_len} chars");
    assert!(paths.iter().all(|p| p.id().root() == "line"));
}

#[test]
fn test_arrow_near_shaft_is_deleted() {
    let mut session = DrawingSession::new(Surface::new(200.0, 100.0));
    session.set_drawing_mode(true);
    session.begin_gesture(pos2(0.0, 50.0), DrawingKind::Arrow, &StrokeSettings::default());
    session.update_gesture(pos2(150.0, 50.0));
    session.end_gesture(pos2(150.0, 50.0));
    assert_eq!(session.paths().len(), 1);

    session.begin_gesture(pos2(75.0, 55.0), DrawingKind::Eraser, &eraser_settings(1.0));
    session.end_gesture(pos2(75.0, 55.0));
    assert!(session.paths().is_empty());
}

#[test]
fn test_rectangle_removed_near_its_center() {
    let rect = path("rect", PathKind::Rectangle, vec![pos2(0.0, 0.0), pos2(100.0, 100.0)]);
    let result = Eraser::new(10.0, 0.1).erase(pos2(50.0, 50.0), &[rect]).unwrap();
    assert!(result.is_empty(), "shapes are removed whole regardless of strength");
}

#[test]
fn test_far_eraser_is_a_no_op() {
    let paths = vec![
        path("line", PathKind::Freehand, vec![pos2(0.0, 0.0), pos2(100.0, 0.0)]),
        path("circle", PathKind::Circle, vec![pos2(0.0, 0.0), pos2(20.0, 20.0)]),
    ];
    assert!(Eraser::new(10.0, 1.0).erase(pos2(150.0, 150.0), &paths).is_none());
}

#[test]
fn test_eraser_gesture_on_empty_space_keeps_same_paths() {
    let mut session = session_with_line();
    let before = Arc::clone(&session.paths()[0]);

    session.begin_gesture(pos2(150.0, 80.0), DrawingKind::Eraser, &eraser_settings(1.0));
    session.update_gesture(pos2(160.0, 90.0));
    session.end_gesture(pos2(160.0, 90.0));

    assert_eq!(session.paths().len(), 1);
    assert!(Arc::ptr_eq(&session.paths()[0], &before));
}

#[test]
fn test_dragging_eraser_along_line() {
    let mut session = session_with_line();

    // Radius 12, sampled every 5px from x=20 to x=80
    session.begin_gesture(pos2(20.0, 0.0), DrawingKind::Eraser, &eraser_settings(1.0));
    for step in 1..=12 {
        session.update_gesture(pos2(20.0 + step as f32 * 5.0, 0.0));
    }
    session.end_gesture(pos2(80.0, 0.0));

    // Only the untouched ends remain, at full opacity
    assert!(!session.paths().is_empty());
    for path in session.paths() {
        assert_eq!(path.opacity(), 1.0);
        for point in path.points() {
            assert!(point.x <= 8.0 + 1e-3 || point.x >= 92.0 - 1e-3, "{point:?} should be erased");
        }
    }

    // The whole drag is a single undo step
    assert!(session.undo());
    assert_eq!(session.paths().len(), 1);
    assert_eq!(session.paths()[0].points().len(), 2);
}
