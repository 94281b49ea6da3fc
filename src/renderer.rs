use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2, pos2};
use std::f32::consts::PI;

use crate::geometry::midpoint;
use crate::state::DrawingSession;
use crate::stroke::{PathKind, StrokeSettings};

pub const DASH_LENGTH: f32 = 10.0;
pub const GAP_LENGTH: f32 = 5.0;

const ARROW_HEAD_MIN_LENGTH: f32 = 15.0;
const ARROW_HEAD_PER_WIDTH: f32 = 4.0;
const ARROW_HEAD_ANGLE: f32 = PI / 6.0;
// Only used when a circle has to be dashed
const CIRCLE_SEGMENTS: usize = 64;

/// A drawable outline in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline(Vec<Pos2>),
    Polygon(Vec<Pos2>),
    Circle { center: Pos2, radius: f32 },
    /// Wing, tip, wing. Never dashed.
    ArrowHead([Pos2; 3]),
}

/// Outlines for a path of `kind`. Shapes only look at the first and last
/// point; a freehand path needs at least two points to show anything.
pub fn primitives(kind: PathKind, points: &[Pos2], stroke_width: f32) -> Vec<Primitive> {
    let (Some(&start), Some(&end)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    match kind {
        PathKind::Freehand if points.len() < 2 => Vec::new(),
        PathKind::Freehand => vec![Primitive::Polyline(points.to_vec())],
        PathKind::Arrow => {
            let angle = (end - start).angle();
            let head = (stroke_width * ARROW_HEAD_PER_WIDTH).max(ARROW_HEAD_MIN_LENGTH);
            let wing = |a: f32| end - Vec2::angled(a) * head;
            vec![
                Primitive::Polyline(vec![start, end]),
                Primitive::ArrowHead([wing(angle - ARROW_HEAD_ANGLE), end, wing(angle + ARROW_HEAD_ANGLE)]),
            ]
        }
        PathKind::Rectangle => {
            let rect = Rect::from_two_pos(start, end);
            vec![Primitive::Polygon(vec![
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
            ])]
        }
        PathKind::Circle => vec![Primitive::Circle {
            center: midpoint(start, end),
            radius: start.distance(end) / 2.0,
        }],
        PathKind::Triangle => {
            let rect = Rect::from_two_pos(start, end);
            vec![Primitive::Polygon(vec![
                pos2(rect.center().x, rect.min.y),
                rect.left_bottom(),
                rect.right_bottom(),
            ])]
        }
    }
}

/// egui shapes for one path, shifted by `offset` into screen space
pub fn path_shapes(kind: PathKind, points: &[Pos2], settings: &StrokeSettings, offset: Vec2) -> Vec<Shape> {
    let stroke = Stroke::new(settings.stroke_width, settings.render_color());
    primitives(kind, points, settings.stroke_width)
        .into_iter()
        .flat_map(|primitive| primitive_shapes(primitive, stroke, settings.is_dashed, offset))
        .collect()
}

fn primitive_shapes(primitive: Primitive, stroke: Stroke, dashed: bool, offset: Vec2) -> Vec<Shape> {
    let shift = |points: Vec<Pos2>| -> Vec<Pos2> { points.into_iter().map(|p| p + offset).collect() };

    match primitive {
        Primitive::Polyline(points) => {
            let points = shift(points);
            if dashed {
                Shape::dashed_line(&points, stroke, DASH_LENGTH, GAP_LENGTH)
            } else {
                vec![Shape::line(points, stroke)]
            }
        }
        Primitive::Polygon(points) => {
            let mut points = shift(points);
            if dashed {
                if let Some(&first) = points.first() {
                    points.push(first);
                }
                Shape::dashed_line(&points, stroke, DASH_LENGTH, GAP_LENGTH)
            } else {
                vec![Shape::closed_line(points, stroke)]
            }
        }
        Primitive::Circle { center, radius } => {
            let center = center + offset;
            if dashed {
                let points: Vec<Pos2> = (0..=CIRCLE_SEGMENTS)
                    .map(|i| {
                        let angle = i as f32 / CIRCLE_SEGMENTS as f32 * 2.0 * PI;
                        center + Vec2::angled(angle) * radius
                    })
                    .collect();
                Shape::dashed_line(&points, stroke, DASH_LENGTH, GAP_LENGTH)
            } else {
                vec![Shape::circle_stroke(center, radius, stroke)]
            }
        }
        Primitive::ArrowHead(points) => vec![Shape::line(shift(points.to_vec()), stroke)],
    }
}

/// Paints the field and every path of a session
#[derive(Debug, Clone)]
pub struct Renderer {
    field_color: Color32,
    cursor_color: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            field_color: Color32::from_rgb(0x2E, 0x7D, 0x32),
            cursor_color: Color32::from_white_alpha(160),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, painter: &Painter, rect: Rect, session: &DrawingSession) {
        painter.rect_filled(rect, 0.0, self.field_color);

        let offset = rect.min.to_vec2();
        for path in session.paths() {
            painter.extend(path_shapes(path.kind(), path.points(), path.settings(), offset));
        }

        // The draft goes last so it sits above everything committed
        if let Some(draft) = session.draft() {
            painter.extend(path_shapes(draft.kind(), draft.points(), draft.settings(), offset));
        }
    }

    /// Outline of the eraser disc under the pointer
    pub fn render_eraser_cursor(&self, painter: &Painter, center: Pos2, radius: f32) {
        painter.circle_stroke(center, radius, Stroke::new(1.0, self.cursor_color));
    }
}
