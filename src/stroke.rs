use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Default drawing colour (a bright yellow that reads well on grass)
pub const DEFAULT_COLOR: Color32 = Color32::from_rgb(0xFF, 0xEB, 0x3B);
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;

/// Colours offered in the tools panel
pub const PALETTE: [Color32; 7] = [
    DEFAULT_COLOR,
    Color32::from_rgb(0xFF, 0x52, 0x52),
    Color32::from_rgb(0x44, 0x8A, 0xFF),
    Color32::from_rgb(0x69, 0xF0, 0xAE),
    Color32::from_rgb(0xE0, 0x40, 0xFB),
    Color32::WHITE,
    Color32::BLACK,
];

pub const MIN_STROKE_WIDTH: f32 = 2.0;
pub const MAX_STROKE_WIDTH: f32 = 10.0;
pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 1.0;

// Values applied when the user picks a kind in the tools panel
const DRAW_KIND_WIDTH: f32 = 5.0;
const ERASER_KIND_WIDTH: f32 = 6.0;
const HIGHLIGHTER_WIDTH: f32 = 12.0;
const HIGHLIGHTER_OPACITY: f32 = 0.5;

/// Visual settings captured by value when a path is created.
///
/// Paths own their own copy, so editing the current settings never
/// changes paths that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    pub color: Color32,
    pub stroke_width: f32,
    /// In `(0, 1]`
    pub opacity: f32,
    pub is_dashed: bool,
    /// Only drives the width/opacity preset in [`Self::toggle_highlighter`];
    /// rendering and erasing ignore it.
    pub is_highlighter: bool,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            opacity: 1.0,
            is_dashed: false,
            is_highlighter: false,
        }
    }
}

impl StrokeSettings {
    /// Copy of these settings with a different opacity
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    /// Resets width and opacity to the defaults for a freshly selected kind.
    pub fn apply_kind_defaults(&mut self, kind: DrawingKind) {
        if kind == DrawingKind::Eraser {
            self.stroke_width = ERASER_KIND_WIDTH;
        } else {
            self.stroke_width = DRAW_KIND_WIDTH;
            self.opacity = 1.0;
        }
    }

    pub fn toggle_highlighter(&mut self) {
        self.is_highlighter = !self.is_highlighter;
        if self.is_highlighter {
            self.opacity = HIGHLIGHTER_OPACITY;
            self.stroke_width = HIGHLIGHTER_WIDTH;
        } else {
            self.opacity = 1.0;
            self.stroke_width = DRAW_KIND_WIDTH;
        }
    }

    /// Stroke colour with the opacity folded into the alpha channel
    pub fn render_color(&self) -> Color32 {
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.color.r(), self.color.g(), self.color.b(), alpha)
    }
}

/// What a pointer gesture does. `Eraser` selects behaviour only and never
/// ends up stored in a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawingKind {
    #[default]
    Freehand,
    Arrow,
    Rectangle,
    Circle,
    Triangle,
    Eraser,
}

impl DrawingKind {
    pub const ALL: [DrawingKind; 6] = [
        DrawingKind::Freehand,
        DrawingKind::Arrow,
        DrawingKind::Rectangle,
        DrawingKind::Circle,
        DrawingKind::Triangle,
        DrawingKind::Eraser,
    ];

    /// The storable kind, or `None` for the eraser
    pub fn path_kind(self) -> Option<PathKind> {
        match self {
            Self::Freehand => Some(PathKind::Freehand),
            Self::Arrow => Some(PathKind::Arrow),
            Self::Rectangle => Some(PathKind::Rectangle),
            Self::Circle => Some(PathKind::Circle),
            Self::Triangle => Some(PathKind::Triangle),
            Self::Eraser => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Freehand => "✏ Free",
            Self::Arrow => "➡ Arrow",
            Self::Rectangle => "▭ Rect",
            Self::Circle => "○ Circle",
            Self::Triangle => "△ Triangle",
            Self::Eraser => "⌫ Eraser",
        }
    }
}

/// Kind of a stored path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    Freehand,
    Arrow,
    Rectangle,
    Circle,
    Triangle,
}

impl PathKind {
    /// Shapes are defined by their first and last point only.
    pub fn is_shape(self) -> bool {
        !matches!(self, Self::Freehand)
    }
}

/// Joins the parts of an eraser fragment id. Never appears in a uuid.
pub const FRAGMENT_ID_SEPARATOR: char = '~';

/// Identifier of a committed path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathId(String);

impl PathId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the committed path this one was split from, or the id itself
    /// for a path that was never erased.
    pub fn root(&self) -> &str {
        self.0
            .split_once(FRAGMENT_ID_SEPARATOR)
            .map_or(self.0.as_str(), |(root, _)| root)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable, committed path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntity {
    id: PathId,
    points: Vec<Pos2>,
    kind: PathKind,
    settings: StrokeSettings,
}

/// Paths are shared between the store and history snapshots
pub type PathRef = Arc<PathEntity>;

impl PathEntity {
    pub fn new(id: PathId, kind: PathKind, points: Vec<Pos2>, settings: StrokeSettings) -> Self {
        Self {
            id,
            points,
            kind,
            settings,
        }
    }

    pub fn new_ref(
        id: PathId,
        kind: PathKind,
        points: Vec<Pos2>,
        settings: StrokeSettings,
    ) -> PathRef {
        Arc::new(Self::new(id, kind, points, settings))
    }

    pub fn id(&self) -> &PathId {
        &self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn settings(&self) -> &StrokeSettings {
        &self.settings
    }

    pub fn opacity(&self) -> f32 {
        self.settings.opacity
    }

    /// First point of the path
    pub fn start(&self) -> Option<Pos2> {
        self.points.first().copied()
    }

    /// Last point of the path; for shapes this is the dragged corner
    pub fn end(&self) -> Option<Pos2> {
        self.points.last().copied()
    }
}

/// The path being drawn by an active gesture. Lives in the gesture
/// controller, never in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPath {
    kind: PathKind,
    points: Vec<Pos2>,
    settings: StrokeSettings,
}

impl DraftPath {
    pub fn new(kind: PathKind, start: Pos2, settings: StrokeSettings) -> Self {
        Self {
            kind,
            points: vec![start],
            settings,
        }
    }

    /// Grows the draft to a new pointer sample.
    ///
    /// Freehand drafts append; shapes keep their start and move their end.
    pub fn extend_to(&mut self, pos: Pos2) {
        if self.kind.is_shape() && self.points.len() > 1 {
            self.points[1] = pos;
        } else {
            self.points.push(pos);
        }
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn settings(&self) -> &StrokeSettings {
        &self.settings
    }

    /// A tap never grew past its first point and is not worth keeping.
    pub fn is_committable(&self) -> bool {
        self.points.len() > 1
    }

    pub fn finish(self, id: PathId) -> PathEntity {
        PathEntity::new(id, self.kind, self.points, self.settings)
    }
}
