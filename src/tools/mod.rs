use egui::Pos2;

use crate::command::Command;
use crate::document::Document;
use crate::eraser::EraserConfig;
use crate::stroke::{DraftPath, DrawingKind, StrokeSettings};

mod draw_stroke_tool;
mod eraser_tool;

pub use draw_stroke_tool::DrawStrokeTool;
pub use eraser_tool::EraserTool;

/// Tool trait defines how a single pointer gesture turns into document
/// changes.
///
/// Tools only read the document; anything they want changed comes back as
/// a [`Command`] for the session to execute.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas.
    fn on_pointer_down(&mut self, pos: Pos2, doc: &Document) -> Option<Command>;

    /// Handle pointer movement while the pointer is held down.
    fn on_pointer_move(&mut self, pos: Pos2, doc: &Document) -> Option<Command>;

    /// Handle pointer release. Return a Command to **finalize** the gesture.
    fn on_pointer_up(&mut self, pos: Pos2, doc: &Document) -> Option<Command>;

    /// The path being drawn, if this tool draws
    fn draft(&self) -> Option<&DraftPath> {
        None
    }
}

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    DrawStroke(DrawStrokeTool),
    Eraser(EraserTool),
}

impl ToolType {
    /// Builds the tool for a gesture of `kind`, capturing `settings` by value.
    pub fn for_gesture(kind: DrawingKind, settings: StrokeSettings, eraser: &EraserConfig) -> Self {
        match kind.path_kind() {
            Some(path_kind) => Self::DrawStroke(DrawStrokeTool::new(path_kind, settings)),
            None => Self::Eraser(EraserTool::new(eraser.eraser(&settings))),
        }
    }

    pub fn kind(&self) -> DrawingKind {
        match self {
            Self::DrawStroke(tool) => tool.drawing_kind(),
            Self::Eraser(_) => DrawingKind::Eraser,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::DrawStroke(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, doc: &Document) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_down(pos, doc),
            Self::Eraser(tool) => tool.on_pointer_down(pos, doc),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, doc: &Document) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_move(pos, doc),
            Self::Eraser(tool) => tool.on_pointer_move(pos, doc),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, doc: &Document) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_up(pos, doc),
            Self::Eraser(tool) => tool.on_pointer_up(pos, doc),
        }
    }

    fn draft(&self) -> Option<&DraftPath> {
        match self {
            Self::DrawStroke(tool) => tool.draft(),
            Self::Eraser(tool) => tool.draft(),
        }
    }
}
