use egui::Pos2;

use crate::command::Command;
use crate::document::Document;
use crate::stroke::{DraftPath, DrawingKind, PathKind, StrokeSettings};
use crate::tools::Tool;

/// Draws freehand strokes and the two-point shapes.
#[derive(Debug, Clone)]
pub struct DrawStrokeTool {
    kind: PathKind,
    settings: StrokeSettings,
    // Transient state: the path being drawn (if any)
    current: Option<DraftPath>,
}

impl DrawStrokeTool {
    pub fn new(kind: PathKind, settings: StrokeSettings) -> Self {
        Self {
            kind,
            settings,
            current: None,
        }
    }

    pub fn drawing_kind(&self) -> DrawingKind {
        match self.kind {
            PathKind::Freehand => DrawingKind::Freehand,
            PathKind::Arrow => DrawingKind::Arrow,
            PathKind::Rectangle => DrawingKind::Rectangle,
            PathKind::Circle => DrawingKind::Circle,
            PathKind::Triangle => DrawingKind::Triangle,
        }
    }
}

impl Tool for DrawStrokeTool {
    fn name(&self) -> &'static str {
        "DrawStroke"
    }

    fn on_pointer_down(&mut self, pos: Pos2, _doc: &Document) -> Option<Command> {
        self.current = Some(DraftPath::new(self.kind, pos, self.settings));
        None // Nothing to commit until release
    }

    fn on_pointer_move(&mut self, pos: Pos2, _doc: &Document) -> Option<Command> {
        if let Some(draft) = &mut self.current {
            draft.extend_to(pos);
        }
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &Document) -> Option<Command> {
        let draft = self.current.take()?;
        if draft.is_committable() {
            Some(Command::CommitPath(draft))
        } else {
            log::debug!("Tap without movement, nothing to commit");
            None
        }
    }

    fn draft(&self) -> Option<&DraftPath> {
        self.current.as_ref()
    }
}
