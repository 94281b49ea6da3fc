use egui::Pos2;

use crate::command::Command;
use crate::document::Document;
use crate::eraser::Eraser;
use crate::tools::Tool;

/// Applies the soft eraser on press and on every move sample.
#[derive(Debug, Clone)]
pub struct EraserTool {
    eraser: Eraser,
    last_position: Option<Pos2>,
}

impl EraserTool {
    pub fn new(eraser: Eraser) -> Self {
        Self {
            eraser,
            last_position: None,
        }
    }

    pub fn eraser(&self) -> &Eraser {
        &self.eraser
    }

    pub fn last_position(&self) -> Option<Pos2> {
        self.last_position
    }

    fn erase_at(&mut self, pos: Pos2, doc: &Document) -> Option<Command> {
        self.last_position = Some(pos);
        self.eraser.erase(pos, doc.paths()).map(Command::ReplaceAll)
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn on_pointer_down(&mut self, pos: Pos2, doc: &Document) -> Option<Command> {
        self.erase_at(pos, doc)
    }

    fn on_pointer_move(&mut self, pos: Pos2, doc: &Document) -> Option<Command> {
        self.erase_at(pos, doc)
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &Document) -> Option<Command> {
        self.last_position = None;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{DraftPath, PathKind, StrokeSettings};
    use egui::pos2;

    fn document_with_line() -> Document {
        let mut document = Document::new();
        let mut draft = DraftPath::new(PathKind::Freehand, pos2(0.0, 0.0), StrokeSettings::default());
        draft.extend_to(pos2(100.0, 0.0));
        document.commit_draft(draft);
        document
    }

    #[test]
    fn test_erases_on_press_and_move() {
        let document = document_with_line();
        let mut tool = EraserTool::new(Eraser::new(10.0, 0.5));

        let pressed = tool.on_pointer_down(pos2(50.0, 0.0), &document);
        assert!(matches!(pressed, Some(Command::ReplaceAll(ref paths)) if paths.len() == 3));
        assert_eq!(tool.last_position(), Some(pos2(50.0, 0.0)));

        // Nothing within reach
        assert!(tool.on_pointer_move(pos2(50.0, 80.0), &document).is_none());

        assert!(tool.on_pointer_up(pos2(50.0, 80.0), &document).is_none());
        assert_eq!(tool.last_position(), None);
        assert_eq!(tool.eraser().radius, 10.0);
    }
}
