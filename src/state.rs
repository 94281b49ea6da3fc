use egui::{Pos2, Vec2, pos2};

use crate::command::Command;
use crate::config::BoardConfig;
use crate::document::Document;
use crate::eraser::EraserConfig;
use crate::history::History;
use crate::input::InputEvent;
use crate::stroke::{DraftPath, DrawingKind, PathRef, StrokeSettings};
use crate::tools::{Tool, ToolType};

/// Where the gesture controller is between pointer events
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Active {
        tool: ToolType,
    },
}

impl GestureState {
    pub fn kind(&self) -> Option<DrawingKind> {
        match self {
            Self::Idle => None,
            Self::Active { tool } => Some(tool.kind()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Size of the drawing surface. Pointer positions are clamped into it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self::new(size.x, size.y)
    }

    pub fn clamp(&self, pos: Pos2) -> Pos2 {
        pos2(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }
}

/// A drawing session: the committed paths, their undo history and the
/// controller that turns pointer gestures into changes.
///
/// Every gesture start snapshots the document first, so one undo reverts
/// exactly one gesture (or one clear).
#[derive(Debug)]
pub struct DrawingSession {
    document: Document,
    history: History,
    gesture: GestureState,
    surface: Surface,
    drawing_mode: bool,
    eraser_config: EraserConfig,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

impl DrawingSession {
    pub fn new(surface: Surface) -> Self {
        Self::with_config(surface, &BoardConfig::default())
    }

    pub fn with_config(surface: Surface, config: &BoardConfig) -> Self {
        Self {
            document: Document::new(),
            history: History::new(config.history_capacity),
            gesture: GestureState::Idle,
            surface,
            drawing_mode: false,
            eraser_config: config.eraser.clone(),
        }
    }

    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Outside drawing mode the session ignores pointer input. Leaving
    /// drawing mode mid-gesture drops the gesture without committing.
    pub fn set_drawing_mode(&mut self, enabled: bool) {
        if !enabled && self.gesture.is_active() {
            log::debug!("Drawing mode disabled, dropping active gesture");
            self.gesture = GestureState::Idle;
        }
        self.drawing_mode = enabled;
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    pub fn eraser_config(&self) -> &EraserConfig {
        &self.eraser_config
    }

    /// Pointer pressed. `kind` and `settings` are fixed for the whole
    /// gesture.
    pub fn begin_gesture(&mut self, pos: Pos2, kind: DrawingKind, settings: &StrokeSettings) {
        if !self.drawing_mode {
            return;
        }
        if self.gesture.is_active() {
            log::warn!("Gesture started while another was active, finishing the old one");
            self.end_gesture(pos);
        }

        self.history.push(self.document.snapshot());

        let pos = self.surface.clamp(pos);
        let mut tool = ToolType::for_gesture(kind, *settings, &self.eraser_config);
        log::debug!("{} gesture started at {:?}", tool.name(), pos);

        let command = tool.on_pointer_down(pos, &self.document);
        self.execute(command);
        self.gesture = GestureState::Active { tool };
    }

    /// Pointer moved while pressed.
    pub fn update_gesture(&mut self, pos: Pos2) {
        if !self.drawing_mode {
            return;
        }
        let pos = self.surface.clamp(pos);
        let GestureState::Active { tool } = &mut self.gesture else {
            return;
        };

        let command = tool.on_pointer_move(pos, &self.document);
        self.execute(command);
    }

    /// Pointer released. Commits whatever the tool drew.
    pub fn end_gesture(&mut self, pos: Pos2) {
        if !self.drawing_mode {
            return;
        }
        let pos = self.surface.clamp(pos);
        let GestureState::Active { mut tool } = std::mem::take(&mut self.gesture) else {
            return;
        };

        let command = tool.on_pointer_up(pos, &self.document);
        self.execute(command);
        log::debug!("{} gesture ended, {} paths", tool.name(), self.document.len());
    }

    pub fn handle_event(&mut self, event: &InputEvent, kind: DrawingKind, settings: &StrokeSettings) {
        let position = event.position();
        match event {
            InputEvent::PointerDown { .. } => self.begin_gesture(position, kind, settings),
            InputEvent::PointerMove { .. } => self.update_gesture(position),
            InputEvent::PointerUp { .. } => self.end_gesture(position),
        }
    }

    /// Restores the state from before the most recent gesture or clear.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.document.replace_all(snapshot);
                log::info!("Undo, {} paths restored", self.document.len());
                true
            }
            None => false,
        }
    }

    /// Removes every path. Undoable like a gesture.
    pub fn clear(&mut self) {
        self.history.push(self.document.snapshot());
        self.execute(Some(Command::Clear));
        log::info!("Cleared all drawings");
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn paths(&self) -> &[PathRef] {
        self.document.paths()
    }

    /// The path being drawn by the active gesture, drawn above all paths
    pub fn draft(&self) -> Option<&DraftPath> {
        match &self.gesture {
            GestureState::Active { tool } => tool.draft(),
            GestureState::Idle => None,
        }
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn execute(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            log::trace!("Executing {}", command.name());
            command.execute(&mut self.document);
        }
    }
}
