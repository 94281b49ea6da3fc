use egui::{Key, KeyboardShortcut, Modifiers, Painter, Pos2, Rect};

use crate::config::BoardConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::{DrawingSession, Surface};
use crate::stroke::{DrawingKind, StrokeSettings};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

/// We derive Deserialize/Serialize so the tool settings survive a restart.
/// Drawings themselves are never persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct TacticsBoardApp {
    settings: StrokeSettings,
    kind: DrawingKind,
    drawing_mode: bool,

    #[serde(skip)]
    session: DrawingSession,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
}

impl Default for TacticsBoardApp {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

impl TacticsBoardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        let mut app = Self::with_config(config);

        let restored: Option<Self> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        if let Some(saved) = restored {
            log::info!("Restored tool settings ({:?})", saved.kind);
            app.settings = saved.settings;
            app.kind = saved.kind;
            app.set_drawing_mode(saved.drawing_mode);
        }

        app
    }

    pub fn with_config(config: BoardConfig) -> Self {
        let mut session = DrawingSession::with_config(Surface::default(), &config);
        session.set_drawing_mode(true);

        Self {
            settings: config.default_settings,
            kind: DrawingKind::default(),
            drawing_mode: true,
            session,
            input: InputHandler::new(),
            renderer: Renderer::new(),
        }
    }

    pub fn kind(&self) -> DrawingKind {
        self.kind
    }

    /// Switches the drawing kind and resets width and opacity for it.
    pub fn select_kind(&mut self, kind: DrawingKind) {
        if self.kind != kind {
            log::info!("Drawing kind selected: {:?}", kind);
        }
        self.kind = kind;
        self.settings.apply_kind_defaults(kind);
    }

    pub fn settings(&self) -> &StrokeSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut StrokeSettings {
        &mut self.settings
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    pub fn set_drawing_mode(&mut self, enabled: bool) {
        self.drawing_mode = enabled;
        self.session.set_drawing_mode(enabled);
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn undo(&mut self) {
        if !self.session.undo() {
            log::debug!("Nothing to undo");
        }
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Feeds this frame's pointer input on `canvas` into the session.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: Rect) {
        self.session.set_surface(Surface::from_size(canvas.size()));
        for event in self.input.process_input(ctx, canvas) {
            self.session.handle_event(&event, self.kind, &self.settings);
        }
    }

    pub fn render(&self, painter: &Painter, canvas: Rect, hover: Option<Pos2>) {
        self.renderer.render(painter, canvas, &self.session);

        if self.drawing_mode && self.kind == DrawingKind::Eraser {
            if let Some(pos) = hover {
                let radius = self.session.eraser_config().radius_for(self.settings.stroke_width);
                self.renderer.render_eraser_cursor(painter, pos, radius);
            }
        }
    }
}

impl eframe::App for TacticsBoardApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.undo();
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_kind_applies_defaults() {
        let mut app = TacticsBoardApp::default();
        app.settings_mut().opacity = 0.4;
        app.select_kind(DrawingKind::Arrow);
        assert_eq!(app.kind(), DrawingKind::Arrow);
        assert_eq!(app.settings().opacity, 1.0);
        assert_eq!(app.settings().stroke_width, 5.0);
    }

    #[test]
    fn test_drawing_mode_reaches_session() {
        let mut app = TacticsBoardApp::default();
        assert!(app.session().is_drawing_mode());
        app.set_drawing_mode(false);
        assert!(!app.session().is_drawing_mode());
    }

    #[test]
    fn test_persisted_fields_round_trip() {
        let mut app = TacticsBoardApp::default();
        app.select_kind(DrawingKind::Circle);
        app.settings_mut().is_dashed = true;

        let json = serde_json::to_string(&app).unwrap();
        let restored: TacticsBoardApp = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.kind(), DrawingKind::Circle);
        assert!(restored.settings().is_dashed);
    }
}
