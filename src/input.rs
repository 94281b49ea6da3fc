use egui::{Context, Pos2, Rect};

/// Pointer events for the drawing surface, in surface-local coordinates
/// (origin at the canvas' top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the press is held
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match *self {
            Self::PointerDown { position }
            | Self::PointerMove { position }
            | Self::PointerUp { position } => position,
        }
    }
}

/// Raw primary-pointer state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Screen position, if the pointer is known
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            pos: i.pointer.interact_pos(),
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
        })
    }
}

/// Turns per-frame pointer state into canvas [`InputEvent`]s.
///
/// A gesture only starts when the press lands on the canvas; once started
/// it keeps reporting positions even when the pointer leaves the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    tracking: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context, canvas: Rect) -> Vec<InputEvent> {
        self.process_sample(PointerSample::from_egui(ctx), canvas)
    }

    pub fn process_sample(&mut self, sample: PointerSample, canvas: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = |pos: Pos2| (pos - canvas.min).to_pos2();

        if sample.pressed {
            if let Some(pos) = sample.pos.filter(|pos| canvas.contains(*pos)) {
                self.tracking = true;
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::PointerDown { position: local(pos) });
            }
        } else if self.tracking && sample.down {
            if let Some(pos) = sample.pos.filter(|pos| Some(*pos) != self.last_pointer_pos) {
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::PointerMove { position: local(pos) });
            }
        }

        if self.tracking && (sample.released || (!sample.down && !sample.pressed)) {
            let pos = sample.pos.or(self.last_pointer_pos).unwrap_or(canvas.min);
            self.tracking = false;
            self.last_pointer_pos = None;
            events.push(InputEvent::PointerUp { position: local(pos) });
        }

        events
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
}
