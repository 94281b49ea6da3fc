use egui::{Button, Color32, Sense, Slider, Stroke, vec2};

use crate::TacticsBoardApp;
use crate::stroke::{
    DrawingKind, MAX_OPACITY, MAX_STROKE_WIDTH, MIN_OPACITY, MIN_STROKE_WIDTH, PALETTE,
};

const SWATCH_SIZE: f32 = 22.0;

pub fn tools_panel(app: &mut TacticsBoardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tactics Board");

            let mut drawing_mode = app.is_drawing_mode();
            if ui.toggle_value(&mut drawing_mode, "✏ Drawing mode").changed() {
                log::info!("Drawing mode {}", if drawing_mode { "on" } else { "off" });
                app.set_drawing_mode(drawing_mode);
            }
            ui.separator();

            ui.label("Tool");
            for kind in DrawingKind::ALL {
                if ui.selectable_label(app.kind() == kind, kind.label()).clicked() {
                    app.select_kind(kind);
                }
            }
            ui.separator();

            stroke_settings(app, ui);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(app.can_undo(), Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.button("Clear all").clicked() {
                    app.clear();
                }
            });

            let session = app.session();
            ui.label(format!(
                "Paths: {}   Undo steps: {}/{}",
                session.paths().len(),
                session.history().len(),
                session.history().capacity()
            ));
        });
}

fn stroke_settings(app: &mut TacticsBoardApp, ui: &mut egui::Ui) {
    let settings = app.settings_mut();

    ui.label("Colour");
    ui.horizontal_wrapped(|ui| {
        for color in PALETTE {
            let (rect, response) = ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
            ui.painter().rect_filled(rect, 3.0, color);
            if settings.color == color {
                ui.painter().rect_stroke(rect.expand(2.0), 3.0, Stroke::new(2.0, Color32::LIGHT_BLUE));
            }
            if response.clicked() {
                settings.color = color;
            }
        }
        ui.color_edit_button_srgba(&mut settings.color);
    });

    ui.add(
        Slider::new(&mut settings.stroke_width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH)
            .step_by(1.0)
            .text("Width"),
    );
    ui.add(
        Slider::new(&mut settings.opacity, MIN_OPACITY..=MAX_OPACITY)
            .step_by(0.1)
            .text("Opacity"),
    );
    ui.checkbox(&mut settings.is_dashed, "Dashed");

    let mut highlighter = settings.is_highlighter;
    if ui.checkbox(&mut highlighter, "Highlighter").changed() {
        settings.toggle_highlighter();
    }
}
