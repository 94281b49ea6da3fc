use crate::TacticsBoardApp;

pub fn central_panel(app: &mut TacticsBoardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            // The whole remaining area is the field
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);
            app.render(&painter, canvas_rect, response.hover_pos());
        });
}
