use crate::CanvasApp;

pub fn central_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Create a painting area that fills the remaining space
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ctx, canvas_rect, painter.layer_id());
        app.paint(&painter, canvas_rect);
    });
}
