use crate::CanvasApp;
use crate::element::{CanvasItemId, ItemPatch};

/// List the persisted items, newest on top.
///
/// Returns the id of the row under the pointer, if any.
pub fn layers_panel(app: &mut CanvasApp, ctx: &egui::Context) -> Option<CanvasItemId> {
    egui::SidePanel::right("layers_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Layers");
            ui.separator();

            let state = app.state();
            let mut hovered = None;

            if state.current_canvas_item_list.is_empty() {
                ui.weak("Draw something to add a layer");
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for item in state.current_canvas_item_list.iter().rev() {
                    let id = item.id;
                    let row = ui.horizontal(|ui| {
                        let is_selected = state.selected_canvas_item_id == Some(id);
                        if ui.radio(is_selected, "").clicked() {
                            app.report(app.dispatcher().set_selected_canvas_item(Some(id)));
                        }
                        ui.label(format!("{} {} #{id}", item.shape.icon(), item.shape.kind_name()));

                        let mut fill_color = item.fill_color;
                        if ui.color_edit_button_srgba(&mut fill_color).changed() {
                            app.report(app.dispatcher().modify_canvas_item(id, ItemPatch::fill_color(fill_color)));
                        }
                        let mut line_color = item.line_color;
                        if ui.color_edit_button_srgba(&mut line_color).changed() {
                            app.report(app.dispatcher().modify_canvas_item(id, ItemPatch::line_color(line_color)));
                        }

                        if ui.small_button("⎘").on_hover_text("Copy").clicked() {
                            let new_id = app.allocate_id();
                            log::debug!("Copying canvas item {id} as {new_id}");
                            app.report(app.dispatcher().copy_canvas_item(id, new_id));
                        }
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            app.report(app.dispatcher().remove_canvas_item(id));
                        }
                    });

                    if row.response.contains_pointer() {
                        hovered = Some(id);
                    }
                }
            });

            hovered
        })
        .inner
}
