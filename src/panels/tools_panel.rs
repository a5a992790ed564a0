use crate::CanvasApp;
use crate::tools::Tool;

pub fn tools_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let state = app.state();
            for tool in Tool::ALL {
                let is_selected = state.current_action == Some(tool);
                if ui.selectable_label(is_selected, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {tool}");
                    app.report(app.dispatcher().update_current_action_from_input(tool.name()));
                }
            }
            ui.separator();

            ui.heading("Style");
            let mut fill_color = state.current_action_fill_color;
            ui.horizontal(|ui| {
                ui.label("Fill");
                if ui.color_edit_button_srgba(&mut fill_color).changed() {
                    app.report(app.dispatcher().update_current_action_fill(fill_color));
                }
            });

            let mut line_color = state.current_action_line_color;
            ui.horizontal(|ui| {
                ui.label("Line");
                if ui.color_edit_button_srgba(&mut line_color).changed() {
                    app.report(app.dispatcher().update_current_action_line(line_color));
                }
            });

            let mut line_width = state.current_action_line_width;
            if ui
                .add(egui::Slider::new(&mut line_width, 0.5..=20.0).text("Width"))
                .changed()
            {
                app.report(app.dispatcher().update_current_action_line_width(line_width));
            }
            ui.separator();

            ui.checkbox(app.show_debug_mut(), "Show debug");
        });
}
