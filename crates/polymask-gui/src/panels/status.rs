use crate::app::PolymaskApp;

/// Height of the status bar, in points.
pub const STATUS_PANEL_HEIGHT: f32 = 44.0;

const HINT: &str = "Left click: add vertex | Right click: undo | S: save mask | Esc: quit";

pub fn show(ctx: &egui::Context, app: &mut PolymaskApp) {
    egui::TopBottomPanel::bottom("status")
        .exact_height(STATUS_PANEL_HEIGHT)
        .show(ctx, |ui| {
        ui.add_space(2.0);

        ui.horizontal(|ui| {
            let (w, h) = app.session.dimensions();
            ui.label(format!("{w}x{h}"));
            ui.separator();
            ui.label(format!("Vertices: {}", app.session.vertices().count()));
            if let Some(ref layout) = app.viewport.layout {
                ui.separator();
                ui.label(format!("Scale: {:.0}%", layout.scale * 100.0));
            }
            if let Some(msg) = app.ui_state.last_log() {
                ui.separator();
                ui.label(msg);
            }
        });

        ui.small(HINT);
        ui.add_space(2.0);
    });
}
