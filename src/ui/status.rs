//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Ort: {}", state.draft.place));

            ui.separator();

            let view = state.map.view();
            ui.label(format!("Zoom: {}", view.zoom));

            ui.separator();

            match view.active_marker {
                Some(at) => ui.label(format!("Marker: {}", at)),
                None => ui.label("Marker: keiner"),
            };

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
            });
        });
    });
}
