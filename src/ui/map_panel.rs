//! Karten-Panel: zeichnet die Tile-Surface und die Anbieter-Attribution.

use std::sync::{Arc, Mutex};

use crate::app::AppState;
use crate::render::TileLayer;

/// Rendert die Karte im zentralen Panel.
pub fn render_map_panel(ctx: &egui::Context, state: &AppState, tile_layer: &Arc<Mutex<TileLayer>>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let Ok(mut layer) = tile_layer.lock() else {
                log::error!("Tile-Layer-Lock fehlgeschlagen (Mutex vergiftet)");
                return;
            };

            if !state.map.is_initialized() {
                ui.painter().text(
                    ui.max_rect().center(),
                    egui::Align2::CENTER_CENTER,
                    "Karte nicht initialisiert",
                    egui::FontId::proportional(16.0),
                    egui::Color32::GRAY,
                );
                return;
            }

            layer.show(ui);
        });

    // Attribution des Tile-Anbieters, rechts unten über der Karte
    egui::Area::new(egui::Id::new("map_attribution"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-8.0, -24.0])
        .show(ctx, |ui| {
            ui.hyperlink_to(
                state.options.tile_attribution_text.clone(),
                state.options.tile_attribution_url.clone(),
            );
        });
}
