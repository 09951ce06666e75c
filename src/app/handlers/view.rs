//! Handler für die Kartenansicht.

use crate::app::AppState;
use crate::core::LatLon;
use crate::shared::options::{DEFAULT_CENTER, DEFAULT_ZOOM};

/// Initialisiert die Kartenansicht mit der Standard-Chicago-Ansicht.
/// Wiederholte Aufrufe laufen in den Idempotenz-Guard des Controllers.
pub fn initialize_map(state: &mut AppState) {
    let config = state.options.tile_layer_config();
    state.map.initialize(&config, DEFAULT_CENTER, DEFAULT_ZOOM);
}

/// Zentriert die Kartenansicht neu.
pub fn center_view(state: &mut AppState, center: LatLon, zoom: u8) {
    state.map.set_view(center, zoom);
}

/// Ersetzt alle Marker durch genau einen an der Position.
pub fn place_marker(state: &mut AppState, at: LatLon) {
    state.map.place_marker(at);
}

/// Entfernt alle Marker.
pub fn clear_markers(state: &mut AppState) {
    state.map.clear_markers();
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.map.zoom_in();
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.map.zoom_out();
}
