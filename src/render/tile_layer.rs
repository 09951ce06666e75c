//! Tile-Rendering der Karte über walkers (OpenStreetMap-Slippy-Tiles).
//!
//! `TileLayer` ist die produktive `MapSurface`-Implementierung. Tile-Fetches
//! laufen innerhalb von walkers fire-and-forget; fehlgeschlagene Downloads
//! bleiben einfach leere Kacheln und erreichen den Rest des Systems nicht.

use std::sync::{Arc, Mutex};

use walkers::sources::{Attribution, TileSource};
use walkers::{lat_lon, HttpTiles, Map, MapMemory, Plugin, Position, Projector, TileId};

use crate::core::{LatLon, MapSurface, TileLayerConfig};
use crate::shared::options::{
    DEFAULT_CENTER, MARKER_COLOR, MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_OUTLINE_COLOR,
    MARKER_SHADOW_SIZE,
};

/// Tile-Quelle über einer URL-Schablone mit `{s}`-Subdomain-Rotation.
#[derive(Debug, Clone)]
struct TemplateTileSource {
    url_template: String,
    // Attribution verlangt 'static; die Strings werden beim Anhängen des
    // Layers genau einmal geleakt
    attribution_text: &'static str,
    attribution_url: &'static str,
}

impl TileSource for TemplateTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        let subdomain = ["a", "b", "c"][((tile_id.x + tile_id.y) % 3) as usize];
        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution_text,
            url: self.attribution_url,
            logo_light: None,
            logo_dark: None,
        }
    }
}

/// Produktive Rendering-Surface: walkers-Tiles plus Marker-Overlay.
pub struct TileLayer {
    ctx: egui::Context,
    tiles: Option<HttpTiles>,
    memory: MapMemory,
    center: Position,
    markers: Vec<Position>,
}

impl TileLayer {
    /// Erstellt die Surface; der Tile-Layer selbst wird erst bei
    /// `attach_tile_layer` angehängt.
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            tiles: None,
            memory: MapMemory::default(),
            center: lat_lon(DEFAULT_CENTER.lat, DEFAULT_CENTER.lon),
            markers: Vec::new(),
        }
    }

    /// Zeichnet die Karte in das aktuelle Ui.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(tiles) = self.tiles.as_mut() else {
            // Vor attach_tile_layer gibt es nichts zu zeichnen
            return;
        };

        let mut map = Map::new(Some(tiles), &mut self.memory, self.center);
        if !self.markers.is_empty() {
            map = map.with_plugin(MarkerPin {
                positions: self.markers.clone(),
            });
        }
        ui.add(map);
    }
}

impl MapSurface for TileLayer {
    fn attach_tile_layer(&mut self, config: &TileLayerConfig) {
        let source = TemplateTileSource {
            url_template: config.url_template.clone(),
            attribution_text: Box::leak(config.attribution_text.clone().into_boxed_str()),
            attribution_url: Box::leak(config.attribution_url.clone().into_boxed_str()),
        };
        self.tiles = Some(HttpTiles::new(source, self.ctx.clone()));
        log::info!("Tile-Layer angehängt: {}", config.url_template);
    }

    fn set_view(&mut self, center: LatLon, zoom: u8) {
        let position = lat_lon(center.lat, center.lon);
        self.center = position;
        self.memory.center_at(position);
        if let Err(e) = self.memory.set_zoom(zoom as f64) {
            log::warn!("Ungültige Zoom-Stufe {}: {:?}", zoom, e);
        }
    }

    fn add_marker(&mut self, at: LatLon) {
        self.markers.push(lat_lon(at.lat, at.lon));
    }

    fn remove_markers(&mut self) {
        self.markers.clear();
    }
}

/// Teilt die Tile-Surface zwischen `MapController` und Map-Panel.
pub struct SharedTileLayer(Arc<Mutex<TileLayer>>);

impl SharedTileLayer {
    /// Erstellt ein Surface-Handle über dem geteilten Tile-Layer.
    pub fn new(layer: Arc<Mutex<TileLayer>>) -> Self {
        Self(layer)
    }

    fn with_layer(&self, op: impl FnOnce(&mut TileLayer)) {
        let Ok(mut layer) = self.0.lock() else {
            log::error!("Tile-Layer-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        op(&mut layer);
    }
}

impl MapSurface for SharedTileLayer {
    fn attach_tile_layer(&mut self, config: &TileLayerConfig) {
        self.with_layer(|layer| layer.attach_tile_layer(config));
    }

    fn set_view(&mut self, center: LatLon, zoom: u8) {
        self.with_layer(|layer| layer.set_view(center, zoom));
    }

    fn add_marker(&mut self, at: LatLon) {
        self.with_layer(|layer| layer.add_marker(at));
    }

    fn remove_markers(&mut self) {
        self.with_layer(|layer| layer.remove_markers());
    }
}

/// Plugin, das den Standort-Pin über den Tiles zeichnet.
///
/// Die Geometrie folgt dem Leaflet-Standard-Icon: 25×41 px, Anker an der
/// Pin-Spitze (12, 41), Schatten 41×41 px.
struct MarkerPin {
    positions: Vec<Position>,
}

impl Plugin for MarkerPin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        _response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let fill = egui::Color32::from_rgba_unmultiplied(
            MARKER_COLOR[0],
            MARKER_COLOR[1],
            MARKER_COLOR[2],
            MARKER_COLOR[3],
        );
        let outline = egui::Color32::from_rgba_unmultiplied(
            MARKER_OUTLINE_COLOR[0],
            MARKER_OUTLINE_COLOR[1],
            MARKER_OUTLINE_COLOR[2],
            MARKER_OUTLINE_COLOR[3],
        );

        for position in &self.positions {
            let projected = projector.project(*position);
            // Der Anker liegt auf der Pin-Spitze: das Icon hängt über ihr
            let tip = egui::pos2(projected.x, projected.y);
            let top_left = tip - egui::vec2(MARKER_ICON_ANCHOR[0], MARKER_ICON_ANCHOR[1]);
            let head_center = egui::pos2(
                top_left.x + MARKER_ICON_SIZE[0] / 2.0,
                top_left.y + MARKER_ICON_SIZE[0] / 2.0,
            );
            let head_radius = MARKER_ICON_SIZE[0] / 2.0;

            // Schatten unter der Spitze
            painter.add(egui::Shape::ellipse_filled(
                tip + egui::vec2(6.0, -3.0),
                egui::vec2(MARKER_SHADOW_SIZE[0] / 4.0, MARKER_SHADOW_SIZE[1] / 10.0),
                egui::Color32::from_black_alpha(60),
            ));

            // Pin-Körper: Kreis-Kopf plus Dreieck zur Spitze
            painter.add(egui::Shape::convex_polygon(
                vec![
                    egui::pos2(head_center.x - head_radius * 0.7, head_center.y + 6.0),
                    egui::pos2(head_center.x + head_radius * 0.7, head_center.y + 6.0),
                    tip,
                ],
                fill,
                egui::Stroke::new(1.0, outline),
            ));
            painter.circle(head_center, head_radius, fill, egui::Stroke::new(1.0, outline));
            painter.circle_filled(head_center, head_radius * 0.35, egui::Color32::WHITE);
        }
    }
}
