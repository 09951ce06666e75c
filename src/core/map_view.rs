//! Kartenansicht: Zustand, Rendering-Surface-Schnittstelle und Controller.
//!
//! Der `MapController` besitzt die eine Kartenansicht der Sitzung. Die
//! eigentliche Tile-Darstellung liegt hinter dem `MapSurface`-Trait, damit
//! die Synchronisationslogik ohne echte Rendering-Surface testbar bleibt.

use super::geo::LatLon;

/// Minimale Zoom-Stufe (Weltansicht).
pub const MAP_ZOOM_MIN: u8 = 0;
/// Maximale Zoom-Stufe der OSM-Tiles.
pub const MAP_ZOOM_MAX: u8 = 19;

/// Tile-Layer-Vertrag: URL-Schablone plus Attribution.
#[derive(Debug, Clone)]
pub struct TileLayerConfig {
    /// URL-Schablone mit `{s}`/`{z}`/`{x}`/`{y}`-Platzhaltern
    pub url_template: String,
    /// Attributionstext des Tile-Anbieters
    pub attribution_text: String,
    /// Link hinter der Attribution
    pub attribution_url: String,
}

/// Zustand der Kartenansicht.
///
/// `active_marker` ist ein Singleton: nie mehr als ein Marker, auch nicht
/// übergangsweise zwischen zwei Platzierungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewState {
    /// Kartenzentrum
    pub center: LatLon,
    /// Zoom-Stufe
    pub zoom: u8,
    /// Position des aktiven Markers (None = kein Marker)
    pub active_marker: Option<LatLon>,
}

/// Rendering-Surface der Karte.
///
/// Die Surface ist eine reine Empfängerin von Kommandos; Tile-Fetches laufen
/// intern fire-and-forget und werden von keinem Aufrufer abgewartet.
pub trait MapSurface {
    /// Hängt den Tile-Layer an (löst die ersten Tile-Anfragen aus).
    fn attach_tile_layer(&mut self, config: &TileLayerConfig);
    /// Zentriert die Ansicht neu.
    fn set_view(&mut self, center: LatLon, zoom: u8);
    /// Fügt einen Marker hinzu.
    fn add_marker(&mut self, at: LatLon);
    /// Entfernt alle Marker.
    fn remove_markers(&mut self);
}

/// Besitzt die eine Kartenansicht der Sitzung und setzt deren Invarianten
/// durch: einmalige Initialisierung, Marker-Singleton, Reihenfolge
/// Entfernen-dann-Hinzufügen.
pub struct MapController {
    surface: Box<dyn MapSurface>,
    view: MapViewState,
    initialized: bool,
}

impl MapController {
    /// Erstellt den Controller mit einer injizierten Rendering-Surface.
    pub fn new(surface: Box<dyn MapSurface>) -> Self {
        Self {
            surface,
            view: MapViewState {
                center: LatLon::new(0.0, 0.0),
                zoom: MAP_ZOOM_MIN,
                active_marker: None,
            },
            initialized: false,
        }
    }

    /// Initialisiert die Kartenansicht. Idempotent: jeder weitere Aufruf in
    /// derselben Sitzung ist ein geloggter No-op und hängt insbesondere den
    /// Tile-Layer nicht erneut an.
    pub fn initialize(&mut self, config: &TileLayerConfig, center: LatLon, zoom: u8) {
        if self.initialized {
            log::debug!("Karte bereits initialisiert, ignoriere erneute Initialisierung");
            return;
        }

        self.surface.attach_tile_layer(config);
        self.view.center = center;
        self.view.zoom = zoom;
        self.surface.set_view(center, zoom);
        self.initialized = true;

        log::info!("Kartenansicht initialisiert: {} zoom {}", center, zoom);
    }

    /// Zentriert die bestehende Ansicht neu. Vor `initialize` ein No-op.
    pub fn set_view(&mut self, center: LatLon, zoom: u8) {
        if !self.initialized {
            log::warn!("set_view vor initialize ignoriert");
            return;
        }

        self.view.center = center;
        self.view.zoom = zoom;
        self.surface.set_view(center, zoom);
    }

    /// Ersetzt alle vorhandenen Marker durch genau einen an `at`.
    ///
    /// Entfernen und Hinzufügen laufen strikt sequenziell innerhalb dieses
    /// Aufrufs; kein Zwischenzustand mit zwei oder null-dann-altem Marker.
    pub fn place_marker(&mut self, at: LatLon) {
        if !self.initialized {
            log::warn!("place_marker vor initialize ignoriert");
            return;
        }

        self.surface.remove_markers();
        self.surface.add_marker(at);
        self.view.active_marker = Some(at);
    }

    /// Entfernt alle Marker (Fallback bei unbekanntem Ort).
    pub fn clear_markers(&mut self) {
        if !self.initialized {
            log::warn!("clear_markers vor initialize ignoriert");
            return;
        }

        self.surface.remove_markers();
        self.view.active_marker = None;
    }

    /// Zoomt eine Stufe hinein (Marker bleibt unverändert).
    pub fn zoom_in(&mut self) {
        let zoom = self.view.zoom.saturating_add(1).min(MAP_ZOOM_MAX);
        self.set_view(self.view.center, zoom);
    }

    /// Zoomt eine Stufe heraus.
    pub fn zoom_out(&mut self) {
        let zoom = self.view.zoom.saturating_sub(1).max(MAP_ZOOM_MIN);
        self.set_view(self.view.center, zoom);
    }

    /// Aktueller Ansichtszustand.
    pub fn view(&self) -> &MapViewState {
        &self.view
    }

    /// Ob `initialize` bereits gelaufen ist.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

// ── Aufzeichnende Surface für Tests ─────────────────────────────────

/// Ein einzelner aufgezeichneter Surface-Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// `attach_tile_layer` mit der URL-Schablone
    AttachTileLayer { url_template: String },
    /// `set_view`
    SetView { center: LatLon, zoom: u8 },
    /// `add_marker`
    AddMarker { at: LatLon },
    /// `remove_markers`
    RemoveMarkers,
}

/// Geteiltes Aufruf-Protokoll einer `RecordingSurface`.
pub type SurfaceLog = std::sync::Arc<std::sync::Mutex<Vec<SurfaceCall>>>;

/// Zeichnungsfreie Surface, die alle Aufrufe protokolliert.
///
/// Ersetzt in Tests die echte Tile-Surface, damit Reihenfolge- und
/// Singleton-Invarianten ohne Rendering prüfbar sind.
#[derive(Default)]
pub struct RecordingSurface {
    log: SurfaceLog,
}

impl RecordingSurface {
    /// Erstellt eine Surface samt geteiltem Protokoll-Handle.
    pub fn with_log() -> (Self, SurfaceLog) {
        let surface = Self::default();
        let log = surface.log.clone();
        (surface, log)
    }

    fn record(&self, call: SurfaceCall) {
        if let Ok(mut log) = self.log.lock() {
            log.push(call);
        }
    }
}

impl MapSurface for RecordingSurface {
    fn attach_tile_layer(&mut self, config: &TileLayerConfig) {
        self.record(SurfaceCall::AttachTileLayer {
            url_template: config.url_template.clone(),
        });
    }

    fn set_view(&mut self, center: LatLon, zoom: u8) {
        self.record(SurfaceCall::SetView { center, zoom });
    }

    fn add_marker(&mut self, at: LatLon) {
        self.record(SurfaceCall::AddMarker { at });
    }

    fn remove_markers(&mut self) {
        self.record(SurfaceCall::RemoveMarkers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TileLayerConfig {
        TileLayerConfig {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution_text: "© OpenStreetMap contributors".to_string(),
            attribution_url: "https://www.openstreetmap.org/copyright".to_string(),
        }
    }

    fn initialized_controller() -> (MapController, SurfaceLog) {
        let (surface, log) = RecordingSurface::with_log();
        let mut controller = MapController::new(Box::new(surface));
        controller.initialize(&test_config(), LatLon::new(41.8781, -87.6298), 13);
        (controller, log)
    }

    #[test]
    fn initialize_attaches_tile_layer_exactly_once() {
        let (mut controller, log) = initialized_controller();

        controller.initialize(&test_config(), LatLon::new(0.0, 0.0), 1);
        controller.initialize(&test_config(), LatLon::new(1.0, 1.0), 2);

        let attach_count = log
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::AttachTileLayer { .. }))
            .count();
        assert_eq!(attach_count, 1);
        // Wiederholte Initialisierung darf die Ansicht nicht verstellen
        assert_eq!(controller.view().center, LatLon::new(41.8781, -87.6298));
        assert_eq!(controller.view().zoom, 13);
    }

    #[test]
    fn set_view_before_initialize_leaves_surface_untouched() {
        let (surface, log) = RecordingSurface::with_log();
        let mut controller = MapController::new(Box::new(surface));

        controller.set_view(LatLon::new(41.9217, -87.6339), 15);
        controller.place_marker(LatLon::new(41.9217, -87.6339));
        controller.clear_markers();

        assert!(log.lock().unwrap().is_empty());
        assert!(!controller.is_initialized());
        assert!(controller.view().active_marker.is_none());
    }

    #[test]
    fn place_marker_keeps_singleton_across_repeated_calls() {
        let (mut controller, log) = initialized_controller();

        controller.place_marker(LatLon::new(41.9786, -87.9048));
        controller.place_marker(LatLon::new(41.9217, -87.6339));
        controller.place_marker(LatLon::new(41.7868, -87.7522));

        // Logischer Zustand: genau ein Marker, an der zuletzt gesetzten Position
        assert_eq!(
            controller.view().active_marker,
            Some(LatLon::new(41.7868, -87.7522))
        );

        // Surface-Protokoll: Hinzufügen und Entfernen halten sich die Waage
        let log = log.lock().unwrap();
        let adds = log
            .iter()
            .filter(|c| matches!(c, SurfaceCall::AddMarker { .. }))
            .count();
        let removes = log
            .iter()
            .filter(|c| matches!(c, SurfaceCall::RemoveMarkers))
            .count();
        assert_eq!(adds, 3);
        assert_eq!(removes, 3);
    }

    #[test]
    fn place_marker_removes_strictly_before_adding() {
        let (mut controller, log) = initialized_controller();

        controller.place_marker(LatLon::new(41.9786, -87.9048));

        let log = log.lock().unwrap();
        let remove_idx = log
            .iter()
            .position(|c| matches!(c, SurfaceCall::RemoveMarkers))
            .expect("RemoveMarkers erwartet");
        assert_eq!(
            log.get(remove_idx + 1),
            Some(&SurfaceCall::AddMarker {
                at: LatLon::new(41.9786, -87.9048)
            }),
            "AddMarker muss unmittelbar auf RemoveMarkers folgen"
        );
    }

    #[test]
    fn clear_markers_resets_active_marker() {
        let (mut controller, _log) = initialized_controller();

        controller.place_marker(LatLon::new(41.9786, -87.9048));
        controller.clear_markers();

        assert!(controller.view().active_marker.is_none());
    }

    #[test]
    fn zoom_steps_clamp_and_keep_marker() {
        let (mut controller, _log) = initialized_controller();
        controller.place_marker(LatLon::new(41.9786, -87.9048));

        for _ in 0..30 {
            controller.zoom_in();
        }
        assert_eq!(controller.view().zoom, MAP_ZOOM_MAX);

        for _ in 0..30 {
            controller.zoom_out();
        }
        assert_eq!(controller.view().zoom, MAP_ZOOM_MIN);

        assert_eq!(
            controller.view().active_marker,
            Some(LatLon::new(41.9786, -87.9048))
        );
    }
}
