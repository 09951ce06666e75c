//! Zentrale Konfiguration für Amenity4Residents Query.
//!
//! `AppOptions` enthält die zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::LatLon;

// ── Standard-Ansicht ────────────────────────────────────────────────

/// Standard-Kartenzentrum (Chicago Loop).
pub const DEFAULT_CENTER: LatLon = LatLon::new(41.8781, -87.6298);
/// Standard-Zoom-Stufe.
pub const DEFAULT_ZOOM: u8 = 13;

// ── Tile-Anbieter ───────────────────────────────────────────────────

/// URL-Schablone des OpenStreetMap-Tile-Servers.
pub const OSM_TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Attributionstext des Tile-Anbieters.
pub const OSM_ATTRIBUTION_TEXT: &str = "© OpenStreetMap contributors";
/// Link hinter der Attribution.
pub const OSM_ATTRIBUTION_URL: &str = "https://www.openstreetmap.org/copyright";

// ── Marker-Icon ─────────────────────────────────────────────────────
//
// Geometrie-Konstanten des Leaflet-Standard-Pins; rein kosmetisch,
// aber für visuelle Parität beizubehalten.

/// Icon-Größe in Pixeln (Breite, Höhe).
pub const MARKER_ICON_SIZE: [f32; 2] = [25.0, 41.0];
/// Anker innerhalb des Icons (die Pin-Spitze zeigt auf die Position).
pub const MARKER_ICON_ANCHOR: [f32; 2] = [12.0, 41.0];
/// Popup-Anker relativ zum Icon-Anker.
pub const MARKER_POPUP_ANCHOR: [f32; 2] = [1.0, -34.0];
/// Schattengröße in Pixeln.
pub const MARKER_SHADOW_SIZE: [f32; 2] = [41.0, 41.0];

/// Füllfarbe des Markers (RGBA: Rot).
pub const MARKER_COLOR: [u8; 4] = [230, 26, 26, 255];
/// Outline-Farbe des Markers (RGBA: Dunkelrot).
pub const MARKER_OUTLINE_COLOR: [u8; 4] = [153, 0, 0, 255];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Zur Laufzeit änderbare Optionen.
/// Wird als `amenity_query.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppOptions {
    /// URL-Schablone des Tile-Servers (`{s}`/`{z}`/`{x}`/`{y}`)
    #[serde(default = "default_tile_url_template")]
    pub tile_url_template: String,
    /// Attributionstext des Tile-Anbieters
    #[serde(default = "default_attribution_text")]
    pub tile_attribution_text: String,
    /// Link hinter der Attribution
    #[serde(default = "default_attribution_url")]
    pub tile_attribution_url: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            tile_url_template: default_tile_url_template(),
            tile_attribution_text: default_attribution_text(),
            tile_attribution_url: default_attribution_url(),
        }
    }
}

/// Serde-Default für `tile_url_template`.
fn default_tile_url_template() -> String {
    OSM_TILE_URL_TEMPLATE.to_string()
}

/// Serde-Default für `tile_attribution_text`.
fn default_attribution_text() -> String {
    OSM_ATTRIBUTION_TEXT.to_string()
}

/// Serde-Default für `tile_attribution_url`.
fn default_attribution_url() -> String {
    OSM_ATTRIBUTION_URL.to_string()
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("amenity_query"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("amenity_query.toml")
    }

    /// Baut den Tile-Layer-Vertrag aus den aktuellen Optionen.
    pub fn tile_layer_config(&self) -> crate::core::TileLayerConfig {
        crate::core::TileLayerConfig {
            url_template: self.tile_url_template.clone(),
            attribution_text: self.tile_attribution_text.clone(),
            attribution_url: self.tile_attribution_url.clone(),
        }
    }
}
