//! Ortskatalog: feste Zuordnung von Ortsnamen zu Koordinaten und Zoom-Stufe.
//!
//! Der Katalog ist bewusst als Daten-Tabelle statt als Verzweigungslogik
//! gehalten; ein neuer Eintrag erfordert keine Kontrollfluss-Änderung.

use super::geo::LatLon;

/// Ein benannter Ort mit bekannter Position und empfohlener Zoom-Stufe.
#[derive(Debug, Clone, Copy)]
pub struct LocationPreset {
    /// Anzeigename, zugleich eindeutiger Lookup-Schlüssel
    pub name: &'static str,
    /// Position des Ortes
    pub coordinates: LatLon,
    /// Empfohlene Zoom-Stufe beim Zentrieren auf den Ort
    pub zoom_level: u8,
}

/// Fester Ortskatalog: Park, Campus und die beiden Flughäfen.
pub const PRESET_PLACES: [LocationPreset; 4] = [
    LocationPreset {
        name: "Lincoln Park",
        coordinates: LatLon::new(41.9217, -87.6339),
        zoom_level: 15,
    },
    LocationPreset {
        name: "Illinois Institute of Technology",
        coordinates: LatLon::new(41.8349, -87.6270),
        zoom_level: 15,
    },
    LocationPreset {
        name: "O'Hare Airport",
        coordinates: LatLon::new(41.9786, -87.9048),
        zoom_level: 13,
    },
    LocationPreset {
        name: "Midway Airport",
        coordinates: LatLon::new(41.7868, -87.7522),
        zoom_level: 13,
    },
];

/// Schlägt einen Ortsnamen im Katalog nach (exakter String-Vergleich).
pub fn lookup(name: &str) -> Option<&'static LocationPreset> {
    PRESET_PLACES.iter().find(|preset| preset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lookup_finds_airport_coordinates() {
        let preset = lookup("O'Hare Airport").expect("O'Hare sollte im Katalog sein");
        assert_relative_eq!(preset.coordinates.lat, 41.9786);
        assert_relative_eq!(preset.coordinates.lon, -87.9048);
        assert_eq!(preset.zoom_level, 13);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("lincoln park").is_none());
        assert!(lookup("Lincoln Park").is_some());
    }

    #[test]
    fn lookup_miss_returns_none() {
        assert!(lookup("Some Unknown Place").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in PRESET_PLACES.iter().enumerate() {
            for b in PRESET_PLACES.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
