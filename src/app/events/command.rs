use crate::core::{DraftField, LatLon};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Entwurf aus dem persistierten Slot laden
    HydrateDraft,
    /// Kartenansicht initialisieren (Tile-Layer anhängen, Standard-Ansicht)
    InitializeMap,
    /// Ort im Entwurf setzen
    SetPlace { name: String },
    /// Kartenansicht neu zentrieren
    CenterView { center: LatLon, zoom: u8 },
    /// Alle Marker durch genau einen an der Position ersetzen
    PlaceMarker { at: LatLon },
    /// Alle Marker entfernen
    ClearMarkers,
    /// Freitext-Feld im Entwurf setzen
    SetDraftField { field: DraftField, value: String },
    /// Entwurf in den persistierten Slot schreiben
    SaveDraft,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Anwendung beenden
    RequestExit,
}
