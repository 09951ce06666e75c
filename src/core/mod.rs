//! Core-Domänentypen: Koordinaten, Ortskatalog, Formular-Entwurf, Kartenansicht.

pub mod draft;
pub mod geo;
pub mod locations;
pub mod map_view;

pub use draft::{DraftField, FormDraft, DEFAULT_PLACE};
pub use geo::LatLon;
pub use locations::{lookup, LocationPreset, PRESET_PLACES};
pub use map_view::{
    MapController, MapSurface, MapViewState, RecordingSurface, SurfaceCall, SurfaceLog,
    TileLayerConfig, MAP_ZOOM_MAX, MAP_ZOOM_MIN,
};
