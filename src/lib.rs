//! Amenity4Residents Query Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod storage;
pub mod ui;

pub use app::{AppCommand, AppIntent, AppState, CommandLog, QueryController, UiState};
pub use core::{
    DraftField, FormDraft, LatLon, LocationPreset, MapController, MapSurface, MapViewState,
    RecordingSurface, SurfaceCall, SurfaceLog, TileLayerConfig, DEFAULT_PLACE, PRESET_PLACES,
};
pub use render::{SharedTileLayer, TileLayer};
pub use shared::AppOptions;
pub use storage::{FormDraftStore, DRAFT_SLOT_KEY};
