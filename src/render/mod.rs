//! Rendering-Layer: walkers-basierte Tile-Surface.

pub mod tile_layer;

pub use tile_layer::{SharedTileLayer, TileLayer};
