//! Geteilte Konstanten und Laufzeit-Optionen.

pub mod options;

pub use options::AppOptions;
