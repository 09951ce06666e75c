//! Persistenz des Formular-Entwurfs in einem JSON-Slot.
//!
//! Lesefehler sind hier keine Fehler: ein fehlender oder beschädigter Slot
//! löst sich feldgranular in Standardwerte auf. Gewollte Recovery-Politik,
//! kein beiläufiges Verschlucken.

use std::path::{Path, PathBuf};

use crate::core::FormDraft;

/// Schlüssel des persistierten Slots.
pub const DRAFT_SLOT_KEY: &str = "queryFormData";

/// Liest und schreibt den Formular-Entwurf in den persistierten Slot.
pub struct FormDraftStore {
    slot_path: PathBuf,
}

impl FormDraftStore {
    /// Erstellt einen Store über dem angegebenen Slot-Pfad.
    pub fn new(slot_path: PathBuf) -> Self {
        Self { slot_path }
    }

    /// Ermittelt den Standard-Slot-Pfad neben der Binary.
    pub fn default_slot_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("amenity_query"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{}.json", DRAFT_SLOT_KEY))
    }

    /// Pfad des Slots.
    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }

    /// Liest den Entwurf aus dem Slot.
    ///
    /// Fehlender Slot oder unlesbares JSON ⇒ kompletter Standard-Entwurf.
    /// Einzelne fehlende oder falsch typisierte Felder fallen unabhängig
    /// voneinander auf ihren jeweiligen Standardwert zurück.
    pub fn load(&self) -> FormDraft {
        let content = match std::fs::read_to_string(&self.slot_path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("Kein gespeicherter Entwurf, verwende Standardwerte");
                return FormDraft::default();
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Entwurfs-Slot unlesbar, verwende Standardwerte: {}", e);
                return FormDraft::default();
            }
        };

        let defaults = FormDraft::default();
        let field = |name: &str, fallback: &str| -> String {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .unwrap_or(fallback)
                .to_string()
        };

        FormDraft {
            place: field("place", &defaults.place),
            address: field("address", &defaults.address),
            complaint: field("complaint", &defaults.complaint),
            description: field("description", &defaults.description),
        }
    }

    /// Serialisiert den kompletten Entwurf und überschreibt den Slot.
    /// Kein Merge mit vorherigem Inhalt; der letzte Schreiber gewinnt.
    pub fn save(&self, draft: &FormDraft) -> anyhow::Result<()> {
        let content = serde_json::to_string(draft)?;
        std::fs::write(&self.slot_path, content)?;
        log::info!("Entwurf gespeichert nach: {}", self.slot_path.display());
        Ok(())
    }
}
