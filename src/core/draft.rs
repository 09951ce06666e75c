//! Formular-Entwurf: der in Bearbeitung befindliche Beschwerde-Datensatz.

use serde::{Deserialize, Serialize};

/// Standard-Ort für einen frischen Entwurf.
pub const DEFAULT_PLACE: &str = "Lincoln Park";

/// Freitext-Felder des Formulars (der Ort läuft über die Ortsauswahl,
/// weil er zusätzlich die Karte steuert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Manuell eingetippte Adresse (wird nie geokodiert)
    Address,
    /// Kurzbezeichnung der Beschwerde
    Complaint,
    /// Ausführliche Beschreibung
    Description,
}

/// Der nicht abgeschickte Zustand des Beschwerdeformulars.
///
/// Die einzige dauerhafte Kopie liegt im persistierten Slot des
/// `FormDraftStore`; geschrieben wird sie ausschließlich beim Submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    /// Ausgewählter Ort (Katalogname oder freier Text)
    pub place: String,
    /// Adresse
    pub address: String,
    /// Beschwerde
    pub complaint: String,
    /// Beschreibung der Beschwerde
    pub description: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            place: DEFAULT_PLACE.to_string(),
            address: String::new(),
            complaint: String::new(),
            description: String::new(),
        }
    }
}

impl FormDraft {
    /// Setzt eines der Freitext-Felder.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Address => self.address = value,
            DraftField::Complaint => self.complaint = value,
            DraftField::Description => self.description = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_has_default_place_and_empty_fields() {
        let draft = FormDraft::default();
        assert_eq!(draft.place, DEFAULT_PLACE);
        assert!(draft.address.is_empty());
        assert!(draft.complaint.is_empty());
        assert!(draft.description.is_empty());
    }

    #[test]
    fn set_field_targets_the_named_field() {
        let mut draft = FormDraft::default();
        draft.set_field(DraftField::Complaint, "Noise".to_string());
        assert_eq!(draft.complaint, "Noise");
        assert!(draft.address.is_empty());
        assert!(draft.description.is_empty());
    }
}
