//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{FormDraft, MapController};
use crate::shared::AppOptions;
use crate::storage::FormDraftStore;

/// Editier-Puffer der Freitext-Felder.
///
/// Die UI schreibt in diese Puffer; der autoritative Entwurf in
/// `AppState::draft` wird ausschließlich über Commands mutiert.
#[derive(Debug, Clone, Default)]
pub struct FormFieldsState {
    /// Adresse
    pub address: String,
    /// Beschwerde
    pub complaint: String,
    /// Beschreibung
    pub description: String,
}

impl FormFieldsState {
    /// Übernimmt die Feldwerte aus einem Entwurf (nach Hydration).
    pub fn sync_from(&mut self, draft: &FormDraft) {
        self.address = draft.address.clone();
        self.complaint = draft.complaint.clone();
        self.description = draft.description.clone();
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Editier-Puffer des Formulars
    pub form: FormFieldsState,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            form: FormFieldsState::default(),
        }
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Aktueller Formular-Entwurf (autoritative Kopie der Sitzung)
    pub draft: FormDraft,
    /// Die eine Kartenansicht der Sitzung
    pub map: MapController,
    /// Persistenz des Entwurfs
    pub draft_store: FormDraftStore,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Tile-Anbieter)
    pub options: AppOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den App-State mit injizierter Kartenansicht und Persistenz.
    pub fn new(map: MapController, draft_store: FormDraftStore) -> Self {
        Self {
            draft: FormDraft::default(),
            map,
            draft_store,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: AppOptions::default(),
            should_exit: false,
        }
    }
}
