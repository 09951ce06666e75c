//! Handler für Entwurfs-Hydration, Feld-Änderungen und Submit.

use crate::app::AppState;
use crate::core::DraftField;

/// Lädt den Entwurf aus dem persistierten Slot und füllt die Editier-Puffer.
pub fn hydrate_draft(state: &mut AppState) {
    state.draft = state.draft_store.load();
    state.ui.form.sync_from(&state.draft);
}

/// Setzt den Ort im Entwurf.
pub fn set_place(state: &mut AppState, name: String) {
    state.draft.place = name;
}

/// Setzt eines der Freitext-Felder im Entwurf.
pub fn set_field(state: &mut AppState, field: DraftField, value: String) {
    state.draft.set_field(field, value);
}

/// Persistiert den aktuellen Entwurf und propagiert I/O-Fehler.
pub fn save_draft(state: &mut AppState) -> anyhow::Result<()> {
    state.draft_store.save(&state.draft)
}
