use crate::core::DraftField;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung ist gemountet (Entwurf laden, Karte initialisieren)
    MountRequested,
    /// Ortsauswahl hat sich geändert
    PlaceSelected { name: String },
    /// Freitext-Feld wurde editiert
    FieldEdited { field: DraftField, value: String },
    /// Formular wurde abgeschickt (Entwurf persistieren)
    SubmitRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Anwendung beenden
    ExitRequested,
}
