//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::locations;
use crate::shared::options::{DEFAULT_CENTER, DEFAULT_ZOOM};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // Hydration vor Karten-Initialisierung, damit der wiederhergestellte
        // Ort schon im ersten Frame im Formular steht
        AppIntent::MountRequested => vec![AppCommand::HydrateDraft, AppCommand::InitializeMap],
        AppIntent::PlaceSelected { name } => match locations::lookup(&name) {
            Some(preset) => vec![
                AppCommand::SetPlace { name },
                AppCommand::CenterView {
                    center: preset.coordinates,
                    zoom: preset.zoom_level,
                },
                AppCommand::PlaceMarker {
                    at: preset.coordinates,
                },
            ],
            None => {
                log::info!("Ort nicht im Katalog, zurück zur Standard-Ansicht: {name:?}");
                vec![
                    AppCommand::SetPlace { name },
                    AppCommand::CenterView {
                        center: DEFAULT_CENTER,
                        zoom: DEFAULT_ZOOM,
                    },
                    AppCommand::ClearMarkers,
                ]
            }
        },
        AppIntent::FieldEdited { field, value } => {
            vec![AppCommand::SetDraftField { field, value }]
        }
        AppIntent::SubmitRequested => vec![AppCommand::SaveDraft],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
