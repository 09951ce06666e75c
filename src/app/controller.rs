//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events auf Ortskatalog, Kartenansicht und Entwurfs-Persistenz.
#[derive(Default)]
pub struct QueryController;

impl QueryController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Formular & Persistenz ===
            AppCommand::HydrateDraft => handlers::form::hydrate_draft(state),
            AppCommand::SetPlace { name } => handlers::form::set_place(state, name),
            AppCommand::SetDraftField { field, value } => {
                handlers::form::set_field(state, field, value)
            }
            AppCommand::SaveDraft => handlers::form::save_draft(state)?,

            // === Kartenansicht ===
            AppCommand::InitializeMap => handlers::view::initialize_map(state),
            AppCommand::CenterView { center, zoom } => {
                handlers::view::center_view(state, center, zoom)
            }
            AppCommand::PlaceMarker { at } => handlers::view::place_marker(state, at),
            AppCommand::ClearMarkers => handlers::view::clear_markers(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
