use super::*;
use crate::core::{DraftField, LatLon, MapController, RecordingSurface};
use crate::storage::FormDraftStore;

fn test_state() -> AppState {
    let (surface, _log) = RecordingSurface::with_log();
    AppState::new(
        MapController::new(Box::new(surface)),
        FormDraftStore::new(std::path::PathBuf::from("/nonexistent/queryFormData.json")),
    )
}

#[test]
fn known_place_maps_to_center_then_marker() {
    let state = test_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PlaceSelected {
            name: "O'Hare Airport".to_string(),
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(&commands[0], AppCommand::SetPlace { name } if name == "O'Hare Airport"));
    assert!(matches!(
        &commands[1],
        AppCommand::CenterView { center, zoom: 13 } if *center == LatLon::new(41.9786, -87.9048)
    ));
    assert!(matches!(
        &commands[2],
        AppCommand::PlaceMarker { at } if *at == LatLon::new(41.9786, -87.9048)
    ));
}

#[test]
fn unknown_place_maps_to_default_view_and_clear() {
    let state = test_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PlaceSelected {
            name: "Some Unknown Place".to_string(),
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(&commands[0], AppCommand::SetPlace { .. }));
    assert!(matches!(
        &commands[1],
        AppCommand::CenterView { center, zoom: 13 } if *center == LatLon::new(41.8781, -87.6298)
    ));
    assert!(matches!(&commands[2], AppCommand::ClearMarkers));
}

#[test]
fn mount_hydrates_before_initializing() {
    let state = test_state();

    let commands = map_intent_to_commands(&state, AppIntent::MountRequested);

    assert!(matches!(&commands[0], AppCommand::HydrateDraft));
    assert!(matches!(&commands[1], AppCommand::InitializeMap));
}

#[test]
fn field_edit_maps_to_single_draft_command() {
    let state = test_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FieldEdited {
            field: DraftField::Complaint,
            value: "Noise".to_string(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::SetDraftField { field: DraftField::Complaint, value } if value == "Noise"
    ));
}
