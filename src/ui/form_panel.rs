//! Formular-Panel: Ortsauswahl, Freitext-Felder und Submit.

use crate::app::{AppIntent, AppState};
use crate::core::{DraftField, PRESET_PLACES};

/// Rendert das Beschwerdeformular als linkes Seiten-Panel.
pub fn render_form_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("query_form")
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Query Information");
            ui.add_space(12.0);

            ui.label("Select Place:");
            let current = state.draft.place.clone();
            let mut selected = current.clone();
            egui::ComboBox::from_id_salt("place_select")
                .selected_text(selected.clone())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for preset in &PRESET_PLACES {
                        ui.selectable_value(&mut selected, preset.name.to_string(), preset.name);
                    }
                });
            if selected != current {
                events.push(AppIntent::PlaceSelected { name: selected });
            }

            ui.add_space(8.0);

            ui.label("Address:");
            if ui
                .add(egui::TextEdit::singleline(&mut state.ui.form.address).desired_width(f32::INFINITY))
                .changed()
            {
                events.push(AppIntent::FieldEdited {
                    field: DraftField::Address,
                    value: state.ui.form.address.clone(),
                });
            }

            ui.add_space(8.0);

            ui.label("Complaint:");
            if ui
                .add(egui::TextEdit::singleline(&mut state.ui.form.complaint).desired_width(f32::INFINITY))
                .changed()
            {
                events.push(AppIntent::FieldEdited {
                    field: DraftField::Complaint,
                    value: state.ui.form.complaint.clone(),
                });
            }

            ui.add_space(8.0);

            ui.label("Describe Your Complaint:");
            if ui
                .add(
                    egui::TextEdit::multiline(&mut state.ui.form.description)
                        .desired_width(f32::INFINITY)
                        .desired_rows(4),
                )
                .changed()
            {
                events.push(AppIntent::FieldEdited {
                    field: DraftField::Description,
                    value: state.ui.form.description.clone(),
                });
            }

            ui.add_space(16.0);

            if ui
                .add_sized([ui.available_width(), 28.0], egui::Button::new("Submit"))
                .clicked()
            {
                events.push(AppIntent::SubmitRequested);
            }
        });

    events
}
