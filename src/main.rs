//! Amenity4Residents Query.
//!
//! Desktop-Beschwerdeformular für Chicagoer Amenity-Standorte mit
//! interaktiver OpenStreetMap-Karte (egui + walkers).

use std::sync::{Arc, Mutex};

use amenity_query::{
    ui, AppIntent, AppOptions, AppState, FormDraftStore, MapController, QueryController,
    SharedTileLayer, TileLayer,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Amenity4Residents Query v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Amenity4Residents of Chicago"),
            ..Default::default()
        };

        eframe::run_native(
            "Amenity4Residents Query",
            options,
            Box::new(|cc| Ok(Box::new(QueryApp::new(cc)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct QueryApp {
    state: AppState,
    controller: QueryController,
    tile_layer: Arc<Mutex<TileLayer>>,
}

impl QueryApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let app_options = AppOptions::load_from_file(&config_path);

        let tile_layer = Arc::new(Mutex::new(TileLayer::new(cc.egui_ctx.clone())));
        let map = MapController::new(Box::new(SharedTileLayer::new(tile_layer.clone())));
        let draft_store = FormDraftStore::new(FormDraftStore::default_slot_path());

        let mut state = AppState::new(map, draft_store);
        state.options = app_options;

        let mut controller = QueryController::new();
        if let Err(e) = controller.handle_intent(&mut state, AppIntent::MountRequested) {
            log::error!("Mount fehlgeschlagen: {:#}", e);
        }

        Self {
            state,
            controller,
            tile_layer,
        }
    }
}

impl eframe::App for QueryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl QueryApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_form_panel(ctx, &mut self.state));
        ui::render_map_panel(ctx, &self.state, &self.tile_layer);

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
