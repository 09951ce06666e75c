//! UI-Komponenten: Menü, Formular-Panel, Karten-Panel, Status-Bar.

pub mod form_panel;
pub mod map_panel;
pub mod menu;
pub mod status;

pub use form_panel::render_form_panel;
pub use map_panel::render_map_panel;
pub use menu::render_menu;
pub use status::render_status_bar;
