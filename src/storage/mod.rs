//! Persistenzschicht: Formular-Entwurf im JSON-Slot.

pub mod draft_store;

pub use draft_store::{FormDraftStore, DRAFT_SLOT_KEY};
