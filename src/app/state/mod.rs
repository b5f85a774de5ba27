//! Application State und Controller
//!
//! Dieses Modul verwaltet den Zustand der Anwendung (Board, View,
//! Palette, Synchronisierung).

mod app_state;
mod palette;
mod sync;
mod view;

pub use app_state::AppState;
pub use palette::PaletteState;
pub use sync::{PendingUpdate, SyncState};
pub use view::ViewState;
