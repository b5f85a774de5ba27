//! Use-Cases für Pin-Operationen (der Kern des Marker-Synchronizers).

mod drag;
mod place;
mod remove;
mod remove_all;

pub use drag::{begin_drag, drag_to, end_drag, flush_pending_update};
pub use place::place_pin;
pub use remove::remove_pin;
pub use remove_all::remove_all_pins;
