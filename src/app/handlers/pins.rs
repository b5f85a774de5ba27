//! Handler für Pin-Operationen (Platzieren, Entfernen, Drag, Remove-All).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PinKind;
use crate::store::StoreHandle;
use std::time::Instant;

/// Platziert einen neuen Pin an der übergebenen Weltposition.
pub fn place(state: &mut AppState, store: &StoreHandle, world_pos: glam::Vec2) {
    use_cases::pins::place_pin(state, store, world_pos);
}

/// Entfernt einen Pin und reiht sein Delete ein.
pub fn remove(state: &mut AppState, store: &StoreHandle, local_id: u64) {
    use_cases::pins::remove_pin(state, store, local_id);
}

/// Beginnt den Drag eines Pins.
pub fn begin_drag(state: &mut AppState, local_id: u64) {
    use_cases::pins::begin_drag(state, local_id);
}

/// Spiegelt eine Drag-Bewegung und zieht den Debounce neu auf.
pub fn drag_to(state: &mut AppState, local_id: u64, world_pos: glam::Vec2, now: Instant) {
    use_cases::pins::drag_to(state, local_id, world_pos, now);
}

/// Beendet den Drag eines Pins.
pub fn end_drag(state: &mut AppState, local_id: u64, now: Instant) {
    use_cases::pins::end_drag(state, local_id, now);
}

/// Sendet das fällige Debounce-Update eines Pins.
pub fn flush_pending_update(state: &mut AppState, store: &StoreHandle, local_id: u64, now: Instant) {
    use_cases::pins::flush_pending_update(state, store, local_id, now);
}

/// Entfernt alle Pins (Best-Effort über sequentielle Deletes).
pub fn remove_all(state: &mut AppState, store: &StoreHandle) {
    use_cases::pins::remove_all_pins(state, store);
}

/// Setzt den Typ für den nächsten platzierten Pin.
pub fn set_kind(state: &mut AppState, kind: PinKind) {
    state.palette.selected_kind = kind;
    log::info!("Pin-Typ: {:?}", kind);
}
