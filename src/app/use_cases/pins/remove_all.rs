//! Use-Case: Alle Pins entfernen (Best-Effort).
//!
//! Das Board wird sofort geleert; pro bestätigtem Pin wird ein Delete
//! eingereiht, das der Worker strikt sequentiell abarbeitet. Schlägt ein
//! Delete fehl, wird das geloggt und die restlichen Deletes laufen
//! trotzdem; der lokale Zustand bleibt leer.

use crate::app::AppState;
use crate::store::{StoreHandle, StoreRequest};

/// Entfernt alle Pins lokal und reiht ein Delete pro bestätigtem Pin ein.
pub fn remove_all_pins(state: &mut AppState, store: &StoreHandle) {
    if state.board.is_empty() {
        log::debug!("Keine Pins zum Entfernen");
        return;
    }

    state.sync.cancel_all_updates();
    let removed = state.board.clear();

    let mut issued = 0;
    for pin in &removed {
        if let Some(remote_id) = &pin.remote_id {
            store.send(StoreRequest::Delete {
                remote_id: remote_id.clone(),
            });
            state.sync.note_call_sent();
            issued += 1;
        }
    }

    log::info!(
        "Alle {} Pins entfernt, {} Deletes eingereiht",
        removed.len(),
        issued
    );
}
