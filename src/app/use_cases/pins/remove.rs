//! Use-Case: Einzelnen Pin entfernen.

use crate::app::AppState;
use crate::store::{StoreHandle, StoreRequest};

/// Entfernt einen Pin aus dem Board (optimistisch) und reiht genau ein
/// Delete für seine Dokument-ID ein.
///
/// Der Debounce-Eintrag wird storniert, BEVOR das Delete eingereiht
/// wird: auf dem serialisierten Worker kann ein Update das Delete
/// desselben Pins damit nie überholen. Ein Pin ohne bestätigte
/// Dokument-ID wird nur lokal entfernt.
pub fn remove_pin(state: &mut AppState, store: &StoreHandle, local_id: u64) {
    state.sync.cancel_update(local_id);

    let Some(pin) = state.board.remove(local_id) else {
        log::debug!("Pin {} unbekannt, nichts zu entfernen", local_id);
        return;
    };

    match pin.remote_id {
        Some(remote_id) => {
            store.send(StoreRequest::Delete {
                remote_id: remote_id.clone(),
            });
            state.sync.note_call_sent();
            log::info!("Pin {} entfernt, Delete für {} eingereiht", local_id, remote_id);
        }
        None => {
            log::info!("Pin {} war noch unbestätigt, nur lokal entfernt", local_id);
        }
    }
}
