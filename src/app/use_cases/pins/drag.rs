//! Use-Case: Pin-Drag mit debouncetem Geocode-Update.
//!
//! Jede Drag-Bewegung spiegelt die Position sofort ins Board (Render-
//! Quelle) und zieht den Debounce-Timer des Pins neu auf. Erst wenn das
//! Ruhefenster verstreicht, geht genau ein Update mit der jüngsten
//! Position an den Store.

use crate::app::AppState;
use crate::core::geo;
use crate::store::{StoreHandle, StoreRequest};
use std::time::Instant;

/// Beginnt den Drag eines Pins.
pub fn begin_drag(state: &mut AppState, local_id: u64) {
    if state.board.get(local_id).is_none() {
        log::debug!("Drag-Start für unbekannten Pin {}", local_id);
        return;
    }
    log::debug!("Drag von Pin {} gestartet", local_id);
}

/// Spiegelt eine Drag-Bewegung ins Board und zieht den Debounce neu auf.
pub fn drag_to(state: &mut AppState, local_id: u64, world_pos: glam::Vec2, now: Instant) {
    let geocode = geo::world_to_geo(world_pos);
    if !state.board.set_geocode(local_id, geocode) {
        log::debug!("Drag-Bewegung für unbekannten Pin {}", local_id);
        return;
    }

    let deadline = now + state.options.update_quiet_period();
    state.sync.arm_update(local_id, geocode, deadline);
}

/// Beendet den Drag: Timer ein letztes Mal auf die finale Position aufziehen.
pub fn end_drag(state: &mut AppState, local_id: u64, now: Instant) {
    let Some(pin) = state.board.get(local_id) else {
        return;
    };

    let geocode = pin.geocode;
    let deadline = now + state.options.update_quiet_period();
    state.sync.arm_update(local_id, geocode, deadline);

    log::debug!(
        "Drag von Pin {} beendet an ({:.5}, {:.5})",
        local_id,
        geocode.lat,
        geocode.lon
    );
}

/// Sendet das fällige Update eines Pins (vom Frame-Tick angestoßen).
pub fn flush_pending_update(state: &mut AppState, store: &StoreHandle, local_id: u64, now: Instant) {
    let Some(pin) = state.board.get(local_id) else {
        // Pin inzwischen weg: verwaisten Eintrag aufräumen.
        state.sync.cancel_update(local_id);
        return;
    };

    let Some(remote_id) = pin.remote_id.clone() else {
        // Create noch nicht bestätigt: Deadline weiterschieben, bis die
        // Dokument-ID eingetroffen ist.
        if let Some(pending) = state.sync.pending_update(local_id).copied() {
            let deadline = now + state.options.update_quiet_period();
            state.sync.arm_update(local_id, pending.geocode, deadline);
        }
        return;
    };

    let Some(pending) = state.sync.cancel_update(local_id) else {
        return;
    };

    store.send(StoreRequest::UpdateGeocode {
        remote_id: remote_id.clone(),
        geocode: pending.geocode.to_pair(),
    });
    state.sync.note_call_sent();

    log::debug!(
        "Geocode-Update für Pin {} ({}) eingereiht",
        local_id,
        remote_id
    );
}
