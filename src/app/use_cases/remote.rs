//! Use-Cases für Store-Rückmeldungen und den Initial-Load.

use crate::app::AppState;
use crate::store::{RemoteDocument, StoreHandle, StoreRequest};

/// Fordert den Collection-Snapshot an. Läuft genau einmal pro
/// Programmstart; kein Refresh, kein Polling danach.
pub fn request_initial_load(state: &mut AppState, store: &StoreHandle) {
    if state.sync.initial_load_requested {
        log::warn!("Initial-Load bereits angefordert, ignoriert");
        return;
    }

    state.sync.initial_load_requested = true;
    store.send(StoreRequest::ListAll);
    state.sync.note_call_sent();
    log::info!("Initial-Load angefordert");
}

/// Trägt die vom Store vergebene Dokument-ID in den wartenden Pin ein.
pub fn apply_remote_create(state: &mut AppState, local_id: u64, remote_id: String) {
    state.sync.note_call_settled();

    if state.board.confirm_remote_id(local_id, remote_id.clone()) {
        log::info!("Pin {} bestätigt als Dokument {}", local_id, remote_id);
    } else {
        // Pin wurde vor der Bestätigung gelöscht: das Dokument bleibt als
        // Waise im Store, bis ein Neustart den Snapshot als Wahrheit lädt.
        log::warn!(
            "Create-Bestätigung für gelöschten Pin {} (Dokument {})",
            local_id,
            remote_id
        );
    }
}

/// Ersetzt das Board vollständig durch den geladenen Snapshot.
/// Server-Reihenfolge und Dokument-IDs bleiben erhalten.
pub fn apply_remote_load(state: &mut AppState, documents: Vec<RemoteDocument>) {
    state.sync.note_call_settled();
    state.sync.initial_load_done = true;
    state.sync.cancel_all_updates();
    state.board.clear();

    let count = documents.len();
    for entry in documents {
        let doc = entry.document;
        state.board.insert_loaded(
            entry.id,
            doc.geocode(),
            doc.pop_up.clone(),
            doc.number,
            doc.pin_kind(),
        );
    }

    log::info!("Initial-Load abgeschlossen: {} Pins", count);
}

/// Verbucht eine Update-Bestätigung.
pub fn note_remote_update(state: &mut AppState, remote_id: &str) {
    state.sync.note_call_settled();
    log::debug!("Geocode-Update für Dokument {} bestätigt", remote_id);
}

/// Verbucht eine Delete-Bestätigung.
pub fn note_remote_delete(state: &mut AppState, remote_id: &str) {
    state.sync.note_call_settled();
    log::debug!("Delete für Dokument {} bestätigt", remote_id);
}

/// Verbucht einen fehlgeschlagenen Roundtrip.
///
/// Fehler werden ausschließlich geloggt: kein Retry, kein Rollback der
/// bereits angewandten optimistischen Mutation, keine UI-Meldung. Die
/// Divergenz heilt erst ein Neustart über den frischen Snapshot.
pub fn record_remote_failure(state: &mut AppState, operation: &str, detail: &str) {
    state.sync.note_call_settled();
    state.sync.failed_calls += 1;
    log::error!("Remote-{} fehlgeschlagen: {}", operation, detail);
}
