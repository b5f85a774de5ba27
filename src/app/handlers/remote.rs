//! Handler für Store-Rückmeldungen und den Initial-Load.

use crate::app::use_cases;
use crate::app::AppState;
use crate::store::{RemoteDocument, StoreHandle};

/// Fordert den Collection-Snapshot an (einmalig).
pub fn request_initial_load(state: &mut AppState, store: &StoreHandle) {
    use_cases::remote::request_initial_load(state, store);
}

/// Merged die vom Store vergebene Dokument-ID in den wartenden Pin.
pub fn apply_create(state: &mut AppState, local_id: u64, remote_id: String) {
    use_cases::remote::apply_remote_create(state, local_id, remote_id);
}

/// Ersetzt das Board durch den geladenen Snapshot.
pub fn apply_load(state: &mut AppState, documents: Vec<RemoteDocument>) {
    use_cases::remote::apply_remote_load(state, documents);
}

/// Verbucht eine Update-Bestätigung.
pub fn note_update(state: &mut AppState, remote_id: &str) {
    use_cases::remote::note_remote_update(state, remote_id);
}

/// Verbucht eine Delete-Bestätigung.
pub fn note_delete(state: &mut AppState, remote_id: &str) {
    use_cases::remote::note_remote_delete(state, remote_id);
}

/// Verbucht einen fehlgeschlagenen Roundtrip (nur Log, kein Rollback).
pub fn record_failure(state: &mut AppState, operation: &str, detail: &str) {
    use_cases::remote::record_remote_failure(state, operation, detail);
}
