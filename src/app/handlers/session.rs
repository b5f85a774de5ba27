//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Signalisiert dem Host das kontrollierte Beenden der Anwendung.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
