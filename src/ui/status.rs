//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::geo;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Pins: {} ({} bestätigt)",
                state.pin_count(),
                state.confirmed_pin_count()
            ));

            ui.separator();

            let center = geo::world_to_geo(state.view.camera.position);
            ui.label(format!(
                "Zoom: {:.0}x | Mitte: ({:.4}, {:.4})",
                state.view.camera.zoom, center.lat, center.lon
            ));

            ui.separator();

            if state.sync.initial_load_requested && !state.sync.initial_load_done {
                ui.label("Lade Pins…");
            } else {
                ui.label(format!(
                    "Collection: {}/{}",
                    state.options.store.project, state.options.store.collection
                ));
            }
        });
    });
}
