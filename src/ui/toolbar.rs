//! Toolbar: Pin-Typ-Auswahl, Remove-All und Kamera-Buttons.

use super::icons;
use crate::app::{AppIntent, AppState};
use crate::core::PinKind;

const ICON_SIZE: egui::Vec2 = egui::Vec2::new(20.0, 20.0);
const ICON_SIZE_DROPDOWN: egui::Vec2 = egui::Vec2::new(18.0, 18.0);

/// Erstellt ein `egui::Image` aus einer `ImageSource` in der gewünschten Größe.
fn svg_icon(source: egui::ImageSource<'_>, size: egui::Vec2) -> egui::Image<'_> {
    egui::Image::new(source).fit_to_exact_size(size)
}

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let selected = state.palette.selected_kind;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Pin-Typ:");
            ui.add(svg_icon(icons::pin_icon(selected), ICON_SIZE));

            // ── Typ-Auswahl für den nächsten Pin ──
            egui::ComboBox::from_id_salt("pin_kind_dropdown")
                .selected_text(selected.display_name())
                .width(110.0)
                .show_ui(ui, |ui| {
                    for kind in PinKind::ALL {
                        ui.horizontal(|ui| {
                            ui.add(svg_icon(icons::pin_icon(kind), ICON_SIZE_DROPDOWN));
                            if ui
                                .selectable_label(kind == selected, kind.display_name())
                                .clicked()
                            {
                                events.push(AppIntent::SetPinKindRequested { kind });
                            }
                        });
                    }
                });

            ui.separator();

            // Remove-All (nur wenn Pins vorhanden)
            let has_pins = !state.board.is_empty();
            if ui
                .add_enabled(has_pins, egui::Button::new("🗑 Remove All Pins"))
                .clicked()
            {
                events.push(AppIntent::RemoveAllRequested);
            }

            ui.separator();

            if ui.button("➕ Zoom").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("➖ Zoom").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui.button("⌂ Office").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }
        });
    });

    events
}
