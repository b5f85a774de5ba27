//! SVG-Icon-Zuordnung der Pin-Typen (compile-time eingebettet).

use crate::core::PinKind;

/// Icon-Quelle für einen Pin-Typ. Die reine Typ-Zuordnung (inklusive
/// Basis-Fallback für unbekannte Wire-Werte) liegt in [`PinKind::parse`].
pub fn pin_icon(kind: PinKind) -> egui::ImageSource<'static> {
    match kind {
        PinKind::Base => egui::include_image!("../../assets/pin_base.svg"),
        PinKind::Home => egui::include_image!("../../assets/pin_home.svg"),
        PinKind::Bar => egui::include_image!("../../assets/pin_bar.svg"),
    }
}

/// Icon-Quelle der fixen Büro-Annotation.
pub fn office_icon() -> egui::ImageSource<'static> {
    egui::include_image!("../../assets/pin_office.svg")
}
