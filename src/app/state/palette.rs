use crate::core::PinKind;

/// Auswahl-Zustand der Pin-Palette: bestimmt den Typ des nächsten
/// platzierten Pins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteState {
    /// Aktuell gewählter Pin-Typ
    pub selected_kind: PinKind,
}

impl PaletteState {
    /// Erstellt den Standard-Zustand (Basis-Typ gewählt).
    pub fn new() -> Self {
        Self::default()
    }
}
