use crate::app::CommandLog;
use crate::core::PinBoard;
use crate::shared::AppOptions;

use super::{PaletteState, SyncState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geordnete Pin-Collection (einzige Render-Quelle)
    pub board: PinBoard,
    /// View-State
    pub view: ViewState,
    /// Pin-Paletten-State (Typ des nächsten Pins)
    pub palette: PaletteState,
    /// Synchronisierungs-State (Debounce, Roundtrip-Buchhaltung)
    pub sync: SyncState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Kamera, Pick-Radius, Debounce, Store)
    pub options: AppOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            board: PinBoard::new(),
            view: ViewState::new(),
            palette: PaletteState::new(),
            sync: SyncState::new(),
            command_log: CommandLog::new(),
            options: AppOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Pins zurück (für UI-Anzeige)
    pub fn pin_count(&self) -> usize {
        self.board.pin_count()
    }

    /// Gibt die Anzahl der bestätigten Pins zurück (für UI-Anzeige)
    pub fn confirmed_pin_count(&self) -> usize {
        self.board.confirmed_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
