//! Synchronisierungs-Zustand: Debounce-Timer und Roundtrip-Buchhaltung.

use crate::core::GeoPoint;
use indexmap::IndexMap;
use std::time::Instant;

/// Aufgezogener Debounce-Eintrag eines Pins: jüngste Position plus
/// Zeitpunkt, ab dem das Update gesendet werden darf.
#[derive(Debug, Clone, Copy)]
pub struct PendingUpdate {
    /// Jüngste Position der laufenden Drag-Session
    pub geocode: GeoPoint,
    /// Frühester Sendezeitpunkt
    pub deadline: Instant,
}

/// Zustand der Remote-Synchronisierung.
///
/// Pro Pin existiert höchstens ein Debounce-Eintrag; jede Drag-Bewegung
/// zieht ihn neu auf (expliziter Timer statt Closure-Debounce). Löschen
/// eines Pins storniert den Eintrag, bevor das Delete eingereiht wird.
#[derive(Default)]
pub struct SyncState {
    /// Aufgezogene Updates, Schlüssel = `local_id`
    pending_updates: IndexMap<u64, PendingUpdate>,
    /// Anzahl eingereihter, noch unbeantworteter Roundtrips
    calls_in_flight: u32,
    /// Initial-Load bereits angefordert (genau einmal pro Programmlauf)
    pub initial_load_requested: bool,
    /// Initial-Load bereits verarbeitet
    pub initial_load_done: bool,
    /// Anzahl fehlgeschlagener Roundtrips seit Programmstart
    pub failed_calls: u32,
}

impl SyncState {
    /// Erstellt den leeren Synchronisierungs-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zieht den Debounce-Eintrag eines Pins (neu) auf.
    pub fn arm_update(&mut self, local_id: u64, geocode: GeoPoint, deadline: Instant) {
        self.pending_updates
            .insert(local_id, PendingUpdate { geocode, deadline });
    }

    /// Storniert den Debounce-Eintrag eines Pins.
    pub fn cancel_update(&mut self, local_id: u64) -> Option<PendingUpdate> {
        self.pending_updates.shift_remove(&local_id)
    }

    /// Storniert alle Debounce-Einträge (Remove-All).
    pub fn cancel_all_updates(&mut self) {
        self.pending_updates.clear();
    }

    /// Liefert den Eintrag eines Pins, falls aufgezogen.
    pub fn pending_update(&self, local_id: u64) -> Option<&PendingUpdate> {
        self.pending_updates.get(&local_id)
    }

    /// IDs aller Pins, deren Deadline erreicht ist.
    pub fn due_updates(&self, now: Instant) -> Vec<u64> {
        self.pending_updates
            .iter()
            .filter(|(_, pending)| pending.deadline <= now)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Früheste anstehende Deadline (für die Repaint-Planung).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_updates.values().map(|p| p.deadline).min()
    }

    /// `true`, wenn Debounce-Einträge aufgezogen sind.
    pub fn has_pending_updates(&self) -> bool {
        !self.pending_updates.is_empty()
    }

    /// Verbucht einen eingereihten Roundtrip.
    pub fn note_call_sent(&mut self) {
        self.calls_in_flight += 1;
    }

    /// Verbucht eine Antwort (Erfolg oder Fehlschlag).
    pub fn note_call_settled(&mut self) {
        self.calls_in_flight = self.calls_in_flight.saturating_sub(1);
    }

    /// Anzahl offener Roundtrips.
    pub fn calls_in_flight(&self) -> u32 {
        self.calls_in_flight
    }
}
