//! PinBoard: geordnete In-Memory-Collection aller Pins.
//!
//! Das Board ist die einzige Render-Quelle der UI. Jede Mutation erhöht
//! einen Revisionszähler; der Frame-Loop vergleicht Revisionen und
//! fordert bei Änderung ein Repaint an (explizite Change-Notification
//! statt impliziter Framework-Reaktivität).

use super::geo::{self, GeoPoint};
use super::pin::{Pin, PinKind};
use indexmap::IndexMap;

/// Treffer einer Nearest-Pin-Suche.
#[derive(Debug, Clone, Copy)]
pub struct NearestPin {
    /// Lokale ID des nächstgelegenen Pins
    pub local_id: u64,
    /// Abstand in Welt-Einheiten
    pub distance: f32,
}

/// Geordnete Collection aller Pins mit eigener ID- und Nummernvergabe.
pub struct PinBoard {
    /// Pins in Einfüge-Reihenfolge, Schlüssel = `local_id`
    pins: IndexMap<u64, Pin>,
    /// Nächste zu vergebende lokale ID (monoton)
    next_local_id: u64,
    /// Nächste laufende Pin-Nummer (monoton, nie aus der Länge abgeleitet)
    next_number: u32,
    /// Änderungszähler für die Render-Subscription
    revision: u64,
}

impl PinBoard {
    /// Erstellt ein leeres Board.
    pub fn new() -> Self {
        Self {
            pins: IndexMap::new(),
            next_local_id: 1,
            next_number: 1,
            revision: 0,
        }
    }

    /// Fügt einen neuen, noch unbestätigten Pin ein und gibt seine
    /// lokale ID zurück. Label und Nummer werden aus dem laufenden
    /// Zähler abgeleitet.
    pub fn place(&mut self, geocode: GeoPoint, kind: PinKind) -> u64 {
        let local_id = self.next_local_id;
        self.next_local_id += 1;

        let number = self.next_number;
        self.next_number += 1;

        let pin = Pin {
            local_id,
            remote_id: None,
            geocode,
            label: format!("Pin {}", number),
            number,
            kind,
        };
        self.pins.insert(local_id, pin);
        self.touch();
        local_id
    }

    /// Fügt einen bereits bestätigten Pin aus dem Remote-Store ein
    /// (Initial-Load). Der Nummernzähler wird über die geladene Nummer
    /// hinweg fortgesetzt.
    pub fn insert_loaded(
        &mut self,
        remote_id: String,
        geocode: GeoPoint,
        label: String,
        number: u32,
        kind: PinKind,
    ) -> u64 {
        let local_id = self.next_local_id;
        self.next_local_id += 1;
        self.next_number = self.next_number.max(number.saturating_add(1));

        let pin = Pin {
            local_id,
            remote_id: Some(remote_id),
            geocode,
            label,
            number,
            kind,
        };
        self.pins.insert(local_id, pin);
        self.touch();
        local_id
    }

    /// Entfernt einen Pin unter Erhalt der Reihenfolge der übrigen.
    pub fn remove(&mut self, local_id: u64) -> Option<Pin> {
        let removed = self.pins.shift_remove(&local_id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Leert das Board und gibt die entfernten Pins in Reihenfolge zurück.
    pub fn clear(&mut self) -> Vec<Pin> {
        if self.pins.is_empty() {
            return Vec::new();
        }
        let drained = self.pins.drain(..).map(|(_, pin)| pin).collect();
        self.touch();
        drained
    }

    /// Trägt die vom Store vergebene Dokument-ID nach.
    pub fn confirm_remote_id(&mut self, local_id: u64, remote_id: String) -> bool {
        match self.pins.get_mut(&local_id) {
            Some(pin) => {
                pin.remote_id = Some(remote_id);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Setzt die Position eines Pins (Drag-Spiegelung).
    pub fn set_geocode(&mut self, local_id: u64, geocode: GeoPoint) -> bool {
        match self.pins.get_mut(&local_id) {
            Some(pin) => {
                pin.geocode = geocode;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Liefert einen Pin per lokaler ID.
    pub fn get(&self, local_id: u64) -> Option<&Pin> {
        self.pins.get(&local_id)
    }

    /// Iteriert alle Pins in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Pin> {
        self.pins.values()
    }

    /// Anzahl aller Pins.
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Anzahl der bestätigten Pins (Remote-ID vorhanden).
    pub fn confirmed_count(&self) -> usize {
        self.pins.values().filter(|p| p.is_confirmed()).count()
    }

    /// `true`, wenn keine Pins vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Sucht den Pin mit dem kleinsten Abstand zur Weltposition.
    ///
    /// Lineare Suche: das Board hält Dutzende Pins, kein Spatial-Index nötig.
    pub fn nearest_pin(&self, world_pos: glam::Vec2) -> Option<NearestPin> {
        self.pins
            .values()
            .map(|pin| NearestPin {
                local_id: pin.local_id,
                distance: geo::geo_to_world(pin.geocode).distance(world_pos),
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Aktueller Revisionsstand; erhöht sich bei jeder Mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for PinBoard {
    fn default() -> Self {
        Self::new()
    }
}
