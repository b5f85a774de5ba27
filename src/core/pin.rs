//! Pin-Datenmodell: persistierte Punkt-Annotation mit Position, Label und Typ.

use super::geo::GeoPoint;

/// Anzeige-Typ eines Pins. Bestimmt das Icon, fix ab Erstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinKind {
    /// Standard-Pin
    #[default]
    Base,
    /// Zuhause
    Home,
    /// Bar/Kneipe
    Bar,
}

impl PinKind {
    /// Alle Varianten in Anzeige-Reihenfolge (für das Dropdown).
    pub const ALL: [PinKind; 3] = [PinKind::Base, PinKind::Home, PinKind::Bar];

    /// Wire-Name des Typs (Feld `type` im Remote-Dokument).
    pub fn as_str(&self) -> &'static str {
        match self {
            PinKind::Base => "base",
            PinKind::Home => "home",
            PinKind::Bar => "bar",
        }
    }

    /// Anzeigename für die UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            PinKind::Base => "Pin",
            PinKind::Home => "Home",
            PinKind::Bar => "Bar",
        }
    }

    /// Parst einen Wire-Namen. Unbekannte oder fehlende Werte fallen
    /// auf den Basis-Typ zurück.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("home") => PinKind::Home,
            Some("bar") => PinKind::Bar,
            _ => PinKind::Base,
        }
    }

    /// Dateiname des zugehörigen Icons unter `assets/`.
    pub fn icon_file(&self) -> &'static str {
        match self {
            PinKind::Base => "pin_base.svg",
            PinKind::Home => "pin_home.svg",
            PinKind::Bar => "pin_bar.svg",
        }
    }
}

/// Persistierte Punkt-Annotation auf der Karte.
///
/// `local_id` ist die stabile, lokal vergebene Identität. `remote_id`
/// wird erst gesetzt, wenn der Create-Roundtrip bestätigt wurde.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    /// Lokale Identität (monotoner Zähler des Boards)
    pub local_id: u64,
    /// Vom Persistenz-Layer vergebene Dokument-ID
    pub remote_id: Option<String>,
    /// Position als Geokoordinate
    pub geocode: GeoPoint,
    /// Anzeige-Label, fix ab Erstellung
    pub label: String,
    /// Laufende Nummer zum Erstellzeitpunkt (kosmetisch)
    pub number: u32,
    /// Anzeige-Typ
    pub kind: PinKind,
}

impl Pin {
    /// `true`, wenn der Create-Roundtrip bestätigt ist.
    pub fn is_confirmed(&self) -> bool {
        self.remote_id.is_some()
    }
}
