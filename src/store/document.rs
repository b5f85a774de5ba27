//! Wire-Format der Remote-Dokumente.
//!
//! Die Dokument-ID liegt außerhalb des Dokument-Bodys: der Store vergibt
//! sie beim Create und liefert sie beim List als Umschlag-Feld.

use crate::core::{GeoPoint, Pin, PinKind};
use serde::{Deserialize, Serialize};

/// Dokument-Body eines Pins, wie er in der Collection liegt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinDocument {
    /// Position als `[lat, lon]`
    pub geocode: [f64; 2],
    /// Anzeige-Label
    #[serde(rename = "popUp")]
    pub pop_up: String,
    /// Laufende Nummer zum Erstellzeitpunkt
    pub number: u32,
    /// Anzeige-Typ; fehlt bei Dokumenten aus der ersten Programm-Generation
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl PinDocument {
    /// Baut den Dokument-Body aus einem lokalen Pin.
    pub fn from_pin(pin: &Pin) -> Self {
        Self {
            geocode: pin.geocode.to_pair(),
            pop_up: pin.label.clone(),
            number: pin.number,
            kind: Some(pin.kind.as_str().to_string()),
        }
    }

    /// Position als Geokoordinate.
    pub fn geocode(&self) -> GeoPoint {
        GeoPoint::from_pair(self.geocode)
    }

    /// Anzeige-Typ mit Basis-Fallback für unbekannte Werte.
    pub fn pin_kind(&self) -> PinKind {
        PinKind::parse(self.kind.as_deref())
    }
}

/// Dokument samt Store-vergebener ID (List-Umschlag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDocument {
    /// Vom Store vergebene Dokument-ID
    pub id: String,
    /// Dokument-Body
    #[serde(flatten)]
    pub document: PinDocument,
}

/// Antwort des List-Endpunkts.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    /// Alle Dokumente der Collection in Server-Reihenfolge
    pub documents: Vec<RemoteDocument>,
}

/// Antwort des Create-Endpunkts.
#[derive(Debug, Deserialize)]
pub struct CreateResponse {
    /// Vergebene Dokument-ID
    pub id: String,
}

/// Partieller Update-Body: nur das Geocode-Feld wird gemergt.
#[derive(Debug, Serialize)]
pub struct GeocodePatch {
    /// Neue Position als `[lat, lon]`
    pub geocode: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_with_wire_field_names() {
        let doc = PinDocument {
            geocode: [49.8, 24.0],
            pop_up: "Pin 3".to_string(),
            number: 3,
            kind: Some("bar".to_string()),
        };

        let json = serde_json::to_value(&doc).expect("Serialisierung");
        assert_eq!(json["popUp"], "Pin 3");
        assert_eq!(json["type"], "bar");
        assert_eq!(json["geocode"][0], 49.8);
    }

    #[test]
    fn test_document_without_type_parses_as_base() {
        let doc: PinDocument =
            serde_json::from_str(r#"{"geocode":[1.0,2.0],"popUp":"x","number":1}"#)
                .expect("Dokument ohne type muss parsen");

        assert_eq!(doc.kind, None);
        assert_eq!(doc.pin_kind(), PinKind::Base);
    }

    #[test]
    fn test_remote_document_flattens_id_beside_body() {
        let entry: RemoteDocument = serde_json::from_str(
            r#"{"id":"a","geocode":[1.0,2.0],"popUp":"x","number":1,"type":"home"}"#,
        )
        .expect("Umschlag muss parsen");

        assert_eq!(entry.id, "a");
        assert_eq!(entry.document.pin_kind(), PinKind::Home);

        // Die ID darf beim Zurückschreiben nicht in den Body wandern:
        // serialisiert landet sie auf Umschlag-Ebene, nicht unter `document`.
        let json = serde_json::to_value(&entry).expect("Serialisierung");
        assert_eq!(json["id"], "a");
        assert!(json.get("document").is_none());
    }

    #[test]
    fn test_geocode_patch_carries_only_geocode() {
        let patch = GeocodePatch {
            geocode: [5.0, 6.0],
        };
        let json = serde_json::to_value(&patch).expect("Serialisierung");
        assert_eq!(json.as_object().map(|o| o.len()), Some(1));
    }
}
