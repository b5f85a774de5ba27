//! Use-Case: Neuen Pin an einer Weltposition platzieren.

use crate::app::AppState;
use crate::core::geo;
use crate::store::{PinDocument, StoreHandle, StoreRequest};

/// Platziert einen neuen Pin an der gegebenen Weltposition.
///
/// Der Pin landet sofort (optimistisch) im Board und trägt noch keine
/// Dokument-ID; der Create wird eingereiht und die ID beim Eintreffen
/// der Bestätigung nachgetragen. Typ, Nummer und Label kommen aus
/// Palette und Board-Zähler.
pub fn place_pin(state: &mut AppState, store: &StoreHandle, world_pos: glam::Vec2) {
    let geocode = geo::world_to_geo(world_pos);
    let kind = state.palette.selected_kind;

    let local_id = state.board.place(geocode, kind);
    let Some(pin) = state.board.get(local_id) else {
        log::warn!("Pin {} nach dem Einfügen nicht auffindbar", local_id);
        return;
    };

    let document = PinDocument::from_pin(pin);
    store.send(StoreRequest::Create { local_id, document });
    state.sync.note_call_sent();

    log::info!(
        "Pin {} ({}) an ({:.5}, {:.5}) platziert",
        local_id,
        kind.as_str(),
        geocode.lat,
        geocode.lon
    );
}
