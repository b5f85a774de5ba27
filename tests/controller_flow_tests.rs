use approx::assert_relative_eq;
use geopin::core::{geo, GeoPoint, PinKind};
use geopin::store::{PinDocument, RemoteDocument, StoreHandle, StoreRequest};
use geopin::{AppController, AppIntent, AppState};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// Baut Controller, State und den Empfänger der Store-Anfragen.
fn make_app() -> (AppController, AppState, Receiver<StoreRequest>) {
    let (handle, requests) = StoreHandle::paired();
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];
    (AppController::new(handle), state, requests)
}

fn drain(requests: &Receiver<StoreRequest>) -> Vec<StoreRequest> {
    requests.try_iter().collect()
}

fn click(controller: &mut AppController, state: &mut AppState, world_pos: glam::Vec2) {
    controller
        .handle_intent(state, AppIntent::MapClicked { world_pos })
        .expect("MapClicked sollte ohne Fehler durchlaufen");
}

fn remote_doc(id: &str, geocode: [f64; 2], pop_up: &str, number: u32) -> RemoteDocument {
    RemoteDocument {
        id: id.to_string(),
        document: PinDocument {
            geocode,
            pop_up: pop_up.to_string(),
            number,
            kind: None,
        },
    }
}

#[test]
fn test_place_pin_inserts_provisional_record_and_sends_one_create() {
    let (mut controller, mut state, requests) = make_app();
    let world = geo::geo_to_world(GeoPoint::new(49.8, 24.0));

    click(&mut controller, &mut state, world);

    assert_eq!(state.board.pin_count(), 1);
    let pin = state.board.iter().next().expect("Pin erwartet").clone();
    assert_eq!(pin.remote_id, None);
    assert_eq!(pin.number, 1);
    assert_eq!(pin.label, "Pin 1");
    assert_eq!(pin.kind, PinKind::Base);

    let reqs = drain(&requests);
    assert_eq!(reqs.len(), 1);
    match &reqs[0] {
        StoreRequest::Create { local_id, document } => {
            assert_eq!(*local_id, pin.local_id);
            assert_eq!(document.pop_up, "Pin 1");
            assert_eq!(document.number, 1);
            assert_eq!(document.kind.as_deref(), Some("base"));
            assert_relative_eq!(document.geocode[0], 49.8, epsilon = 1e-3);
            assert_relative_eq!(document.geocode[1], 24.0, epsilon = 1e-3);
        }
        other => panic!("Unerwartete Anfrage: {other:?}"),
    }
}

#[test]
fn test_create_confirmation_merges_remote_id_into_matching_record() {
    let (mut controller, mut state, _requests) = make_app();
    let geocode = GeoPoint::new(49.8, 24.0);
    click(&mut controller, &mut state, geo::geo_to_world(geocode));

    let local_id = state.board.iter().next().expect("Pin erwartet").local_id;

    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteCreateConfirmed {
                local_id,
                remote_id: "doc-1".to_string(),
            },
        )
        .expect("Bestätigung sollte ohne Fehler durchlaufen");

    assert_eq!(state.board.pin_count(), 1);
    let pin = state.board.get(local_id).expect("Pin erwartet");
    assert_eq!(pin.remote_id.as_deref(), Some("doc-1"));
    assert_eq!(pin.label, "Pin 1");
    assert_eq!(pin.kind, PinKind::Base);
    assert_relative_eq!(pin.geocode.lat, geocode.lat, epsilon = 1e-3);
    assert_relative_eq!(pin.geocode.lon, geocode.lon, epsilon = 1e-3);
}

#[test]
fn test_click_on_confirmed_pin_removes_it_and_sends_exactly_one_delete() {
    let (mut controller, mut state, requests) = make_app();
    click(
        &mut controller,
        &mut state,
        geo::geo_to_world(GeoPoint::new(49.8, 24.0)),
    );
    let local_id = state.board.iter().next().expect("Pin erwartet").local_id;
    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteCreateConfirmed {
                local_id,
                remote_id: "doc-1".to_string(),
            },
        )
        .unwrap();

    // Klick exakt auf die Pin-Position trifft innerhalb des Pick-Radius
    let pin_world = geo::geo_to_world(state.board.get(local_id).unwrap().geocode);
    click(&mut controller, &mut state, pin_world);

    assert!(state.board.is_empty());

    let deletes: Vec<_> = drain(&requests)
        .into_iter()
        .filter(|r| matches!(r, StoreRequest::Delete { .. }))
        .collect();
    assert_eq!(deletes.len(), 1);
    assert!(matches!(
        &deletes[0],
        StoreRequest::Delete { remote_id } if remote_id == "doc-1"
    ));
}

#[test]
fn test_removing_unconfirmed_pin_is_local_only() {
    let (mut controller, mut state, requests) = make_app();
    let world = geo::geo_to_world(GeoPoint::new(49.8, 24.0));
    click(&mut controller, &mut state, world);

    // Pin noch unbestätigt: erneuter Klick entfernt ihn nur lokal
    let pin_world = geo::geo_to_world(state.board.iter().next().unwrap().geocode);
    click(&mut controller, &mut state, pin_world);

    assert!(state.board.is_empty());
    let reqs = drain(&requests);
    assert_eq!(reqs.len(), 1, "nur der Create darf eingereiht sein");
    assert!(matches!(reqs[0], StoreRequest::Create { .. }));
}

#[test]
fn test_drag_session_coalesces_to_single_update_with_final_position() {
    let (mut controller, mut state, requests) = make_app();
    click(
        &mut controller,
        &mut state,
        geo::geo_to_world(GeoPoint::new(49.80, 24.00)),
    );
    let local_id = state.board.iter().next().unwrap().local_id;
    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteCreateConfirmed {
                local_id,
                remote_id: "doc-1".to_string(),
            },
        )
        .unwrap();

    let t0 = Instant::now();
    let final_geocode = GeoPoint::new(49.82, 24.02);

    controller
        .handle_intent(&mut state, AppIntent::PinDragStarted { local_id })
        .unwrap();
    for (offset_ms, geocode) in [
        (0, GeoPoint::new(49.81, 24.01)),
        (100, GeoPoint::new(49.815, 24.015)),
        (200, final_geocode),
    ] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PinDragMoved {
                    local_id,
                    world_pos: geo::geo_to_world(geocode),
                    now: t0 + Duration::from_millis(offset_ms),
                },
            )
            .unwrap();
    }
    controller
        .handle_intent(
            &mut state,
            AppIntent::PinDragEnded {
                local_id,
                now: t0 + Duration::from_millis(200),
            },
        )
        .unwrap();

    // Innerhalb des Ruhefensters darf nichts gesendet werden
    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: t0 + Duration::from_millis(700),
            },
        )
        .unwrap();
    assert!(!drain(&requests)
        .iter()
        .any(|r| matches!(r, StoreRequest::UpdateGeocode { .. })));

    // Nach Ablauf des Ruhefensters: genau ein Update mit finaler Position
    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: t0 + Duration::from_millis(1300),
            },
        )
        .unwrap();

    let updates: Vec<_> = drain(&requests)
        .into_iter()
        .filter(|r| matches!(r, StoreRequest::UpdateGeocode { .. }))
        .collect();
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        StoreRequest::UpdateGeocode { remote_id, geocode } => {
            assert_eq!(remote_id, "doc-1");
            assert_relative_eq!(geocode[0], final_geocode.lat, epsilon = 1e-3);
            assert_relative_eq!(geocode[1], final_geocode.lon, epsilon = 1e-3);
        }
        other => panic!("Unerwartete Anfrage: {other:?}"),
    }

    // Lokaler Spiegel zeigt ebenfalls die finale Position
    let pin = state.board.get(local_id).unwrap();
    assert_relative_eq!(pin.geocode.lat, final_geocode.lat, epsilon = 1e-3);
    assert_relative_eq!(pin.geocode.lon, final_geocode.lon, epsilon = 1e-3);

    // Ein weiterer Tick sendet nichts mehr
    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: t0 + Duration::from_secs(10),
            },
        )
        .unwrap();
    assert!(drain(&requests).is_empty());
}

#[test]
fn test_deleting_dragged_pin_cancels_pending_update() {
    let (mut controller, mut state, requests) = make_app();
    click(
        &mut controller,
        &mut state,
        geo::geo_to_world(GeoPoint::new(49.80, 24.00)),
    );
    let local_id = state.board.iter().next().unwrap().local_id;
    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteCreateConfirmed {
                local_id,
                remote_id: "doc-1".to_string(),
            },
        )
        .unwrap();

    let t0 = Instant::now();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PinDragMoved {
                local_id,
                world_pos: geo::geo_to_world(GeoPoint::new(49.81, 24.01)),
                now: t0,
            },
        )
        .unwrap();

    // Pin vor Ablauf des Ruhefensters löschen
    let pin_world = geo::geo_to_world(state.board.get(local_id).unwrap().geocode);
    click(&mut controller, &mut state, pin_world);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: t0 + Duration::from_secs(5),
            },
        )
        .unwrap();

    let reqs = drain(&requests);
    assert!(
        !reqs
            .iter()
            .any(|r| matches!(r, StoreRequest::UpdateGeocode { .. })),
        "storniertes Update darf das Delete nicht überholen"
    );
    assert_eq!(
        reqs.iter()
            .filter(|r| matches!(r, StoreRequest::Delete { .. }))
            .count(),
        1
    );
}

#[test]
fn test_initial_load_replaces_board_in_server_order() {
    let (mut controller, mut state, requests) = make_app();

    controller
        .handle_intent(&mut state, AppIntent::InitialLoadRequested)
        .expect("Initial-Load sollte ohne Fehler durchlaufen");
    assert!(matches!(
        drain(&requests).as_slice(),
        [StoreRequest::ListAll]
    ));

    // Wiederholte Anforderung wird ignoriert (genau einmal pro Start)
    controller
        .handle_intent(&mut state, AppIntent::InitialLoadRequested)
        .unwrap();
    assert!(drain(&requests).is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteLoadCompleted {
                documents: vec![
                    remote_doc("a", [1.0, 2.0], "x", 1),
                    remote_doc("b", [3.0, 4.0], "y", 2),
                ],
            },
        )
        .unwrap();

    assert_eq!(state.board.pin_count(), 2);
    let pins: Vec<_> = state.board.iter().collect();
    assert_eq!(pins[0].remote_id.as_deref(), Some("a"));
    assert_eq!(pins[0].label, "x");
    assert_eq!(pins[0].geocode, GeoPoint::new(1.0, 2.0));
    assert_eq!(pins[1].remote_id.as_deref(), Some("b"));
    assert_eq!(pins[1].label, "y");
    assert_eq!(pins[1].kind, PinKind::Base);

    // Nummernzähler setzt oberhalb der geladenen Nummern fort
    click(
        &mut controller,
        &mut state,
        geo::geo_to_world(GeoPoint::new(49.0, 20.0)),
    );
    let new_pin = state.board.iter().last().unwrap();
    assert_eq!(new_pin.number, 3);
}

#[test]
fn test_remove_all_clears_board_and_issues_sequential_deletes_best_effort() {
    let (mut controller, mut state, requests) = make_app();

    // Drei Pins platzieren und bestätigen
    let geocodes = [
        GeoPoint::new(49.80, 24.00),
        GeoPoint::new(49.90, 24.10),
        GeoPoint::new(50.00, 24.20),
    ];
    let mut local_ids = Vec::new();
    for (i, geocode) in geocodes.iter().enumerate() {
        click(&mut controller, &mut state, geo::geo_to_world(*geocode));
        let local_id = state.board.iter().last().unwrap().local_id;
        controller
            .handle_intent(
                &mut state,
                AppIntent::RemoteCreateConfirmed {
                    local_id,
                    remote_id: format!("doc-{}", i + 1),
                },
            )
            .unwrap();
        local_ids.push(local_id);
    }

    // Ein Pin hat noch ein aufgezogenes Debounce-Update
    controller
        .handle_intent(
            &mut state,
            AppIntent::PinDragMoved {
                local_id: local_ids[0],
                world_pos: geo::geo_to_world(GeoPoint::new(49.85, 24.05)),
                now: Instant::now(),
            },
        )
        .unwrap();
    drain(&requests);

    controller
        .handle_intent(&mut state, AppIntent::RemoveAllRequested)
        .expect("RemoveAll sollte ohne Fehler durchlaufen");

    // Lokal sofort leer (Best-Effort-Policy)
    assert!(state.board.is_empty());

    // Genau ein Delete pro Pin, in Board-Reihenfolge
    let reqs = drain(&requests);
    assert_eq!(reqs.len(), 3);
    for (i, req) in reqs.iter().enumerate() {
        assert!(matches!(
            req,
            StoreRequest::Delete { remote_id } if *remote_id == format!("doc-{}", i + 1)
        ));
    }

    // Schlägt ein Delete später fehl, bleibt der lokale Zustand leer
    // und es wird nichts nachgereicht (nur Log, kein Rollback).
    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteCallFailed {
                operation: "delete",
                detail: "HTTP 500".to_string(),
            },
        )
        .unwrap();
    assert!(state.board.is_empty());
    assert_eq!(state.sync.failed_calls, 1);
    assert!(drain(&requests).is_empty());

    // Das stornierte Update feuert auch später nicht mehr
    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: Instant::now() + Duration::from_secs(10),
            },
        )
        .unwrap();
    assert!(drain(&requests).is_empty());
}

#[test]
fn test_selected_kind_applies_to_next_placed_pin() {
    let (mut controller, mut state, requests) = make_app();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetPinKindRequested { kind: PinKind::Bar },
        )
        .unwrap();
    click(
        &mut controller,
        &mut state,
        geo::geo_to_world(GeoPoint::new(49.8, 24.0)),
    );

    let pin = state.board.iter().next().unwrap();
    assert_eq!(pin.kind, PinKind::Bar);

    match &drain(&requests)[0] {
        StoreRequest::Create { document, .. } => {
            assert_eq!(document.kind.as_deref(), Some("bar"));
        }
        other => panic!("Unerwartete Anfrage: {other:?}"),
    }
}

#[test]
fn test_clock_tick_without_due_updates_is_quiet() {
    let (mut controller, mut state, requests) = make_app();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: Instant::now(),
            },
        )
        .unwrap();

    assert!(state.command_log.is_empty());
    assert!(drain(&requests).is_empty());
}

#[test]
fn test_update_waits_until_create_confirms() {
    let (mut controller, mut state, requests) = make_app();
    click(
        &mut controller,
        &mut state,
        geo::geo_to_world(GeoPoint::new(49.80, 24.00)),
    );
    let local_id = state.board.iter().next().unwrap().local_id;
    drain(&requests);

    // Drag vor der Create-Bestätigung
    let t0 = Instant::now();
    let target = GeoPoint::new(49.81, 24.01);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PinDragMoved {
                local_id,
                world_pos: geo::geo_to_world(target),
                now: t0,
            },
        )
        .unwrap();

    // Deadline verstreicht, aber ohne Dokument-ID darf nichts gesendet werden
    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: t0 + Duration::from_secs(2),
            },
        )
        .unwrap();
    assert!(drain(&requests).is_empty());

    // Nach der Bestätigung sendet der nächste fällige Tick genau ein Update
    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteCreateConfirmed {
                local_id,
                remote_id: "doc-1".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ClockTicked {
                now: t0 + Duration::from_secs(10),
            },
        )
        .unwrap();

    let reqs = drain(&requests);
    assert_eq!(reqs.len(), 1);
    match &reqs[0] {
        StoreRequest::UpdateGeocode { remote_id, geocode } => {
            assert_eq!(remote_id, "doc-1");
            assert_relative_eq!(geocode[0], target.lat, epsilon = 1e-3);
        }
        other => panic!("Unerwartete Anfrage: {other:?}"),
    }
}

#[test]
fn test_create_failure_leaves_local_pin_without_rollback() {
    let (mut controller, mut state, requests) = make_app();
    click(
        &mut controller,
        &mut state,
        geo::geo_to_world(GeoPoint::new(49.8, 24.0)),
    );
    drain(&requests);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteCallFailed {
                operation: "create",
                detail: "HTTP 401".to_string(),
            },
        )
        .unwrap();

    // Kein Rollback: der Pin bleibt lokal, nur unbestätigt
    assert_eq!(state.board.pin_count(), 1);
    assert!(state.board.iter().next().unwrap().remote_id.is_none());
    assert_eq!(state.sync.failed_calls, 1);
    assert!(drain(&requests).is_empty());
}
