//! Store-Bridge: Worker-Thread zwischen UI-Loop und Remote-Store.
//!
//! Die UI reiht `StoreRequest`s über einen Channel ein; der Worker führt
//! sie strikt in FIFO-Reihenfolge aus (eine Anfrage zur Zeit, dadurch
//! serialisiert sich u.a. die Remove-All-Schleife von selbst) und meldet
//! `StoreEvent`s zurück. Der Frame-Loop pollt die Events einmal pro Frame.

use super::client::StoreClient;
use super::document::{PinDocument, RemoteDocument};
use crate::core::GeoPoint;
use crate::shared::StoreConfig;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Anfrage an den Remote-Store, von der UI eingereiht.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreRequest {
    /// Neues Dokument anlegen; `local_id` identifiziert den wartenden Pin
    Create {
        local_id: u64,
        document: PinDocument,
    },
    /// Vollständigen Collection-Snapshot holen
    ListAll,
    /// Geocode-Feld eines Dokuments mergen
    UpdateGeocode {
        remote_id: String,
        geocode: [f64; 2],
    },
    /// Dokument löschen
    Delete { remote_id: String },
}

impl StoreRequest {
    /// Kurzname der Operation für Logs und Fehler-Events.
    pub fn operation(&self) -> &'static str {
        match self {
            StoreRequest::Create { .. } => "create",
            StoreRequest::ListAll => "list",
            StoreRequest::UpdateGeocode { .. } => "update",
            StoreRequest::Delete { .. } => "delete",
        }
    }
}

/// Ergebnis eines Roundtrips, vom Worker zurückgemeldet.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// Create bestätigt, Dokument-ID vergeben
    Created { local_id: u64, remote_id: String },
    /// Snapshot geladen
    Loaded { documents: Vec<RemoteDocument> },
    /// Update bestätigt
    Updated { remote_id: String },
    /// Delete bestätigt
    Deleted { remote_id: String },
    /// Roundtrip fehlgeschlagen
    Failed {
        operation: &'static str,
        detail: String,
    },
}

/// Sende-Seite des Request-Channels.
///
/// Der Controller hält eine Handle-Kopie; Tests erzeugen über
/// [`StoreHandle::paired`] eine Handle samt Empfänger und prüfen die
/// eingereihten Anfragen direkt.
#[derive(Clone)]
pub struct StoreHandle {
    tx: Sender<StoreRequest>,
}

impl StoreHandle {
    /// Erzeugt Handle und zugehörigen Empfänger.
    pub fn paired() -> (Self, Receiver<StoreRequest>) {
        let (tx, rx) = channel();
        (Self { tx }, rx)
    }

    /// Reiht eine Anfrage ein. Ist der Worker beendet, wird die Anfrage
    /// verworfen und geloggt; ein weiterer Fehlerpfad existiert nicht.
    pub fn send(&self, request: StoreRequest) {
        let operation = request.operation();
        if self.tx.send(request).is_err() {
            log::error!(
                "Store-Worker nicht erreichbar, {}-Anfrage verworfen",
                operation
            );
        }
    }
}

/// Worker-Thread samt Event-Rückkanal.
pub struct StoreBridge {
    handle: StoreHandle,
    events: Receiver<StoreEvent>,
}

impl StoreBridge {
    /// Startet den Worker-Thread mit eigener Single-Thread-Runtime.
    pub fn spawn(config: StoreConfig) -> anyhow::Result<Self> {
        let client = StoreClient::new(&config)?;
        let (handle, requests) = StoreHandle::paired();
        let (event_tx, events) = channel();

        std::thread::Builder::new()
            .name("store-worker".to_string())
            .spawn(move || run_worker(client, requests, event_tx))?;

        log::info!(
            "Store-Worker gestartet (Collection {}/{})",
            config.project,
            config.collection
        );

        Ok(Self { handle, events })
    }

    /// Kopie der Sende-Handle für den Controller.
    pub fn handle(&self) -> StoreHandle {
        self.handle.clone()
    }

    /// Holt alle seit dem letzten Frame eingetroffenen Events ab.
    pub fn poll(&self) -> Vec<StoreEvent> {
        self.events.try_iter().collect()
    }
}

/// Worker-Schleife: blockierend empfangen, Roundtrip ausführen, Ergebnis
/// melden. Endet, wenn eine Channel-Seite geschlossen wird.
fn run_worker(client: StoreClient, requests: Receiver<StoreRequest>, events: Sender<StoreEvent>) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Store-Runtime konnte nicht starten: {}", e);
            return;
        }
    };

    while let Ok(request) = requests.recv() {
        let event = runtime.block_on(execute(&client, request));
        if events.send(event).is_err() {
            break;
        }
    }

    log::info!("Store-Worker beendet");
}

/// Führt genau einen Roundtrip aus und mappt das Ergebnis auf ein Event.
async fn execute(client: &StoreClient, request: StoreRequest) -> StoreEvent {
    let operation = request.operation();

    let result = match request {
        StoreRequest::Create { local_id, document } => client
            .create(&document)
            .await
            .map(|remote_id| StoreEvent::Created {
                local_id,
                remote_id,
            }),
        StoreRequest::ListAll => client
            .list()
            .await
            .map(|documents| StoreEvent::Loaded { documents }),
        StoreRequest::UpdateGeocode { remote_id, geocode } => client
            .update_geocode(&remote_id, GeoPoint::from_pair(geocode))
            .await
            .map(|_| StoreEvent::Updated { remote_id }),
        StoreRequest::Delete { remote_id } => client
            .delete(&remote_id)
            .await
            .map(|_| StoreEvent::Deleted { remote_id }),
    };

    result.unwrap_or_else(|e| StoreEvent::Failed {
        operation,
        detail: e.to_string(),
    })
}
