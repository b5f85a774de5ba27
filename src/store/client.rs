//! HTTP-Client für die Remote-Dokument-Collection.
//!
//! Vier Operationen, je genau ein Netzwerk-Roundtrip: Create, List,
//! partielles Update und Delete. Keine Transaktionen, keine Batches,
//! keine Live-Subscription.

use super::document::{CreateResponse, GeocodePatch, ListResponse, PinDocument, RemoteDocument};
use crate::core::GeoPoint;
use crate::shared::StoreConfig;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximal gelesene Fehler-Body-Länge für Log-Ausgaben.
const MAX_ERROR_BODY_BYTES: usize = 2 * 1024;

/// Fehlertaxonomie des Persistenz-Layers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transportfehler (DNS, TLS, Timeout, Verbindungsabbruch)
    #[error("Transportfehler: {0}")]
    Transport(#[from] reqwest::Error),
    /// Zugriff abgelehnt (HTTP 401/403)
    #[error("Zugriff abgelehnt (HTTP {status})")]
    Auth { status: u16 },
    /// Unerwarteter HTTP-Status
    #[error("unerwarteter HTTP-Status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Konfigurierter Zugriff auf genau eine Remote-Collection.
pub struct StoreClient {
    http: reqwest::Client,
    documents_url: String,
    api_token: Option<String>,
}

impl StoreClient {
    /// Baut den Client aus der Store-Konfiguration.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            documents_url: documents_url(config),
            api_token: config.api_token.clone(),
        })
    }

    /// Legt ein neues Dokument an und gibt die vergebene ID zurück.
    pub async fn create(&self, document: &PinDocument) -> Result<String, StoreError> {
        let request = self.with_auth(self.http.post(&self.documents_url));
        let response = request.json(document).send().await?;
        let response: CreateResponse = Self::expect_success(response).await?.json().await?;
        Ok(response.id)
    }

    /// Holt den vollständigen Collection-Snapshot (nur Initial-Load).
    pub async fn list(&self) -> Result<Vec<RemoteDocument>, StoreError> {
        let request = self.with_auth(self.http.get(&self.documents_url));
        let response = request.send().await?;
        let response: ListResponse = Self::expect_success(response).await?.json().await?;
        Ok(response.documents)
    }

    /// Merged das Geocode-Feld in ein bestehendes Dokument.
    pub async fn update_geocode(&self, id: &str, geocode: GeoPoint) -> Result<(), StoreError> {
        let patch = GeocodePatch {
            geocode: geocode.to_pair(),
        };
        let request = self.with_auth(self.http.patch(self.document_url(id)));
        let response = request.json(&patch).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Löscht ein Dokument. Keine Bestätigung über Erfolg/Fehlschlag hinaus.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let request = self.with_auth(self.http.delete(self.document_url(id)));
        let response = request.send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.documents_url, id)
    }

    /// Mappt Nicht-Erfolgs-Status auf die Fehlertaxonomie. Der Fehler-Body
    /// wird begrenzt mitgelesen, damit Log-Einträge aussagekräftig bleiben.
    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StoreError::Auth {
                status: status.as_u16(),
            });
        }

        let mut body = response.text().await.unwrap_or_default();
        body.truncate(MAX_ERROR_BODY_BYTES);
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Baut die Collection-URL aus den Konfigurationsteilen.
fn documents_url(config: &StoreConfig) -> String {
    format!(
        "{}/v1/projects/{}/collections/{}/documents",
        config.base_url.trim_end_matches('/'),
        config.project,
        config.collection
    )
}
