//! Persistenz-Layer: Wire-Dokumente, HTTP-Client und Worker-Bridge.

pub mod bridge;
pub mod client;
pub mod document;

pub use bridge::{StoreBridge, StoreEvent, StoreHandle, StoreRequest};
pub use client::{StoreClient, StoreError};
pub use document::{ListResponse, PinDocument, RemoteDocument};
