//! GeoPin Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod store;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PaletteState, SyncState, ViewState};
pub use core::{Camera2D, GeoPoint, Pin, PinBoard, PinKind};
pub use shared::{AppOptions, StoreConfig};
pub use store::{StoreBridge, StoreEvent, StoreHandle, StoreRequest};
