//! Core-Domänentypen: Pins, Board, Geokoordinaten, Kamera.

pub mod board;
pub mod camera;
pub mod geo;
pub mod pin;

pub use board::{NearestPin, PinBoard};
pub use camera::Camera2D;
pub use geo::{GeoPoint, OFFICE_GEOCODE, OFFICE_LABEL};
pub use pin::{Pin, PinKind};
