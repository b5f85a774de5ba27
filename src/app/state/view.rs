use crate::core::{geo, Camera2D, OFFICE_GEOCODE};
use crate::shared::options;

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand: Kamera auf dem Büro zentriert.
    pub fn new() -> Self {
        let mut camera = Camera2D::new();
        camera.look_at(geo::geo_to_world(OFFICE_GEOCODE));
        camera.zoom = options::CAMERA_INITIAL_ZOOM;

        Self {
            camera,
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
