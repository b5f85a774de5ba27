//! 2D-Kamera für Pan und Zoom über der Mercator-Welt.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = ganze Welt sichtbar)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbbreite bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 2048.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.5;
    /// Maximaler Zoom-Faktor (Straßen-Level).
    pub const ZOOM_MAX: f32 = 40000.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Standard-Grenzen
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb expliziter Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    /// Berücksichtigt BASE_WORLD_EXTENT, Zoom und Aspekt-Ratio.
    /// Screen-Y wächst nach unten, Welt-Y ebenfalls (Mercator, Norden oben).
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let ndc = (screen_pos / screen_size) * 2.0 - Vec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Umkehrung
    /// von [`Camera2D::screen_to_world`]).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let aspect = screen_size.x / screen_size.y;
        let rel = world_pos - self.position;
        let ndc = Vec2::new(
            rel.x * self.zoom / (Self::BASE_WORLD_EXTENT * aspect),
            rel.y * self.zoom / Self::BASE_WORLD_EXTENT,
        );
        (ndc + Vec2::ONE) / 2.0 * screen_size
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Berechnet den Pick-Radius in Welt-Einheiten für die Pin-Auswahl.
    ///
    /// Konvertiert den Pixel-Radius basierend auf aktuellem Zoom und
    /// Viewport-Höhe in Welt-Koordinaten.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_world_roundtrip() {
        let mut camera = Camera2D::new();
        camera.look_at(Vec2::new(2300.0, 1400.0));
        camera.zoom = 128.0;

        let screen_size = Vec2::new(1280.0, 720.0);
        let screen = Vec2::new(412.0, 233.0);

        let world = camera.screen_to_world(screen, screen_size);
        let back = camera.world_to_screen(world, screen_size);

        assert_relative_eq!(back.x, screen.x, epsilon = 1e-2);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-2);
    }

    #[test]
    fn test_screen_center_maps_to_camera_position() {
        let mut camera = Camera2D::new();
        camera.look_at(Vec2::new(100.0, 200.0));

        let screen_size = Vec2::new(800.0, 600.0);
        let world = camera.screen_to_world(screen_size / 2.0, screen_size);

        assert_relative_eq!(world.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(world.y, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_pick_radius_shrinks_with_zoom() {
        let mut camera = Camera2D::new();
        let wide = camera.pick_radius_world(720.0, 12.0);
        camera.zoom_by(8.0);
        let close = camera.pick_radius_world(720.0, 12.0);

        assert!(close < wide);
        assert_relative_eq!(wide / close, 8.0, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_clamping() {
        let mut camera = Camera2D::new();
        camera.zoom_by(0.0001);
        assert_eq!(camera.zoom, Camera2D::ZOOM_MIN);
        camera.zoom_by(f32::MAX);
        assert_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }
}
