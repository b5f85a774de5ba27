//! Geokoordinaten und Web-Mercator-Projektion in Welt-Koordinaten.

use glam::{DVec2, Vec2};

/// Kantenlänge der projizierten Welt in Welt-Einheiten.
pub const WORLD_SIZE: f64 = 4096.0;

/// Breitengrad-Grenze der Web-Mercator-Projektion.
pub const MERCATOR_LAT_LIMIT: f64 = 85.05112878;

/// Geokoordinate (Breitengrad, Längengrad) in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Breitengrad in Grad (-90 bis 90)
    pub lat: f64,
    /// Längengrad in Grad (-180 bis 180)
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt eine neue Geokoordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Prüft, ob die Koordinate im gültigen Wertebereich liegt.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Begrenzt die Koordinate auf den gültigen Wertebereich.
    pub fn clamped(self) -> Self {
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lon: self.lon.clamp(-180.0, 180.0),
        }
    }

    /// Liefert die Koordinate als `[lat, lon]`-Paar (Wire-Format).
    pub fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Erstellt eine Koordinate aus einem `[lat, lon]`-Paar.
    pub fn from_pair(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[0],
            lon: pair[1],
        }
    }
}

/// Fixe Büro-Annotation: wird immer gerendert, ist aber kein Pin
/// und wird nie persistiert.
pub const OFFICE_GEOCODE: GeoPoint = GeoPoint {
    lat: 49.8162194129655,
    lon: 23.995099340015823,
};

/// Beschriftung der Büro-Annotation.
pub const OFFICE_LABEL: &str = "Office";

/// Projiziert eine Geokoordinate nach Web-Mercator-Welt-Koordinaten.
///
/// Welt-X wächst nach Osten, Welt-Y nach Süden (Norden oben bei y=0),
/// beide im Bereich `0..WORLD_SIZE`. Der Breitengrad wird auf die
/// Mercator-Grenze begrenzt, damit die Projektion endlich bleibt.
pub fn geo_to_world(geo: GeoPoint) -> Vec2 {
    let lat = geo.lat.clamp(-MERCATOR_LAT_LIMIT, MERCATOR_LAT_LIMIT);
    let lat_rad = lat.to_radians();

    let x = (geo.lon + 180.0) / 360.0 * WORLD_SIZE;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0
        * WORLD_SIZE;

    DVec2::new(x, y).as_vec2()
}

/// Rückprojektion von Welt-Koordinaten in eine Geokoordinate.
pub fn world_to_geo(world: Vec2) -> GeoPoint {
    let world = world.as_dvec2();

    let lon = world.x / WORLD_SIZE * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * world.y / WORLD_SIZE);
    let lat = n.sinh().atan().to_degrees();

    GeoPoint::new(lat, lon).clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_office_roundtrip() {
        let world = geo_to_world(OFFICE_GEOCODE);
        let back = world_to_geo(world);

        // f32-Weltkoordinaten begrenzen die Genauigkeit auf wenige Meter.
        assert_relative_eq!(back.lat, OFFICE_GEOCODE.lat, epsilon = 1e-3);
        assert_relative_eq!(back.lon, OFFICE_GEOCODE.lon, epsilon = 1e-3);
    }

    #[test]
    fn test_world_origin_is_northwest() {
        let nw = geo_to_world(GeoPoint::new(MERCATOR_LAT_LIMIT, -180.0));
        assert_relative_eq!(nw.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(nw.y, 0.0, epsilon = 1e-3);

        let equator = geo_to_world(GeoPoint::new(0.0, 0.0));
        assert_relative_eq!(equator.x, WORLD_SIZE as f32 / 2.0, epsilon = 1e-3);
        assert_relative_eq!(equator.y, WORLD_SIZE as f32 / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_validity_bounds() {
        assert!(GeoPoint::new(49.8, 24.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -200.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());

        let clamped = GeoPoint::new(120.0, -500.0).clamped();
        assert_eq!(clamped, GeoPoint::new(90.0, -180.0));
    }

    #[test]
    fn test_pair_conversion() {
        let geo = GeoPoint::from_pair([1.5, -2.5]);
        assert_eq!(geo.lat, 1.5);
        assert_eq!(geo.lon, -2.5);
        assert_eq!(geo.to_pair(), [1.5, -2.5]);
    }
}
