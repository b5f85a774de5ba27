//! Zentrale Konfiguration für GeoPin.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte samt der
//! Verbindungsdaten des Remote-Stores. Die `const`-Werte bleiben als
//! Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.5;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 40000.0;
/// Zoom-Schritt bei stufenweisem Zoom (Toolbar-Buttons).
pub const CAMERA_ZOOM_STEP: f32 = 1.5;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Start-Zoom nach dem Programmstart (Stadt-Level).
pub const CAMERA_INITIAL_ZOOM: f32 = 4000.0;

// ── Pins ────────────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln für Klick-auf-Pin.
pub const PIN_PICK_RADIUS_PX: f32 = 16.0;
/// Icon-Größe der Pins in Screen-Pixeln.
pub const PIN_SIZE_PX: f32 = 40.0;

// ── Synchronisierung ────────────────────────────────────────────────

/// Ruhefenster des Drag-Debounce in Millisekunden: so lange muss ein
/// Pin unbewegt bleiben, bevor das Geocode-Update gesendet wird.
pub const UPDATE_QUIET_PERIOD_MS: u64 = 1000;

// ── Karte ───────────────────────────────────────────────────────────

/// Farbe der Gradnetz-Linien (RGBA).
pub const GRATICULE_COLOR: [f32; 4] = [0.35, 0.4, 0.45, 1.0];
/// Hintergrundfarbe der Karte (RGBA).
pub const MAP_BACKGROUND_COLOR: [f32; 4] = [0.12, 0.14, 0.16, 1.0];

// ── Remote-Store ────────────────────────────────────────────────────

/// Verbindungsdaten der Remote-Dokument-Collection.
/// Wird als `[store]`-Tabelle in der Optionen-Datei gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Basis-URL des Dienstes (ohne Pfad)
    pub base_url: String,
    /// Projekt-Kennung
    pub project: String,
    /// Collection-Kennung
    pub collection: String,
    /// Optionales Bearer-Token
    pub api_token: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            project: "geopin-demo".to_string(),
            collection: "pins".to_string(),
            api_token: None,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `geopin.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt für Toolbar-Buttons
    pub camera_zoom_step: f32,
    /// Zoom-Schritt für Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Pins ────────────────────────────────────────────────────
    /// Pick-Radius in Screen-Pixeln
    pub pin_pick_radius_px: f32,
    /// Icon-Größe in Screen-Pixeln
    pub pin_size_px: f32,

    // ── Synchronisierung ────────────────────────────────────────
    /// Ruhefenster des Drag-Debounce in Millisekunden
    pub update_quiet_period_ms: u64,

    // ── Karte ───────────────────────────────────────────────────
    /// Gradnetz anzeigen
    pub show_graticule: bool,
    /// Farbe der Gradnetz-Linien (RGBA)
    pub graticule_color: [f32; 4],
    /// Hintergrundfarbe der Karte (RGBA)
    pub map_background_color: [f32; 4],

    // ── Remote-Store ────────────────────────────────────────────
    /// Verbindungsdaten des Remote-Stores
    pub store: StoreConfig,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            pin_pick_radius_px: PIN_PICK_RADIUS_PX,
            pin_size_px: PIN_SIZE_PX,
            update_quiet_period_ms: UPDATE_QUIET_PERIOD_MS,
            show_graticule: true,
            graticule_color: GRATICULE_COLOR,
            map_background_color: MAP_BACKGROUND_COLOR,
            store: StoreConfig::default(),
        }
    }
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei, fällt bei Fehlern auf
    /// Standardwerte zurück.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geopin"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geopin.toml")
    }

    /// Ruhefenster des Drag-Debounce als `Duration`.
    pub fn update_quiet_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.update_quiet_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_survive_toml_roundtrip() {
        let options = AppOptions::default();
        let toml_str = toml::to_string_pretty(&options).expect("Serialisierung");
        let back: AppOptions = toml::from_str(&toml_str).expect("Deserialisierung");

        assert_eq!(back.update_quiet_period_ms, UPDATE_QUIET_PERIOD_MS);
        assert_eq!(back.store, StoreConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: AppOptions = toml::from_str(
            r#"
            pin_size_px = 48.0

            [store]
            base_url = "https://pins.example.net"
            project = "prod"
            collection = "marks"
            "#,
        )
        .expect("Teil-Konfiguration muss parsen");

        assert_eq!(parsed.pin_size_px, 48.0);
        assert_eq!(parsed.pin_pick_radius_px, PIN_PICK_RADIUS_PX);
        assert_eq!(parsed.store.base_url, "https://pins.example.net");
        assert_eq!(parsed.store.api_token, None);
    }
}
