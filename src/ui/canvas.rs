//! Karten-Canvas: Gradnetz, Büro-Annotation und Pins mit egui-Painter.

use super::icons;
use crate::app::AppState;
use crate::core::{geo, Camera2D, OFFICE_GEOCODE, OFFICE_LABEL};

/// Kandidaten für den Gradnetz-Abstand in Grad, grob → fein.
const GRATICULE_STEPS: [f64; 9] = [45.0, 30.0, 15.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.25];

/// Zeichnet die komplette Karten-Szene in das übergebene Rechteck.
pub fn draw_map(ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
    let painter = ui.painter_at(rect);
    let camera = &state.view.camera;
    let screen_size = glam::Vec2::new(rect.width(), rect.height());

    painter.rect_filled(rect, 0.0, rgba(state.options.map_background_color));

    if state.options.show_graticule {
        draw_graticule(&painter, rect, camera, screen_size, state);
    }

    // Büro-Annotation: fix, nicht Teil des Boards, keine Lifecycle
    let office_screen = to_screen(rect, camera, screen_size, geo::geo_to_world(OFFICE_GEOCODE));
    draw_pin_icon(
        ui,
        rect,
        icons::office_icon(),
        office_screen,
        state.options.pin_size_px,
    );
    painter.text(
        office_screen + egui::Vec2::new(0.0, 4.0),
        egui::Align2::CENTER_TOP,
        OFFICE_LABEL,
        egui::FontId::proportional(12.0),
        egui::Color32::LIGHT_GRAY,
    );

    // Pins in Board-Reihenfolge
    for pin in state.board.iter() {
        let screen = to_screen(rect, camera, screen_size, geo::geo_to_world(pin.geocode));
        draw_pin_icon(
            ui,
            rect,
            icons::pin_icon(pin.kind),
            screen,
            state.options.pin_size_px,
        );
        painter.text(
            screen + egui::Vec2::new(0.0, 4.0),
            egui::Align2::CENTER_TOP,
            pin.number.to_string(),
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    }
}

/// Welt-Position → absolute Screen-Position im Viewport-Rechteck.
fn to_screen(
    rect: egui::Rect,
    camera: &Camera2D,
    screen_size: glam::Vec2,
    world: glam::Vec2,
) -> egui::Pos2 {
    let local = camera.world_to_screen(world, screen_size);
    rect.min + egui::Vec2::new(local.x, local.y)
}

/// Zeichnet ein Pin-Icon mit Spitze auf der Zielposition.
fn draw_pin_icon(
    ui: &egui::Ui,
    clip: egui::Rect,
    source: egui::ImageSource<'static>,
    tip: egui::Pos2,
    size_px: f32,
) {
    let icon_rect = egui::Rect::from_min_size(
        tip - egui::Vec2::new(size_px / 2.0, size_px),
        egui::Vec2::splat(size_px),
    );
    if clip.intersects(icon_rect) {
        egui::Image::new(source).paint_at(ui, icon_rect);
    }
}

/// Zeichnet Längen- und Breitengrad-Linien mit zoomabhängigem Abstand.
fn draw_graticule(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    screen_size: glam::Vec2,
    state: &AppState,
) {
    let stroke = egui::Stroke::new(0.5, rgba(state.options.graticule_color));

    // Sichtbaren Geo-Ausschnitt aus den Viewport-Ecken bestimmen
    let top_left = geo::world_to_geo(camera.screen_to_world(glam::Vec2::ZERO, screen_size));
    let bottom_right = geo::world_to_geo(camera.screen_to_world(screen_size, screen_size));

    let visible_lon_span = (bottom_right.lon - top_left.lon).abs().max(1e-6);
    let step = GRATICULE_STEPS
        .iter()
        .copied()
        .find(|s| visible_lon_span / s <= 12.0)
        .unwrap_or(0.25);

    // Längengrade (vertikale Linien)
    let mut lon = (top_left.lon / step).floor() * step;
    while lon <= bottom_right.lon + step {
        let world = geo::geo_to_world(geo::GeoPoint::new(0.0, lon.clamp(-180.0, 180.0)));
        let x = to_screen(rect, camera, screen_size, world).x;
        if x >= rect.min.x && x <= rect.max.x {
            painter.line_segment(
                [
                    egui::Pos2::new(x, rect.min.y),
                    egui::Pos2::new(x, rect.max.y),
                ],
                stroke,
            );
        }
        lon += step;
    }

    // Breitengrade (horizontale Linien); Mercator staucht Richtung Pole
    let mut lat = (bottom_right.lat / step).floor() * step;
    while lat <= top_left.lat + step {
        if lat.abs() < geo::MERCATOR_LAT_LIMIT {
            let world = geo::geo_to_world(geo::GeoPoint::new(lat, 0.0));
            let y = to_screen(rect, camera, screen_size, world).y;
            if y >= rect.min.y && y <= rect.max.y {
                painter.line_segment(
                    [
                        egui::Pos2::new(rect.min.x, y),
                        egui::Pos2::new(rect.max.x, y),
                    ],
                    stroke,
                );
            }
        }
        lat += step;
    }
}

fn rgba(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}
