//! Drag-Start/-Ende: Pin-Move oder Kamera-Pan.

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use std::time::Instant;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus (Pin-Move oder Pan).
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() hingegen die Position *nach* Drag-Erkennung,
        // was zu asymmetrischen Hitboxen führen kann.
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());
        let max_distance = ctx
            .camera
            .pick_radius_world(ctx.viewport_size[1], ctx.options.pin_pick_radius_px);

        let hit = press_pos.and_then(|pointer_pos| {
            let world_pos =
                screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
            ctx.board
                .nearest_pin(world_pos)
                .filter(|hit| hit.distance <= max_distance)
        });

        if let Some(hit) = hit {
            events.push(AppIntent::PinDragStarted {
                local_id: hit.local_id,
            });
            self.primary_drag_mode = PrimaryDragMode::PinMove {
                local_id: hit.local_id,
            };
        } else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    /// Beendet einen Drag und emittiert das Drag-Ende-Intent.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if let PrimaryDragMode::PinMove { local_id } = self.primary_drag_mode {
            events.push(AppIntent::PinDragEnded {
                local_id,
                now: Instant::now(),
            });
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
