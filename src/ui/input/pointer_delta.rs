//! Pointer-Delta-Verarbeitung: Kamera-Pan und Pin-Move.

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use std::time::Instant;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für Kamera-Pan und Pin-Move.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1]);

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::PinMove { local_id } => {
                    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                        let world_pos = screen_pos_to_world(
                            pointer_pos,
                            ctx.response,
                            ctx.viewport_size,
                            ctx.camera,
                        );
                        events.push(AppIntent::PinDragMoved {
                            local_id,
                            world_pos,
                            now: Instant::now(),
                        });
                    }
                }
                PrimaryDragMode::CameraPan | PrimaryDragMode::None => {
                    events.push(AppIntent::CameraPan {
                        delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
                    });
                }
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan {
                delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
            });
        }
    }
}
