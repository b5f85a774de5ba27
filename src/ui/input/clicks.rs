//! Klick-Events: Primärklick im Viewport.

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet den Primärklick im Viewport.
    ///
    /// Ob der Klick einen Pin löscht oder einen neuen platziert,
    /// entscheidet das Intent-Mapping anhand des Pick-Radius.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            let world_pos =
                screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
            events.push(AppIntent::MapClicked { world_pos });
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
