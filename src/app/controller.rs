//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::store::StoreHandle;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Hält die Sende-Handle zum Store-Worker; alle Remote-Aufrufe laufen
/// über diese eine Handle und damit strikt sequentiell durch den Worker.
pub struct AppController {
    store: StoreHandle,
}

impl AppController {
    /// Erstellt einen neuen Controller mit Store-Anbindung.
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pins ===
            AppCommand::PlacePin { world_pos } => {
                handlers::pins::place(state, &self.store, world_pos)
            }
            AppCommand::RemovePin { local_id } => {
                handlers::pins::remove(state, &self.store, local_id)
            }
            AppCommand::BeginPinDrag { local_id } => handlers::pins::begin_drag(state, local_id),
            AppCommand::DragPinTo {
                local_id,
                world_pos,
                now,
            } => handlers::pins::drag_to(state, local_id, world_pos, now),
            AppCommand::EndPinDrag { local_id, now } => {
                handlers::pins::end_drag(state, local_id, now)
            }
            AppCommand::FlushPendingUpdate { local_id, now } => {
                handlers::pins::flush_pending_update(state, &self.store, local_id, now)
            }
            AppCommand::RemoveAllPins => handlers::pins::remove_all(state, &self.store),
            AppCommand::SetPinKind { kind } => handlers::pins::set_kind(state, kind),

            // === Remote-Store ===
            AppCommand::RequestInitialLoad => {
                handlers::remote::request_initial_load(state, &self.store)
            }
            AppCommand::ApplyRemoteCreate {
                local_id,
                remote_id,
            } => handlers::remote::apply_create(state, local_id, remote_id),
            AppCommand::ApplyRemoteLoad { documents } => {
                handlers::remote::apply_load(state, documents)
            }
            AppCommand::NoteRemoteUpdate { remote_id } => {
                handlers::remote::note_update(state, &remote_id)
            }
            AppCommand::NoteRemoteDelete { remote_id } => {
                handlers::remote::note_delete(state, &remote_id)
            }
            AppCommand::RecordRemoteFailure { operation, detail } => {
                handlers::remote::record_failure(state, operation, &detail)
            }

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }
}
