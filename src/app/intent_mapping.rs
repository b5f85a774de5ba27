//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::MapClicked { world_pos } => {
            // Klick auf einen Pin löscht ihn, Klick auf freie Fläche
            // platziert einen neuen (Pick-Radius in Welt-Einheiten).
            let max_distance = state.view.camera.pick_radius_world(
                state.view.viewport_size[1],
                state.options.pin_pick_radius_px,
            );

            match state.board.nearest_pin(world_pos) {
                Some(hit) if hit.distance <= max_distance => vec![AppCommand::RemovePin {
                    local_id: hit.local_id,
                }],
                _ => vec![AppCommand::PlacePin { world_pos }],
            }
        }
        AppIntent::PinDragStarted { local_id } => vec![AppCommand::BeginPinDrag { local_id }],
        AppIntent::PinDragMoved {
            local_id,
            world_pos,
            now,
        } => vec![AppCommand::DragPinTo {
            local_id,
            world_pos,
            now,
        }],
        AppIntent::PinDragEnded { local_id, now } => {
            vec![AppCommand::EndPinDrag { local_id, now }]
        }
        AppIntent::SetPinKindRequested { kind } => vec![AppCommand::SetPinKind { kind }],
        AppIntent::RemoveAllRequested => vec![AppCommand::RemoveAllPins],

        AppIntent::ClockTicked { now } => state
            .sync
            .due_updates(now)
            .into_iter()
            .map(|local_id| AppCommand::FlushPendingUpdate { local_id, now })
            .collect(),
        AppIntent::InitialLoadRequested => vec![AppCommand::RequestInitialLoad],

        AppIntent::RemoteCreateConfirmed {
            local_id,
            remote_id,
        } => vec![AppCommand::ApplyRemoteCreate {
            local_id,
            remote_id,
        }],
        AppIntent::RemoteLoadCompleted { documents } => {
            vec![AppCommand::ApplyRemoteLoad { documents }]
        }
        AppIntent::RemoteUpdateConfirmed { remote_id } => {
            vec![AppCommand::NoteRemoteUpdate { remote_id }]
        }
        AppIntent::RemoteDeleteConfirmed { remote_id } => {
            vec![AppCommand::NoteRemoteDelete { remote_id }]
        }
        AppIntent::RemoteCallFailed { operation, detail } => {
            vec![AppCommand::RecordRemoteFailure { operation, detail }]
        }
    }
}
