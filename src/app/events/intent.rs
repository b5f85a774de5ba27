use crate::core::PinKind;
use crate::store::RemoteDocument;
use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI, Uhr und Store-Worker ohne direkte
/// Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Primärklick im Viewport: trifft er einen Pin, wird dieser
    /// gelöscht, sonst ein neuer Pin platziert
    MapClicked { world_pos: glam::Vec2 },
    /// Drag-Lifecycle Start: Pin unter dem Zeiger aufgenommen
    PinDragStarted { local_id: u64 },
    /// Drag-Lifecycle Update: Pin an neue Weltposition gezogen
    PinDragMoved {
        local_id: u64,
        world_pos: glam::Vec2,
        now: Instant,
    },
    /// Drag-Lifecycle Ende: Pin losgelassen
    PinDragEnded { local_id: u64, now: Instant },
    /// Typ für den nächsten platzierten Pin wechseln
    SetPinKindRequested { kind: PinKind },
    /// Alle Pins entfernen (Toolbar-Button)
    RemoveAllRequested,

    /// Frame-Uhr: fällige Debounce-Updates flushen
    ClockTicked { now: Instant },
    /// Initial-Load anstoßen (genau einmal beim Start)
    InitialLoadRequested,

    /// Store-Worker: Create bestätigt, Dokument-ID liegt vor
    RemoteCreateConfirmed { local_id: u64, remote_id: String },
    /// Store-Worker: Collection-Snapshot geladen
    RemoteLoadCompleted { documents: Vec<RemoteDocument> },
    /// Store-Worker: Update bestätigt
    RemoteUpdateConfirmed { remote_id: String },
    /// Store-Worker: Delete bestätigt
    RemoteDeleteConfirmed { remote_id: String },
    /// Store-Worker: Roundtrip fehlgeschlagen
    RemoteCallFailed {
        operation: &'static str,
        detail: String,
    },
}
