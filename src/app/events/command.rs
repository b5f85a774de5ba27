use crate::core::PinKind;
use crate::store::RemoteDocument;
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Pin an Weltposition platzieren (optimistisch + Create)
    PlacePin { world_pos: glam::Vec2 },
    /// Pin entfernen (optimistisch + Delete)
    RemovePin { local_id: u64 },
    /// Drag-Lifecycle: Verschieben eines Pins beginnen
    BeginPinDrag { local_id: u64 },
    /// Drag-Lifecycle: Pin-Position spiegeln und Debounce neu aufziehen
    DragPinTo {
        local_id: u64,
        world_pos: glam::Vec2,
        now: Instant,
    },
    /// Drag-Lifecycle: Verschieben beenden
    EndPinDrag { local_id: u64, now: Instant },
    /// Fälliges Debounce-Update eines Pins senden
    FlushPendingUpdate { local_id: u64, now: Instant },
    /// Alle Pins entfernen (Best-Effort über sequentielle Deletes)
    RemoveAllPins,
    /// Typ für den nächsten platzierten Pin setzen
    SetPinKind { kind: PinKind },

    /// Initial-Load anfordern
    RequestInitialLoad,
    /// Store-Bestätigung: Dokument-ID in den wartenden Pin mergen
    ApplyRemoteCreate { local_id: u64, remote_id: String },
    /// Store-Snapshot: Board vollständig ersetzen
    ApplyRemoteLoad { documents: Vec<RemoteDocument> },
    /// Store-Bestätigung eines Updates verbuchen
    NoteRemoteUpdate { remote_id: String },
    /// Store-Bestätigung eines Deletes verbuchen
    NoteRemoteDelete { remote_id: String },
    /// Fehlgeschlagenen Roundtrip verbuchen (nur Log, kein Rollback)
    RecordRemoteFailure {
        operation: &'static str,
        detail: String,
    },

    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Anwendung beenden
    RequestExit,
}
