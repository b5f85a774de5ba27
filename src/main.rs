//! GeoPin.
//!
//! Karten-Pin-Editor auf egui-Basis: Klick platziert Pins, Drag
//! verschiebt sie, Klick auf einen Pin löscht ihn. Jeder Pin wird als
//! Dokument in einer entfernten Collection persistiert.

use eframe::egui;
use geopin::store::StoreEvent;
use geopin::{ui, AppController, AppIntent, AppOptions, AppState, StoreBridge};
use std::time::{Duration, Instant};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("GeoPin v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("GeoPin"),
            ..Default::default()
        };

        eframe::run_native(
            "GeoPin",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(GeoPinApp::new()?))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct GeoPinApp {
    state: AppState,
    controller: AppController,
    bridge: StoreBridge,
    input: ui::InputState,
    /// Zuletzt gerenderte Board-Revision (Change-Notification-Abgleich)
    last_board_revision: u64,
}

impl GeoPinApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let options = AppOptions::load_from_file(&config_path);

        let bridge = StoreBridge::spawn(options.store.clone())?;

        let mut state = AppState::new();
        state.options = options;

        let mut controller = AppController::new(bridge.handle());

        // Initial-Load: genau einmal pro Programmstart, kein Polling danach
        controller.handle_intent(&mut state, AppIntent::InitialLoadRequested)?;

        let last_board_revision = state.board.revision();

        Ok(Self {
            state,
            controller,
            bridge,
            input: ui::InputState::new(),
            last_board_revision,
        })
    }
}

impl eframe::App for GeoPinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.drain_store_events();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        // Frame-Uhr: fällige Debounce-Updates flushen
        events.push(AppIntent::ClockTicked {
            now: Instant::now(),
        });

        self.process_events(events);

        self.sync_board_subscription(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl GeoPinApp {
    /// Übersetzt seit dem letzten Frame eingetroffene Store-Events in Intents.
    fn drain_store_events(&self) -> Vec<AppIntent> {
        self.bridge
            .poll()
            .into_iter()
            .map(|event| match event {
                StoreEvent::Created {
                    local_id,
                    remote_id,
                } => AppIntent::RemoteCreateConfirmed {
                    local_id,
                    remote_id,
                },
                StoreEvent::Loaded { documents } => AppIntent::RemoteLoadCompleted { documents },
                StoreEvent::Updated { remote_id } => AppIntent::RemoteUpdateConfirmed { remote_id },
                StoreEvent::Deleted { remote_id } => AppIntent::RemoteDeleteConfirmed { remote_id },
                StoreEvent::Failed { operation, detail } => {
                    AppIntent::RemoteCallFailed { operation, detail }
                }
            })
            .collect()
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.board,
                    &self.state.options,
                ));

                ui::draw_map(ui, rect, &self.state);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Explizite Board-Subscription: hat sich die Revision seit dem
    /// letzten Frame geändert, wird neu gezeichnet.
    fn sync_board_subscription(&mut self, ctx: &egui::Context) {
        let revision = self.state.board.revision();
        if revision != self.last_board_revision {
            self.last_board_revision = revision;
            ctx.request_repaint();
        }
    }

    /// Repaint anfordern, solange Interaktion läuft oder Antworten bzw.
    /// Debounce-Deadlines ausstehen.
    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
            return;
        }

        if let Some(deadline) = self.state.sync.next_deadline() {
            let wait = deadline.saturating_duration_since(Instant::now());
            ctx.request_repaint_after(wait.min(Duration::from_millis(100)));
        } else if self.state.sync.calls_in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
