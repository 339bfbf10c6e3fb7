//! Main application structure and state management
//!
//! This module contains the core `BloodStudioApp` struct that implements
//! the `eframe::App` trait. It handles:
//!
//! - **UI Rendering:** Action bar, editor with highlighting, console panel
//! - **Editor State:** The buffer model and its line-number gutter
//! - **User Input:** Button actions and prompt keystrokes while a run is
//!   paused awaiting input
//! - **Controller Bridge:** Channels to the background task that owns the
//!   session controller and the HTTP client
//!
//! ## Architecture
//!
//! The app runs in the single-threaded `egui` loop. All protocol work
//! happens on a background tokio task that owns the `SessionController`;
//! the UI sends [`AppRequest`]s and renders the latest [`ConsoleSnapshot`]
//! it has received. The UI thread itself only ever touches the editor
//! buffer and the classifier.
//!
//! ## UI Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Top Panel (action bar + examples menu)  │
//! ├─────────────────────────────────────────┤
//! │ Central Panel (editor with gutter)      │
//! ├─────────────────────────────────────────┤
//! │ Bottom Panel (console transcript)       │
//! │ - output log, error lines tinted        │
//! │ - live pending-input line when paused   │
//! └─────────────────────────────────────────┘
//! ```

mod controller_task;
mod highlight;

use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use bloodstudio::config::Config;
use bloodstudio::editor::EditorBuffer;
use bloodstudio::error::Result;
use bloodstudio::models::{OutputLine, SessionState};
use bloodstudio::remote::{CompileAction, HttpExecutionService};
use bloodstudio::session::InputKey;

/// Request sent from the UI to the controller task
#[derive(Debug, Clone)]
pub(crate) enum AppRequest {
    /// Submit a compile request for the given action
    Compile { code: String, action: CompileAction },
    /// Submit an execute request
    Execute { code: String },
    /// Forward a keystroke to the interactive-input sub-protocol
    Key(InputKey),
    /// Empty the output log
    ClearOutput,
}

/// The controller task's view of the console, published after every
/// mutation
#[derive(Debug, Clone)]
pub(crate) struct ConsoleSnapshot {
    /// Transcript lines, oldest first
    pub lines: Vec<OutputLine>,
    /// Session state
    pub state: SessionState,
    /// Live pending-input buffer
    pub pending_input: String,
}

impl Default for ConsoleSnapshot {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            state: SessionState::Idle,
            pending_input: String::new(),
        }
    }
}

/// Canned example programs, appended to the editor on demand
const EXAMPLE_PROGRAMS: &[(&str, &str)] = &[
    (
        "Declaraciones",
        "Hunter numero: Maria => 10;\nHunter texto: Eileen => \"Hola mundo\";\nHunter esVerdadero: Blood => true;\n\nInsight (esVerdadero) {\n  Pray(\"La condición es verdadera.\");\n} Madness {\n  Pray(\"La condición es falsa.\");\n}",
    ),
    (
        "Ciclo Nightmare",
        "Hunter numeros: Maria[5] => [1, 2, 3, 4, 5];\n\nNightmare (Hunter i: Maria => 0; i < 5; i => i + 1;) {\n    Pray(numeros[i]);\n}",
    ),
    (
        "Entrada de datos",
        "Hunter nombre: Eileen;\nEyes(nombre);\nPray(\"El nombre del usuario es: \" + nombre);",
    ),
    (
        "Función recursiva",
        "GreatOnes factorial(n: Maria): Maria {\n  Insight (n == 1) {\n    Echoes 1;\n  } Madness {\n    Echoes (n * factorial(n - 1));\n  }\n}\n\nHunter resultado: Maria;\nresultado => factorial(5);\nPray(resultado);",
    ),
];

/// Core application state
pub struct BloodStudioApp {
    /// The editor buffer (owned by the UI thread)
    buffer: EditorBuffer,
    /// Latest console snapshot from the controller task
    snapshot: ConsoleSnapshot,
    /// Editor font size from configuration
    font_size: f32,
    /// Requests to the controller task
    request_tx: mpsc::UnboundedSender<AppRequest>,
    /// Snapshots from the controller task
    snapshot_rx: mpsc::UnboundedReceiver<ConsoleSnapshot>,
    /// Keeps the controller task's runtime alive for the app's lifetime
    _runtime: tokio::runtime::Runtime,
}

impl BloodStudioApp {
    /// Create the application and spawn the controller task.
    pub fn new(config: Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let service =
            HttpExecutionService::new(&config.server.base_url, config.server.timeout())?;

        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();

        runtime.spawn(controller_task::run(request_rx, snapshot_tx, service));
        debug!("Controller task spawned for {}", config.server.base_url);

        Ok(Self {
            buffer: EditorBuffer::new(),
            snapshot: ConsoleSnapshot::default(),
            font_size: config.ui.font_size as f32,
            request_tx,
            snapshot_rx,
            _runtime: runtime,
        })
    }

    /// Whether a remote call is outstanding (submissions disabled).
    fn is_busy(&self) -> bool {
        matches!(
            self.snapshot.state,
            SessionState::Compiling | SessionState::Executing
        )
    }

    fn send(&self, request: AppRequest) {
        if self.request_tx.send(request).is_err() {
            warn!("Controller task is gone; request dropped");
        }
    }

    /// Drain pending snapshots from the controller task.
    fn poll_snapshots(&mut self) {
        while let Ok(snapshot) = self.snapshot_rx.try_recv() {
            self.snapshot = snapshot;
        }
    }

    /// Forward prompt keystrokes while the session awaits input.
    fn handle_prompt_keys(&mut self, ctx: &egui::Context) {
        if self.snapshot.state != SessionState::AwaitingInput {
            return;
        }

        let mut keys = Vec::new();
        ctx.input(|input| {
            for event in &input.events {
                match event {
                    egui::Event::Text(text) => {
                        keys.extend(text.chars().map(InputKey::Char));
                    }
                    egui::Event::Key {
                        key: egui::Key::Backspace,
                        pressed: true,
                        ..
                    } => keys.push(InputKey::Backspace),
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => keys.push(InputKey::Enter),
                    _ => {}
                }
            }
        });

        for key in keys {
            self.send(AppRequest::Key(key));
        }
    }

    fn render_action_bar(&mut self, ui: &mut egui::Ui) {
        let busy = self.is_busy();
        ui.horizontal(|ui| {
            ui.heading("BloodStudio");
            ui.separator();

            ui.add_enabled_ui(!busy, |ui| {
                if ui.button("Tokens").clicked() {
                    self.send(AppRequest::Compile {
                        code: self.buffer.text().to_string(),
                        action: CompileAction::Tokens,
                    });
                }
                if ui.button("AST").clicked() {
                    self.send(AppRequest::Compile {
                        code: self.buffer.text().to_string(),
                        action: CompileAction::Ast,
                    });
                }
                if ui.button("Compilar").clicked() {
                    self.send(AppRequest::Compile {
                        code: self.buffer.text().to_string(),
                        action: CompileAction::Compile,
                    });
                }
                if ui.button("Ejecutar").clicked() {
                    self.send(AppRequest::Execute {
                        code: self.buffer.text().to_string(),
                    });
                }
            });

            ui.menu_button("Ejemplos", |ui| {
                for (name, program) in EXAMPLE_PROGRAMS {
                    if ui.button(*name).clicked() {
                        self.buffer.append_program(program);
                    }
                }
            });

            if busy {
                ui.spinner();
                ui.label("Procesando...");
            }
        });
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let font_size = self.font_size;

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    // Line-number gutter, derived from the buffer
                    let numbers = self.buffer.line_numbers().join("\n");
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(numbers)
                                .font(egui::FontId::monospace(font_size))
                                .color(egui::Color32::DARK_GRAY),
                        )
                        .selectable(false),
                    );

                    let mut layouter =
                        |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
                            let mut job = highlight::layout_job(text.as_str(), font_size);
                            job.wrap.max_width = wrap_width;
                            ui.fonts_mut(|fonts| fonts.layout_job(job))
                        };

                    ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::multiline(self.buffer.text_mut())
                            .code_editor()
                            .hint_text("Escribe tu código aquí")
                            .desired_width(f32::INFINITY)
                            .layouter(&mut layouter),
                    );
                });
            });
    }

    fn render_console(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Consola");
            if ui.button("🗑 Limpiar").clicked() {
                self.send(AppRequest::ClearOutput);
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("console_scroll")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                let failed = self.snapshot.state == SessionState::Failed;
                for (index, line) in self.snapshot.lines.iter().enumerate() {
                    let is_last = index + 1 == self.snapshot.lines.len();
                    let color = if line.is_prompt_echo {
                        egui::Color32::KHAKI
                    } else if failed && is_last {
                        egui::Color32::LIGHT_RED
                    } else {
                        egui::Color32::LIGHT_GRAY
                    };
                    ui.label(
                        egui::RichText::new(&line.text)
                            .font(egui::FontId::monospace(self.font_size))
                            .color(color),
                    );
                }

                // Live pending-input line while paused on a prompt
                if self.snapshot.state == SessionState::AwaitingInput {
                    ui.label(
                        egui::RichText::new(format!("{}_", self.snapshot.pending_input))
                            .font(egui::FontId::monospace(self.font_size))
                            .color(egui::Color32::WHITE),
                    );
                }
            });
    }
}

impl eframe::App for BloodStudioApp {
    // This eframe version requires `ui`, but still invokes the (deprecated)
    // `update` below for the root viewport. All rendering lives in `update`,
    // so `ui` is intentionally empty.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_snapshots();
        self.handle_prompt_keys(ctx);

        egui::TopBottomPanel::top("action_bar").show(ctx, |ui| {
            self.render_action_bar(ui);
        });

        egui::TopBottomPanel::bottom("console")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                self.render_console(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_editor(ui);
        });

        // Keep polling while the controller task is working or a prompt
        // may arrive
        if self.is_busy() || self.snapshot.state == SessionState::AwaitingInput {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
