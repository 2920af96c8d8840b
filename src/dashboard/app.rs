//! Window application entry point

use eframe::egui;
use egui::RichText;
use tracing::{error, info, warn};

use crate::app::Transcriber;
use crate::clipboard;
use crate::dashboard::components::{render_confidence_key, DialogAction};
use crate::dashboard::state::WindowState;
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::{render_preview_view, render_transcript_view};
use crate::shared::{SessionState, StatusMessage};
use crate::vision::OcrClient;

/// Window title
pub const WINDOW_TITLE: &str = "Scripta - OCR Transcription Helper";

/// The main window
pub struct ScriptaWindow<C: OcrClient> {
    /// Session context (config, credential, status)
    session: SessionState,
    /// Widget state
    state: WindowState,
    /// Paste pipeline
    transcriber: Transcriber<C>,
    /// Whether theme has been applied
    theme_applied: bool,
}

impl<C: OcrClient> ScriptaWindow<C> {
    pub fn new(session: SessionState, transcriber: Transcriber<C>) -> Self {
        Self {
            session,
            state: WindowState::default(),
            transcriber,
            theme_applied: false,
        }
    }

    /// Create eframe options for the window
    pub fn options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([500.0, 865.0])
                .with_min_inner_size([500.0, 480.0])
                .with_max_inner_size([500.0, f32::INFINITY])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        }
    }

    /// Read the clipboard, run OCR and show the result
    fn paste_image(&mut self, ctx: &egui::Context) {
        let image = match clipboard::read_image() {
            Ok(image) => image,
            Err(e) => {
                warn!("Paste ignored: {}", e);
                self.session.set_status(e.into());
                return;
            }
        };

        let (width, height) = (image.width(), image.height());
        info!("Image pasted ({}x{})", width, height);
        self.session
            .set_status(StatusMessage::ImagePasted { width, height });
        self.state.preview.set_image(ctx, &image);

        match self
            .transcriber
            .transcribe(&image, self.session.credential.as_ref())
        {
            Ok(transcript) => {
                self.state.transcript.load(&transcript.spans);
                self.state.reset_editor();
            }
            Err(e) => {
                error!("OCR failed: {}", e);
                self.session.set_status(StatusMessage::Error(e.to_string()));
            }
        }
    }

    fn copy_to_clipboard(&mut self) {
        match clipboard::copy_text(self.state.transcript.copy_text()) {
            Ok(()) => self.session.set_status(StatusMessage::Copied),
            Err(e) => {
                warn!("Copy failed: {}", e);
                self.session.set_status(e.into());
            }
        }
    }

    fn apply_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::Save(raw) => {
                if let Err(e) = self.session.update_api_key(&raw) {
                    error!("Error saving config: {:#}", e);
                    self.state
                        .alert
                        .raise(format!("Failed to save configuration: {:#}", e));
                }
            }
            DialogAction::Cancel => {}
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            if ui.button("Configure API Key").clicked() {
                let current = self.session.config.api_key.clone();
                self.state.credential_dialog.open(current.as_deref());
            }
            if ui.button("Toggle Image Preview").clicked() {
                self.session.toggle_preview();
            }
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let color = if self.session.status.is_error() {
            ThemeColors::TEXT_ERROR
        } else {
            ThemeColors::TEXT_PRIMARY
        };
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(RichText::new(self.session.status.to_string()).color(color));
            ui.add_space(8.0);
        });
    }
}

impl<C: OcrClient> eframe::App for ScriptaWindow<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        let modal_open = self.state.is_modal_open();

        // Ctrl+V outside the editor triggers OCR; inside it pastes text.
        // Tracked every frame so a paste into the editor is not replayed later.
        let paste_requested = ctx.input(|i| self.state.paste_shortcut.detect(&i.events));
        if paste_requested && !modal_open && !self.state.editor_focused {
            self.paste_image(ctx);
        }

        let mut paste_clicked = false;
        let mut copy_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.render_toolbar(ui);
                self.render_status(ui);

                if self.session.preview_visible {
                    ui.vertical_centered(|ui| render_preview_view(ui, &self.state.preview));
                    ui.add_space(10.0);
                }

                render_confidence_key(ui);
                ui.add_space(8.0);

                self.state.editor_focused = render_transcript_view(
                    ui,
                    &mut self.state.editor,
                    &mut self.state.transcript,
                );

                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        paste_clicked = ui.button("Paste Image").clicked();
                        copy_clicked = ui.button("Copy to Clipboard").clicked();
                    });
                });
            });
        });

        if paste_clicked {
            self.paste_image(ctx);
        }
        if copy_clicked {
            self.copy_to_clipboard();
        }

        if let Some(action) = self.state.credential_dialog.show(ctx) {
            self.apply_dialog_action(action);
        }
        self.state.alert.show(ctx);
    }
}

/// Run the window until it is closed
pub fn run_window<C: OcrClient + 'static>(
    session: SessionState,
    transcriber: Transcriber<C>,
) -> Result<(), eframe::Error> {
    let app = ScriptaWindow::new(session, transcriber);
    eframe::run_native(
        WINDOW_TITLE,
        ScriptaWindow::<C>::options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
