//! API key entry dialog and error alert

use egui::{Align2, RichText};

use crate::dashboard::theme::ThemeColors;

/// What the user chose in the credential dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Save the entered key (untrimmed)
    Save(String),
    Cancel,
}

/// State of the API key dialog
#[derive(Debug, Default)]
pub struct CredentialDialog {
    open: bool,
    input: String,
    focus_requested: bool,
}

impl CredentialDialog {
    /// Open the dialog showing the currently stored key
    pub fn open(&mut self, current_key: Option<&str>) {
        self.open = true;
        self.input = current_key.unwrap_or_default().to_string();
        self.focus_requested = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }

    /// Render the dialog if open; returns the user's choice once made
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action = None;

        egui::Window::new("Scripta - Enter API Key")
            .collapsible(false)
            .resizable(false)
            .fixed_size([400.0, 150.0])
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(6.0);
                    ui.label("API Key:");
                    ui.add_space(4.0);

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.input).desired_width(360.0),
                    );
                    if !self.focus_requested {
                        response.request_focus();
                        self.focus_requested = true;
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        action = Some(DialogAction::Save(self.input.clone()));
                    }

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.add_space(130.0);
                        if ui.button("Save").clicked() {
                            action = Some(DialogAction::Save(self.input.clone()));
                        }
                        if ui.button("Cancel").clicked() {
                            action = Some(DialogAction::Cancel);
                        }
                    });
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && action.is_none() {
            action = Some(DialogAction::Cancel);
        }

        if action.is_some() {
            self.close();
        }
        action
    }
}

/// Modal error alert; dismissed with OK
#[derive(Debug, Default)]
pub struct ErrorAlert {
    message: Option<String>,
}

impl ErrorAlert {
    pub fn raise(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(message) = self.message.as_deref() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(ThemeColors::TEXT_ERROR));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.message = None;
        }
    }
}
