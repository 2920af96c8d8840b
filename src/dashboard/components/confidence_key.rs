//! Confidence key legend

use egui::{Color32, RichText, Rounding, Stroke};

use crate::annotate::ConfidenceClass;
use crate::dashboard::theme::{confidence_color, ThemeColors};

/// Render the legend explaining the confidence colours
pub fn render_confidence_key(ui: &mut egui::Ui) {
    egui::Frame::none()
        .fill(ThemeColors::BG_KEY)
        .stroke(Stroke::new(2.0, ThemeColors::BORDER))
        .rounding(Rounding::same(2.0))
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Confidence Key:")
                        .size(13.0)
                        .strong()
                        .color(Color32::BLACK),
                );
                for class in ConfidenceClass::ALL {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("● {}", class.label()))
                            .size(13.0)
                            .color(confidence_color(class)),
                    );
                }
            });
        });
}
