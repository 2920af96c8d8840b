//! Window theme and styling
//!
//! Dark chrome around a light editing surface; confidence tiers use the same
//! colours in the editor and in the legend.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::annotate::ConfidenceClass;

/// Colour palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_WINDOW: Color32 = Color32::from_rgb(32, 34, 37);
    pub const BG_CANVAS: Color32 = Color32::from_rgb(17, 17, 17);
    pub const BG_KEY: Color32 = Color32::from_rgb(211, 211, 211);
    pub const BG_EDITOR: Color32 = Color32::from_rgb(250, 250, 250);
    pub const BG_BUTTON: Color32 = Color32::from_rgb(48, 50, 56);
    pub const BG_HOVER: Color32 = Color32::from_rgb(64, 66, 74);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 160);
    pub const TEXT_EDITOR: Color32 = Color32::from_rgb(20, 20, 20);
    pub const TEXT_ERROR: Color32 = Color32::from_rgb(231, 76, 60);

    // Confidence colors
    pub const CONFIDENCE_HIGH: Color32 = Color32::from_rgb(0x2C, 0x7A, 0x7B);
    pub const CONFIDENCE_MEDIUM: Color32 = Color32::from_rgb(0xB7, 0x79, 0x1F);
    pub const CONFIDENCE_LOW: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

    pub const BORDER: Color32 = Color32::from_rgb(70, 72, 80);
}

/// Text colour for a confidence tier
pub fn confidence_color(class: ConfidenceClass) -> Color32 {
    match class {
        ConfidenceClass::High => ThemeColors::CONFIDENCE_HIGH,
        ConfidenceClass::Medium => ThemeColors::CONFIDENCE_MEDIUM,
        ConfidenceClass::Low => ThemeColors::CONFIDENCE_LOW,
    }
}

/// Apply the theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style: Style = (*ctx.style()).clone();
    let mut visuals = Visuals::dark();

    visuals.window_fill = ThemeColors::BG_WINDOW;
    visuals.panel_fill = ThemeColors::BG_WINDOW;
    visuals.extreme_bg_color = ThemeColors::BG_EDITOR;

    visuals.widgets.inactive.bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.weak_bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.rounding = Rounding::same(4.0);

    // Selection inside the light editor
    visuals.selection.bg_fill = Color32::from_rgb(40, 40, 40);
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.window_rounding = Rounding::same(6.0);
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}
