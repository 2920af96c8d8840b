//! Preview view - thumbnail of the last pasted image

use egui::{RichText, Rounding};
use image::imageops::FilterType;
use image::DynamicImage;

use crate::dashboard::theme::ThemeColors;

/// Largest thumbnail drawn on the preview canvas
pub const PREVIEW_MAX_SIZE: (u32, u32) = (400, 300);
/// Size of the preview canvas
const CANVAS_SIZE: egui::Vec2 = egui::vec2(450.0, 300.0);

/// Shrink `image` to fit inside `max_width` x `max_height`, keeping its
/// aspect ratio. Images that already fit are returned unchanged.
pub fn fit_within(image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if image.width() <= max_width && image.height() <= max_height {
        return image.clone();
    }
    image.resize(max_width, max_height, FilterType::Lanczos3)
}

/// Texture holding the current thumbnail
#[derive(Default)]
pub struct PreviewState {
    texture: Option<egui::TextureHandle>,
}

impl PreviewState {
    /// Replace the thumbnail with a scaled copy of `image`
    pub fn set_image(&mut self, ctx: &egui::Context, image: &DynamicImage) {
        let thumbnail = fit_within(image, PREVIEW_MAX_SIZE.0, PREVIEW_MAX_SIZE.1).to_rgba8();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [thumbnail.width() as usize, thumbnail.height() as usize],
            thumbnail.as_raw(),
        );

        match self.texture {
            Some(ref mut texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture(
                    "paste_preview",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
    }
}

/// Render the preview canvas
pub fn render_preview_view(ui: &mut egui::Ui, preview: &PreviewState) {
    egui::Frame::none()
        .fill(ThemeColors::BG_CANVAS)
        .rounding(Rounding::same(2.0))
        .show(ui, |ui| {
            ui.set_min_size(CANVAS_SIZE);
            ui.set_max_size(CANVAS_SIZE);

            ui.centered_and_justified(|ui| match preview.texture {
                Some(ref texture) => {
                    ui.image((texture.id(), texture.size_vec2()));
                }
                None => {
                    ui.label(
                        RichText::new("No image")
                            .size(12.0)
                            .color(ThemeColors::TEXT_MUTED),
                    );
                }
            });
        });
}
