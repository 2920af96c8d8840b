//! System clipboard access
//!
//! Uses the `arboard` crate to read pasted images and write transcripts.

use arboard::Clipboard;
use image::{DynamicImage, RgbaImage};
use thiserror::Error;

/// Error type for clipboard operations
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Clipboard holds no image (it may still hold text)
    #[error("No image in clipboard!")]
    Empty,
    /// Clipboard offers image data that cannot be decoded
    #[error("Clipboard doesn't contain a valid image")]
    NotAnImage,
    /// Clipboard could not be opened or written
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Read an image from the system clipboard
pub fn read_image() -> Result<DynamicImage, ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    match clipboard.get_image() {
        Ok(data) => rgba_to_image(data.width, data.height, data.bytes.into_owned()),
        Err(e) => Err(read_error(e)),
    }
}

/// Map a failed image read to what the user is told
fn read_error(error: arboard::Error) -> ClipboardError {
    match error {
        arboard::Error::ContentNotAvailable => ClipboardError::Empty,
        arboard::Error::ConversionFailure => ClipboardError::NotAnImage,
        e => ClipboardError::Unavailable(e.to_string()),
    }
}

/// Copy text to the system clipboard
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

fn rgba_to_image(width: usize, height: usize, bytes: Vec<u8>) -> Result<DynamicImage, ClipboardError> {
    if width == 0 || height == 0 {
        return Err(ClipboardError::NotAnImage);
    }
    RgbaImage::from_raw(width as u32, height as u32, bytes)
        .map(DynamicImage::ImageRgba8)
        .ok_or(ClipboardError::NotAnImage)
}
