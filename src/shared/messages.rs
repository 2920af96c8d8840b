//! Status messages shown in the window's status label

use std::fmt;

use crate::clipboard::ClipboardError;

/// Outcome of the last user action, rendered as status label text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusMessage {
    /// Idle, waiting for a paste
    #[default]
    Ready,
    /// Clipboard had nothing in it
    NoImage,
    /// Clipboard had something other than an image
    NotAnImage,
    /// An image was pasted and sent for recognition
    ImagePasted { width: u32, height: u32 },
    /// Text was copied to the clipboard
    Copied,
    /// Any other failure, already formatted for the user
    Error(String),
}

impl StatusMessage {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            StatusMessage::NoImage | StatusMessage::NotAnImage | StatusMessage::Error(_)
        )
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Ready => write!(f, "Press Ctrl+V to paste an image from clipboard"),
            StatusMessage::NoImage => write!(f, "No image in clipboard!"),
            StatusMessage::NotAnImage => write!(f, "Clipboard doesn't contain a valid image"),
            StatusMessage::ImagePasted { width, height } => {
                write!(f, "Image pasted, Size: {}x{}", width, height)
            }
            StatusMessage::Copied => write!(f, "Text copied to clipboard!"),
            StatusMessage::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

impl From<ClipboardError> for StatusMessage {
    fn from(error: ClipboardError) -> Self {
        match error {
            ClipboardError::Empty => StatusMessage::NoImage,
            ClipboardError::NotAnImage => StatusMessage::NotAnImage,
            other => StatusMessage::Error(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(
            StatusMessage::Ready.to_string(),
            "Press Ctrl+V to paste an image from clipboard"
        );
        assert_eq!(
            StatusMessage::ImagePasted { width: 640, height: 480 }.to_string(),
            "Image pasted, Size: 640x480"
        );
        assert_eq!(StatusMessage::Copied.to_string(), "Text copied to clipboard!");
        assert_eq!(
            StatusMessage::Error("No API key configured".into()).to_string(),
            "Error: No API key configured"
        );
    }

    #[test]
    fn test_from_clipboard_error() {
        assert_eq!(StatusMessage::from(ClipboardError::Empty), StatusMessage::NoImage);
        assert_eq!(StatusMessage::from(ClipboardError::NotAnImage), StatusMessage::NotAnImage);
        let status = StatusMessage::from(ClipboardError::Unavailable("locked".into()));
        assert!(status.is_error());
        assert_eq!(status.to_string(), "Error: Clipboard unavailable: locked");
    }
}
