//! Window view state
//!
//! UI-only state that does not outlive the window.

use crate::dashboard::components::{CredentialDialog, ErrorAlert};
use crate::dashboard::shortcut::PasteShortcut;
use crate::dashboard::views::PreviewState;
use crate::transcript::TranscriptBuffer;

/// State for the main window's widgets
#[derive(Default)]
pub struct WindowState {
    /// Styled content of the editor
    pub transcript: TranscriptBuffer,
    /// Text as currently edited by the user
    pub editor: String,
    /// Whether the editor had focus last frame
    pub editor_focused: bool,
    /// Ctrl+V recognition
    pub paste_shortcut: PasteShortcut,
    /// Thumbnail of the last pasted image
    pub preview: PreviewState,
    /// API key dialog
    pub credential_dialog: CredentialDialog,
    /// Blocking error alert
    pub alert: ErrorAlert,
}

impl WindowState {
    /// True while a dialog or alert should block the rest of the window
    pub fn is_modal_open(&self) -> bool {
        self.credential_dialog.is_open() || self.alert.is_open()
    }

    /// Replace the editor content with the transcript's text
    pub fn reset_editor(&mut self) {
        self.editor.clear();
        self.editor.push_str(self.transcript.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{annotate, WordRecord};

    #[test]
    fn test_reset_editor_mirrors_transcript() {
        let mut state = WindowState::default();
        state.editor = "old edits".to_string();
        state
            .transcript
            .load(&annotate(&[WordRecord::new("fresh", 0.9), WordRecord::new("text", 0.9)]));
        state.reset_editor();
        assert_eq!(state.editor, "fresh text");
    }

    #[test]
    fn test_modal_tracking() {
        let mut state = WindowState::default();
        assert!(!state.is_modal_open());
        state.credential_dialog.open(None);
        assert!(state.is_modal_open());
    }
}
