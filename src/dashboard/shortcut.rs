//! Paste shortcut detection
//!
//! The windowing layer turns a Ctrl+V press into `Event::Paste` when the
//! clipboard holds text and into nothing at all when it holds an image; the
//! key press itself is never forwarded. Only the release of V arrives as a
//! key event, so the shortcut is recognised from either signal.

use egui::{Event, Key};

/// Recognises the paste keystroke across frames
#[derive(Debug, Default)]
pub struct PasteShortcut {
    /// A paste event was seen and its V release is still pending
    paste_seen: bool,
}

impl PasteShortcut {
    /// Scan one frame's events; true when the paste keystroke was completed.
    ///
    /// Fires once per keystroke: on the paste event when there is one, else
    /// on the release of V while the command modifier is held.
    pub fn detect(&mut self, events: &[Event]) -> bool {
        let mut triggered = false;

        for event in events {
            match event {
                Event::Paste(_) => {
                    self.paste_seen = true;
                    triggered = true;
                }
                Event::Key {
                    key: Key::V,
                    pressed: false,
                    modifiers,
                    ..
                } => {
                    let already_fired = std::mem::take(&mut self.paste_seen);
                    if !already_fired && modifiers.command {
                        triggered = true;
                    }
                }
                _ => {}
            }
        }

        triggered
    }
}
