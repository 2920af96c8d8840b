//! Window views

pub mod preview;
pub mod transcript;

pub use preview::{render_preview_view, PreviewState};
pub use transcript::render_transcript_view;
