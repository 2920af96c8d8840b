//! Window UI Module
//!
//! The single Scripta window: credential configuration, paste-to-OCR,
//! image preview, confidence-coloured editor and copy to clipboard.

pub mod app;
pub mod components;
pub mod shortcut;
pub mod state;
pub mod theme;
pub mod views;

pub use app::run_window;
