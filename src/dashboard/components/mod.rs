//! Reusable UI components for the window

pub mod confidence_key;
pub mod credential_dialog;

pub use confidence_key::render_confidence_key;
pub use credential_dialog::{CredentialDialog, DialogAction, ErrorAlert};
