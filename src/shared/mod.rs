//! Session state and status messaging for the window

pub mod messages;
pub mod state;

pub use messages::StatusMessage;
pub use state::SessionState;
