//! Interactive execution session protocol
//!
//! The session controller drives one remote round trip at a time and
//! maintains the console transcript the user sees. It owns the
//! [`crate::models::Session`] state machine, the [`OutputLog`], and the
//! pending-input buffer used while a run is paused on a prompt; nothing
//! else mutates them.

pub mod controller;
pub mod log;

pub use controller::{InputKey, SessionController};
pub use log::OutputLog;
