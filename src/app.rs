//! Application layer for filet: the navigation state machine and the
//! key-to-action mapping driving it.

pub mod keymap;
pub mod state;

pub use keymap::{Action, FileAction, NavAction};
pub use state::{AppState, KeypressResult};
