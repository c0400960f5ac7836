//! Error types for filet.
//!
//! Terminal setup/query failures are fatal at startup and carry their own
//! variants so main can report them after the terminal has been restored.
//! Everything recoverable (unreadable directories, failed spawns, failed
//! deletes) never reaches this type; it degrades to an empty listing or a
//! status-line message instead.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("stdin/stdout is not a terminal")]
    NotATty,

    #[error("failed to set up the terminal: {0}")]
    TerminalSetup(#[source] io::Error),

    #[error("failed to query the terminal size: {0}")]
    TerminalQuery(#[source] io::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
