//! Core runtime logic for filet.
//!
//! The non-UI "engine" pieces of the application:
//! - [fm]: directory enumeration and entry classification (see [read_dir], [DirEntry]).
//! - [terminal]: terminal setup/teardown, geometry and the main event loop.
//! - [proc]: launching the editor or a shell as a blocking child process.

pub mod fm;
pub mod proc;
pub mod terminal;

pub use fm::{DirEntry, EntryKind, read_dir};
pub use terminal::{Geometry, Screen};
