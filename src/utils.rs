//! Miscellaneous utilities for filet.

pub mod cli;

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves a user supplied starting path to an absolute, normalized
/// directory. Rejects anything that is not an existing directory before
/// the TUI starts.
pub fn resolve_initial_dir(arg: &str) -> io::Result<PathBuf> {
    let path = Path::new(arg);
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let canonical = abs.canonicalize()?;
    if !canonical.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("'{arg}' is not a directory"),
        ));
    }
    Ok(canonical)
}
