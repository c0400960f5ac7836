//! Environment-derived configuration for filet.
//!
//! filet keeps no config file; everything it needs comes from the
//! environment, read once at startup:
//! - `EDITOR` (fallback `vi`) for the edit action
//! - `SHELL` (fallback `/bin/sh`) for the spawn-shell action
//! - `HOME` (fallback `dirs::home_dir()`, then `/`) for the home jump
//! - `USER` and the host name for the status line

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The `user@host` pair shown in the status line.
#[derive(Debug, Clone)]
pub struct Identity {
    user: String,
    host: String,
}

impl Identity {
    #[inline]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Startup configuration, resolved from the environment exactly once.
#[derive(Debug, Clone)]
pub struct Config {
    editor: String,
    shell: String,
    home: PathBuf,
    identity: Identity,
}

impl Config {
    pub fn from_env() -> Self {
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"));

        Self {
            editor: env_or("EDITOR", "vi"),
            shell: env_or("SHELL", "/bin/sh"),
            home,
            identity: Identity {
                user: env_or("USER", "unknown"),
                host: read_hostname(),
            },
        }
    }

    // Accessors

    #[inline]
    pub fn editor(&self) -> &str {
        &self.editor
    }

    #[inline]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    #[inline]
    pub fn home(&self) -> &Path {
        &self.home
    }

    #[inline]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

fn env_or(name: &str, fallback: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

/// Host name for the status line. `/etc/hostname` is authoritative on the
/// platforms filet targets; `HOSTNAME` covers the rest.
fn read_hostname() -> String {
    if let Ok(contents) = fs::read_to_string("/etc/hostname") {
        let trimmed = contents.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    env_or("HOSTNAME", "localhost")
}
