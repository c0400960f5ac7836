//! Application state and the navigation state machine for filet.
//!
//! [AppState] holds the current directory, the listing produced from it,
//! the selection cursor and the hidden-file flag. Each keypress maps to
//! exactly one transition; the returned [KeypressResult] tells the event
//! loop what, if anything, to redraw.
//!
//! A transition that invalidates the listing (directory change, hidden
//! toggle, refresh, or anything that may have touched the filesystem)
//! returns [KeypressResult::Stale]; the loop then resets the selection,
//! re-reads the directory and repaints the whole screen.

use crate::app::keymap::{self, Action, FileAction, NavAction};
use crate::config::Config;
use crate::core::fm::{self, DirEntry, EntryKind};
use crate::core::proc;
use crate::core::terminal::Screen;
use crossterm::event::KeyEvent;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// What the event loop should do after a keypress was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    /// Nothing changed, nothing to draw.
    Continue,
    /// The listing is invalid; re-read and repaint everything.
    Stale,
    /// Only the selection moved; repaint the old and new lines.
    Moved { prev: usize },
    Quit,
}

/// Application state of the file browser.
pub struct AppState<'a> {
    config: &'a Config,
    current_dir: PathBuf,
    entries: Vec<DirEntry>,
    selected: usize,
    show_hidden: bool,
    message: Option<String>,
}

impl<'a> AppState<'a> {
    pub fn from_dir(config: &'a Config, current_dir: PathBuf) -> Self {
        Self {
            config,
            current_dir,
            entries: Vec::new(),
            selected: 0,
            show_hidden: false,
            message: None,
        }
    }

    // Accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn selected_entry(&self) -> Option<&DirEntry> {
        self.entries.get(self.selected)
    }

    /// Replaces the listing with a fresh read of the current directory
    /// and resets the selection. Runs after every stale transition.
    pub fn reload(&mut self) {
        self.selected = 0;
        self.entries = fm::read_dir(&self.current_dir, self.show_hidden);
    }

    /// Interprets one key against the current state. Unbound keys are
    /// no-ops; a bound key clears any status message from the previous
    /// action before its transition runs.
    pub fn handle_keypress(&mut self, key: KeyEvent, screen: &mut Screen) -> KeypressResult {
        let Some(action) = keymap::lookup(key) else {
            return KeypressResult::Continue;
        };
        self.message = None;

        use NavAction as N;

        match action {
            Action::Quit => KeypressResult::Quit,
            Action::Nav(N::GoParent) => self.go_parent(),
            Action::Nav(N::GoIntoDir) => self.enter_selected(),
            Action::Nav(N::GoUp) => self.move_up(),
            Action::Nav(N::GoDown) => self.move_down(),
            Action::Nav(N::GoToTop) => self.jump_top(),
            Action::Nav(N::GoToBottom) => self.jump_bottom(),
            Action::Nav(N::GoHome) => self.go_to(self.config.home().to_path_buf()),
            Action::Nav(N::GoRoot) => self.go_to(PathBuf::from("/")),
            Action::Nav(N::ToggleHidden) => self.toggle_hidden(),
            Action::Nav(N::Refresh) => KeypressResult::Stale,
            Action::File(FileAction::Edit) => self.edit_selected(screen),
            Action::File(FileAction::SpawnShell) => self.spawn_shell(screen),
            Action::File(FileAction::Delete) => self.delete_selected(),
        }
    }

    // Directory transitions

    /// Moves to the parent directory. At the filesystem root this is a
    /// stay-put; the re-read still happens.
    pub fn go_parent(&mut self) -> KeypressResult {
        self.current_dir.pop();
        KeypressResult::Stale
    }

    pub fn go_to(&mut self, path: PathBuf) -> KeypressResult {
        self.current_dir = path;
        KeypressResult::Stale
    }

    pub fn toggle_hidden(&mut self) -> KeypressResult {
        self.show_hidden = !self.show_hidden;
        KeypressResult::Stale
    }

    /// Descends into the selected entry if it is a directory or a
    /// symlink resolving to one; otherwise a no-op.
    pub fn enter_selected(&mut self) -> KeypressResult {
        let Some(entry) = self.selected_entry() else {
            return KeypressResult::Continue;
        };
        if !entry.kind().is_dir_like() {
            return KeypressResult::Continue;
        }
        let name = entry.name().to_os_string();
        self.current_dir.push(name);
        KeypressResult::Stale
    }

    // Selection transitions

    pub fn move_down(&mut self) -> KeypressResult {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
            return KeypressResult::Moved {
                prev: self.selected - 1,
            };
        }
        KeypressResult::Continue
    }

    pub fn move_up(&mut self) -> KeypressResult {
        if self.selected > 0 && !self.entries.is_empty() {
            self.selected -= 1;
            return KeypressResult::Moved {
                prev: self.selected + 1,
            };
        }
        KeypressResult::Continue
    }

    pub fn jump_top(&mut self) -> KeypressResult {
        if self.entries.is_empty() {
            return KeypressResult::Continue;
        }
        let prev = self.selected;
        self.selected = 0;
        KeypressResult::Moved { prev }
    }

    pub fn jump_bottom(&mut self) -> KeypressResult {
        if self.entries.is_empty() {
            return KeypressResult::Continue;
        }
        let prev = self.selected;
        self.selected = self.entries.len() - 1;
        KeypressResult::Moved { prev }
    }

    // File actions

    /// Opens the selected entry in the configured editor. The directory
    /// is re-read afterwards whatever the editor did.
    pub fn edit_selected(&mut self, screen: &mut Screen) -> KeypressResult {
        let Some(entry) = self.selected_entry() else {
            return KeypressResult::Continue;
        };
        let name = entry.name().to_os_string();
        let editor = self.config.editor().to_string();

        if let Err(e) = proc::spawn(screen, &self.current_dir, &editor, Some(name.as_os_str())) {
            self.message = Some(format!("edit: {e}"));
        }
        KeypressResult::Stale
    }

    /// Drops into a shell in the current directory. Stale afterwards:
    /// the shell may have changed anything.
    pub fn spawn_shell(&mut self, screen: &mut Screen) -> KeypressResult {
        let shell = self.config.shell().to_string();

        if let Err(e) = proc::spawn(screen, &self.current_dir, &shell, None) {
            self.message = Some(format!("shell: {e}"));
        }
        KeypressResult::Stale
    }

    /// Removes the selected entry: directory removal for [EntryKind::Directory],
    /// file removal for everything else (a symlink to a directory is
    /// unlinked, not recursed into). Failures land on the status line.
    pub fn delete_selected(&mut self) -> KeypressResult {
        let Some(entry) = self.selected_entry() else {
            return KeypressResult::Continue;
        };
        let (name, kind): (OsString, EntryKind) = (entry.name().to_os_string(), entry.kind());
        let target = self.current_dir.join(&name);

        let result = if kind == EntryKind::Directory {
            fs::remove_dir(&target)
        } else {
            fs::remove_file(&target)
        };

        if let Err(e) = result {
            self.message = Some(format!("delete {}: {e}", name.to_string_lossy()));
        }
        KeypressResult::Stale
    }
}
