//! Directory enumeration and entry classification for filet.
//!
//! Provides the [DirEntry] struct which is used throughout filet, and
//! [read_dir], which produces one ordered listing per enumeration pass.
//! Each entry owns its name, so a listing stays valid after the handle
//! that produced it is gone.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Classification of a directory entry, computed once at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    SymlinkToDirectory,
    Executable,
    Regular,
}

impl EntryKind {
    /// Directories and symlinks resolving to directories sort first and
    /// are the only kinds the enter action descends into.
    #[inline]
    pub fn is_dir_like(self) -> bool {
        matches!(self, EntryKind::Directory | EntryKind::SymlinkToDirectory)
    }
}

/// A single entry in a directory listing: base name plus [EntryKind].
#[derive(Debug, Clone)]
pub struct DirEntry {
    name: Box<OsStr>,
    kind: EntryKind,
}

impl DirEntry {
    pub(crate) fn new(name: OsString, kind: EntryKind) -> Self {
        DirEntry {
            name: name.into_boxed_os_str(),
            kind,
        }
    }

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Owner-execute permission bit, the one that marks an entry [EntryKind::Executable].
const OWNER_EXEC: u32 = 0o100;

/// Reads the contents of `path` into an ordered listing.
///
/// Total by design: an unreadable or missing directory yields an empty
/// listing and a failed per-entry stat drops that entry. When
/// `show_hidden` is false, dotfiles are skipped.
///
/// Ordering: directory-like entries first, then byte-wise lexicographic
/// name order within each group.
pub fn read_dir(path: &Path, show_hidden: bool) -> Vec<DirEntry> {
    let Ok(iter) = fs::read_dir(path) else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(64);

    for entry in iter.flatten() {
        let name = entry.file_name();

        if !show_hidden && name.as_bytes().first() == Some(&b'.') {
            continue;
        }

        let Ok(md) = fs::symlink_metadata(entry.path()) else {
            continue;
        };

        let kind = if md.is_dir() {
            EntryKind::Directory
        } else if md.file_type().is_symlink() {
            // re-stat following the link to see where it leads
            match fs::metadata(entry.path()) {
                Ok(target) if target.is_dir() => EntryKind::SymlinkToDirectory,
                _ => EntryKind::Symlink,
            }
        } else if md.is_file() && md.permissions().mode() & OWNER_EXEC != 0 {
            EntryKind::Executable
        } else {
            EntryKind::Regular
        };

        entries.push(DirEntry::new(name, kind));
    }

    entries.sort_unstable_by(|a, b| {
        b.kind()
            .is_dir_like()
            .cmp(&a.kind().is_dir_like())
            .then_with(|| a.name().as_bytes().cmp(b.name().as_bytes()))
    });

    entries
}
