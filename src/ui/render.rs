//! Renderer for filet.
//!
//! This module stays "pure rendering": it reads state and geometry and
//! queues terminal commands, without owning any navigation logic.
//!
//! Two paths exist. [full] repaints everything after a stale transition
//! or a resize. [move_selection] repaints only the two lines affected by
//! a selection move: single steps use cursor-relative movement so the
//! scroll region can do its job, jumps address their target row
//! absolutely using the current geometry.

use crate::app::AppState;
use crate::core::fm::{DirEntry, EntryKind};
use crate::core::terminal::{Geometry, LIST_TOP_ROW};
use crossterm::{
    cursor::{MoveTo, MoveToColumn, MoveUp},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Full repaint: status header, message line, one line per entry with
/// the selection marked, cursor parked on the selected row.
pub fn full(w: &mut impl Write, app: &AppState, geometry: Geometry) -> io::Result<()> {
    queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;
    status_line(w, app)?;
    message_line(w, app)?;

    queue!(w, MoveTo(0, LIST_TOP_ROW - 1))?;
    if app.entries().is_empty() {
        queue!(
            w,
            SetForegroundColor(Color::Red),
            SetAttribute(Attribute::Reverse),
            Print("directory empty"),
            SetAttribute(Attribute::NoReverse),
            ResetColor,
        )?;
    } else {
        for (i, entry) in app.entries().iter().enumerate() {
            draw_line(w, entry, i == app.selected())?;
            queue!(w, Print("\r\n"))?;
        }
    }

    queue!(w, MoveTo(0, selected_row(app.selected(), geometry) - 1))
}

/// Partial repaint after a selection move from `prev` to the current
/// selection. Assumes the cursor sits on the previously selected line.
pub fn move_selection(
    w: &mut impl Write,
    app: &AppState,
    geometry: Geometry,
    prev: usize,
) -> io::Result<()> {
    let entries = app.entries();
    let sel = app.selected();
    if entries.is_empty() || prev >= entries.len() {
        return Ok(());
    }

    if sel == prev + 1 {
        draw_line(w, &entries[prev], false)?;
        queue!(w, Print("\r\n"))?;
        draw_line(w, &entries[sel], true)?;
    } else if prev > 0 && sel == prev - 1 {
        draw_line(w, &entries[prev], false)?;
        queue!(w, MoveToColumn(0), MoveUp(1))?;
        draw_line(w, &entries[sel], true)?;
    } else {
        // jump: unmark the old line in place, then address the target row
        draw_line(w, &entries[prev], false)?;
        queue!(w, MoveTo(0, selected_row(sel, geometry) - 1))?;
        draw_line(w, &entries[sel], true)?;
    }
    queue!(w, MoveToColumn(0))
}

/// 1-based screen row of entry `selected`, clamped to the bottom of the
/// screen. Listing rows start at [LIST_TOP_ROW].
pub(crate) fn selected_row(selected: usize, geometry: Geometry) -> u16 {
    let row = LIST_TOP_ROW as usize + selected;
    row.min(geometry.rows.max(LIST_TOP_ROW) as usize) as u16
}

/// Draws one entry, color-coded by kind, in the current line.
///
/// The unselected form carries a trailing space so that a line going
/// from selected to unselected has its marker column cleared.
fn draw_line(w: &mut impl Write, entry: &DirEntry, selected: bool) -> io::Result<()> {
    match entry.kind() {
        EntryKind::Directory => queue!(
            w,
            SetForegroundColor(Color::Blue),
            SetAttribute(Attribute::Bold)
        )?,
        EntryKind::Symlink | EntryKind::SymlinkToDirectory => queue!(
            w,
            SetForegroundColor(Color::Cyan),
            SetAttribute(Attribute::Bold)
        )?,
        EntryKind::Executable => queue!(
            w,
            SetForegroundColor(Color::Green),
            SetAttribute(Attribute::Bold)
        )?,
        EntryKind::Regular => queue!(w, ResetColor, SetAttribute(Attribute::Reset))?,
    }

    if selected {
        queue!(w, Print(">  "), Print(entry.name_str()))?;
    } else {
        queue!(w, Print("  "), Print(entry.name_str()), Print(" "))?;
    }
    queue!(w, ResetColor, SetAttribute(Attribute::Reset))
}

/// Row 1: `user@host:` in green, the current path in blue.
fn status_line(w: &mut impl Write, app: &AppState) -> io::Result<()> {
    let identity = app.config().identity();
    queue!(
        w,
        SetForegroundColor(Color::Green),
        SetAttribute(Attribute::Bold),
        Print(identity.user()),
        Print("@"),
        Print(identity.host()),
        ResetColor,
        SetAttribute(Attribute::Reset),
        Print(":"),
        SetForegroundColor(Color::Blue),
        SetAttribute(Attribute::Bold),
        Print(app.current_dir().display()),
        ResetColor,
        SetAttribute(Attribute::Reset),
    )
}

/// Row 2: the status message of the last action, if it left one.
fn message_line(w: &mut impl Write, app: &AppState) -> io::Result<()> {
    queue!(w, MoveTo(0, 1))?;
    if let Some(msg) = app.message() {
        queue!(w, SetForegroundColor(Color::Red), Print(msg), ResetColor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_tracks_listing_top() {
        let geometry = Geometry { rows: 24, cols: 80 };
        assert_eq!(selected_row(0, geometry), 3);
        assert_eq!(selected_row(4, geometry), 7);
    }

    #[test]
    fn selected_row_clamps_to_screen_bottom() {
        let geometry = Geometry { rows: 24, cols: 80 };
        assert_eq!(selected_row(200, geometry), 24);

        // a resize changes where the bottom jump lands
        let taller = Geometry { rows: 50, cols: 80 };
        assert_eq!(selected_row(200, taller), 50);
    }
}
