//! Terminal lifecycle and the main event loop for filet.
//!
//! [Screen] owns the raw-mode/alternate-screen state and the cached
//! geometry; [run_terminal] sets the terminal up, runs the blocking
//! event loop and guarantees teardown on the way out.
//!
//! Rows 1-2 are pinned as a status header by constraining the scroll
//! region to rows 3..N, the same sequences a curses-less browser would
//! emit by hand. crossterm has no scroll-region command, so the two
//! sequences are local [Command] impls.

use crate::app::{AppState, KeypressResult};
use crate::error::{Error, Result};
use crate::ui::render;
use crossterm::{
    Command,
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use std::fmt;
use std::io::{self, Write};

/// First row of the scrolling listing area, 1-based.
pub const LIST_TOP_ROW: u16 = 3;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub rows: u16,
    pub cols: u16,
}

/// CSI `top;bottom r` — constrain scrolling to a row range.
struct SetScrollRegion(u16, u16);

impl Command for SetScrollRegion {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[{};{}r", self.0, self.1)
    }
}

/// CSI `r` — reset the scroll region to the full screen.
struct ResetScrollRegion;

impl Command for ResetScrollRegion {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[r")
    }
}

/// Owns the terminal mode switch and the cached [Geometry].
///
/// Every path that calls [Screen::enter] must end in [Screen::restore];
/// [run_terminal] and the panic hook cover normal and fatal exits, and
/// the process launcher uses [Screen::suspend]/[Screen::resume] for the
/// window in which a child owns the terminal.
pub struct Screen {
    geometry: Geometry,
}

impl Screen {
    pub fn new() -> Result<Self> {
        Ok(Self {
            geometry: query_size()?,
        })
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Switches to raw mode and the alternate screen, hides the cursor,
    /// disables line wrapping and pins the two header rows.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().map_err(Error::TerminalSetup)?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
            SetScrollRegion(LIST_TOP_ROW, self.geometry.rows),
        )
        .map_err(Error::TerminalSetup)
    }

    /// Reverses every effect of [Screen::enter].
    pub fn restore(&self) -> io::Result<()> {
        execute!(
            io::stdout(),
            ResetScrollRegion,
            EnableLineWrap,
            Show,
            LeaveAlternateScreen,
        )?;
        disable_raw_mode()
    }

    /// Re-queries the terminal size and re-pins the scroll region.
    /// Called from the main loop when a resize event arrives, never from
    /// signal context.
    pub fn refresh_geometry(&mut self) -> Result<()> {
        self.geometry = query_size()?;
        execute!(
            io::stdout(),
            SetScrollRegion(LIST_TOP_ROW, self.geometry.rows)
        )
        .map_err(Error::TerminalSetup)
    }

    /// Hands the terminal back in its original mode for a child process.
    pub fn suspend(&self) -> io::Result<()> {
        self.restore()?;
        io::stdout().flush()
    }

    /// Reclaims the terminal after a child exits. The terminal may have
    /// been resized while the child owned it.
    pub fn resume(&mut self) -> Result<()> {
        self.geometry = query_size()?;
        self.enter()
    }
}

fn query_size() -> Result<Geometry> {
    let (cols, rows) = terminal::size().map_err(Error::TerminalQuery)?;
    Ok(Geometry { rows, cols })
}

/// Best-effort teardown for the panic hook, where no [Screen] is in reach.
pub fn emergency_restore() {
    let _ = execute!(
        io::stdout(),
        ResetScrollRegion,
        EnableLineWrap,
        Show,
        LeaveAlternateScreen,
    );
    let _ = disable_raw_mode();
}

/// Initializes the terminal and runs the main event loop.
///
/// Blocks until quit. Teardown runs whether the loop finished normally
/// or bailed with an error.
pub fn run_terminal(app: &mut AppState, screen: &mut Screen) -> Result<()> {
    screen.enter()?;
    let result = event_loop(app, screen);
    let restored = screen.restore();
    result?;
    restored.map_err(Error::Io)
}

/// Main event loop: one blocking read per input unit, all state changes
/// and rendering happen synchronously between reads. Resize events are
/// therefore always handled at a safe point.
fn event_loop(app: &mut AppState, screen: &mut Screen) -> Result<()> {
    let mut stdout = io::stdout();

    app.reload();
    render::full(&mut stdout, app, screen.geometry())?;

    loop {
        stdout.flush()?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match app.handle_keypress(key, screen) {
                    KeypressResult::Quit => break,
                    KeypressResult::Stale => {
                        app.reload();
                        render::full(&mut stdout, app, screen.geometry())?;
                    }
                    KeypressResult::Moved { prev } => {
                        render::move_selection(&mut stdout, app, screen.geometry(), prev)?;
                    }
                    KeypressResult::Continue => {}
                }
            }

            Event::Resize(_, _) => {
                screen.refresh_geometry()?;
                render::full(&mut stdout, app, screen.geometry())?;
            }

            _ => {}
        }
    }
    Ok(())
}
