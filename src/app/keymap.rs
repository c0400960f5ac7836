//! Key mapping and action dispatch for filet.
//!
//! The bindings are fixed single characters; anything unrecognized is a
//! no-op in the state machine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents any action in the app: navigation, file, or quit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nav(NavAction),
    File(FileAction),
    Quit,
}

/// Navigation actions: cursor movement and directory changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    GoParent,
    GoIntoDir,
    GoUp,
    GoDown,
    GoToTop,
    GoToBottom,
    GoHome,
    GoRoot,
    ToggleHidden,
    Refresh,
}

/// File actions: everything that touches the filesystem or a child process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileAction {
    Edit,
    Delete,
    SpawnShell,
}

/// Looks up the action for a key event. Shifted characters ('G', '~',
/// '/') arrive with the SHIFT modifier set on some terminals, so only
/// CONTROL and ALT disqualify a match.
pub fn lookup(key: KeyEvent) -> Option<Action> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    use NavAction as N;

    match c {
        'h' => Some(Action::Nav(N::GoParent)),
        'l' => Some(Action::Nav(N::GoIntoDir)),
        'k' => Some(Action::Nav(N::GoUp)),
        'j' => Some(Action::Nav(N::GoDown)),
        'g' => Some(Action::Nav(N::GoToTop)),
        'G' => Some(Action::Nav(N::GoToBottom)),
        '~' => Some(Action::Nav(N::GoHome)),
        '/' => Some(Action::Nav(N::GoRoot)),
        '.' => Some(Action::Nav(N::ToggleHidden)),
        'r' => Some(Action::Nav(N::Refresh)),
        'e' => Some(Action::File(FileAction::Edit)),
        'x' => Some(Action::File(FileAction::Delete)),
        's' => Some(Action::File(FileAction::SpawnShell)),
        'q' => Some(Action::Quit),
        _ => None,
    }
}
