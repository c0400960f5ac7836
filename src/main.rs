//! main.rs
//! Entry point for filet

use filet_tui::app::AppState;
use filet_tui::config::Config;
use filet_tui::core::terminal::{self, Screen};
use filet_tui::error::{Error, Result};
use filet_tui::utils::cli::{CliAction, handle_args};
use filet_tui::utils::resolve_initial_dir;

use crossterm::tty::IsTty;
use std::io::{stdin, stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        terminal::emergency_restore();
        eprintln!("\n[filet] Error occurred: {info}");

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{bt}");
        }
    }));

    let path_arg = match handle_args() {
        CliAction::Exit(code) => return ExitCode::from(code),
        CliAction::Run => None,
        CliAction::RunAtPath(arg) => Some(arg),
    };

    match run(path_arg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filet: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path_arg: Option<String>) -> Result<()> {
    if !(stdin().is_tty() && stdout().is_tty()) {
        return Err(Error::NotATty);
    }

    let start = match path_arg {
        Some(arg) => resolve_initial_dir(&arg)?,
        None => std::env::current_dir()?,
    };

    let config = Config::from_env();
    let mut app = AppState::from_dir(&config, start);
    let mut screen = Screen::new()?;

    terminal::run_terminal(&mut app, &mut screen)
}
