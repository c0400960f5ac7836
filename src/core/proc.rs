//! Child-process launching for filet.
//!
//! The edit and spawn-shell actions hand the terminal to a child process
//! and block until it exits. [spawn] wraps the suspend/run/resume cycle;
//! [run_child] is the bare spawn-and-wait used underneath it.
//!
//! The program is located with `which` before the terminal is touched,
//! so a missing editor or shell reports an error without ever leaving
//! the alternate screen.

use crate::core::terminal::Screen;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Spawns `program` with working directory `cwd` and waits for it to
/// exit by any means. The caller decides what the exit status is worth;
/// the edit and shell actions ignore it.
pub fn run_child(cwd: &Path, program: &str, arg: Option<&OsStr>) -> io::Result<ExitStatus> {
    let mut cmd = Command::new(program);
    cmd.current_dir(cwd);
    if let Some(arg) = arg {
        cmd.arg(arg);
    }
    cmd.status()
}

/// Suspends the TUI, runs `program` in `cwd` and resumes.
///
/// Returns an error when the child could not be run at all (program not
/// found, spawn failure) or the terminal round trip failed. A child that
/// ran and exited nonzero is not an error.
pub fn spawn(
    screen: &mut Screen,
    cwd: &Path,
    program: &str,
    arg: Option<&OsStr>,
) -> io::Result<()> {
    preflight(program)?;

    screen.suspend()?;
    let status = run_child(cwd, program, arg);
    screen.resume().map_err(io::Error::other)?;

    status.map(|_| ())
}

fn preflight(program: &str) -> io::Result<()> {
    which::which(program).map_err(|_| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{program}: command not found"),
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::tempdir;

    #[test]
    fn child_runs_in_given_cwd_with_arg() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let arg = OsString::from("marker.txt");

        let status = run_child(dir.path(), "touch", Some(arg.as_os_str()))?;
        assert!(status.success());
        assert!(dir.path().join("marker.txt").exists());
        Ok(())
    }

    #[test]
    fn nonzero_exit_is_not_a_spawn_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let status = run_child(dir.path(), "false", None)?;
        assert!(!status.success());
        Ok(())
    }

    #[test]
    fn missing_program_fails_to_spawn() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let result = run_child(dir.path(), "filet-no-such-program", None);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn preflight_rejects_missing_program() {
        assert!(preflight("sh").is_ok());
        let err = preflight("filet-no-such-program").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
