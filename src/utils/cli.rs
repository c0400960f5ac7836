//! Command-line argument parsing and help for filet.
//!
//! When invoked with no arguments, filet launches the TUI in the current
//! directory; one positional argument picks a different starting
//! directory.

pub enum CliAction {
    Run,
    RunAtPath(String),
    Exit(u8),
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        return CliAction::Run;
    }

    if args.len() > 2 {
        eprintln!("Error: filet accepts only one argument at a time.");
        eprintln!("Usage: filet [PATH] or filet [OPTION]");
        return CliAction::Exit(1);
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit(0)
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit(0)
        }
        "--keys" | "--keybinds" => {
            println!("{KEYS_TEXT}");
            CliAction::Exit(0)
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {arg}");
            eprintln!("Try --help for available options");
            CliAction::Exit(1)
        }
    }
}

fn print_version() {
    println!("filet {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"filet - a tiny keyboard-driven terminal file browser

USAGE:
  filet [PATH]

PATH:
  Directory to open (defaults to the current directory)

OPTIONS:
      --keys              Display the key bindings
  -h, --help              Print help information
  -v, --version           Display the installed version of filet

ENVIRONMENT:
  EDITOR                  Editor used by 'e' (default: vi)
  SHELL                   Shell used by 's' (default: /bin/sh)
{KEYS_TEXT}"#
    );
}

const KEYS_TEXT: &str = r#"
=========================
 Key Bindings
=========================
  h        go to the parent directory
  l        enter the selected directory
  j / k    move the selection down / up
  g / G    jump to the top / bottom of the listing
  ~        go to the home directory
  /        go to the filesystem root
  .        toggle hidden files
  r        refresh the listing
  s        spawn a shell in the current directory
  e        open the selected entry in the editor
  x        delete the selected entry
  q        quit
"#;
