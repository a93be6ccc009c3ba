//! termfolio - a developer portfolio you browse from a faux command line
//!
//! termfolio opens a full-screen terminal window with a prompt. Type a
//! command and its output is revealed line by line.
//!
//! # Commands
//!
//! | Command | Output |
//! |---------|--------|
//! | help | Command list |
//! | about | Profile card |
//! | skills | Tech stack |
//! | experience | Work history |
//! | projects | Project list |
//! | project &lt;name&gt; | Project detail |
//! | education | Degrees |
//! | contact / social | Ways to get in touch |
//! | clear | Clear the terminal |
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Tab / Right | Accept suggestion |
//! | Up / Down | Command history |
//! | Esc | Skip the reveal animation |
//! | PageUp / PageDown | Scroll |
//! | F2 | Contact form |
//! | Ctrl+C | Quit |

mod app;
mod config;
mod contact;
mod content;
mod core;
mod ui;

use std::env;
use std::io::Write;
use std::time::Instant;

use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::App;
use crate::config::{ColorScheme, Config};
use crate::content::ContentStore;
use crate::core::{Line, Session};
use crate::ui::renderer::CHROME_ROWS;
use crate::ui::{KeyMapper, Renderer};

/// Environment variable holding the log filter
const LOG_ENV: &str = "TERMFOLIO_LOG";

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Cli {
    /// Run one command and print its output
    exec: Option<String>,
    /// Color scheme override
    theme: Option<String>,
    /// Reveal interval override (ms)
    tick_ms: Option<u64>,
    /// Start without the welcome lines
    no_banner: bool,
}

impl Cli {
    /// Command line values take precedence over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(ref theme) = self.theme {
            config.color_scheme = theme.clone();
        }
        if let Some(ms) = self.tick_ms {
            config.tick_ms = ms;
        }
        if self.no_banner {
            config.banner = false;
        }
    }
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("termfolio {}", VERSION);
}

fn print_help() {
    eprintln!("termfolio {} - a portfolio you browse from the command line", VERSION);
    eprintln!();
    eprintln!("Usage: termfolio [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e, --exec <CMD>      Run one command, print its output, exit");
    eprintln!("  -t, --theme <NAME>    Color scheme (overrides config)");
    eprintln!("      --tick <MS>       Milliseconds between revealed lines");
    eprintln!("      --no-banner       Start with an empty terminal");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Enter                 Run command");
    eprintln!("  Tab / Right           Accept suggestion");
    eprintln!("  Up / Down             Command history");
    eprintln!("  Esc                   Skip the reveal animation");
    eprintln!("  PageUp / PageDown     Scroll");
    eprintln!("  Ctrl+U                Clear input");
    eprintln!("  F2                    Contact form");
    eprintln!("  Ctrl+C / Ctrl+D       Quit");
    eprintln!();
    eprintln!("Configuration: ~/.termfolio/config.toml");
    eprintln!("Log file:      ~/.termfolio/termfolio.log ({} sets the filter)", LOG_ENV);
    eprintln!();
    eprintln!("Color schemes: {}", ColorScheme::list().join(", "));
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Cli, String> {
    let args: Vec<String> = args.into_iter().collect();
    let mut cli = Cli::default();
    let mut i = 1;

    let value = |i: usize, name: &str| -> Result<String, String> {
        args.get(i)
            .cloned()
            .ok_or_else(|| format!("Missing argument for {}", name))
    };

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-e" | "--exec" => {
                i += 1;
                cli.exec = Some(value(i, "--exec")?);
            }
            "-t" | "--theme" => {
                i += 1;
                cli.theme = Some(value(i, "--theme")?);
            }
            "--tick" => {
                i += 1;
                let raw = value(i, "--tick")?;
                let ms = raw
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid tick interval: {}", raw))?;
                cli.tick_ms = Some(ms);
            }
            "--no-banner" => {
                cli.no_banner = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(cli)
}

/// Log to `~/.termfolio/termfolio.log`; the terminal itself is the UI
fn init_logging() {
    let log_path = config::data_dir()
        .map(|dir| dir.join("termfolio.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("termfolio.log"));

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match parse_args(env::args()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("termfolio {} starting...", VERSION);

    let mut config = Config::load();
    cli.apply(&mut config);

    if let Some(ref command) = cli.exec {
        return run_once(command);
    }

    run_terminal(&config)
}

/// Output of a single command, fully revealed
fn exec_once(command: &str) -> String {
    let content = ContentStore::builtin();
    let mut session = Session::new();
    session.submit(command, &content);
    session.fast_forward();
    session
        .lines()
        .iter()
        .filter(|line| matches!(line, Line::Output { .. }))
        .map(Line::visible_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run a single command and print its output
fn run_once(command: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", exec_once(command))?;
    Ok(())
}

/// Run the interactive terminal
fn run_terminal(config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(config);
    info!("Color scheme: {}", app.scheme.name);
    info!("Reveal interval: {:?}", app.clock.interval());

    let (cols, rows) = Renderer::size()?;
    info!("Terminal size: {}x{}", cols, rows);

    let mut renderer = Renderer::new();
    renderer.init()?;
    let profile = app.content.profile;
    let _ = renderer.set_title(&format!("{} - {}", profile.name, profile.title));

    let result = run_main_loop(&mut app, &mut renderer);

    app.shutdown();
    if let Err(e) = renderer.cleanup() {
        error!("Failed to restore terminal: {}", e);
    }
    if let Err(ref e) = result {
        error!("Main loop failed: {}", e);
    }
    result
}

fn run_main_loop(app: &mut App, renderer: &mut Renderer) -> anyhow::Result<()> {
    let (cols, rows) = Renderer::size()?;
    app.set_page(rows.saturating_sub(CHROME_ROWS) as usize);
    renderer.render(&app.view())?;

    loop {
        let now = Instant::now();
        let mut dirty = app.on_timer(now);

        if event::poll(app.poll_timeout(now))? {
            match event::read()? {
                // Only process key press events
                TermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if let Some(action) = KeyMapper::map(&key_event, app.form.visible) {
                        dirty |= app.handle(action, Instant::now());
                    }
                }
                TermEvent::Resize(_, rows) => {
                    app.set_page(rows.saturating_sub(CHROME_ROWS) as usize);
                    dirty = true;
                }
                _ => {}
            }
        }

        if app.should_quit() {
            info!("Quit requested");
            break;
        }

        if dirty {
            let (cols, rows) = Renderer::size().unwrap_or((cols, rows));
            app.clamp_scroll(cols, rows);
            renderer.render(&app.view())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("termfolio")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), Cli::default());
    }

    #[test]
    fn test_parse_args_options() {
        let cli = parse_args(args(&["-e", "project pis", "--theme", "nord", "--tick", "10", "--no-banner"])).unwrap();
        assert_eq!(cli.exec.as_deref(), Some("project pis"));
        assert_eq!(cli.theme.as_deref(), Some("nord"));
        assert_eq!(cli.tick_ms, Some(10));
        assert!(cli.no_banner);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(args(&["--exec"])).is_err());
        assert!(parse_args(args(&["--tick", "fast"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_exec_once() {
        let content = ContentStore::builtin();
        assert_eq!(exec_once("  SKILLS "), content.command("skills").unwrap());
        assert!(exec_once("project pis").contains("Payroll Information System"));
        assert_eq!(exec_once("clear"), "");
        assert_eq!(exec_once(""), "");
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        let cli = Cli {
            theme: Some("dracula".to_string()),
            tick_ms: Some(5),
            no_banner: true,
            ..Cli::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.color_scheme, "dracula");
        assert_eq!(config.tick_ms, 5);
        assert!(!config.banner);
        assert_eq!(config.prompt, Config::default().prompt);
    }
}
