//! synthkeys: debug console entry point.
//!
//! Turns command-line arguments or a script into key events and stream
//! writes for a remote desktop session.  Protocol instructions go to stdout;
//! logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! synthkeys [OPTIONS] <COMMAND>
//!
//! Commands:
//!   send-keys <ARG>...     Send a key sequence
//!   cas                    Press and release Ctrl+Alt+Shift
//!   argv <NAME> <VALUE>    Send a connection parameter value
//!   pipe <NAME> <VALUE>    Send text along a named pipe stream
//!   run [SCRIPT]           Run a script file (stdin when omitted)
//!   resolve <TEXT>         Print the keysym of every character
//!   keys                   Print the named-key table
//!
//! Options:
//!   --config <PATH>        TOML config file [env: SYNTHKEYS_CONFIG]
//!   --dry-run              Print readable events instead of instructions
//! ```
//!
//! # Arguments to send-keys
//!
//! Each argument is parsed as JSON when possible: integers hold a keysym,
//! arrays nest, `{"key": "NAME"}` holds a named key, strings are typed.
//! Anything that is not JSON is typed as-is, and `@NAME` holds a named key:
//!
//! ```text
//! synthkeys send-keys @L_CTRL @L_ALT @DELETE
//! synthkeys send-keys @L_CTRL '[{"key": "L_SHIFT"}, "T"]' f
//! ```

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use synthkeys_console::application::debug_console::{ConsoleCommand, ConsoleSettings, DebugConsole};
use synthkeys_console::application::session::RemoteSession;
use synthkeys_console::infrastructure::script::{classify_arg, parse_script, KeyNames};
use synthkeys_console::infrastructure::session::mock::RecordingSession;
use synthkeys_console::infrastructure::session::wire::WireSession;
use synthkeys_console::infrastructure::storage::config::ConsoleConfig;
use synthkeys_console::infrastructure::ui_bridge::MenuState;
use synthkeys_core::keysym::table::{name_of, NAMED_KEYS};
use synthkeys_core::resolve_char;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Types synthetic key sequences into a remote desktop session.
#[derive(Debug, Parser)]
#[command(name = "synthkeys", version)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, env = "SYNTHKEYS_CONFIG")]
    config: Option<PathBuf>,

    /// Print human-readable events instead of protocol instructions.
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a key sequence.
    SendKeys {
        /// Keys and text, in order.  See the crate docs for the syntax.
        #[arg(required = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Press and release Ctrl+Alt+Shift.
    Cas,
    /// Send a connection parameter value.
    Argv { name: String, value: String },
    /// Send text along a named pipe stream.
    Pipe { name: String, value: String },
    /// Run a script of console commands.
    Run {
        /// Script file; standard input when omitted.
        script: Option<PathBuf>,
    },
    /// Print the keysym every character of TEXT types as.
    Resolve { text: String },
    /// Print the named-key table, including configured aliases.
    Keys,
}

// ── Command planning ──────────────────────────────────────────────────────────

/// Converts a console subcommand into the commands it runs.
///
/// `resolve` and `keys` touch no session and yield no commands.
fn console_commands(command: Command, names: &KeyNames) -> anyhow::Result<Vec<ConsoleCommand>> {
    let commands = match command {
        Command::SendKeys { args } => {
            let items = args
                .iter()
                .map(|arg| {
                    classify_arg(arg, names)
                        .with_context(|| format!("invalid key argument {arg:?}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            vec![ConsoleCommand::SendKeys(items)]
        }
        Command::Cas => vec![ConsoleCommand::Cas],
        Command::Argv { name, value } => vec![ConsoleCommand::Argv { name, value }],
        Command::Pipe { name, value } => vec![ConsoleCommand::Pipe { name, value }],
        Command::Run { script } => {
            let (text, origin) = read_script(script)?;
            parse_script(&text, names).with_context(|| format!("failed to parse script {origin}"))?
        }
        Command::Resolve { .. } | Command::Keys => Vec::new(),
    };
    Ok(commands)
}

fn read_script(path: Option<PathBuf>) -> anyhow::Result<(String, String)> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            Ok((text, path.display().to_string()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read script from standard input")?;
            Ok((text, "<stdin>".to_string()))
        }
    }
}

// ── Reports ───────────────────────────────────────────────────────────────────

/// One line per character: the character, its codepoint, keysym and name.
fn resolve_lines(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            let keysym = resolve_char(c);
            let name = name_of(keysym).unwrap_or("");
            format!("{c:?}\tU+{:04X}\t{keysym}\t{name}", u32::from(c))
                .trim_end()
                .to_string()
        })
        .collect()
}

/// The built-in table followed by configured aliases.
fn key_table_lines(config: &ConsoleConfig) -> Vec<String> {
    NAMED_KEYS
        .iter()
        .map(|(name, keysym)| format!("{name:<13} {keysym}"))
        .chain(
            config
                .key_aliases()
                .into_iter()
                .map(|(name, keysym)| format!("{name:<13} {keysym} (alias)")),
        )
        .collect()
}

fn print_lines(lines: &[String]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}").context("failed to write to standard output")?;
    }
    Ok(())
}

// ── Execution ─────────────────────────────────────────────────────────────────

fn execute_all<S: RemoteSession>(
    console: &mut DebugConsole<S>,
    commands: &[ConsoleCommand],
) -> anyhow::Result<()> {
    for (index, command) in commands.iter().enumerate() {
        console
            .execute(command)
            .with_context(|| format!("command {} failed", index + 1))?;
    }
    info!(count = commands.len(), "commands executed");
    Ok(())
}

/// Writes protocol instructions to stdout.
///
/// Output produced before a failing command is still flushed, so the
/// remote side sees exactly the events that were sent.
fn run_wire(settings: ConsoleSettings, commands: &[ConsoleCommand]) -> anyhow::Result<()> {
    let session = WireSession::new(BufWriter::new(io::stdout().lock()));
    let mut console = DebugConsole::new(settings)
        .with_session(session)
        .with_ui(Box::new(MenuState::default()));

    let outcome = execute_all(&mut console, commands);
    if let Some(session) = console.into_session() {
        session.finish().context("failed to write protocol instructions")?;
    }
    outcome
}

/// Records everything and prints a readable transcript.
fn run_dry(settings: ConsoleSettings, commands: &[ConsoleCommand]) -> anyhow::Result<()> {
    let mut console = DebugConsole::new(settings)
        .with_session(RecordingSession::new())
        .with_ui(Box::new(MenuState::default()));

    let outcome = execute_all(&mut console, commands);
    if let Some(session) = console.into_session() {
        print!("{session}");
    }
    outcome
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. CLI arguments are parsed with `clap` into a [`Cli`] struct.
/// 2. The config file, if any, is loaded.
/// 3. `tracing_subscriber` is initialised on stderr.  `RUST_LOG` wins; the
///    config's `log_level` applies otherwise.
/// 4. The subcommand is planned into console commands and executed against
///    a wire session (or a recording session with `--dry-run`).
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConsoleConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.console.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let names = KeyNames::new(config.key_aliases());

    match cli.command {
        Command::Resolve { text } => print_lines(&resolve_lines(&text)),
        Command::Keys => print_lines(&key_table_lines(&config)),
        command => {
            let commands = console_commands(command, &names)?;
            let settings = config.console_settings();
            if cli.dry_run {
                run_dry(settings, &commands)
            } else {
                run_wire(settings, &commands)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
