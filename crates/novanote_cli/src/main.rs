//! `novanote` command-line entry point.
//!
//! # Responsibility
//! - Expose the renderer and note codec for local files.
//! - Keep output deterministic: results go to stdout, diagnostics to stderr.
//!
//! # Invariants
//! - Exit code 0 on success, 1 on read/lookup failure, 2 on usage errors.
//! - File logging is enabled only when `NOVANOTE_LOG_DIR` is set.

use clap::{Parser, Subcommand, ValueHint};
use log::{info, warn};
use novanote_core::{
    core_version, default_log_level, deserialize, export_as_markdown, flush_logging,
    format_updated_at, import_from_markdown, init_logging, render, serialize,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const ENV_LOG_DIR: &str = "NOVANOTE_LOG_DIR";
const ENV_LOG_LEVEL: &str = "NOVANOTE_LOG_LEVEL";

#[derive(Parser, Debug)]
#[command(name = "novanote")]
#[command(about = "Render note markup and convert notes to and from markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a markup file as an HTML fragment
    Render {
        #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Convert a markdown document into a one-note storage envelope
    Import {
        #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// List stored notes with their last update
    List {
        /// Storage envelope file
        #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Print one stored note as markdown
    Export {
        /// Storage envelope file
        #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Note id to export [default: first stored note]
        #[arg(value_name = "NOTE_ID")]
        id: Option<String>,
    },
    /// Print the core version
    Version,
}

#[derive(Debug)]
enum CliError {
    Read { path: PathBuf, source: std::io::Error },
    NoteNotFound(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::NoteNotFound(selector) => write!(f, "no stored note matches `{selector}`"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::NoteNotFound(_) => None,
        }
    }
}

fn main() -> ExitCode {
    // Usage errors exit with code 2 from inside clap.
    let cli = Cli::parse();
    init_logging_from_env();

    let result = run(cli);
    flush_logging();
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("novanote: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(ENV_LOG_DIR) else {
        return;
    };
    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("novanote: logging disabled: {err}");
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Render { file } => {
            let markup = read_input(&file)?;
            info!("event=cli_render module=cli status=ok bytes={}", markup.len());
            Ok(render(&markup))
        }
        Command::Import { file } => {
            let note = import_from_markdown(&read_input(&file)?);
            info!("event=cli_import module=cli status=ok note_id={}", note.id);
            Ok(serialize(&[note]))
        }
        Command::List { file } => {
            let raw = read_input(&file)?;
            let lines: Vec<String> = deserialize(Some(raw.as_str()))
                .iter()
                .map(|note| {
                    format!(
                        "{}\t{}\t{}",
                        note.id,
                        format_updated_at(&note.updated_at),
                        note.title
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Export { file, id } => {
            let raw = read_input(&file)?;
            let notes = deserialize(Some(raw.as_str()));
            let note = match id.as_deref() {
                Some(wanted) => notes.iter().find(|note| note.id == wanted),
                None => notes.first(),
            };
            let Some(note) = note else {
                warn!("event=cli_export module=cli status=not_found stored={}", notes.len());
                return Err(CliError::NoteNotFound(
                    id.unwrap_or_else(|| "<first>".to_string()),
                ));
            };
            Ok(export_as_markdown(note))
        }
        Command::Version => Ok(format!("novanote_core version={}", core_version())),
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
