//! Dashdeck CLI - binary entry point and command loop.
//!
//! ```text
//! main() -> init_tracing() -> DashdeckConfig::load() -> Shell::new()
//!                                                          |
//!                                                          v
//!                           stdin line -> Shell::process_command() -> stdout
//! ```
//!
//! Logs go to a file only, so stdout carries nothing but command output.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::{Write, stdout},
    path::PathBuf,
    sync::{Arc, Mutex},
};
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dashdeck_engine::dashdeck_types::TriggerRef;
use dashdeck_engine::{
    Catalog, CommandOutcome, DashdeckConfig, FocusSink, Shell, ShellOptions,
    command_help_summary, render_status,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_dashdeck_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than interleave logs with command output.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_dashdeck_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in dashdeck_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn dashdeck_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, ~/.dashdeck/logs/dashdeck.log
    if let Some(config_path) = DashdeckConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("dashdeck.log"));
    }

    // Fallback: ./.dashdeck/logs/dashdeck.log
    candidates.push(PathBuf::from(".dashdeck").join("logs").join("dashdeck.log"));

    candidates
}

/// Reports focus returns on stdout, the closest a line interface gets to
/// moving keyboard focus.
struct PrintFocusSink;

impl FocusSink for PrintFocusSink {
    fn focus(&self, trigger: &TriggerRef) {
        println!("focus -> {trigger}");
    }
}

fn load_options() -> ShellOptions {
    match DashdeckConfig::load() {
        Ok(Some(config)) => ShellOptions::from_config(&config),
        Ok(None) => ShellOptions::default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            eprintln!("warning: {err}");
            ShellOptions::default()
        }
    }
}

fn prompt() -> Result<()> {
    let mut out = stdout().lock();
    out.write_all(b"> ")?;
    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let options = load_options();
    let catalog = Catalog::builtin().context("built-in navigation tables are invalid")?;
    let mut shell = Shell::new(catalog, &options, Arc::new(PrintFocusSink))?;

    println!("{}", render_status(&shell));
    println!("{}", command_help_summary());

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let result = shell.process_command(&line).await;
        shell.flush_focus_return();
        match result {
            Ok(CommandOutcome::Message(text)) => println!("{text}"),
            Ok(CommandOutcome::ThemeChanged(theme)) => {
                println!("Theme set to {} mode", theme.as_str());
                if let Err(err) = DashdeckConfig::persist_theme(theme) {
                    tracing::warn!("Failed to persist theme: {err}");
                }
            }
            Ok(CommandOutcome::Empty) => {}
            Ok(CommandOutcome::Quit) => break,
            Err(err) => {
                tracing::warn!(command = line.as_str(), "Command rejected: {err}");
                println!("error: {err}");
            }
        }
    }

    tracing::info!("Shell stopped");
    Ok(())
}
