use std::io::{self, IsTerminal, Read};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use tokenscope_app::{load_settings, save_settings, Cli, Session};
use tokenscope_engine::Estimator;
use tokenscope_logging::{scope_info, LogDestination, DEFAULT_LOG_FILE};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let destination = if cli.log_file {
        LogDestination::Both(DEFAULT_LOG_FILE.into())
    } else {
        LogDestination::Terminal
    };
    tokenscope_logging::initialize(destination, level);

    let mut settings = load_settings(&cli.settings);
    if let Some(model) = cli.model {
        settings.model = model;
    }
    if let Some(view) = cli.view {
        settings.view = view;
    }
    if let Some(delay_ms) = cli.delay_ms {
        settings.delay_ms = delay_ms;
    }
    scope_info!(
        "model={} view={} delay_ms={}",
        settings.model,
        settings.view,
        settings.delay_ms
    );

    let estimator = Arc::new(Estimator::builtin().context("Failed to build estimator")?);
    let stdout = io::stdout().lock();
    let mut session = Session::new(estimator, &settings, cli.format, cli.interactive, stdout)
        .context("Failed to start tokenize worker")?;

    if cli.interactive {
        session.run_interactive(io::stdin().lock())?;
        let delay_ms = settings.delay_ms;
        save_settings(&cli.settings, &session.settings(delay_ms))
            .with_context(|| format!("Failed to save settings to {:?}", cli.settings))?;
        return Ok(());
    }

    let text = if cli.example {
        None
    } else if !cli.text.is_empty() {
        Some(cli.text.join(" "))
    } else {
        Some(read_stdin()?)
    };
    session.run_once(text)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading text from stdin (end with Ctrl-D)...");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    // Drop the single line ending a pipe or heredoc adds.
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
