use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use tokenscope_core::{update, AppState, Effect, Msg, Phase, TokenView};
use tokenscope_engine::{EngineError, Estimator, ModelKey};
use tokenscope_logging::{scope_debug, scope_warn};

use crate::cli::OutputFormat;
use crate::effects::EffectRunner;
use crate::render::{render, render_json};
use crate::settings::Settings;

/// A parsed interactive input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Quit,
}

/// `:`-prefixed lines are commands, an empty line tokenizes, anything else
/// replaces the input text.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let Some(command) = line.strip_prefix(':') else {
        if line.trim().is_empty() {
            return Ok(Command::Dispatch(Msg::TokenizeClicked));
        }
        return Ok(Command::Dispatch(Msg::InputChanged(line.to_string())));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    let msg = match (name, arg) {
        ("q" | "quit", _) => return Ok(Command::Quit),
        ("tokenize" | "t", _) => Msg::TokenizeClicked,
        ("clear", _) => Msg::ClearClicked,
        ("example", _) => Msg::ExampleClicked,
        ("model", Some(key)) => {
            Msg::ModelSelected(key.parse::<ModelKey>().map_err(|e| e.to_string())?)
        }
        ("view", Some(view)) => {
            Msg::ViewSelected(view.parse::<TokenView>().map_err(|e| e.to_string())?)
        }
        ("model" | "view", None) => return Err(format!(":{name} needs an argument")),
        _ => return Err(format!("unknown command :{name}")),
    };
    Ok(Command::Dispatch(msg))
}

/// Drives the state machine: applies messages, runs effects on the engine
/// worker, and renders to `out`.
pub struct Session<W: Write> {
    state: AppState,
    runner: EffectRunner,
    format: OutputFormat,
    interactive: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(
        estimator: Arc<Estimator>,
        settings: &Settings,
        format: OutputFormat,
        interactive: bool,
        out: W,
    ) -> Result<Self, EngineError> {
        let state = AppState::new(estimator.models().clone());
        let runner = EffectRunner::new(estimator, settings.delay())?;
        let mut session = Self {
            state,
            runner,
            format,
            interactive,
            out,
        };
        session.apply(Msg::ModelSelected(settings.model));
        session.apply(Msg::ViewSelected(settings.view));
        session.state.consume_dirty();
        Ok(session)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Tokenizes `text` (or the active model's example when `None`) and renders the result.
    pub fn run_once(&mut self, text: Option<String>) -> anyhow::Result<()> {
        let msg = match text {
            Some(text) => Msg::InputChanged(text),
            None => Msg::ExampleClicked,
        };
        self.apply(msg);
        self.state.consume_dirty();
        self.dispatch(Msg::TokenizeClicked)
    }

    pub fn run_interactive<R: BufRead>(&mut self, reader: R) -> anyhow::Result<()> {
        self.write_view()?;
        for line in reader.lines() {
            let line = line.context("Failed to read input line")?;
            match parse_line(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Dispatch(msg)) => self.dispatch(msg)?,
                Err(message) => {
                    scope_warn!("Rejected input line: {}", message);
                    writeln!(self.out, "Error: {message}")?;
                }
            }
        }
        Ok(())
    }

    /// Applies `msg`; if it schedules work, waits for the worker before returning.
    pub fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let effects = self.apply(msg);
        if self.interactive || effects.is_empty() {
            self.render_if_dirty()?;
        }
        if effects.is_empty() {
            return Ok(());
        }

        self.runner.enqueue(effects);
        while self.state.phase() == Phase::Pending {
            let msg = self
                .runner
                .next_message()
                .context("Engine worker stopped before finishing")?;
            self.apply(msg);
        }
        self.render_if_dirty()
    }

    /// Model, view and delay currently in effect, for persisting.
    pub fn settings(&self, delay_ms: u64) -> Settings {
        Settings {
            model: self.state.model(),
            view: self.state.token_view(),
            delay_ms,
        }
    }

    fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        scope_debug!("dispatch {}", msg_name(&msg));
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    fn render_if_dirty(&mut self) -> anyhow::Result<()> {
        if !self.state.consume_dirty() {
            return Ok(());
        }
        self.write_view()
    }

    fn write_view(&mut self) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Plain => {
                for line in render(&self.state.view()) {
                    writeln!(self.out, "{line}")?;
                }
                writeln!(self.out)?;
            }
            OutputFormat::Json => {
                // JSON is only emitted for settled states.
                if self.state.phase() == Phase::Idle {
                    writeln!(self.out, "{}", render_json(&self.state)?)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::InputChanged(_) => "InputChanged",
        Msg::TokenizeClicked => "TokenizeClicked",
        Msg::TokenizeCompleted { .. } => "TokenizeCompleted",
        Msg::ClearClicked => "ClearClicked",
        Msg::ExampleClicked => "ExampleClicked",
        Msg::ModelSelected(_) => "ModelSelected",
        Msg::ViewSelected(_) => "ViewSelected",
        Msg::NoOp => "NoOp",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_become_input() {
        assert_eq!(
            parse_line("Hello world!"),
            Ok(Command::Dispatch(Msg::InputChanged("Hello world!".into())))
        );
        assert_eq!(parse_line(""), Ok(Command::Dispatch(Msg::TokenizeClicked)));
    }

    #[test]
    fn commands_parse_arguments() {
        assert_eq!(
            parse_line(":model gemini"),
            Ok(Command::Dispatch(Msg::ModelSelected(ModelKey::Gemini)))
        );
        assert_eq!(
            parse_line(":view ids"),
            Ok(Command::Dispatch(Msg::ViewSelected(TokenView::Ids)))
        );
        assert_eq!(parse_line(":q"), Ok(Command::Quit));
        assert_eq!(parse_line(":clear"), Ok(Command::Dispatch(Msg::ClearClicked)));
    }

    #[test]
    fn bad_commands_are_rejected() {
        assert!(parse_line(":model").is_err());
        assert!(parse_line(":model llama").is_err());
        assert!(parse_line(":frobnicate").is_err());
    }
}
