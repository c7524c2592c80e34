use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokenscope_core::TokenView;
use tokenscope_engine::ModelKey;

use crate::settings::DEFAULT_SETTINGS_FILE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labels and token chips for reading.
    #[default]
    Plain,
    /// Tokens and stats as JSON.
    Json,
}

/// Estimate tokens, token ids and input cost for several language models.
#[derive(Debug, Parser)]
#[command(name = "tokenscope", version)]
pub struct Cli {
    /// Model to estimate for (gpt, claude, gemini, grook).
    #[arg(short, long)]
    pub model: Option<ModelKey>,

    /// Token display: chips with ids, or the bare id array.
    #[arg(long)]
    pub view: Option<TokenView>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Artificial processing delay before results appear.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Use the selected model's example text as input.
    #[arg(long, conflicts_with = "text")]
    pub example: bool,

    /// Read text and `:commands` line by line from stdin.
    #[arg(short, long)]
    pub interactive: bool,

    /// Settings file remembering the last model, view and delay.
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Also write logs to ./tokenscope.log.
    #[arg(long)]
    pub log_file: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Text to tokenize; read from stdin when omitted.
    pub text: Vec<String>,
}
