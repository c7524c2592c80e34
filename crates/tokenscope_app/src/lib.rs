//! Tokenscope terminal front-end: argument parsing, settings, and the session
//! loop that wires the core state machine to the engine worker.
pub mod cli;
mod effects;
pub mod render;
pub mod session;
pub mod settings;

pub use cli::{Cli, OutputFormat};
pub use effects::EffectRunner;
pub use session::{parse_line, Command, Session};
pub use settings::{load_settings, save_settings, Settings, SettingsError};
