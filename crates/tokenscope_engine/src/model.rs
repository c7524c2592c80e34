use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::BaselineId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKey {
    /// Baseline model; its ids carry no offset.
    #[default]
    Gpt,
    Claude,
    Gemini,
    Grook,
}

impl ModelKey {
    pub const ALL: [ModelKey; 4] = [
        ModelKey::Gpt,
        ModelKey::Claude,
        ModelKey::Gemini,
        ModelKey::Grook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKey::Gpt => "gpt",
            ModelKey::Claude => "claude",
            ModelKey::Gemini => "gemini",
            ModelKey::Grook => "grook",
        }
    }

    fn index(self) -> usize {
        match self {
            ModelKey::Gpt => 0,
            ModelKey::Claude => 1,
            ModelKey::Gemini => 2,
            ModelKey::Grook => 3,
        }
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown model {0:?} (expected one of: gpt, claude, gemini, grook)")]
pub struct ParseModelKeyError(pub String);

impl FromStr for ModelKey {
    type Err = ParseModelKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ModelKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseModelKeyError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProfile {
    pub key: ModelKey,
    pub display_name: String,
    pub input_price_per_thousand: f64,
    /// Carried for completeness; cost estimates only use the input price.
    pub output_price_per_thousand: f64,
    pub id_offset: BaselineId,
    pub example_text: String,
}

impl ModelProfile {
    fn new(
        key: ModelKey,
        display_name: &str,
        input_price_per_thousand: f64,
        output_price_per_thousand: f64,
        id_offset: BaselineId,
        example_text: &str,
    ) -> Self {
        Self {
            key,
            display_name: display_name.to_string(),
            input_price_per_thousand,
            output_price_per_thousand,
            id_offset,
            example_text: example_text.to_string(),
        }
    }

    pub fn cost_model_label(&self) -> String {
        format!("Based on {}", self.display_name)
    }
}

/// One profile per [`ModelKey`]; lookups are total.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTable {
    profiles: [ModelProfile; 4],
}

impl ModelTable {
    pub fn builtin() -> Self {
        Self {
            profiles: [
                ModelProfile::new(
                    ModelKey::Gpt,
                    "GPT-4 Turbo",
                    0.01,
                    0.03,
                    0,
                    "Hello world! This is an example of GPT tokenization. Token IDs match OpenAI's tokenizer.",
                ),
                ModelProfile::new(
                    ModelKey::Claude,
                    "Claude 3 Sonnet",
                    0.0015,
                    0.015,
                    200_000,
                    "Claude models tokenize text in a slightly different way. Let's examine the tokens!",
                ),
                ModelProfile::new(
                    ModelKey::Gemini,
                    "Gemini 1.5 Pro",
                    0.0025,
                    0.0075,
                    400_000,
                    "Gemini uses a unique tokenization approach. This example shows how it works.",
                ),
                ModelProfile::new(
                    ModelKey::Grook,
                    "Grook-2",
                    0.006,
                    0.012,
                    600_000,
                    "Grook tokenizers handle multiple languages efficiently. Test it with this prompt.",
                ),
            ],
        }
    }

    pub fn profile(&self, key: ModelKey) -> &ModelProfile {
        &self.profiles[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelProfile> {
        self.profiles.iter()
    }
}

impl Default for ModelTable {
    fn default() -> Self {
        Self::builtin()
    }
}
