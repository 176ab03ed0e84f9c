//! Catalogue of language models the backend can be asked to use

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the fixed model choices offered in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    #[default]
    DeepSeek,
    Gemini,
    Mistral,
}

impl ModelChoice {
    /// All choices in selector order
    pub const ALL: [ModelChoice; 3] = [
        ModelChoice::DeepSeek,
        ModelChoice::Gemini,
        ModelChoice::Mistral,
    ];

    /// Full identifier sent to the backend
    pub fn id(self) -> &'static str {
        match self {
            ModelChoice::DeepSeek => "deepseek/deepseek-chat-v3-0324:free",
            ModelChoice::Gemini => "google/gemini-2.0-flash-exp:free",
            ModelChoice::Mistral => "mistralai/mistral-small-3.2-24b-instruct:free",
        }
    }

    /// Short name used on the command line and in config files
    pub fn alias(self) -> &'static str {
        match self {
            ModelChoice::DeepSeek => "deepseek",
            ModelChoice::Gemini => "gemini",
            ModelChoice::Mistral => "mistral",
        }
    }

    /// Human-readable label for the selector
    pub fn label(self) -> &'static str {
        match self {
            ModelChoice::DeepSeek => "DeepSeek V3",
            ModelChoice::Gemini => "Gemini 2.0 Flash",
            ModelChoice::Mistral => "Mistral Small 3.2",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Next choice, wrapping to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous choice, wrapping to the last
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Look up a choice by its full backend identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alias())
    }
}

impl FromStr for ModelChoice {
    type Err = Error;

    /// Accepts either the short alias or the full identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.alias().eq_ignore_ascii_case(needle))
            .or_else(|| Self::from_id(needle))
            .ok_or_else(|| Error::unknown_model(needle))
    }
}
