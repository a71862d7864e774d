//! Dictionary check toggle

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether single words are verified against the Maimemo dictionary first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordCheck {
    /// Reject words the dictionary does not know
    #[default]
    Enable,
    /// Add any word without asking the dictionary
    Disable,
}

impl WordCheck {
    pub fn is_enabled(&self) -> bool {
        matches!(self, WordCheck::Enable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordCheck::Enable => "enable",
            WordCheck::Disable => "disable",
        }
    }
}

impl fmt::Display for WordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enable" => Ok(WordCheck::Enable),
            "disable" => Ok(WordCheck::Disable),
            other => Err(format!(
                "Invalid enable_word_check '{}'. Valid values: enable, disable",
                other
            )),
        }
    }
}
