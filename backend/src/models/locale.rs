use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, ErrorContext};

/// Dashboard display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocaleId {
    #[default]
    #[serde(rename = "en-CA")]
    EnCa,
    #[serde(rename = "fr-CA")]
    FrCa,
}

impl LocaleId {
    pub const ALL: [LocaleId; 2] = [LocaleId::EnCa, LocaleId::FrCa];

    pub fn as_str(self) -> &'static str {
        match self {
            LocaleId::EnCa => "en-CA",
            LocaleId::FrCa => "fr-CA",
        }
    }

    /// Locale data handed to chrono on every formatting call.
    pub fn chrono_locale(self) -> chrono::Locale {
        match self {
            LocaleId::EnCa => chrono::Locale::en_CA,
            LocaleId::FrCa => chrono::Locale::fr_CA,
        }
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleId {
    type Err = EngineError;

    /// Accepts the full tag (`fr-CA`, `fr_ca`) or the bare language (`fr`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().replace('_', "-");
        LocaleId::ALL
            .into_iter()
            .find(|locale| {
                let full = locale.as_str();
                let language = full.split('-').next().unwrap_or(full);
                tag.eq_ignore_ascii_case(full) || tag.eq_ignore_ascii_case(language)
            })
            .ok_or_else(|| {
                EngineError::configuration_with_context(
                    format!("Unknown locale '{}'", tag),
                    ErrorContext::new("parse_locale"),
                )
            })
    }
}
