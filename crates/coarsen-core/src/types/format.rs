//! Output serialization formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize_name;
use crate::errors::ConfigError;

/// Graph serialization format for per-level artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Ncol,
    Gml,
    Pajek,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Ncol, Self::Gml, Self::Pajek];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ncol => "ncol",
            Self::Gml => "gml",
            Self::Pajek => "pajek",
        }
    }

    /// File extension written for this format.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
