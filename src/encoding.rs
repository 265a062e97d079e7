use std::str::FromStr;

use anyhow::{Context, Result};

use crate::error::ConfigError;

/// How a list of paths is rendered into a single output value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultEncoding {
    /// One path per line.
    #[default]
    String,
    /// Compact JSON array of strings.
    Json,
}

impl ResultEncoding {
    pub fn encode(self, paths: &[String]) -> Result<String> {
        match self {
            ResultEncoding::String => Ok(paths.join("\n")),
            ResultEncoding::Json => serde_json::to_string(paths).context("encode paths as json"),
        }
    }
}

impl FromStr for ResultEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "string" => Ok(ResultEncoding::String),
            "json" => Ok(ResultEncoding::Json),
            other => Err(ConfigError::InvalidEncoding(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/encoding_tests.rs"]
mod tests;
