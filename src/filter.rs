use regex::Regex;

use crate::error::ConfigError;

/// Decides whether a path reported by the provider is in scope.
///
/// The pattern is searched anywhere in the path; anchors must be spelled out
/// (`^src/`, `\.rs$`). Paths are tested verbatim. Without a pattern every
/// path matches.
#[derive(Clone, Debug, Default)]
pub struct PatternFilter {
    regex: Option<Regex>,
}

impl PatternFilter {
    pub fn new(pattern: Option<&str>) -> Result<Self, ConfigError> {
        let pattern = match pattern {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(Self::match_all()),
        };
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex: Some(regex) })
    }

    pub fn match_all() -> Self {
        Self { regex: None }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.as_ref().is_none_or(|r| r.is_match(path))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map(Regex::as_str).unwrap_or(".*")
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
