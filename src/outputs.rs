//! Publishing named step outputs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::changes::ChangeSet;
use crate::encoding::ResultEncoding;

pub const FILES_CREATED: &str = "files_created";
pub const FILES_UPDATED: &str = "files_updated";
pub const FILES_DELETED: &str = "files_deleted";

/// Where outputs go: the runner's `GITHUB_OUTPUT` file, or stdout when the
/// binary runs outside of Actions.
#[derive(Clone, Debug)]
pub enum OutputSink {
    File(PathBuf),
    Stdout,
}

impl OutputSink {
    pub fn from_env() -> Self {
        match std::env::var_os("GITHUB_OUTPUT") {
            Some(path) if !path.is_empty() => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::Stdout,
        }
    }

    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let record = format_output(name, value, &random_delimiter()?);
        match self {
            OutputSink::File(path) => {
                let mut f = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("open output file {}", path.display()))?;
                f.write_all(record.as_bytes())
                    .with_context(|| format!("write output {}", name))?;
            }
            OutputSink::Stdout => {
                print!("{}", record);
            }
        }
        Ok(())
    }

    /// Encodes and publishes all three sequences.
    pub fn publish(&self, changes: &ChangeSet, encoding: ResultEncoding) -> Result<()> {
        self.set_output(FILES_CREATED, &encoding.encode(changes.created())?)?;
        self.set_output(FILES_UPDATED, &encoding.encode(changes.updated())?)?;
        self.set_output(FILES_DELETED, &encoding.encode(changes.deleted())?)?;
        Ok(())
    }
}

fn random_delimiter() -> Result<String> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("generate delimiter: {}", e))?;
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    Ok(format!("ghadelimiter_{}", hex))
}

// Heredoc form keeps multi-line values intact.
fn format_output(name: &str, value: &str, delimiter: &str) -> String {
    let mut delimiter = delimiter.to_string();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

#[cfg(test)]
#[path = "tests/outputs_tests.rs"]
mod tests;
