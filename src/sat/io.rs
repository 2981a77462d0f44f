//! Reading 3-CNF batches, one formula per line

use super::CnfInstance;
use crate::error::{ReduceError, Result};
use anyhow::Context;
use std::path::Path;

/// Load every formula from a batch file
pub fn load_cnf_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<CnfInstance>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read CNF file: {}", path.as_ref().display()))?;

    read_cnf_batch(&content)
        .with_context(|| format!("Failed to parse CNF file: {}", path.as_ref().display()))
}

/// Parse one formula per non-blank line
pub fn read_cnf_batch(content: &str) -> Result<Vec<CnfInstance>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse::<CnfInstance>().map_err(|err| match err {
                ReduceError::Parse { message, .. } => ReduceError::Parse {
                    line: idx + 1,
                    message,
                },
                other => ReduceError::Parse {
                    line: idx + 1,
                    message: other.to_string(),
                },
            })
        })
        .collect()
}
