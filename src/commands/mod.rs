pub mod directory;
pub mod file;
pub mod init_config;

use crate::config::Config;
use crate::sequence_processor::ReadWindow;
use anyhow::{bail, Result};

/// Window from `--range`, or the configured default.
pub(crate) fn resolve_window(range: Option<&[u64]>, config: &Config) -> Result<ReadWindow> {
    match range {
        None => Ok(config.window()),
        Some(&[start, end]) => Ok(ReadWindow::new(start, end)),
        Some(other) => bail!("--range takes exactly two values, got {}", other.len()),
    }
}
