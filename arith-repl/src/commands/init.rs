//! Init command implementation.
//!
//! Writes a configuration file holding the default settings so users have
//! something to edit.

use std::path::PathBuf;

use tracing::info;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{ArithError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Writes the default configuration and returns where it was written.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    if dir.exists() && !dir.is_dir() {
        return Err(ArithError::Validation(format!(
            "Target path is not a directory: {}",
            dir.display()
        )));
    }

    let target = dir.join(CONFIG_FILE_NAME);
    if target.exists() && !args.force {
        return Err(ArithError::Validation(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            target.display()
        )));
    }

    Config::default().save_to_path(&target)?;
    info!(path = %target.display(), "wrote configuration");
    Ok(target)
}
