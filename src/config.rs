//! Runner configuration, read from TOML.
//!
//! ```toml
//! examples = ["stepwise-builder", "bulk-replacement"]
//! journal_path = "out/journal.txt"
//! color = false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::catalog::DEFAULT_JOURNAL_PATH;
use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Examples to run when none are named on the command line.
    pub examples: Vec<String>,
    pub journal_path: PathBuf,
    pub color: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            examples: Vec::new(),
            journal_path: PathBuf::from(DEFAULT_JOURNAL_PATH),
            color: true,
        }
    }
}

impl RunnerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "loaded runner config");
                Self::from_toml_str(&content)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no runner config, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}
