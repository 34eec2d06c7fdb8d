//! Output location: directory and file prefix, with defaults taken from the
//! input file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use coarsen_core::config::OutputOptions;
use coarsen_core::constants::DEFAULT_PREFIX_SUFFIX;
use coarsen_core::errors::FormatError;

/// Resolved output directory and prefix. Every artifact path is
/// `<directory>/<prefix><suffix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub directory: PathBuf,
    pub prefix: String,
}

impl OutputPaths {
    /// Defaults: the input file's directory and `<input stem>_coarsened_`.
    /// With `unique_key`, `_<timestamp>` is appended to the prefix.
    pub fn resolve(input: &Path, output: &OutputOptions, now: DateTime<Local>) -> Self {
        let directory = match &output.directory {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        let mut prefix = match &output.prefix {
            Some(prefix) => prefix.clone(),
            None => {
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!("{stem}{DEFAULT_PREFIX_SUFFIX}")
            }
        };
        if output.unique_key {
            prefix.push('_');
            prefix.push_str(&unique_key(now));
        }
        Self { directory, prefix }
    }

    /// Create the output directory if it does not exist.
    pub fn ensure_directory(&self) -> Result<(), FormatError> {
        std::fs::create_dir_all(&self.directory).map_err(|e| FormatError::io(&self.directory, e))
    }

    /// `<directory>/<prefix><suffix>`.
    pub fn file(&self, suffix: &str) -> PathBuf {
        self.directory.join(format!("{}{suffix}", self.prefix))
    }
}

/// Timestamp down to microseconds, e.g. `20261016093012123456`.
pub fn unique_key(now: DateTime<Local>) -> String {
    now.format("%Y%m%d%H%M%S%6f").to_string()
}
