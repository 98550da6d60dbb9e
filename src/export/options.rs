//! Conversion options

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Must specify path to read Trello .JSON file.")]
    MissingSource,

    #[error("Must specify path to write Pivotal Tracker .CSV file.")]
    MissingTarget,
}

/// Where to read the Trello board and where to write the Pivotal import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    source: PathBuf,
    target: PathBuf,
}

impl ConvertOptions {
    /// Validates both paths before any file is touched
    pub fn new(
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Result<Self, ConvertError> {
        let source = source.into();
        let target = target.into();

        if source.as_os_str().is_empty() {
            return Err(ConvertError::MissingSource);
        }
        if target.as_os_str().is_empty() {
            return Err(ConvertError::MissingTarget);
        }

        Ok(Self { source, target })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}
