//! Destination of the CSV report.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Validated report path. Always ends in `.csv`; its parent directory existed
/// at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OutputTarget {
    pub path: PathBuf,
}

impl OutputTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
