//! Fixed file layout of a conversion run.

use std::path::{Path, PathBuf};

pub const INPUT_FILE: &str = "enums.defs";
pub const OUTPUT_FILE: &str = "Enums.elm";
pub const BACKUP_FILE: &str = "Enums.elm.bak";

/// Where a run reads and writes. The file names never change; only the
/// directory they live in does.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
}

impl Config {
    /// Paths relative to the process working directory.
    pub fn current_dir() -> Self {
        Self::in_dir(".")
    }

    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.root.join(INPUT_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(OUTPUT_FILE)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.root.join(BACKUP_FILE)
    }
}
