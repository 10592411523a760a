use crate::result::Result;
use std::path::{Path, PathBuf};

/// Context passed throughout the application containing global configuration
#[derive(Clone, Debug)]
pub struct Context {
    /// Directory receiving the staging tree and the final archive
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Context rooted at the process working directory
    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn join<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.base_dir.join(name)
    }
}
