use crate::manifest::{BundleInfo, EXECUTABLE_PATH, INFO_FILE};
use crate::result::Result;
use crate::utils;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Ephemeral directory holding the bundle layout before it is archived.
///
/// The tree is removed by [`StagingDir::remove`] once the archive has been
/// written. If the guard is dropped without that call (an earlier step
/// failed) the tree is removed on a best-effort basis.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
    armed: bool,
}

impl StagingDir {
    /// Create a fresh staging tree at `path`, discarding leftovers of an earlier run
    pub fn create(path: PathBuf) -> Result<Self> {
        if path.exists() {
            warn!("Removing stale staging directory {}", path.display());
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        debug!("Created staging directory {}", path.display());

        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy the executable to `bin/sur`
    pub fn stage_executable(&self, source: &Path) -> Result<PathBuf> {
        let destination = self.path.join(EXECUTABLE_PATH);
        let bytes = utils::copy_file(source, &destination)?;
        debug!("Copied {} ({} bytes) to {}", source.display(), bytes, destination.display());
        Ok(destination)
    }

    /// Write the descriptor to `info.json`
    pub fn write_info(&self, info: &BundleInfo) -> Result<PathBuf> {
        let destination = self.path.join(INFO_FILE);
        fs::write(&destination, info.to_json()?)?;
        debug!("Wrote {}", destination.display());
        Ok(destination)
    }

    /// Delete the staging tree, reporting any failure
    pub fn remove(mut self) -> Result<()> {
        self.armed = false;
        fs::remove_dir_all(&self.path)?;
        debug!("Removed staging directory {}", self.path.display());
        Ok(())
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            warn!("Failed to remove staging directory {}: {}", self.path.display(), e);
        }
    }
}
