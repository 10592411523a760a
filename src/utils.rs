use crate::result::Result;
use std::fs;
use std::path::Path;

/// Copy a single file, creating the destination's parent directories.
/// Permission bits travel with the copy.
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    if let Some(parent) = destination.parent() {
        ensure_dir(parent)?;
    }
    Ok(fs::copy(source, destination)?)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Unix permission bits to record for an archived file
pub fn file_mode(path: &Path) -> Result<u32> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Ok(fs::metadata(path)?.permissions().mode() & 0o7777)
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        Ok(0o644)
    }
}
