use crate::archive;
use crate::context::Context;
use crate::error::Error;
use crate::manifest::{ARTIFACT_NAME, BundleInfo};
use crate::result::Result;
use crate::staging::StagingDir;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// `sur-<version>.artifactbundle`
pub fn bundle_name(version: &str) -> String {
    format!("{}-{}.artifactbundle", ARTIFACT_NAME, version)
}

pub fn staging_dir_name(version: &str) -> String {
    format!("{}_bundle", bundle_name(version))
}

pub fn archive_file_name(version: &str) -> String {
    format!("{}.zip", bundle_name(version))
}

/// Package `executable` as version `version` into `<ctx.base_dir>/sur-<version>.artifactbundle.zip`.
///
/// The archive holds exactly `bin/sur` and `info.json`. The staging
/// directory is gone when this returns, whether it succeeds or not.
pub fn create_bundle(ctx: &Context, executable: &Path, version: &str) -> Result<PathBuf> {
    check_executable(executable)?;

    let staging = StagingDir::create(ctx.join(staging_dir_name(version)))?;
    staging.stage_executable(executable)?;
    staging.write_info(&BundleInfo::for_executable(version))?;

    let archive_path = ctx.join(archive_file_name(version));
    let entries = archive::create_zip_file(staging.path(), &archive_path)?;
    staging.remove()?;

    info!("Wrote {} entries to {}", entries.len(), archive_path.display());
    Ok(archive_path)
}

fn check_executable(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|source| Error::ExecutableNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }
    Ok(())
}
