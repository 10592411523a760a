use crate::error::Error;
use crate::result::Result;
use crate::utils;
use log::debug;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use time::PrimitiveDateTime;
use time::macros::datetime;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Modification time stamped on every entry so repeated runs are byte-identical
const ARCHIVE_EPOCH: PrimitiveDateTime = datetime!(1980-01-01 0:00);

/// Write every regular file under `source_dir` into a deflated zip at
/// `output_path`, named by its path relative to `source_dir`.
///
/// Returns the entry names in archive order. A partially written archive is
/// removed before the error is returned.
pub fn create_zip_file(source_dir: &Path, output_path: &Path) -> Result<Vec<String>> {
    let file = File::create(output_path)?;

    match write_entries(ZipWriter::new(file), source_dir) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(output_path) {
                debug!("Could not remove partial archive {}: {}", output_path.display(), cleanup);
            }
            Err(e)
        }
    }
}

fn write_entries(mut zip: ZipWriter<File>, source_dir: &Path) -> Result<Vec<String>> {
    let modified = pinned_timestamp()?;
    let mut entries = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = entry_name(source_dir, path)?;
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(utils::file_mode(path)?)
            .last_modified_time(modified);

        debug!("Adding {} as {}", path.display(), name);
        zip.start_file(name.clone(), options)?;
        let mut f = File::open(path)?;
        io::copy(&mut f, &mut zip)?;
        entries.push(name);
    }

    zip.finish()?;
    Ok(entries)
}

/// Archive entry name: `path` relative to `root`, `/`-separated
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::custom(format!("{} is outside {}", path.display(), root.display())))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str().ok_or_else(|| {
            Error::custom(format!("Non UTF-8 path in staging tree: {}", path.display()))
        })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

fn pinned_timestamp() -> Result<zip::DateTime> {
    let invalid = || Error::InvalidTimestamp(ARCHIVE_EPOCH.to_string());
    let year = u16::try_from(ARCHIVE_EPOCH.year()).map_err(|_| invalid())?;

    zip::DateTime::from_date_and_time(
        year,
        u8::from(ARCHIVE_EPOCH.month()),
        ARCHIVE_EPOCH.day(),
        ARCHIVE_EPOCH.hour(),
        ARCHIVE_EPOCH.minute(),
        ARCHIVE_EPOCH.second(),
    )
    .map_err(|_| invalid())
}
