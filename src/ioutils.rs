use std::path::Path;

use crate::error::{Error, Result};

/// Ensures the target directory does not exist yet, then creates it.
///
/// The existence check runs before anything is written, so a rerun against
/// an existing directory fails without touching its contents.
pub fn create_new_dir<P: AsRef<Path>>(target_dir: P) -> Result<()> {
    let target_dir = target_dir.as_ref();
    if target_dir.exists() {
        return Err(Error::TargetDirectoryExistsError {
            target_dir: target_dir.display().to_string(),
        });
    }
    std::fs::create_dir(target_dir).map_err(Error::IoError)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Resolves the project name from a directory path.
///
/// In-place scaffolding derives the name from the basename of the
/// canonicalized current directory.
pub fn project_name_from_dir<P: AsRef<Path>>(dir: P) -> Result<String> {
    let dir = dir.as_ref();
    let resolved = dir.canonicalize()?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::ProjectNameError { path: dir.display().to_string() })
}
