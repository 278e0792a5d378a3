//! Filesystem helpers shared by the backup and overlay steps

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

use crate::error::{Result, UpdateError};

/// Copy `src` to `dst`, carrying over permissions and access/modification times
///
/// An existing `dst` is truncated and overwritten.
pub fn copy_preserving(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src).map_err(|e| UpdateError::io("stat", src, e))?;

    let mut reader = File::open(src).map_err(|e| UpdateError::io("open", src, e))?;
    let mut writer = File::create(dst).map_err(|e| UpdateError::io("create", dst, e))?;
    io::copy(&mut reader, &mut writer).map_err(|e| UpdateError::io("copy to", dst, e))?;

    let times = FileTimes::new()
        .set_accessed(meta.accessed().map_err(|e| UpdateError::io("stat", src, e))?)
        .set_modified(meta.modified().map_err(|e| UpdateError::io("stat", src, e))?);
    writer
        .set_times(times)
        .map_err(|e| UpdateError::io("set times on", dst, e))?;
    drop(writer);

    // Permissions last, the source may be read-only.
    fs::set_permissions(dst, meta.permissions())
        .map_err(|e| UpdateError::io("set permissions on", dst, e))?;

    tracing::debug!(src = %src.display(), dst = %dst.display(), "copied");
    Ok(())
}

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| UpdateError::io("create directory", dir, e))
}

/// Set the Unix mode bits of `path`
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| UpdateError::io("chmod", path, e))
}

#[cfg(not(unix))]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    tracing::debug!(path = %path.display(), mode = %format!("{mode:o}"), "mode bits unsupported, skipping");
    Ok(())
}
