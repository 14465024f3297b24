//! Filesystem utilities.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;


/// Mode of newly created files, matching what `fs::write` gives under the usual umask.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;


/// Write the bytes to a file at given path, creating any missing directories.
///
/// The content is first written to a temporary file in the target directory
/// which then replaces the destination, so readers never observe a partial file.
/// An existing destination keeps its permissions.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !directory.is_dir() {
        debug!("Creating directory {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let mut file = NamedTempFile::new_in(directory)?;
    trace!("Writing {} byte(s) to temporary file {}", bytes.len(), file.path().display());
    file.write_all(bytes)?;
    copy_permissions(file.as_file(), path)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// Temporary files are created private to the owner,
// which the final file shouldn't be.
#[cfg(unix)]
fn copy_permissions(file: &fs::File, path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(path) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => fs::Permissions::from_mode(NEW_FILE_MODE),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn copy_permissions(_: &fs::File, _: &Path) -> io::Result<()> {
    Ok(())
}
