use std::fs::{self, Permissions};
use std::path::Path;

use crate::constants::modes;
use crate::error::{Error, FileOperation, Result};

fn fs_error(operation: FileOperation, path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Filesystem { operation, path: path.to_path_buf(), source }
}

/// Creates `dest_path` and any missing ancestors. Existing directories are fine.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    fs::create_dir_all(dest_path).map_err(fs_error(FileOperation::CreateDirectory, dest_path))
}

#[cfg(unix)]
fn with_owner_write(permissions: Permissions) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(permissions.mode() | modes::OWNER_WRITE)
}

#[cfg(not(unix))]
fn with_owner_write(mut permissions: Permissions) -> Permissions {
    permissions.set_readonly(false);
    permissions
}

#[cfg(unix)]
fn owner_writable(permissions: &Permissions) -> bool {
    use std::os::unix::fs::PermissionsExt;
    permissions.mode() & modes::OWNER_WRITE != 0
}

#[cfg(not(unix))]
fn owner_writable(permissions: &Permissions) -> bool {
    !permissions.readonly()
}

#[cfg(unix)]
fn read_only(_permissions: Permissions) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(modes::READ_ONLY)
}

#[cfg(not(unix))]
fn read_only(mut permissions: Permissions) -> Permissions {
    permissions.set_readonly(true);
    permissions
}

/// Restores the owner write bit on an existing file so it can be replaced.
pub fn ensure_writable<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let permissions = fs::metadata(path)
        .map_err(fs_error(FileOperation::SetPermissions, path))?
        .permissions();
    if owner_writable(&permissions) {
        return Ok(());
    }
    fs::set_permissions(path, with_owner_write(permissions))
        .map_err(fs_error(FileOperation::SetPermissions, path))
}

/// Clears every write bit, leaving the file readable by all.
pub fn set_read_only<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let permissions = fs::metadata(path)
        .map_err(fs_error(FileOperation::SetPermissions, path))?
        .permissions();
    fs::set_permissions(path, read_only(permissions))
        .map_err(fs_error(FileOperation::SetPermissions, path))
}

/// Writes `content` to `dest_path`, replacing whatever was there, and marks
/// the result read-only.
pub fn write_read_only<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    if dest_path.is_file() {
        ensure_writable(dest_path)?;
    }
    fs::write(dest_path, content).map_err(fs_error(FileOperation::Write, dest_path))?;
    set_read_only(dest_path)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(fs_error(FileOperation::Read, path))
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
