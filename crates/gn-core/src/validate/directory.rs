//! Output directory checks.
//!
//! The parent directory must exist, be a directory, and be writable; those
//! failures stop further checks. An existing project directory is an error
//! only when it has content and `force` is off. Low free space is a warning,
//! and a failed disk-space check is ignored.

use std::io;
use std::path::Path;

use tracing::debug;

use super::result::ValidationResult;

/// Free space below which a warning is added (100 MiB).
pub const MIN_FREE_SPACE_BYTES: u64 = 100 * 1024 * 1024;

/// Validates where a new project directory would be created.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryValidator {
    min_free_bytes: u64,
}

impl Default for DirectoryValidator {
    fn default() -> Self {
        Self {
            min_free_bytes: MIN_FREE_SPACE_BYTES,
        }
    }
}

impl DirectoryValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the low-space threshold.
    pub fn with_min_free_bytes(mut self, bytes: u64) -> Self {
        self.min_free_bytes = bytes;
        self
    }

    pub fn validate_output_directory(
        &self,
        parent: &Path,
        project_name: &str,
        force: bool,
    ) -> ValidationResult {
        let mut result = ValidationResult::success();
        let shown = parent.display();

        if !parent.exists() {
            result.add_error(format!("Parent directory does not exist: {shown}"));
            result.add_suggestion("Create the directory or use an existing one");
            return result;
        }

        if !parent.is_dir() {
            result.add_error(format!("'{shown}' is not a directory"));
            return result;
        }

        if !is_writable(parent) {
            result.add_error(format!("No write permission in: {shown}"));
            result.add_suggestion("Change the permissions or use a different directory");
            return result;
        }

        let project_path = parent.join(project_name);
        if project_path.exists() {
            if force {
                result.add_warning(format!("Directory '{project_name}' will be overwritten"));
            } else {
                match has_entries(&project_path) {
                    Ok(true) => {
                        result.add_error(format!(
                            "Directory '{project_name}' already exists and is not empty"
                        ));
                        result.add_suggestion("Use --force to overwrite or choose another name");
                    }
                    Ok(false) => {
                        result.add_warning(format!("Directory '{project_name}' exists but is empty"));
                    }
                    Err(e) => {
                        result.add_error(format!("Error validating directory: {e}"));
                    }
                }
            }
        }

        match available_space(parent) {
            Ok(free) if free < self.min_free_bytes => {
                result.add_warning("Low disk space available");
                result.add_suggestion("Make sure there is enough space for the project");
            }
            Ok(_) => {}
            Err(e) => debug!(path = %shown, error = %e, "disk space check failed"),
        }

        result
    }
}

/// Validate with the default threshold.
pub fn validate_directory(parent: &Path, project_name: &str, force: bool) -> ValidationResult {
    DirectoryValidator::default().validate_output_directory(parent, project_name, force)
}

fn has_entries(path: &Path) -> io::Result<bool> {
    Ok(std::fs::read_dir(path)?.next().is_some())
}

#[cfg(unix)]
fn c_path(path: &Path) -> io::Result<std::ffi::CString> {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    match c_path(path) {
        // SAFETY: `c_path` is a valid NUL-terminated string for the call.
        Ok(c_path) => unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 },
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// Bytes available to unprivileged users on the filesystem holding `path`.
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
fn available_space(path: &Path) -> io::Result<u64> {
    let c_path = c_path(path)?;
    // SAFETY: statvfs is plain data; the kernel fills it on success.
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok((stat.f_bavail as u64).saturating_mul(stat.f_frsize as u64))
}

#[cfg(not(unix))]
fn available_space(_path: &Path) -> io::Result<u64> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "disk space check not available on this platform",
    ))
}
