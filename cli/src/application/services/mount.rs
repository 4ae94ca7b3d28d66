//! Bucket Mounter and Secret Disposer.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, LocalFs};
use crate::application::services::ensure_success;
use crate::domain::error::SecretError;
use crate::domain::layout::Layout;

/// Mount `bucket` at the layout's mount point via the FUSE helper, using the
/// rendered credentials file. Bounded by the layout's mount timeout.
///
/// # Errors
///
/// Returns an error if the helper cannot be spawned, exits non-zero, or
/// times out (in which case it has been killed).
pub async fn mount_bucket(
    runner: &impl CommandRunner,
    layout: &Layout,
    bucket: &str,
) -> Result<()> {
    let mount_point = layout.mount_point.to_string_lossy();
    let passwd_opt = format!("passwd_file={}", layout.credentials_file.display());

    let status = runner
        .run_logged(
            &layout.mount_program,
            &[bucket, &mount_point, "-o", &passwd_opt],
            Some(layout.mount_timeout()),
        )
        .await?;
    ensure_success(&layout.mount_program, status)
}

/// Delete the credentials file and confirm it is gone.
///
/// A file that is already absent counts as disposed.
///
/// # Errors
///
/// Returns an error if removal fails or the file still exists afterwards.
pub fn dispose_credentials_file(fs: &impl LocalFs, path: &Path) -> Result<()> {
    match fs.remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e).with_context(|| format!("removing {}", path.display())),
    }
    if fs.exists(path) {
        return Err(SecretError::StillPresent(path.to_path_buf()).into());
    }
    Ok(())
}
