//! Cloning a freshly created remote

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use devcli_core::process::quote;
use devcli_core::CommandRunner;
use tracing::info;

/// Directory `git clone <url>` will create for `url`
///
/// The last path segment with any `.git` suffix removed.
pub fn repository_dir_name(url: &str) -> Option<&str> {
    let last = url.trim().trim_end_matches('/').rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    (!name.is_empty()).then_some(name)
}

/// Clone `url` into `cwd`
///
/// # Returns
/// Path of the cloned working copy
///
/// # Errors
/// - [`Error::MissingCloneUrl`] if `url` is blank; git is never invoked
/// - [`Error::CommandNotFound`] if git is not on PATH
/// - [`Error::DirectoryExists`] if the checkout directory is already present
/// - [`Error::Process`] if `git clone` fails
pub async fn clone_repository(
    runner: &dyn CommandRunner,
    url: &str,
    cwd: &Utf8Path,
) -> Result<Utf8PathBuf> {
    let url = url.trim();
    let dir_name = repository_dir_name(url).ok_or_else(|| Error::missing_clone_url(url))?;

    if !runner.is_available("git") {
        return Err(Error::command_not_found("git"));
    }

    let destination = cwd.join(dir_name);
    if destination.exists() {
        return Err(Error::directory_exists(dir_name));
    }

    info!("Cloning {} -> {}", url, destination);
    runner
        .run(&format!("git clone {}", quote(url)), Some(cwd))
        .await?;

    info!("Repository cloned successfully");
    Ok(destination)
}
