use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{trace, warn};

use crate::internal::fsx;

/// Moves the process into a directory for as long as the guard lives.
///
/// The working directory is process-wide state: while a guard is alive, nothing else in the
/// process may rely on the working directory staying put.
#[must_use = "the original working directory is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct WorkingDirGuard {
    origin: Option<PathBuf>,
}

impl WorkingDirGuard {
    /// Record the current working directory and change into `dir`.
    ///
    /// An unreadable current directory, e.g. one deleted by another process, is not an error:
    /// it is logged and nothing is restored on drop. Failing to enter `dir` changes nothing.
    pub fn enter(dir: &Path) -> Result<Self> {
        let origin = fsx::current_dir()
            .inspect_err(|err| warn!("{err:?}"))
            .ok();
        fsx::set_current_dir(dir)?;
        trace!(origin = ?origin, "entered `{}`", dir.display());
        Ok(Self { origin })
    }

    /// The working directory to restore, if it could be read.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        let Some(origin) = &self.origin else {
            return;
        };
        // The origin may have been removed while we were away, e.g. when called from inside `build`.
        match fsx::set_current_dir(origin) {
            Ok(()) => trace!("restored working directory `{}`", origin.display()),
            Err(err) => warn!("{err:?}"),
        }
    }
}
