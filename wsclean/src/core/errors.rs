use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to find the directory the tool lives in, or the project root above it.
///
/// This is the only fatal condition of a cleaning run: without a root no deletion can be scoped.
#[derive(Debug, Error)]
pub enum RootResolutionError {
    #[error("install directory `{}` does not exist or is not accessible", path.display())]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("install directory `{}` is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("install directory path `{}` is not valid UTF-8", path.display())]
    NonUtf8 { path: PathBuf },

    #[error("could not determine where wsclean is installed")]
    Undetectable,

    #[error("install directory `{}` has no parent directory to use as project root", path.display())]
    NoParent { path: PathBuf },
}
