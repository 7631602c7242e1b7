//! Mostly [`fs`] extensions with extra error messaging.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

/// Equivalent to [`fs::remove_dir_all`] with better error messages.
pub fn remove_dir_all(p: impl AsRef<Path>) -> Result<()> {
    return inner(p.as_ref());

    fn inner(p: &Path) -> Result<()> {
        fs::remove_dir_all(p)
            .with_context(|| format!("failed to remove directory `{}`", p.display()))
    }
}

/// Equivalent to [`fs::remove_file`] with better error messages.
pub fn remove_file(p: impl AsRef<Path>) -> Result<()> {
    return inner(p.as_ref());

    fn inner(p: &Path) -> Result<()> {
        fs::remove_file(p).with_context(|| format!("failed to remove file `{}`", p.display()))
    }
}

/// Equivalent to [`fs::read_to_string`] with better error messages.
pub fn read_to_string(p: impl AsRef<Path>) -> Result<String> {
    return inner(p.as_ref());

    fn inner(p: &Path) -> Result<String> {
        fs::read_to_string(p).with_context(|| format!("failed to read `{}`", p.display()))
    }
}

/// Equivalent to [`env::current_dir`] with better error messages.
pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("failed to read current working directory")
}

/// Equivalent to [`env::set_current_dir`] with better error messages.
pub fn set_current_dir(p: impl AsRef<Path>) -> Result<()> {
    return inner(p.as_ref());

    fn inner(p: &Path) -> Result<()> {
        env::set_current_dir(p)
            .with_context(|| format!("failed to change working directory to `{}`", p.display()))
    }
}

pub trait PathBufUtf8Ext {
    fn try_into_utf8(self) -> Result<Utf8PathBuf>;
}

impl PathBufUtf8Ext for PathBuf {
    fn try_into_utf8(self) -> Result<Utf8PathBuf> {
        Utf8PathBuf::from_path_buf(self)
            .map_err(|path| anyhow!("path `{}` is not UTF-8 encoded", path.display()))
    }
}
