use std::io;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tracing::{debug, trace, warn};
use wsclean_ui::OutputFormat;
use wsclean_ui::components::{MachineMessage, Status};

use crate::core::Config;
use crate::internal::cwd::WorkingDirGuard;
use crate::internal::fsx;

/// What happened to a single path during a cleaning run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Removal {
    Removed,
    /// Nothing to remove, which is not an error.
    Missing,
    /// The path exists, but this is a dry run.
    WouldRemove,
    /// Removal was attempted and failed. Never fatal.
    Failed { error: String },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CleanEntry {
    /// Path relative to the project root.
    pub path: Utf8PathBuf,
    #[serde(flatten)]
    pub removal: Removal,
}

/// Outcome of [`clean`], one entry per resolved target path.
#[derive(Clone, Debug, Serialize)]
pub struct CleanReport {
    pub root: Utf8PathBuf,
    pub entries: Vec<CleanEntry>,
}

impl CleanReport {
    fn new(root: &Utf8Path) -> Self {
        Self {
            root: root.to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Outcome for the given root-relative path, if it was considered at all.
    pub fn get(&self, path: impl AsRef<Utf8Path>) -> Option<&Removal> {
        let path = path.as_ref();
        self.entries
            .iter()
            .find(|entry| entry.path.as_path() == path)
            .map(|entry| &entry.removal)
    }

    pub fn removed(&self) -> impl Iterator<Item = &Utf8Path> {
        self.with_removal(|removal| matches!(removal, Removal::Removed))
    }

    pub fn failed(&self) -> impl Iterator<Item = &Utf8Path> {
        self.with_removal(|removal| matches!(removal, Removal::Failed { .. }))
    }

    fn with_removal(&self, pred: impl Fn(&Removal) -> bool) -> impl Iterator<Item = &Utf8Path> {
        self.entries
            .iter()
            .filter(move |entry| pred(&entry.removal))
            .map(|entry| entry.path.as_path())
    }
}

/// Remove all configured targets from the project root.
///
/// The process working directory is switched to the project root for the duration of the run,
/// and restored on every exit path. If the caller's working directory cannot be read, e.g.
/// because it was deleted, there is nothing to restore and the run goes on. Missing targets are
/// skipped silently. Failures to remove are reported as warnings and do not stop the run.
/// Only failing to enter the project root is an error.
#[tracing::instrument(skip_all, level = "debug")]
pub fn clean(config: &Config) -> Result<CleanReport> {
    let root = config.root();
    let ui = config.ui();

    let cwd = WorkingDirGuard::enter(root.as_std_path())
        .with_context(|| format!("failed to enter project root `{root}`"))?;
    match cwd.origin() {
        Some(origin) => debug!(origin = %origin.display(), "cleaning `{root}`"),
        None => debug!("cleaning `{root}` from an unknown working directory"),
    }

    let mut report = CleanReport::new(root);

    for target in config.targets() {
        let paths = match target.expand() {
            Ok(paths) => paths,
            Err(err) => {
                let err = err.context(format!("failed to look up `{target}`"));
                warn!("{err:?}");
                ui.warn_anyhow(&err);
                report.entries.push(CleanEntry {
                    path: target.to_string().into(),
                    removal: Removal::Failed {
                        error: format!("{err:#}"),
                    },
                });
                continue;
            }
        };

        if paths.is_empty() {
            trace!("`{target}` matched nothing");
        }

        for path in paths {
            let removal = remove(&path, config.dry_run());

            match (&removal, ui.output_format()) {
                (Removal::Failed { error }, _) => {
                    warn!("{error}");
                    ui.warn(error);
                }
                (Removal::Removed, OutputFormat::Text) => {
                    ui.verbose(Status::new("Removed", path.as_str()));
                }
                (Removal::WouldRemove, OutputFormat::Text) => {
                    ui.print(Status::with_color("Dry-run", "yellow", path.as_str()));
                }
                (Removal::Missing, _) => trace!("`{path}` does not exist"),
                _ => {}
            }

            report.entries.push(CleanEntry { path, removal });
        }
    }

    if ui.output_format() == OutputFormat::Json {
        ui.print(MachineMessage(&report));
    }

    Ok(report)
}

fn remove(path: &Utf8Path, dry_run: bool) -> Removal {
    match symlinked_ancestor(path) {
        Ok(None) => {}
        Ok(Some(link)) => {
            return Removal::Failed {
                error: format!("refusing to remove `{path}`, because `{link}` is a symlink"),
            };
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Removal::Missing,
        Err(err) => {
            return Removal::Failed {
                error: format!("failed to inspect `{path}`: {err}"),
            };
        }
    }

    let metadata = match path.symlink_metadata() {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Removal::Missing,
        Err(err) => {
            return Removal::Failed {
                error: format!("failed to inspect `{path}`: {err}"),
            };
        }
    };

    if dry_run {
        return Removal::WouldRemove;
    }

    // Symlinks are unlinked, never followed.
    let result = if metadata.is_dir() {
        fsx::remove_dir_all(path)
    } else {
        fsx::remove_file(path)
    };

    match result {
        Ok(()) => {
            debug!("removed `{path}`");
            Removal::Removed
        }
        // Someone else was faster.
        Err(err)
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|err| err.kind() == io::ErrorKind::NotFound) =>
        {
            Removal::Missing
        }
        Err(err) => Removal::Failed {
            error: format!("{err:#}"),
        },
    }
}

/// The first directory above `path`, within the project root, which is a symlink.
///
/// Removing `docs/_build` through a symlinked `docs` would delete files outside the root.
fn symlinked_ancestor(path: &Utf8Path) -> io::Result<Option<&Utf8Path>> {
    for ancestor in path.ancestors().skip(1) {
        if matches!(ancestor.as_str(), "" | ".") {
            continue;
        }
        if ancestor.symlink_metadata()?.is_symlink() {
            return Ok(Some(ancestor));
        }
    }
    Ok(None)
}
