use std::fmt;

use anyhow::{Context, Result, bail, ensure};
use camino::{Utf8Component, Utf8PathBuf};

use crate::core::PackageName;
use crate::internal::fsx::PathBufUtf8Ext;

const BUILD_DIR_NAME: &str = "build";
const DIST_DIR_NAME: &str = "dist";
const EGG_INFO_GLOB: &str = "*.egg-info";

/// A generated entry under the project root which is subject to removal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CleanTarget {
    Build,
    Dist,
    /// `<package>.egg-info`, or every `*.egg-info` directory if the package name is unknown.
    EggInfo(Option<PackageName>),
    /// Additional root-relative path listed in the project manifest.
    Extra(Utf8PathBuf),
}

impl CleanTarget {
    /// The fixed target list, in removal order.
    pub fn defaults(package: Option<PackageName>) -> Vec<Self> {
        vec![Self::Build, Self::Dist, Self::EggInfo(package)]
    }

    /// Create an [`CleanTarget::Extra`] target, making sure it cannot reach outside the root.
    pub fn extra(path: impl Into<Utf8PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure!(!path.as_str().trim().is_empty(), "clean target path cannot be empty");
        for component in path.components() {
            match component {
                Utf8Component::Normal(_) | Utf8Component::CurDir => {}
                Utf8Component::ParentDir => {
                    bail!("clean target `{path}` must not point outside of the project root")
                }
                Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                    bail!("clean target `{path}` must be relative to the project root")
                }
            }
        }
        ensure!(
            path.components().any(|c| matches!(c, Utf8Component::Normal(_))),
            "clean target `{path}` must not point at the project root itself"
        );
        Ok(Self::Extra(path))
    }

    /// Resolve this target to concrete paths, relative to the current working directory.
    ///
    /// Must be called from inside the project root. Only the egg-info wildcard can expand to
    /// zero or many entries, every other target always yields exactly one path.
    pub fn expand(&self) -> Result<Vec<Utf8PathBuf>> {
        match self {
            Self::Build => Ok(vec![BUILD_DIR_NAME.into()]),
            Self::Dist => Ok(vec![DIST_DIR_NAME.into()]),
            Self::EggInfo(Some(package)) => Ok(vec![package.egg_info_dir().into()]),
            Self::EggInfo(None) => glob_dirs(EGG_INFO_GLOB),
            Self::Extra(path) => Ok(vec![path.clone()]),
        }
    }
}

fn glob_dirs(pattern: &str) -> Result<Vec<Utf8PathBuf>> {
    let mut found = Vec::new();
    for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern `{pattern}`"))? {
        let path = entry?;
        // Mirror the named case: a symlink or file called `x.egg-info` is not setuptools metadata.
        if path.symlink_metadata()?.is_dir() {
            found.push(path.try_into_utf8()?);
        }
    }
    Ok(found)
}

impl fmt::Display for CleanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => f.write_str(BUILD_DIR_NAME),
            Self::Dist => f.write_str(DIST_DIR_NAME),
            Self::EggInfo(Some(package)) => f.write_str(&package.egg_info_dir()),
            Self::EggInfo(None) => f.write_str(EGG_INFO_GLOB),
            Self::Extra(path) => f.write_str(path.as_str()),
        }
    }
}
