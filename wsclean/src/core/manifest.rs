use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use tracing::debug;

use crate::MANIFEST_FILE_NAME;
use crate::core::{CleanTarget, PackageName};
use crate::internal::fsx;

/// Optional `wsclean.toml` file living in the project root.
///
/// ```toml
/// [clean]
/// package = "st1-sqlalchemy"
/// extra = ["htmlcov", ".pytest_cache"]
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub clean: CleanSection,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanSection {
    /// Package name used to derive the egg-info directory name.
    pub package: Option<PackageName>,
    /// Additional root-relative paths to remove after the built-in ones.
    #[serde(default)]
    pub extra: Vec<Utf8PathBuf>,
}

impl Manifest {
    /// Read the manifest from `root`, returning `None` if the project has none.
    #[tracing::instrument(level = "debug")]
    pub fn read(root: &Utf8Path) -> Result<Option<Self>> {
        let path = root.join(MANIFEST_FILE_NAME);
        if !path.is_file() {
            debug!("no manifest at `{path}`");
            return Ok(None);
        }

        let source = fsx::read_to_string(&path)?;
        Self::parse(&source)
            .with_context(|| format!("failed to parse manifest at: {path}"))
            .map(Some)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(source)?;
        manifest.extra_targets()?;
        Ok(manifest)
    }

    /// Validated [`CleanTarget::Extra`] targets listed in `clean.extra`.
    pub fn extra_targets(&self) -> Result<Vec<CleanTarget>> {
        self.clean
            .extra
            .iter()
            .map(|path| CleanTarget::extra(path.clone()))
            .collect()
    }
}
