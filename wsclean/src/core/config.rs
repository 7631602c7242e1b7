use anyhow::Result;
use camino::Utf8Path;
use tracing::trace;
use wsclean_ui::{OutputFormat, Ui, Verbosity};

use crate::core::{CleanTarget, InstallLocation, Manifest, PackageName};

/// Everything a single cleaning run needs to know, resolved up front.
#[derive(Debug)]
pub struct Config {
    install_location: InstallLocation,
    targets: Vec<CleanTarget>,
    dry_run: bool,
    ui: Ui,
}

impl Config {
    pub fn builder(install_location: InstallLocation) -> ConfigBuilder {
        ConfigBuilder::new(install_location)
    }

    /// The project root all targets are relative to.
    pub fn root(&self) -> &Utf8Path {
        self.install_location.project_root()
    }

    /// Targets to remove, in order.
    pub fn targets(&self) -> &[CleanTarget] {
        &self.targets
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }
}

#[derive(Debug)]
pub struct ConfigBuilder {
    install_location: InstallLocation,
    package_name: Option<PackageName>,
    dry_run: bool,
    ui_verbosity: Verbosity,
    ui_output_format: OutputFormat,
}

impl ConfigBuilder {
    fn new(install_location: InstallLocation) -> Self {
        Self {
            install_location,
            package_name: None,
            dry_run: false,
            ui_verbosity: Verbosity::Normal,
            ui_output_format: OutputFormat::Text,
        }
    }

    /// Package name used for the egg-info target. Takes precedence over the project manifest.
    pub fn package_name(mut self, package_name: Option<PackageName>) -> Self {
        self.package_name = package_name;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn ui_verbosity(mut self, ui_verbosity: Verbosity) -> Self {
        self.ui_verbosity = ui_verbosity;
        self
    }

    pub fn ui_output_format(mut self, ui_output_format: OutputFormat) -> Self {
        self.ui_output_format = ui_output_format;
        self
    }

    /// Read the project manifest, if any, and finalize the target list.
    pub fn build(self) -> Result<Config> {
        let manifest = Manifest::read(self.install_location.project_root())?.unwrap_or_default();

        let package_name = self.package_name.or(manifest.clean.package.clone());
        let mut targets = CleanTarget::defaults(package_name);
        targets.extend(manifest.extra_targets()?);

        if tracing::enabled!(tracing::Level::TRACE) {
            trace!(root = %self.install_location.project_root());
            for target in &targets {
                trace!("target: {target}");
            }
        }

        Ok(Config {
            install_location: self.install_location,
            targets,
            dry_run: self.dry_run,
            ui: Ui::new(self.ui_verbosity, self.ui_output_format),
        })
    }
}
