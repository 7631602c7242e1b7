#![deny(missing_docs)]

//! CLI arguments datastructures.

use std::path::PathBuf;

use clap::Parser;

use wsclean::core::PackageName;
use wsclean::{WSCLEAN_INSTALL_DIR_ENV, WSCLEAN_PACKAGE_ENV};
use wsclean_ui::OutputFormat;
use wsclean_ui::args::VerbositySpec;

/// Remove generated build artifacts from the project root.
#[derive(Parser, Clone, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Removes `build`, `dist` and the `*.egg-info` directory from the project root. \
    The project root is the parent of the directory wsclean is installed in, regardless of \
    the directory it is invoked from. Missing artifacts are not an error."
)]
pub struct Args {
    /// Directory wsclean is installed in, instead of the detected one.
    #[arg(long, env = WSCLEAN_INSTALL_DIR_ENV, value_name = "DIRECTORY")]
    pub install_dir: Option<PathBuf>,

    /// Package name used to find the `<package>.egg-info` directory.
    #[arg(short, long, env = WSCLEAN_PACKAGE_ENV, value_name = "NAME")]
    pub package: Option<PackageName>,

    /// Report what would be removed without removing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print machine-readable output in NDJSON format.
    #[arg(long)]
    pub json: bool,

    /// Logging verbosity.
    #[command(flatten)]
    pub verbose: VerbositySpec,
}

impl Args {
    /// Construct [`OutputFormat`] value from these arguments.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::default()
        }
    }
}
