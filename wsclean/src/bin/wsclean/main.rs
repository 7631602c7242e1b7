use std::process::ExitCode;

use anyhow::{Context, Error, Result};
use clap::Parser;
use tracing::debug;
use wsclean::WSCLEAN_LOG_ENV;
use wsclean::core::{Config, InstallLocation};
use wsclean::ops;
use wsclean_ui::Ui;
use wsclean_ui::args::VerbositySpec;

use crate::args::Args;

mod args;

fn main() -> ExitCode {
    let args = Args::parse();

    // Pre-create Ui used in logging and error reporting, because we will move `args` to `cli_main`.
    let ui = Ui::new(args.verbose.clone().into(), args.output_format());

    init_logging(&args.verbose, &ui);

    match cli_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => exit_with_error(err, &ui),
    }
}

fn init_logging(verbose: &VerbositySpec, ui: &Ui) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::time::Uptime;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(ui.has_colors_enabled_stderr())
        .with_timer(Uptime::default())
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(verbose.as_trace().into())
                .with_env_var(WSCLEAN_LOG_ENV)
                .from_env_lossy(),
        )
        .init();
}

fn exit_with_error(err: Error, ui: &Ui) -> ExitCode {
    debug!("exit_with_error; err={:?}", err);
    ui.anyhow(&err);
    ExitCode::FAILURE
}

fn cli_main(args: Args) -> Result<()> {
    let output_format = args.output_format();

    let install_location = InstallLocation::resolve(args.install_dir.as_deref())
        .context("failed to resolve project root")?;

    let config = Config::builder(install_location)
        .package_name(args.package)
        .dry_run(args.dry_run)
        .ui_verbosity(args.verbose.into())
        .ui_output_format(output_format)
        .build()?;

    ops::clean(&config)?;
    Ok(())
}
