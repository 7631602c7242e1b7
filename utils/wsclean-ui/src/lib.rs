//! Standard output rendering for `wsclean`.
//!
//! [`Ui`] filters [`Message`]s by [`Verbosity`] and renders them as text or JSON lines.
//! The message kinds live in [`components`], the shared [`clap`] verbosity flags in [`args`].

#![deny(clippy::dbg_macro)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![warn(rust_2018_idioms)]

use clap::ValueEnum;

pub use message::*;
pub use verbosity::*;

use crate::components::TypedMessage;

pub mod args;
pub mod components;
mod message;
mod verbosity;

/// The requested format of output (either textual or JSON).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Render human-readable messages.
    #[default]
    Text,
    /// Render machine-parseable JSON-NL messages.
    Json,
}

/// The only way `wsclean` talks to the user on standard output.
///
/// Decides, from verbosity and output format, whether a message is shown and how it is rendered.
/// Diagnostics for developers go through `tracing` on standard error instead.
#[derive(Clone, Debug)]
pub struct Ui {
    verbosity: Verbosity,
    output_format: OutputFormat,
}

impl Ui {
    /// Create a new [`Ui`] instance configured with the given verbosity and output format.
    pub fn new(verbosity: Verbosity, output_format: OutputFormat) -> Self {
        Self {
            verbosity,
            output_format,
        }
    }

    /// Get the output format of this [`Ui`] instance.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Print at [`Verbosity::Normal`] and above.
    pub fn print(&self, message: impl Message) {
        self.print_at(Verbosity::Normal, &message);
    }

    /// Print only at [`Verbosity::Verbose`].
    pub fn verbose(&self, message: impl Message) {
        self.print_at(Verbosity::Verbose, &message);
    }

    /// Print a warning, hidden in [`Verbosity::NoWarnings`] and [`Verbosity::Quiet`] modes.
    pub fn warn(&self, message: impl AsRef<str>) {
        self.print_at(
            Verbosity::Normal,
            &TypedMessage::styled("warn", "yellow", message.as_ref()),
        );
    }

    /// Print an error, hidden only in [`Verbosity::Quiet`] mode.
    pub fn error(&self, message: impl AsRef<str>) {
        self.print_at(
            Verbosity::NoWarnings,
            &TypedMessage::styled("error", "red", message.as_ref()),
        );
    }

    /// Print an [`anyhow::Error`] with its cause chain as an error.
    pub fn anyhow(&self, error: &anyhow::Error) {
        // NOTE: Some errors like to add trailing newlines, which collide with `indoc` in tests.
        self.error(format!("{error:?}").trim())
    }

    /// Print an [`anyhow::Error`] with its cause chain as a warning.
    pub fn warn_anyhow(&self, error: &anyhow::Error) {
        self.warn(format!("{error:?}").trim())
    }

    /// Whether `tracing` output on standard error may use ANSI colours.
    pub fn has_colors_enabled_stderr(&self) -> bool {
        console::colors_enabled_stderr()
    }

    fn print_at(&self, min: Verbosity, message: &impl Message) {
        if self.verbosity < min {
            return;
        }
        let line = match self.output_format {
            OutputFormat::Text => message.text(),
            OutputFormat::Json => message.json(),
        };
        if let Some(line) = line {
            println!("{line}");
        }
    }
}
