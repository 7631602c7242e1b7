//! This module provides reusable [`clap`] arguments for common tasks.

pub use verbosity::*;

mod verbosity;
