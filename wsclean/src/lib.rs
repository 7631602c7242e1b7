//! Removes generated build artifacts from a project root located relative to the tool itself.
//!
//! The entry point for library users is [`ops::clean`], driven by a [`core::Config`].

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![warn(rust_2018_idioms)]

pub mod core;
mod internal;
pub mod ops;

/// Environment variable overriding the directory the tool is installed in.
pub const WSCLEAN_INSTALL_DIR_ENV: &str = "WSCLEAN_INSTALL_DIR";
/// Environment variable with the package name used to derive the egg-info directory.
pub const WSCLEAN_PACKAGE_ENV: &str = "WSCLEAN_PACKAGE";
/// Environment variable holding the tracing filter directive.
pub const WSCLEAN_LOG_ENV: &str = "WSCLEAN_LOG";
/// File name of the optional project manifest placed at the project root.
pub const MANIFEST_FILE_NAME: &str = "wsclean.toml";
