//! Core datastructures describing a single cleaning run.
//!
//! For the operation itself, see [`crate::ops`] module.

pub use config::{Config, ConfigBuilder};
pub use errors::RootResolutionError;
pub use install_location::InstallLocation;
pub use manifest::{CleanSection, Manifest};
pub use package_name::PackageName;
pub use target::CleanTarget;

mod config;
mod errors;
mod install_location;
mod manifest;
mod package_name;
mod target;
