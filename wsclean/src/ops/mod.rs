//! Operations performed on a project, driven by a [`Config`][crate::core::Config].

pub use clean::*;

mod clean;
