use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer};

/// Name of the Python distribution hosted in the project root.
///
/// Only used to name the `<package>.egg-info` metadata directory produced by setuptools.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            bail!("empty string cannot be used as package name");
        }
        Ok(Self(name.to_string()))
    }

    /// Name of the file system entry setuptools uses for this distribution.
    ///
    /// Every run of characters other than ASCII alphanumerics and `.` collapses into a single `_`,
    /// so `st1-sqlalchemy` becomes `st1_sqlalchemy`.
    pub fn to_filename(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut in_run = false;
        for c in self.0.chars() {
            if c.is_ascii_alphanumeric() || c == '.' {
                out.push(c);
                in_run = false;
            } else if !in_run {
                out.push('_');
                in_run = true;
            }
        }
        out
    }

    /// Name of the egg-info directory, e.g. `st1_sqlalchemy.egg-info`.
    pub fn egg_info_dir(&self) -> String {
        format!("{}.egg-info", self.to_filename())
    }
}

impl FromStr for PackageName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PackageName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::new(name).map_err(serde::de::Error::custom)
    }
}
