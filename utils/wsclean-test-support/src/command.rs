use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use snapbox::cmd::Command as SnapboxCommand;

use crate::cargo::cargo_bin;

/// Variables which must not leak from the developer's shell into tests.
const ISOLATED_ENV: &[&str] = &[
    "WSCLEAN_INSTALL_DIR",
    "WSCLEAN_PACKAGE",
    "WSCLEAN_UI_VERBOSITY",
];

pub struct WsClean {
    log: OsString,
    bin: PathBuf,
}

impl WsClean {
    pub fn new() -> Self {
        Self {
            log: "wsclean=trace".into(),
            bin: cargo_bin("wsclean"),
        }
    }

    /// Run a copy of the binary placed at `path`, to exercise self-location.
    pub fn installed_at(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        // `fs::copy` carries over permission bits, so the copy stays executable.
        fs::copy(cargo_bin("wsclean"), path).unwrap();
        Self {
            bin: path.to_path_buf(),
            ..Self::new()
        }
    }

    /// Invoke through another path to the same binary, e.g. a symlink to an installed copy.
    pub fn at(self, path: impl AsRef<Path>) -> Self {
        Self {
            bin: path.as_ref().to_path_buf(),
            ..self
        }
    }

    pub fn quick_snapbox() -> SnapboxCommand {
        Self::new().snapbox()
    }

    pub fn snapbox(self) -> SnapboxCommand {
        SnapboxCommand::from_std(self.std())
    }

    pub fn std(self) -> StdCommand {
        let mut cmd = StdCommand::new(self.bin);
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("WSCLEAN_LOG", self.log);
        cmd
    }
}

impl Default for WsClean {
    fn default() -> Self {
        Self::new()
    }
}
