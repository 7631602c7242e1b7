use std::path::{Component, Path, PathBuf};
use std::{env, fs, io};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, trace};
use which::which_in;

use crate::core::RootResolutionError;

/// Upper bound on symlink hops when following the executable, as `SYMLOOP_MAX` on Linux.
const MAX_LINK_HOPS: usize = 40;

/// The directory wsclean is installed in, and the project root it implies.
///
/// The project root is always the parent of the install directory, e.g. a tool installed at
/// `/proj/scripts/wsclean` cleans `/proj`, no matter where it is invoked from.
///
/// Both paths are absolute and lexically normalized, but symlinked directories are kept as they
/// are: if `/proj/scripts` links to a shared `/opt/tools/scripts`, the root is still `/proj`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstallLocation {
    dir: Utf8PathBuf,
    root: Utf8PathBuf,
}

impl InstallLocation {
    /// Use `dir` as the install directory.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, RootResolutionError> {
        return inner(dir.as_ref());

        fn inner(dir: &Path) -> Result<InstallLocation, RootResolutionError> {
            fn unresolvable(path: &Path) -> impl FnOnce(io::Error) -> RootResolutionError {
                let path = path.to_path_buf();
                move |source| RootResolutionError::Unresolvable { path, source }
            }

            let absolute = absolutize(dir).map_err(unresolvable(dir))?;

            // Links are only followed to check what the path points at.
            let metadata = fs::metadata(&absolute).map_err(unresolvable(&absolute))?;
            if !metadata.is_dir() {
                return Err(RootResolutionError::NotADirectory { path: absolute });
            }

            let dir = Utf8PathBuf::from_path_buf(absolute)
                .map_err(|path| RootResolutionError::NonUtf8 { path })?;

            let root = dir
                .parent()
                .ok_or_else(|| RootResolutionError::NoParent {
                    path: dir.clone().into_std_path_buf(),
                })?
                .to_path_buf();

            Ok(InstallLocation { dir, root })
        }
    }

    /// Find the install directory.
    ///
    /// An explicit `dir_override` is used as-is, and is never silently replaced by a detected
    /// location. Otherwise, the executable is located from `argv[0]`, falling back to
    /// [`env::current_exe`]. If the executable itself is a symlink, e.g. one placed on `PATH`, it
    /// is followed to the real file, and the install directory is that file's directory.
    #[tracing::instrument(level = "debug")]
    pub fn resolve(dir_override: Option<&Path>) -> Result<Self, RootResolutionError> {
        if let Some(dir) = dir_override {
            debug!("using install directory override");
            return Self::new(dir);
        }

        let exe = from_argv()
            .or_else(from_current_exe)
            .ok_or(RootResolutionError::Undetectable)?;
        let exe = follow_exe_links(exe);
        trace!(exe = %exe.display());

        let dir = exe.parent().ok_or(RootResolutionError::Undetectable)?;
        Self::new(dir)
    }

    /// The directory the tool is installed in.
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Parent of the install directory.
    pub fn project_root(&self) -> &Utf8Path {
        &self.root
    }
}

fn from_argv() -> Option<PathBuf> {
    // A single-component `argv[0]` comes from a `PATH` lookup, anything else is a path relative
    // to the working directory or an absolute one. `which_in` handles both cases and keeps
    // symlinked directories intact.
    let argv0 = env::args_os().next()?;
    let cwd = env::current_dir().ok()?;
    which_in(argv0, env::var_os("PATH"), cwd)
        .inspect_err(|err| debug!("argv[0] unresolvable: {err}"))
        .ok()
}

fn from_current_exe() -> Option<PathBuf> {
    // On Linux this reads `/proc/self/exe`, which is already fully resolved, and it depends on
    // `/proc` being mounted, which is not the case in some containers and chroots.
    env::current_exe()
        .map(|exe| dunce::simplified(&exe).to_path_buf())
        .inspect_err(|err| debug!("current_exe unavailable: {err}"))
        .ok()
}

/// Follow symlinks in the last path component only.
fn follow_exe_links(mut exe: PathBuf) -> PathBuf {
    for _ in 0..MAX_LINK_HOPS {
        let Ok(target) = fs::read_link(&exe) else {
            return exe;
        };
        trace!("`{}` links to `{}`", exe.display(), target.display());
        exe = match exe.parent() {
            Some(parent) => normalize_lexically(&parent.join(target)),
            None => target,
        };
    }
    debug!("too many symlinks while locating the executable, stopping at `{}`", exe.display());
    exe
}

fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(normalize_lexically(dunce::simplified(&path)))
}

/// Resolve `.` and `..` without touching the file system, so symlinks are not followed.
///
/// `..` above the file system root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                }
            }
            component => out.push(component),
        }
    }
    out
}
