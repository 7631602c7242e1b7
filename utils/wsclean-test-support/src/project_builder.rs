use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use camino::Utf8PathBuf;
use indoc::formatdoc;
use wsclean::core::PackageName;

/// Lays out a setuptools project with a `scripts/` directory for the cleaner to live in.
pub struct ProjectBuilder {
    name: String,
    src: HashMap<Utf8PathBuf, Vec<u8>>,
    manifest: Option<String>,
}

impl ProjectBuilder {
    pub fn start() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self {
            name: format!("pkg{n}"),
            src: HashMap::from_iter([(
                Utf8PathBuf::from(format!("pkg{n}/__init__.py")),
                Vec::new(),
            )]),
            manifest: None,
        }
    }

    pub fn name(mut self, name: impl ToString) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn src(mut self, path: impl Into<Utf8PathBuf>, source: impl ToString) -> Self {
        self.src.insert(path.into(), source.to_string().into_bytes());
        self
    }

    /// Add a `wsclean.toml` manifest with the given contents.
    pub fn manifest(mut self, manifest: impl ToString) -> Self {
        self.manifest = Some(manifest.to_string());
        self
    }

    /// Pretend `python setup.py sdist bdist_wheel` has been run.
    pub fn with_artifacts(self) -> Self {
        let name = self.name.clone();
        let egg_info = self.egg_info_dir();
        self.src(format!("build/lib/{name}/__init__.py"), "")
            .src(format!("dist/{name}-0.0.1.tar.gz"), "sdist")
            .src(format!("dist/{name}-0.0.1-py3-none-any.whl"), "wheel")
            .src(format!("{egg_info}/PKG-INFO"), format!("Name: {name}\n"))
    }

    /// Name of the egg-info directory setuptools would create for this project.
    pub fn egg_info_dir(&self) -> String {
        PackageName::new(&self.name)
            .expect("project name must be a valid package name")
            .egg_info_dir()
    }

    pub fn render_setup_py(&self) -> String {
        formatdoc! {r#"
            from setuptools import find_packages, setup

            setup(
                name='{name}',
                version='0.0.1',
                packages=find_packages(exclude=['tests.*', 'tests']),
            )
        "#, name = self.name}
    }

    pub fn build(&self, t: &impl PathChild) {
        t.child("setup.py")
            .write_str(&self.render_setup_py())
            .unwrap();
        t.child("scripts").create_dir_all().unwrap();

        if let Some(manifest) = &self.manifest {
            t.child("wsclean.toml").write_str(manifest).unwrap();
        }

        for (path, source) in &self.src {
            t.child(path).write_binary(source).unwrap();
        }
    }
}

/// The directory a project built with [`ProjectBuilder`] expects the cleaner to be installed in.
pub fn install_dir(t: &impl PathChild) -> ChildPath {
    t.child("scripts")
}
