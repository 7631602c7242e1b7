use assert_fs::TempDir;
use assert_fs::prelude::*;
use indoc::indoc;
use predicates::prelude::*;

use wsclean_test_support::command::WsClean;
use wsclean_test_support::project_builder::{ProjectBuilder, install_dir};

#[test]
fn simple() {
    let t = TempDir::new().unwrap();
    let project = ProjectBuilder::start().name("st1-sqlalchemy").with_artifacts();
    project.build(&t);
    t.child("build").assert(predicate::path::is_dir());

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .success()
        .stdout_eq("");

    t.child("build").assert(predicate::path::missing());
    t.child("dist").assert(predicate::path::missing());
    t.child("st1_sqlalchemy.egg-info")
        .assert(predicate::path::missing());
    t.child("setup.py").assert(predicate::path::is_file());
    t.child("scripts").assert(predicate::path::is_dir());
}

#[test]
fn idempotent() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start().with_artifacts().build(&t);

    for _ in 0..2 {
        WsClean::quick_snapbox()
            .arg("--install-dir")
            .arg(install_dir(&t).path())
            .current_dir(&t)
            .assert()
            .success()
            .stdout_eq("");

        t.child("build").assert(predicate::path::missing());
        t.child("dist").assert(predicate::path::missing());
    }
}

#[test]
fn only_build_exists() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .src("build/lib/x.py", "")
        .build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .success()
        .stdout_eq("");

    t.child("build").assert(predicate::path::missing());
    t.child("dist").assert(predicate::path::missing());
}

#[test]
fn nothing_to_clean() {
    let t = TempDir::new().unwrap();
    let project = ProjectBuilder::start();
    project.build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .success()
        .stdout_eq("");

    t.child("setup.py")
        .assert(predicate::str::diff(project.render_setup_py()));
    t.child("scripts").assert(predicate::path::is_dir());
}

#[test]
fn root_is_not_working_directory() {
    let t = TempDir::new().unwrap();
    let proj = t.child("proj");
    ProjectBuilder::start().with_artifacts().build(&proj);
    let caller = t.child("caller");
    caller.child("build/keep.txt").write_str("mine").unwrap();
    caller.child("dist/keep.txt").write_str("mine").unwrap();

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&proj).path())
        .current_dir(&caller)
        .assert()
        .success();

    proj.child("build").assert(predicate::path::missing());
    proj.child("dist").assert(predicate::path::missing());
    caller
        .child("build/keep.txt")
        .assert(predicate::path::is_file());
    caller
        .child("dist/keep.txt")
        .assert(predicate::path::is_file());
}

#[test]
fn install_dir_from_env() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start().with_artifacts().build(&t);

    WsClean::quick_snapbox()
        .env("WSCLEAN_INSTALL_DIR", install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .success();

    t.child("build").assert(predicate::path::missing());
}

#[test]
fn unresolvable_install_dir() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start().with_artifacts().build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(t.child("does/not/exist").path())
        .current_dir(&t)
        .assert()
        .code(1)
        .stdout_matches(indoc! {r#"
            error: failed to resolve project root

            Caused by:
                0: install directory `[..]/does/not/exist` does not exist or is not accessible
                1: No such file or directory (os error 2)
        "#});

    t.child("build").assert(predicate::path::is_dir());
    t.child("dist").assert(predicate::path::is_dir());
}

#[test]
fn install_dir_is_a_file() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start().with_artifacts().build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(t.child("setup.py").path())
        .current_dir(&t)
        .assert()
        .failure()
        .stdout_matches(indoc! {r#"
            error: failed to resolve project root

            Caused by:
                install directory `[..]/setup.py` is not a directory
        "#});

    t.child("build").assert(predicate::path::is_dir());
}

#[test]
fn egg_info_of_named_package() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .name("st1-sqlalchemy")
        .with_artifacts()
        .src("vendored.egg-info/PKG-INFO", "")
        .build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .arg("--package")
        .arg("st1-sqlalchemy")
        .current_dir(&t)
        .assert()
        .success();

    t.child("st1_sqlalchemy.egg-info")
        .assert(predicate::path::missing());
    t.child("vendored.egg-info")
        .assert(predicate::path::is_dir());
}

#[test]
fn every_egg_info_without_package_name() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .src("a.egg-info/PKG-INFO", "")
        .src("b.egg-info/PKG-INFO", "")
        .build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .success();

    t.child("a.egg-info").assert(predicate::path::missing());
    t.child("b.egg-info").assert(predicate::path::missing());
}

#[test]
fn empty_package_name() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start().build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .arg("--package=")
        .current_dir(&t)
        .assert()
        .code(2)
        .stderr_matches(indoc! {r#"
            error: invalid value '' for '--package <NAME>': empty string cannot be used as package name
            ...
        "#});
}

#[test]
fn egg_info_of_package_name_with_separators() {
    let t = TempDir::new().unwrap();
    let project = ProjectBuilder::start().name("Foo Bar-baz").with_artifacts();
    project.build(&t);
    t.child("Foo_Bar_baz.egg-info").assert(predicate::path::is_dir());

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .arg("--package")
        .arg("Foo Bar-baz")
        .current_dir(&t)
        .assert()
        .success();

    t.child(project.egg_info_dir())
        .assert(predicate::path::missing());
}

#[test]
fn manifest_extras() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .with_artifacts()
        .manifest(indoc! {r#"
            [clean]
            extra = ["htmlcov", ".pytest_cache"]
        "#})
        .src("htmlcov/index.html", "")
        .src(".pytest_cache/v/cache/lastfailed", "{}")
        .build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .success()
        .stdout_eq("");

    t.child("htmlcov").assert(predicate::path::missing());
    t.child(".pytest_cache").assert(predicate::path::missing());
    t.child("wsclean.toml").assert(predicate::path::is_file());
}

#[test]
fn manifest_escaping_root() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .with_artifacts()
        .manifest(indoc! {r#"
            [clean]
            extra = ["../elsewhere"]
        "#})
        .build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .failure()
        .stdout_matches(indoc! {r#"
            error: failed to parse manifest at: [..]/wsclean.toml

            Caused by:
                clean target `../elsewhere` must not point outside of the project root
        "#});

    t.child("build").assert(predicate::path::is_dir());
}

#[test]
fn dry_run() {
    let t = TempDir::new().unwrap();
    let project = ProjectBuilder::start().name("hello").with_artifacts();
    project.build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .arg("--dry-run")
        .current_dir(&t)
        .assert()
        .success()
        .stdout_eq(indoc! {r#"
                 Dry-run build
                 Dry-run dist
                 Dry-run hello.egg-info
        "#});

    t.child("build").assert(predicate::path::is_dir());
    t.child("dist").assert(predicate::path::is_dir());
    t.child("hello.egg-info").assert(predicate::path::is_dir());
}

#[test]
fn verbose_lists_removed_paths() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .src("build/lib/x.py", "")
        .build(&t);

    WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .arg("-v")
        .current_dir(&t)
        .assert()
        .success()
        .stdout_eq(indoc! {r#"
                 Removed build
        "#});
}

#[test]
fn json_report() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .src("build/lib/x.py", "")
        .build(&t);

    let output = WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .arg("--json")
        .current_dir(&t)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        report["entries"],
        serde_json::json!([
            {"path": "build", "status": "removed"},
            {"path": "dist", "status": "missing"},
        ])
    );
    assert!(report["root"].as_str().is_some());
}

#[cfg(unix)]
#[test]
fn locked_artifact_is_a_warning() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let t = TempDir::new().unwrap();
    ProjectBuilder::start()
        .src("build/locked/file", "")
        .src("dist/x.tar.gz", "")
        .build(&t);

    let locked = t.child("build/locked");
    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o555)).unwrap();

    let output = WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(&t)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o755)).unwrap();

    t.child("dist").assert(predicate::path::missing());
    // Permission bits do not apply to root, in which case everything is removed.
    if locked.path().exists() {
        let stdout = String::from_utf8(output).unwrap();
        assert!(stdout.starts_with("warn: failed to remove directory `build`"));
    }
}

#[cfg(unix)]
#[test]
fn invoked_from_inside_build() {
    let t = TempDir::new().unwrap();
    ProjectBuilder::start().with_artifacts().build(&t);

    let output = WsClean::quick_snapbox()
        .arg("--install-dir")
        .arg(install_dir(&t).path())
        .current_dir(t.child("build/lib"))
        .assert()
        .success()
        .stdout_eq("")
        .get_output()
        .stderr
        .clone();

    t.child("build").assert(predicate::path::missing());
    t.child("dist").assert(predicate::path::missing());
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("failed to change working directory to"));
}
