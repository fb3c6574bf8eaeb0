//! Scenario: Development then release build of a single package
//!
//! Journey: maintainer compiles `pkg` while developing, then ships it.
//!
//! Success Criteria:
//! - Development builds never delete anything
//! - Release builds leave only package markers and compiled modules
//! - A second release build is a no-op

use crate::common::*;

use pyseal::{AllowList, BuildOptions, BuildPipeline, LocalFs, ReleaseMode};

fn pipeline(env: &TestEnv, compiler: FakeCython) -> BuildPipeline<FakeCython, LocalFs> {
    let options = BuildOptions::new(env.root()).with_keep(AllowList::new(["__init__.py"]));
    BuildPipeline::new(options, compiler, LocalFs::new())
}

/// SCENARIO: development build compiles and keeps every source
#[test]
fn scenario_development_build_keeps_sources() {
    let env = TestEnv::builder().with_files(SIMPLE_PACKAGE).build();

    let outcome = pipeline(&env, FakeCython::new())
        .run(ReleaseMode::Development)
        .unwrap();

    assert_eq!(outcome.compiled_count(), 2);
    assert!(outcome.report.is_none());
    assert_eq!(
        env.files(),
        vec![
            "pkg/__init__.py",
            "pkg/a.py",
            "pkg/a.so",
            "pkg/sub/b.py",
            "pkg/sub/b.so",
        ]
    );
}

/// SCENARIO: release build strips sources and reports what it removed
#[test]
fn scenario_release_build_strips_sources() {
    let env = TestEnv::builder().with_files(SIMPLE_PACKAGE).build();

    let outcome = pipeline(&env, FakeCython::new())
        .run(ReleaseMode::Release)
        .unwrap();

    let report = outcome.report.expect("release build should report");
    assert_eq!(report.summary(), "2 files removed, preserved: __init__.py");
    assert_eq!(
        env.files(),
        vec!["pkg/__init__.py", "pkg/a.so", "pkg/sub/b.so"]
    );
}

/// SCENARIO: generated C files are removed along with the sources
#[test]
fn scenario_release_build_removes_intermediates() {
    let env = TestEnv::builder().with_files(SIMPLE_PACKAGE).build();

    let outcome = pipeline(&env, FakeCython::new().with_intermediates())
        .run(ReleaseMode::Release)
        .unwrap();

    assert_eq!(outcome.report.unwrap().removed_count(), 4);
    assert!(!env.files().iter().any(|f| f.ends_with(".c")));
}

/// SCENARIO: running the release build twice changes nothing the second time
#[test]
fn scenario_release_build_is_idempotent() {
    let env = TestEnv::builder().with_files(SIMPLE_PACKAGE).build();

    pipeline(&env, FakeCython::new())
        .run(ReleaseMode::Release)
        .unwrap();
    let after_first = env.files();

    let compiler = FakeCython::new();
    let second = pipeline(&env, compiler).run(ReleaseMode::Release).unwrap();

    assert_eq!(second.compiled_count(), 0);
    assert_eq!(second.report.unwrap().removed_count(), 0);
    assert_eq!(env.files(), after_first);
}

/// SCENARIO: directories emptied by cleanup stay on disk
#[test]
fn scenario_release_build_keeps_empty_directories() {
    let env = TestEnv::builder()
        .with_files(SIMPLE_PACKAGE)
        .with_file("pkg/generated/stale.c", "/* left over */")
        .with_dir("pkg/assets")
        .build();

    pipeline(&env, FakeCython::new())
        .run(ReleaseMode::Release)
        .unwrap();

    assert!(env.path("pkg/generated").is_dir());
    assert!(!env.path("pkg/generated/stale.c").exists());
    assert!(env.path("pkg/assets").is_dir());
}

/// SCENARIO: modules are compiled in component-wise path order
#[test]
fn scenario_compile_order_follows_paths() {
    let env = TestEnv::builder()
        .with_files(SIMPLE_PACKAGE)
        .with_file("pkg/a/z.py", "")
        .with_file("pkg/b.py", "")
        .build();

    let pipeline = pipeline(&env, FakeCython::new());
    pipeline.run(ReleaseMode::Development).unwrap();

    assert_eq!(
        pipeline.compiler().calls(),
        vec!["pkg.a.z", "pkg.a", "pkg.b", "pkg.sub.b"]
    );
}

/// SCENARIO: a source that is a symlink is compiled and the link is removed
#[cfg(unix)]
#[test]
fn scenario_release_build_unlinks_symlinked_sources() {
    let env = TestEnv::builder().with_files(SIMPLE_PACKAGE).build();
    let outside = tempfile::tempdir().unwrap();
    let target = outside.path().join("x.py");
    std::fs::write(&target, "shared = True\n").unwrap();
    std::os::unix::fs::symlink(&target, env.path("pkg/x.py")).unwrap();

    let pipeline = pipeline(&env, FakeCython::new());
    let outcome = pipeline.run(ReleaseMode::Release).unwrap();

    assert!(pipeline.compiler().calls().contains(&"pkg.x".to_string()));
    assert_eq!(outcome.report.unwrap().removed_count(), 3);
    assert!(std::fs::symlink_metadata(env.path("pkg/x.py")).is_err());
    assert!(env.path("pkg/x.so").is_file());
    assert!(target.is_file());
}
