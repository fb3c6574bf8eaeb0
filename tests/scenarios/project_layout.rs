//! Scenario: Release build of a realistic project root
//!
//! Journey: project with setup.py, an entry point, a virtualenv and a
//! pyseal.toml, built with default settings.
//!
//! Success Criteria:
//! - Only top-level packages are compiled; the virtualenv is not
//! - Allow-listed files, the config file and the virtualenv survive

use crate::common::*;

use pyseal::{BuildOptions, BuildPipeline, Config, LocalFs, ReleaseMode, SealError};

/// SCENARIO: default settings protect venvs, entry points and the descriptor
#[test]
fn scenario_default_settings_release_build() {
    let env = TestEnv::builder()
        .with_files(PROJECT_WITH_VENV)
        .with_file("pyseal.toml", "[build]\nexclude_dirs = [\".venv\", \"venv\"]\n")
        .build();

    let (config, warnings) = pyseal::config::load(None, &env.root()).unwrap();
    assert!(warnings.is_empty());

    let pipeline = BuildPipeline::new(
        config.to_build_options(env.root()),
        FakeCython::new().with_intermediates(),
        LocalFs::new(),
    );
    let outcome = pipeline.run(ReleaseMode::Release).unwrap();

    assert_eq!(pipeline.compiler().calls(), vec!["app.core", "app.util.helpers"]);
    let report = outcome.report.unwrap();
    assert_eq!(
        report.summary(),
        "4 files removed, preserved: __init__.py/__main__.py/setup.py"
    );
    assert_eq!(
        env.files(),
        vec![
            ".venv/lib/site.py",
            "app/__init__.py",
            "app/__main__.py",
            "app/core.so",
            "app/util/helpers.so",
            "pyseal.toml",
            "setup.py",
            "venv/lib/cext.c",
        ]
    );
}

/// SCENARIO: a root with no package markers refuses to build
#[test]
fn scenario_no_packages_refuses_release() {
    let env = TestEnv::builder()
        .with_file("scripts/tool.py", "print('hi')\n")
        .build();

    let pipeline = BuildPipeline::new(
        Config::default().to_build_options(env.root()),
        FakeCython::new(),
        LocalFs::new(),
    );

    let err = pipeline.run(ReleaseMode::Release).unwrap_err();
    assert!(matches!(err, SealError::NoPackages { .. }));
    assert!(env.path("scripts/tool.py").exists());
}

/// SCENARIO: explicit packages skip auto-detection
#[test]
fn scenario_explicit_package_without_marker() {
    let env = TestEnv::builder()
        .with_file("scripts/tool.py", "print('hi')\n")
        .build();

    let options = BuildOptions::new(env.root()).with_packages(["scripts"]);
    let pipeline = BuildPipeline::new(options, FakeCython::new(), LocalFs::new());

    let plan = pipeline.plan().unwrap();
    let names: Vec<_> = plan.extensions.iter().map(|e| e.name().to_string()).collect();
    assert_eq!(names, vec!["scripts.tool"]);
}
