//! Scenario: A module fails to compile during a release build
//!
//! Journey: maintainer ships with a syntax error in a nested module.
//!
//! Success Criteria:
//! - The build fails and names the module and its source
//! - No source is deleted, even though release mode was requested
//! - No removal report exists

use crate::common::*;

use pyseal::{AllowList, BuildOptions, BuildPipeline, LocalFs, ReleaseMode, SealError};

/// SCENARIO: failure on sub/b.py leaves the tree intact
#[test]
fn scenario_failed_compile_deletes_nothing() {
    let env = TestEnv::builder().with_files(SIMPLE_PACKAGE).build();
    let before = env.files();

    let options = BuildOptions::new(env.root()).with_keep(AllowList::new(["__init__.py"]));
    let pipeline = BuildPipeline::new(
        options,
        FakeCython::failing_on("pkg.sub.b"),
        LocalFs::new(),
    );

    let err = pipeline.run(ReleaseMode::Release).unwrap_err();

    match &err {
        SealError::Compile {
            module,
            source_path,
            message,
        } => {
            assert_eq!(module, "pkg.sub.b");
            assert_eq!(source_path, std::path::Path::new("pkg/sub/b.py"));
            assert!(message.contains("invalid syntax"), "got: {}", message);
        }
        other => panic!("expected compile error, got {:?}", other),
    }

    for file in &before {
        assert!(env.path(file).exists(), "{} was deleted", file);
    }
}

/// SCENARIO: the failing module stops the run; later modules are not submitted
#[test]
fn scenario_failed_compile_stops_at_first_failure() {
    let env = TestEnv::builder()
        .with_files(SIMPLE_PACKAGE)
        .with_file("pkg/z.py", "")
        .build();

    let pipeline = BuildPipeline::new(
        BuildOptions::new(env.root()),
        FakeCython::failing_on("pkg.a"),
        LocalFs::new(),
    );

    assert!(pipeline.run(ReleaseMode::Release).is_err());
    assert_eq!(pipeline.compiler().calls(), vec!["pkg.a"]);
    assert!(env.path("pkg/z.py").exists());
}
