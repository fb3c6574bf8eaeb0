//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildPipeline` - plan, compile, and release-strip a build root
//! - `CompileUseCase` - drive the compiler over every extension descriptor
//! - `SanitizeUseCase` - delete sources and intermediates after a compile

pub mod build;
pub mod compile;
pub mod sanitize;

pub use build::{BuildOptions, BuildOutcome, BuildPipeline, BuildPlan};
pub use compile::{CompileUseCase, CompiledBuild};
pub use sanitize::{RemovalReport, SanitizeUseCase};
