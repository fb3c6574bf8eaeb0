//! Build Use Case
//!
//! The whole source-protection pipeline for one invocation:
//! discover, compile, and (in release mode) strip.

mod options;
mod pipeline;
mod result;

pub use options::BuildOptions;
pub use pipeline::BuildPipeline;
pub use result::{BuildOutcome, BuildPlan};
