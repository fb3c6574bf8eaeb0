//! Domain Entities
//!
//! - `SourceModule` - a discovered file, anchored to the build root
//! - `ExtensionDescriptor` - one module the compiler is asked to build
//! - `CompiledArtifact` - what the compiler produced for a descriptor

mod artifact;
mod extension;
mod source_module;

pub use artifact::CompiledArtifact;
pub use extension::ExtensionDescriptor;
pub use source_module::SourceModule;
