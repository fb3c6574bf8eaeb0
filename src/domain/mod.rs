//! Domain Layer
//!
//! The core of pyseal: what a module is, what gets compiled, what may be
//! deleted.
//!
//! ## Structure
//!
//! - `entities/` - SourceModule, ExtensionDescriptor, CompiledArtifact
//! - `value_objects/` - AllowList, ExcludedDirs, ModuleIdentity, ReleaseMode, directives
//! - `services/` - discovery, package detection, descriptor building
//! - `ports/` - FileSystem and ExtensionCompiler interfaces
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - everything touching disk or processes goes through a port
//! 2. **Ports & Adapters** - infrastructure supplies the implementations

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
