//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod allow_list;
mod directives;
mod excluded_dirs;
mod module_identity;
mod release_mode;
mod suffix_set;

pub use allow_list::{AllowList, DEFAULT_KEEP};
pub use directives::{CompilerDirectives, DirectiveValue, DEFAULT_LANGUAGE_LEVEL};
pub use excluded_dirs::{ExcludedDirs, DEFAULT_EXCLUDED_DIRS};
pub use module_identity::ModuleIdentity;
pub use release_mode::ReleaseMode;
pub use suffix_set::{SuffixSet, INTERMEDIATE_SUFFIX, SOURCE_SUFFIX};
