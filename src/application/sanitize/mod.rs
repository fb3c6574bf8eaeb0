//! Release Sanitizer
//!
//! Runs only in release mode and only with a `CompiledBuild` in hand:
//!
//! - Re-walks the build root with the same discovery used for compilation
//! - Skips excluded environment directories and allow-listed filenames
//! - Deletes everything else matching the source or intermediate suffix
//! - Reports the count removed and the filenames preserved

mod result;
mod use_case;

pub use result::RemovalReport;
pub use use_case::SanitizeUseCase;
