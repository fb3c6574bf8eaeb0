//! Release mode value object
//!
//! Decided once from the invocation arguments and passed explicitly to every
//! stage that needs it.

use serde::Serialize;

pub const RELEASE_FLAG: &str = "--release";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseMode {
    /// Compile only; sources stay in place.
    #[default]
    Development,
    /// Compile, then strip sources and intermediates.
    Release,
}

impl ReleaseMode {
    pub fn from_flag(release: bool) -> Self {
        if release {
            ReleaseMode::Release
        } else {
            ReleaseMode::Development
        }
    }

    /// Consume every `--release` from an argument list.
    ///
    /// Returns the mode and the remaining arguments, ready to be handed on to
    /// whatever parses the rest of the invocation.
    pub fn split_args<I, S>(args: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut release = false;
        let rest = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| {
                if arg == RELEASE_FLAG {
                    release = true;
                    false
                } else {
                    true
                }
            })
            .collect();
        (Self::from_flag(release), rest)
    }

    pub fn is_release(&self) -> bool {
        matches!(self, ReleaseMode::Release)
    }
}

impl std::fmt::Display for ReleaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseMode::Development => write!(f, "development"),
            ReleaseMode::Release => write!(f, "release"),
        }
    }
}
