//! Configuration module for pyseal
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PYSEAL_*)
//! 3. Project config (`pyseal.toml` in the build root, or `--config`)
//! 4. User config (~/.config/pyseal/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env, load, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    CONFIG_FILE_NAME,
};
pub use types::{BuildConfig, CompilerConfig, Config};
