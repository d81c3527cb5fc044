//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (INSTALLCONFIG_*)
//! 3. Config file (`--config`, `./installconfig.toml`, user config dir)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, InteractiveMode, OutputConfig, OutputFormat, PromptConfig, Verbosity};
