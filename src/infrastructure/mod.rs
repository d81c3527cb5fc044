//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//!
//! - `overrides` - process environment and config-file answers
//! - `prompt` - terminal and non-interactive prompters

pub mod overrides;
pub mod prompt;

pub use overrides::{EnvOverrides, LayeredOverrides, MapOverrides};
pub use prompt::{DialoguerPrompter, NonInteractivePrompter};
