//! Value Objects
//!
//! Immutable types with validation at construction.

pub mod platform;
pub mod prompt;
pub mod region;

pub use platform::{PlatformConfig, AWS_PLATFORM_TYPE, LIBVIRT_PLATFORM_TYPE};
pub use prompt::{PromptKind, PromptSpec};
pub use region::{Region, AWS_REGIONS, DEFAULT_AWS_REGION};
