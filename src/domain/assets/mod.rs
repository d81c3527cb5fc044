//! Concrete assets
//!
//! - `platform` - platform type plus its platform-specific parameter

pub mod platform;

pub use platform::{
    AwsFlow, LibvirtFlow, Platform, PlatformFlow, PlatformRegistry, AWS_REGION_ENV_VAR,
    DEFAULT_LIBVIRT_URI, LIBVIRT_URI_ENV_VAR, PLATFORM_ENV_VAR,
};
