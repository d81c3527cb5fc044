//! Platform configuration value object
//!
//! The Platform asset's state has a fixed two-position shape:
//!
//! - `[0]` platform type (`aws`, `libvirt`, or a registered tag)
//! - `[1]` platform parameter (AWS region code, libvirt connection URI, ...)
//!
//! `PlatformConfig` is the typed view of that shape. Sub-flows build one of
//! these and the state is derived from it, so position 1 is never read
//! without knowing what position 0 says it means.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::region::Region;
use crate::domain::entities::State;
use crate::error::{InstallConfigError, InstallConfigResult};

/// Install on AWS
pub const AWS_PLATFORM_TYPE: &str = "aws";
/// Install on libvirt
pub const LIBVIRT_PLATFORM_TYPE: &str = "libvirt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformConfig {
    Aws {
        region: Region,
    },
    Libvirt {
        uri: String,
    },
    /// A platform contributed through the registry, carried untyped
    Other {
        platform: String,
        parameter_name: String,
        value: String,
    },
}

impl PlatformConfig {
    pub fn platform_type(&self) -> &str {
        match self {
            PlatformConfig::Aws { .. } => AWS_PLATFORM_TYPE,
            PlatformConfig::Libvirt { .. } => LIBVIRT_PLATFORM_TYPE,
            PlatformConfig::Other { platform, .. } => platform,
        }
    }

    /// Name of the position-1 field
    pub fn parameter_name(&self) -> &str {
        match self {
            PlatformConfig::Aws { .. } => "region",
            PlatformConfig::Libvirt { .. } => "uri",
            PlatformConfig::Other { parameter_name, .. } => parameter_name,
        }
    }

    pub fn parameter(&self) -> &str {
        match self {
            PlatformConfig::Aws { region } => region.as_str(),
            PlatformConfig::Libvirt { uri } => uri,
            PlatformConfig::Other { value, .. } => value,
        }
    }

    pub fn to_state(&self) -> State {
        State::from_strings([self.platform_type(), self.parameter()])
    }

    /// Read a built-in platform's state back into its typed form.
    ///
    /// Registered platforms are read through `PlatformRegistry::config_from_state`,
    /// which knows their parameter names.
    pub fn from_state(state: &State) -> InstallConfigResult<Self> {
        let (platform, parameter) = Self::state_parts(state)?;

        match platform {
            AWS_PLATFORM_TYPE => Ok(PlatformConfig::Aws {
                region: Region::parse(parameter)?,
            }),
            LIBVIRT_PLATFORM_TYPE => Ok(PlatformConfig::Libvirt {
                uri: parameter.to_string(),
            }),
            other => Err(InstallConfigError::UnknownPlatform(other.to_string())),
        }
    }

    /// Split a Platform state into its type tag and parameter
    pub fn state_parts(state: &State) -> InstallConfigResult<(&str, &str)> {
        let malformed = |message: String| InstallConfigError::MalformedState {
            asset: "Platform".to_string(),
            message,
        };

        if state.len() != 2 {
            return Err(malformed(format!(
                "expected 2 contents, found {}",
                state.len()
            )));
        }

        let platform = state
            .str_at(0)
            .ok_or_else(|| malformed("platform type is not UTF-8".to_string()))?;
        let parameter = state
            .str_at(1)
            .ok_or_else(|| malformed("platform parameter is not UTF-8".to_string()))?;

        Ok((platform, parameter))
    }
}

/// `{"platform": <type>, <parameter name>: <parameter>}`
impl Serialize for PlatformConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("platform", self.platform_type())?;
        map.serialize_entry(self.parameter_name(), self.parameter())?;
        map.end()
    }
}
