//! AWS region value object and the catalog offered at the region prompt

use serde::{Deserialize, Serialize};

use crate::error::{InstallConfigError, InstallConfigResult};

/// Regions offered interactively, as (code, label)
pub const AWS_REGIONS: [(&str, &str); 18] = [
    ("us-east-2", "Ohio"),
    ("us-east-1", "N. Virginia"),
    ("us-west-1", "N. California"),
    ("us-west-2", "Oregon"),
    ("ap-south-1", "Mumbai"),
    ("ap-northeast-2", "Seoul"),
    ("ap-northeast-3", "Osaka-Local"),
    ("ap-southeast-1", "Singapore"),
    ("ap-southeast-2", "Sydney"),
    ("ap-northeast-1", "Tokyo"),
    ("ca-central-1", "Central"),
    ("cn-north-1", "Beijing"),
    ("cn-northwest-1", "Ningxia"),
    ("eu-central-1", "Frankfurt"),
    ("eu-west-1", "Ireland"),
    ("eu-west-2", "London"),
    ("eu-west-3", "Paris"),
    ("sa-east-1", "São Paulo"),
];

/// Catalog entry preselected at the prompt
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// A region code such as `eu-west-1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Extract the region code from a prompt answer.
    ///
    /// Accepts both catalog entries (`"eu-west-1 (Ireland)"`) and bare codes
    /// (`"eu-west-1"`). The value is trimmed, then only its first
    /// whitespace-separated token is kept, so tabs separate like spaces.
    /// Codes outside the catalog are accepted as long as they are made of
    /// lowercase letters, digits and dashes.
    pub fn parse(value: &str) -> InstallConfigResult<Self> {
        let invalid = |reason: &str| InstallConfigError::InvalidRegion {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let code = value
            .split_whitespace()
            .next()
            .ok_or_else(|| invalid("empty value"))?;

        if !code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(invalid(
                "region code may only contain lowercase letters, digits and '-'",
            ));
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a catalog entry the way the region prompt displays it
pub fn region_option(code: &str, label: &str) -> String {
    format!("{} ({})", code, label)
}

/// All catalog entries in prompt order
pub fn region_options() -> Vec<String> {
    AWS_REGIONS
        .iter()
        .map(|(code, label)| region_option(code, label))
        .collect()
}

/// The preselected catalog entry
pub fn default_region_option() -> String {
    AWS_REGIONS
        .iter()
        .find(|(code, _)| *code == DEFAULT_AWS_REGION)
        .map(|(code, label)| region_option(code, label))
        .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string())
}
