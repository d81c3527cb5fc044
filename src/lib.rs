//! installconfig - interactive collection of cluster installation configuration
//!
//! Configuration is produced by a graph of assets. Each asset declares the
//! assets it depends on and generates an ordered `State` from their states,
//! from override variables, or by prompting the operator.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::Store;
pub use config::Config;
pub use domain::assets::{Platform, PlatformFlow, PlatformRegistry};
pub use domain::entities::{Content, State};
pub use domain::ports::{Asset, AssetRef, OverrideSource, Parents, Prompter};
pub use domain::services::{PromptResolver, UserProvided};
pub use domain::value_objects::{PlatformConfig, PromptKind, PromptSpec, Region};
pub use error::{InstallConfigError, InstallConfigResult};
