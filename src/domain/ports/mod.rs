//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset;
pub mod override_source;
pub mod prompter;

pub use asset::{Asset, AssetRef, Parents};
pub use override_source::{NoOverrides, OverrideSource};
pub use prompter::Prompter;
