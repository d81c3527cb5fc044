//! Presentation Layer
//!
//! This layer handles:
//! - Wiring assets to their infrastructure (`factory`)
//! - Output formatting in text or JSON (`output`)
//!
//! CLI argument parsing lives in `main.rs`.

pub mod factory;
pub mod output;

pub use factory::create_platform_asset;
