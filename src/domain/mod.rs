//! Domain Layer
//!
//! Asset generation logic without terminal or process-environment access.
//!
//! ## Structure
//!
//! - `entities/` - `Content` and `State`, the values assets exchange
//! - `value_objects/` - prompt specifications, platform and region types
//! - `ports/` - `Asset`, `OverrideSource`, `Prompter` traits
//! - `services/` - prompt resolution
//! - `assets/` - concrete assets (Platform)
//!
//! All I/O goes through the traits in `ports`; infrastructure supplies the
//! implementations.

pub mod assets;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
