//! Domain Entities
//!
//! - `Content` / `State` - what every asset produces and consumes

pub mod content;

pub use content::{Content, State};
