//! Domain Services
//!
//! - `prompt_resolver` - override > prompt > default resolution of one value

pub mod prompt_resolver;

pub use prompt_resolver::{PromptResolver, UserProvided};
