//! Prompter Port
//!
//! Renders a `PromptSpec` and captures one answer from the operator.
//! Implementations:
//! - `DialoguerPrompter`: terminal select/input widgets
//! - `NonInteractivePrompter`: never asks, answers with the default if any

use crate::domain::value_objects::PromptSpec;
use crate::error::InstallConfigResult;

pub trait Prompter: Send + Sync {
    /// Ask one question.
    ///
    /// Returns `Ok(None)` when no answer could be captured and the spec has
    /// no default to fall back to. Terminal failures are errors.
    fn ask(&self, spec: &PromptSpec) -> InstallConfigResult<Option<String>>;
}
