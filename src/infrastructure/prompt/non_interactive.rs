//! Prompter for sessions without a terminal

use tracing::debug;

use crate::domain::ports::Prompter;
use crate::domain::value_objects::PromptSpec;
use crate::error::InstallConfigResult;

/// Never asks; answers with the prompt default, or nothing.
#[derive(Debug, Default)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn ask(&self, spec: &PromptSpec) -> InstallConfigResult<Option<String>> {
        let answer = spec.default_value().map(str::to_string);
        debug!(
            prompt = spec.message(),
            defaulted = answer.is_some(),
            "non-interactive prompt"
        );
        Ok(answer)
    }
}
