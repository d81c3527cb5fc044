//! Prompt resolution
//!
//! A value is taken from exactly one source, in this order:
//!
//! 1. the override variable, if set and non-empty (used verbatim)
//! 2. the prompter, which also applies the prompt's default
//!
//! If neither yields a value the resolution fails; nothing is retried.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Content, State};
use crate::domain::ports::{Asset, OverrideSource, Parents, Prompter};
use crate::domain::value_objects::PromptSpec;
use crate::error::{InstallConfigError, InstallConfigResult};

/// Override lookup and interactive capture, injected together
#[derive(Clone)]
pub struct PromptResolver {
    overrides: Arc<dyn OverrideSource>,
    prompter: Arc<dyn Prompter>,
}

impl PromptResolver {
    pub fn new(overrides: Arc<dyn OverrideSource>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            overrides,
            prompter,
        }
    }

    pub fn resolve(&self, spec: &PromptSpec, env_var: &str) -> InstallConfigResult<String> {
        if let Some(value) = self.overrides.lookup(env_var).filter(|v| !v.is_empty()) {
            debug!(prompt = spec.message(), env_var, "resolved from override");
            return Ok(value);
        }

        match self.prompter.ask(spec)? {
            Some(value) => {
                debug!(prompt = spec.message(), "resolved from prompt");
                Ok(value)
            }
            None => Err(InstallConfigError::Unresolved {
                prompt: spec.message().to_string(),
                env_var: env_var.to_string(),
            }),
        }
    }
}

/// An asset whose single value comes from the operator or an override variable.
///
/// State: `[0]` the resolved value, named after the prompt message.
pub struct UserProvided {
    prompt: PromptSpec,
    env_var: String,
    resolver: PromptResolver,
}

impl UserProvided {
    pub fn new(prompt: PromptSpec, env_var: impl Into<String>, resolver: PromptResolver) -> Self {
        Self {
            prompt,
            env_var: env_var.into(),
            resolver,
        }
    }

    /// Generate and read back position 0
    pub fn value(&self) -> InstallConfigResult<String> {
        let state = self.generate(&Parents::new())?;
        state
            .str_at(0)
            .map(str::to_string)
            .ok_or_else(|| InstallConfigError::MalformedState {
                asset: self.name().to_string(),
                message: "expected one UTF-8 content".to_string(),
            })
    }
}

impl Asset for UserProvided {
    fn name(&self) -> &str {
        self.prompt.message()
    }

    fn dependencies(&self) -> Vec<Arc<dyn Asset>> {
        Vec::new()
    }

    fn generate(&self, _parents: &Parents) -> InstallConfigResult<State> {
        let value = self.resolver.resolve(&self.prompt, &self.env_var)?;
        Ok(State::new(vec![Content::named(self.name(), value)]))
    }
}
