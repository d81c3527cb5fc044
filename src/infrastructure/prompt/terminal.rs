//! Terminal prompter backed by `dialoguer`

use dialoguer::{FuzzySelect, Input, Select};

use crate::domain::ports::Prompter;
use crate::domain::value_objects::{PromptKind, PromptSpec};
use crate::error::InstallConfigResult;

/// Option lists longer than this get type-to-filter selection
const FUZZY_THRESHOLD: usize = 8;

/// Interactive prompter using stderr for rendering and stdin for input.
///
/// Escape on a select prompt counts as "no answer" and falls back to the
/// prompt's default.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn select(&self, spec: &PromptSpec, options: &[String]) -> InstallConfigResult<Option<String>> {
        if options.is_empty() {
            return Ok(default_answer(spec));
        }

        let default = spec.default_index().unwrap_or(0);
        let selection = if options.len() > FUZZY_THRESHOLD {
            FuzzySelect::new()
                .with_prompt(spec.message())
                .items(options)
                .default(default)
                .interact_opt()?
        } else {
            Select::new()
                .with_prompt(spec.message())
                .items(options)
                .default(default)
                .interact_opt()?
        };

        Ok(selection
            .and_then(|idx| options.get(idx).cloned())
            .or_else(|| default_answer(spec)))
    }

    fn input(&self, spec: &PromptSpec) -> InstallConfigResult<Option<String>> {
        let mut input = Input::<String>::new()
            .with_prompt(spec.message())
            .allow_empty(true);
        if let Some(default) = spec.default_value() {
            input = input.default(default.to_string());
        }

        let value = input.interact_text()?;
        if value.is_empty() {
            return Ok(default_answer(spec));
        }
        Ok(Some(value))
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, spec: &PromptSpec) -> InstallConfigResult<Option<String>> {
        if let Some(help) = spec.help() {
            eprintln!("  {}", help);
        }

        match spec.kind() {
            PromptKind::Select { options } => self.select(spec, options),
            PromptKind::Input => self.input(spec),
        }
    }
}

fn default_answer(spec: &PromptSpec) -> Option<String> {
    spec.default_value().map(str::to_string)
}
