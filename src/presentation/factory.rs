//! Asset Factory
//!
//! Creates assets with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::config::{Config, InteractiveMode};
use crate::domain::assets::Platform;
use crate::domain::ports::{OverrideSource, Prompter};
use crate::domain::services::PromptResolver;
use crate::infrastructure::{
    DialoguerPrompter, EnvOverrides, LayeredOverrides, MapOverrides, NonInteractivePrompter,
};

/// Process environment first, then the config file `[answers]` table
pub fn create_overrides(config: &Config) -> Arc<dyn OverrideSource> {
    let answers = MapOverrides::new(
        config
            .answers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    );
    let layers: Vec<Arc<dyn OverrideSource>> = vec![Arc::new(EnvOverrides), Arc::new(answers)];
    Arc::new(LayeredOverrides::new(layers))
}

/// Pick the prompter for this session.
///
/// `Auto` prompts only when stdin is a terminal.
pub fn create_prompter(mode: InteractiveMode, stdin_is_terminal: bool) -> Arc<dyn Prompter> {
    let interactive = match mode {
        InteractiveMode::Always => true,
        InteractiveMode::Never => false,
        InteractiveMode::Auto => stdin_is_terminal,
    };

    if interactive {
        Arc::new(DialoguerPrompter::new())
    } else {
        Arc::new(NonInteractivePrompter)
    }
}

pub fn create_resolver(config: &Config, stdin_is_terminal: bool) -> PromptResolver {
    PromptResolver::new(
        create_overrides(config),
        create_prompter(config.prompt.interactive, stdin_is_terminal),
    )
}

/// Create the Platform asset with all dependencies wired up
pub fn create_platform_asset(config: &Config, stdin_is_terminal: bool) -> Platform {
    Platform::new(create_resolver(config, stdin_is_terminal))
}
