//! Prompter implementations

mod non_interactive;
mod terminal;

pub use non_interactive::NonInteractivePrompter;
pub use terminal::DialoguerPrompter;
