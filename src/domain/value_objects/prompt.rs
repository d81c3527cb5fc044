//! Prompt specification - the declarative description of one question
//!
//! The domain only builds these; rendering and capturing the answer is the
//! job of a `Prompter` implementation.

/// Select-from-options or free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Pick one entry from an ordered option list
    Select { options: Vec<String> },
    /// Free-form text input
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    message: String,
    help: Option<String>,
    default: Option<String>,
    kind: PromptKind,
}

impl PromptSpec {
    pub fn select<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            help: None,
            default: None,
            kind: PromptKind::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
            default: None,
            kind: PromptKind::Input,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn kind(&self) -> &PromptKind {
        &self.kind
    }

    /// Option list for select prompts, `None` for input prompts
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            PromptKind::Select { options } => Some(options),
            PromptKind::Input => None,
        }
    }

    /// Index of the default within the option list
    ///
    /// `None` for input prompts, or when the default is not one of the options.
    pub fn default_index(&self) -> Option<usize> {
        let default = self.default.as_deref()?;
        self.options()?.iter().position(|o| o == default)
    }
}
