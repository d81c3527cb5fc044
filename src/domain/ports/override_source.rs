//! Override Source Port
//!
//! Looks up override variables by name. A value found here replaces the
//! interactive prompt entirely, which is what makes scripted runs possible.
//! Infrastructure provides the process-environment implementation; tests
//! pass closures.

pub trait OverrideSource: Send + Sync {
    /// Value of the override variable, `None` when unset
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<F> OverrideSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Source with nothing set
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn lookup(&self, _name: &str) -> Option<String> {
        None
    }
}
