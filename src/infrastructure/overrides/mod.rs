//! Override source implementations
//!
//! - `EnvOverrides` - the process environment
//! - `MapOverrides` - fixed answers, e.g. the config file `[answers]` table
//! - `LayeredOverrides` - first source with a non-empty value wins

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ports::OverrideSource;

/// Reads override variables from the process environment
pub struct EnvOverrides;

impl OverrideSource for EnvOverrides {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed name → value answers
#[derive(Debug, Clone, Default)]
pub struct MapOverrides {
    values: HashMap<String, String>,
}

impl MapOverrides {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl OverrideSource for MapOverrides {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Sources in priority order
pub struct LayeredOverrides {
    layers: Vec<Arc<dyn OverrideSource>>,
}

impl LayeredOverrides {
    pub fn new(layers: Vec<Arc<dyn OverrideSource>>) -> Self {
        Self { layers }
    }
}

impl OverrideSource for LayeredOverrides {
    fn lookup(&self, name: &str) -> Option<String> {
        self.layers
            .iter()
            .filter_map(|layer| layer.lookup(name))
            .find(|value| !value.is_empty())
    }
}
