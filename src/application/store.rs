//! Asset store - resolves an asset and everything it depends on
//!
//! Dependencies are generated depth-first, before their dependents. Each
//! asset instance is generated at most once per store; later fetches return
//! the memoized state.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::State;
use crate::domain::ports::{Asset, AssetRef, Parents};
use crate::error::{InstallConfigError, InstallConfigResult};

#[derive(Default)]
pub struct Store {
    states: HashMap<AssetRef, State>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate `asset`, generating its dependencies first if needed
    pub fn fetch(&mut self, asset: &Arc<dyn Asset>) -> InstallConfigResult<State> {
        let mut stack = Vec::new();
        self.fetch_inner(asset, &mut stack)
    }

    /// State already generated for `asset`, if any
    pub fn get(&self, asset: &Arc<dyn Asset>) -> Option<&State> {
        self.states.get(&AssetRef::new(Arc::clone(asset)))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn fetch_inner(
        &mut self,
        asset: &Arc<dyn Asset>,
        stack: &mut Vec<AssetRef>,
    ) -> InstallConfigResult<State> {
        let key = AssetRef::new(Arc::clone(asset));

        if let Some(state) = self.states.get(&key) {
            debug!(asset = asset.name(), "reusing generated state");
            return Ok(state.clone());
        }

        if stack.contains(&key) {
            let mut path: Vec<String> = stack
                .iter()
                .skip_while(|r| **r != key)
                .map(|r| r.asset().name().to_string())
                .collect();
            path.push(asset.name().to_string());
            return Err(InstallConfigError::DependencyCycle { path });
        }

        stack.push(key.clone());

        let mut parents = Parents::new();
        for dependency in asset.dependencies() {
            let state = self.fetch_inner(&dependency, stack)?;
            parents.insert(&dependency, state);
        }

        debug!(
            asset = asset.name(),
            dependencies = parents.len(),
            "generating"
        );
        let state = asset.generate(&parents)?;

        stack.pop();
        self.states.insert(key, state.clone());
        Ok(state)
    }
}
