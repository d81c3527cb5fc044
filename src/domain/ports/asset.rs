//! Asset Port
//!
//! An asset is one unit of configuration generation. It declares the assets
//! it depends on and turns their already-generated states into its own.
//! Walking the graph and memoizing results is the job of the caller
//! (see `application::Store`).

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::domain::entities::State;
use crate::error::{InstallConfigError, InstallConfigResult};

pub trait Asset: Send + Sync {
    /// Human-friendly name, used in logs and errors
    fn name(&self) -> &str;

    /// Prerequisite assets.
    ///
    /// Must return the same list (same instances, same order) on every call;
    /// it defines the graph edges.
    fn dependencies(&self) -> Vec<Arc<dyn Asset>>;

    /// Produce this asset's state from the states of its dependencies.
    ///
    /// `parents` holds exactly the declared dependencies, all generated.
    fn generate(&self, parents: &Parents) -> InstallConfigResult<State>;
}

/// Identity key for an asset instance.
///
/// Two refs are equal only if they point at the same allocation; two
/// separately constructed assets of the same type are different nodes.
#[derive(Clone)]
pub struct AssetRef(Arc<dyn Asset>);

impl AssetRef {
    pub fn new(asset: Arc<dyn Asset>) -> Self {
        Self(asset)
    }

    pub fn asset(&self) -> &Arc<dyn Asset> {
        &self.0
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for AssetRef {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for AssetRef {}

impl Hash for AssetRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl std::fmt::Debug for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AssetRef").field(&self.0.name()).finish()
    }
}

/// Generated states of an asset's dependencies, keyed by identity
#[derive(Debug, Default, Clone)]
pub struct Parents {
    states: HashMap<AssetRef, State>,
}

impl Parents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: &Arc<dyn Asset>, state: State) {
        self.states.insert(AssetRef::new(Arc::clone(asset)), state);
    }

    pub fn get(&self, asset: &Arc<dyn Asset>) -> Option<&State> {
        self.states.get(&AssetRef::new(Arc::clone(asset)))
    }

    /// Like `get`, but a missing parent is an error attributed to `owner`
    pub fn require(&self, owner: &str, asset: &Arc<dyn Asset>) -> InstallConfigResult<&State> {
        self.get(asset)
            .ok_or_else(|| InstallConfigError::MissingDependency {
                asset: owner.to_string(),
                dependency: asset.name().to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
