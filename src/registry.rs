//! Bidirectional id↔object table shared with the remote runtime.
//!
//! The remote runtime and the host refer to the same logical objects
//! through `InstanceId`s. Controllers are registered under ids the
//! remote runtime assigns; host-initiated registrations (navigation
//! delegates) draw fresh ids from a local counter. Reverse lookup is
//! by pointer identity, so an object resolves to the id it was stored
//! under no matter how many handles to it exist.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use crate::chrome_client::ChromeClientController;
use crate::surface::NavigationDelegate;

/// Identifier shared with the remote runtime for one bridged object.
pub type InstanceId = i64;

/// Errors surfaced to callers of the bridge.
#[derive(Debug)]
pub enum ChromeBridgeError {
    /// A reference id did not resolve to an object of the required
    /// kind. The requested operation fails outright.
    ReferenceNotFound(InstanceId),
}

impl std::fmt::Display for ChromeBridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChromeBridgeError::ReferenceNotFound(id) => {
                write!(f, "No registered instance resolves id {}.", id)
            }
        }
    }
}
impl std::error::Error for ChromeBridgeError {}

/// One entry in the registry.
#[derive(Clone)]
pub enum Instance {
    NavigationDelegate(Arc<dyn NavigationDelegate>),
    ChromeController(Arc<ChromeClientController>),
}

impl Instance {
    /// Identity key of the underlying allocation, independent of how
    /// many `Arc` handles point at it.
    fn identity(&self) -> usize {
        match self {
            Instance::NavigationDelegate(delegate) => {
                Arc::as_ptr(delegate) as *const () as usize
            }
            Instance::ChromeController(controller) => Arc::as_ptr(controller) as usize,
        }
    }
}

/// In-memory instance table.
pub struct InstanceRegistry {
    instances: HashMap<InstanceId, Instance>,
    ids: HashMap<usize, InstanceId>,
    next_id: InstanceId,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        InstanceRegistry {
            instances: HashMap::new(),
            ids: HashMap::new(),
            next_id: 1,
        }
    }

    /// Stores `instance` under an id chosen by the remote runtime.
    ///
    /// An entry already stored under `id` is replaced with a warning;
    /// the remote runtime owns the id space.
    pub fn add_with_id(&mut self, instance: Instance, id: InstanceId) {
        if let Some(old) = self.instances.remove(&id) {
            warn!(
                "[InstanceRegistry] Instance id {} already occupied. The previous entry is replaced.",
                id
            );
            self.ids.remove(&old.identity());
        }
        self.ids.insert(instance.identity(), id);
        self.instances.insert(id, instance);
    }

    /// Stores `instance` under a fresh locally assigned id.
    pub fn register(&mut self, instance: Instance) -> InstanceId {
        while self.instances.contains_key(&self.next_id) {
            self.next_id += 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.add_with_id(instance, id);
        id
    }

    /// Drops the entry stored under `id`, if any.
    pub fn remove(&mut self, id: InstanceId) -> Option<Instance> {
        let instance = self.instances.remove(&id)?;
        self.ids.remove(&instance.identity());
        Some(instance)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    /// Resolves `id` to a navigation delegate.
    pub fn resolve_delegate(
        &self,
        id: InstanceId,
    ) -> Result<Arc<dyn NavigationDelegate>, ChromeBridgeError> {
        match self.instances.get(&id) {
            Some(Instance::NavigationDelegate(delegate)) => Ok(delegate.clone()),
            _ => Err(ChromeBridgeError::ReferenceNotFound(id)),
        }
    }

    /// Resolves `id` to a chrome controller.
    pub fn resolve_controller(
        &self,
        id: InstanceId,
    ) -> Result<Arc<ChromeClientController>, ChromeBridgeError> {
        match self.instances.get(&id) {
            Some(Instance::ChromeController(controller)) => Ok(controller.clone()),
            _ => Err(ChromeBridgeError::ReferenceNotFound(id)),
        }
    }

    /// Id a controller was stored under, or `None` if it was never
    /// registered (or has been removed since).
    pub fn id_of_controller(&self, controller: &Arc<ChromeClientController>) -> Option<InstanceId> {
        self.ids.get(&(Arc::as_ptr(controller) as usize)).copied()
    }
}

impl Default for InstanceRegistry {
    fn default() -> Self {
        InstanceRegistry::new()
    }
}
