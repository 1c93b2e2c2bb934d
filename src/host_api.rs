//! Factory surface the remote runtime drives to create controllers.

use std::sync::Arc;

use log::info;
use parking_lot::Mutex;

use crate::chrome::HostChrome;
use crate::chrome_client::ChromeClientController;
use crate::events::{ChromeClientEventApi, EventChannel};
use crate::registry::{ChromeBridgeError, Instance, InstanceId, InstanceRegistry};
use crate::surface::SurfaceFactory;

/// Builds chrome controllers on request and registers them so the
/// remote runtime can address them by id.
pub struct ChromeClientHostApi {
    registry: Arc<Mutex<InstanceRegistry>>,
    event_api: Arc<ChromeClientEventApi>,
    chrome: Arc<dyn HostChrome>,
    surfaces: Arc<dyn SurfaceFactory>,
}

impl ChromeClientHostApi {
    pub fn new(
        registry: Arc<Mutex<InstanceRegistry>>,
        channel: Arc<dyn EventChannel>,
        chrome: Arc<dyn HostChrome>,
        surfaces: Arc<dyn SurfaceFactory>,
    ) -> Self {
        let event_api = Arc::new(ChromeClientEventApi::new(registry.clone(), channel));
        ChromeClientHostApi {
            registry,
            event_api,
            chrome,
            surfaces,
        }
    }

    /// Creates a controller bound to the navigation delegate stored
    /// under `delegate_id` and registers it under `instance_id`.
    ///
    /// Fails with [`ChromeBridgeError::ReferenceNotFound`] when
    /// `delegate_id` does not resolve to a delegate. No other side
    /// effects beyond the registration.
    pub fn create(
        &self,
        instance_id: InstanceId,
        delegate_id: InstanceId,
    ) -> Result<InstanceId, ChromeBridgeError> {
        let delegate = self.registry.lock().resolve_delegate(delegate_id)?;
        let controller = Arc::new(ChromeClientController::new(
            self.event_api.clone(),
            delegate,
            self.chrome.clone(),
            self.surfaces.clone(),
        ));
        self.registry
            .lock()
            .add_with_id(Instance::ChromeController(controller), instance_id);
        info!(
            "[ChromeClientHostApi] Controller {} created with navigation delegate {}.",
            instance_id, delegate_id
        );
        Ok(instance_id)
    }
}
