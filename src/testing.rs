//! In-memory fakes for the capability seams, shared by the per-module
//! test blocks.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde_json::Value;

use crate::chrome::{HostChrome, ViewContainer, ViewHandle};
use crate::chrome_client::ChromeClientController;
use crate::events::{ChromeClientEventApi, EventChannel, MessageTransport};
use crate::presentation::ViewHiddenCallback;
use crate::registry::{InstanceId, InstanceRegistry};
use crate::surface::{LoadRequest, NavigationDelegate, NavigationShim, Surface, SurfaceFactory};

#[derive(Default)]
pub(crate) struct FakeContainer {
    views: Mutex<Vec<ViewHandle>>,
}

impl FakeContainer {
    pub(crate) fn attached(&self) -> Vec<ViewHandle> {
        self.views.lock().clone()
    }
}

impl ViewContainer for FakeContainer {
    fn add_view(&self, view: ViewHandle) {
        self.views.lock().push(view);
    }

    fn remove_view(&self, view: &ViewHandle) {
        self.views.lock().retain(|attached| attached != view);
    }
}

/// Recording host chrome with a detachable root container.
pub(crate) struct FakeChrome {
    container: Arc<FakeContainer>,
    container_present: Mutex<bool>,
    ui_visibility: Mutex<i32>,
    orientation: Mutex<i32>,
    orientation_history: Mutex<Vec<i32>>,
    layout_no_limits: Mutex<bool>,
    version: u32,
}

impl FakeChrome {
    pub(crate) fn with_container(version: u32) -> Self {
        FakeChrome {
            container: Arc::new(FakeContainer::default()),
            container_present: Mutex::new(true),
            ui_visibility: Mutex::new(0),
            orientation: Mutex::new(0),
            orientation_history: Mutex::new(Vec::new()),
            layout_no_limits: Mutex::new(false),
            version,
        }
    }

    pub(crate) fn without_container(version: u32) -> Self {
        let chrome = FakeChrome::with_container(version);
        *chrome.container_present.lock() = false;
        chrome
    }

    pub(crate) fn drop_container(&self) {
        *self.container_present.lock() = false;
    }

    pub(crate) fn restore_container(&self) {
        *self.container_present.lock() = true;
    }

    pub(crate) fn container(&self) -> Arc<FakeContainer> {
        self.container.clone()
    }

    pub(crate) fn current_ui_visibility(&self) -> i32 {
        *self.ui_visibility.lock()
    }

    pub(crate) fn current_orientation(&self) -> i32 {
        *self.orientation.lock()
    }

    pub(crate) fn orientation_history(&self) -> Vec<i32> {
        self.orientation_history.lock().clone()
    }

    pub(crate) fn layout_no_limits(&self) -> bool {
        *self.layout_no_limits.lock()
    }
}

impl HostChrome for FakeChrome {
    fn root_container(&self) -> Option<Arc<dyn ViewContainer>> {
        if *self.container_present.lock() {
            Some(self.container.clone())
        } else {
            None
        }
    }

    fn ui_visibility(&self) -> i32 {
        *self.ui_visibility.lock()
    }

    fn set_ui_visibility(&self, flags: i32) {
        *self.ui_visibility.lock() = flags;
    }

    fn orientation(&self) -> i32 {
        *self.orientation.lock()
    }

    fn set_orientation(&self, orientation: i32) {
        *self.orientation.lock() = orientation;
        self.orientation_history.lock().push(orientation);
    }

    fn set_layout_no_limits(&self, enabled: bool) {
        *self.layout_no_limits.lock() = enabled;
    }

    fn version_at_least(&self, version: u32) -> bool {
        self.version >= version
    }
}

/// Counts completion-callback invocations.
#[derive(Default)]
pub(crate) struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    pub(crate) fn callback(&self) -> ViewHiddenCallback {
        let count = self.count.clone();
        Box::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Recording surface; never performs a real navigation.
pub(crate) struct FakeSurface {
    #[allow(dead_code)]
    name: &'static str,
    loaded: Mutex<Vec<String>>,
    shim: Mutex<Option<Arc<dyn NavigationShim>>>,
}

impl FakeSurface {
    pub(crate) fn new(name: &'static str) -> Arc<Self> {
        Arc::new(FakeSurface {
            name,
            loaded: Mutex::new(Vec::new()),
            shim: Mutex::new(None),
        })
    }

    pub(crate) fn loaded(&self) -> Vec<String> {
        self.loaded.lock().clone()
    }

    pub(crate) fn shim(&self) -> Option<Arc<dyn NavigationShim>> {
        self.shim.lock().clone()
    }
}

impl Surface for FakeSurface {
    fn load_url(&self, url: &str) {
        self.loaded.lock().push(url.to_string());
    }

    fn set_navigation_shim(&self, shim: Arc<dyn NavigationShim>) {
        *self.shim.lock() = Some(shim);
    }
}

#[derive(Default)]
pub(crate) struct FakeSurfaceFactory {
    probes: Mutex<Vec<Arc<FakeSurface>>>,
}

impl FakeSurfaceFactory {
    pub(crate) fn created(&self) -> usize {
        self.probes.lock().len()
    }

    pub(crate) fn last_created(&self) -> Option<Arc<FakeSurface>> {
        self.probes.lock().last().cloned()
    }
}

impl SurfaceFactory for FakeSurfaceFactory {
    fn create_surface(&self, _origin: &dyn Surface) -> Arc<dyn Surface> {
        let probe = FakeSurface::new("probe");
        self.probes.lock().push(probe.clone());
        probe
    }
}

/// Delegate stub with a fixed override answer.
pub(crate) struct StubDelegate {
    overrides: bool,
}

impl StubDelegate {
    pub(crate) fn overriding() -> Arc<Self> {
        Arc::new(StubDelegate { overrides: true })
    }

    pub(crate) fn declining() -> Arc<Self> {
        Arc::new(StubDelegate { overrides: false })
    }
}

impl NavigationDelegate for StubDelegate {
    fn should_override_load_request(
        &self,
        _origin: &Arc<dyn Surface>,
        _request: &LoadRequest,
    ) -> bool {
        self.overrides
    }

    fn should_override_url(&self, _origin: &Arc<dyn Surface>, _url: &str) -> bool {
        self.overrides
    }
}

#[derive(Default)]
pub(crate) struct RecordingChannel {
    events: Mutex<Vec<(InstanceId, String, Value)>>,
}

impl RecordingChannel {
    pub(crate) fn events(&self) -> Vec<(InstanceId, String, Value)> {
        self.events.lock().clone()
    }
}

impl EventChannel for RecordingChannel {
    fn emit(&self, source_id: InstanceId, event: &str, args: Value) {
        self.events.lock().push((source_id, event.to_string(), args));
    }
}

#[derive(Default)]
pub(crate) struct RecordingTransport {
    sent: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingTransport {
    pub(crate) fn sent(&self) -> Vec<(String, Vec<u8>)> {
        self.sent.lock().clone()
    }
}

impl MessageTransport for RecordingTransport {
    fn send(&self, channel: &str, payload: &[u8]) {
        self.sent.lock().push((channel.to_string(), payload.to_vec()));
    }
}

/// Wiring shared by controller-level tests.
pub(crate) struct BridgeEnv {
    pub(crate) registry: Arc<Mutex<InstanceRegistry>>,
    pub(crate) channel: Arc<RecordingChannel>,
    pub(crate) chrome: Arc<FakeChrome>,
}

/// A controller wired against fakes, not yet registered.
pub(crate) fn controller_with_defaults() -> (Arc<ChromeClientController>, BridgeEnv) {
    let registry = Arc::new(Mutex::new(InstanceRegistry::new()));
    let channel = Arc::new(RecordingChannel::default());
    let chrome = Arc::new(FakeChrome::with_container(21));
    let event_api = Arc::new(ChromeClientEventApi::new(
        registry.clone(),
        channel.clone() as Arc<dyn EventChannel>,
    ));
    let controller = Arc::new(ChromeClientController::new(
        event_api,
        StubDelegate::declining(),
        chrome.clone() as Arc<dyn HostChrome>,
        Arc::new(FakeSurfaceFactory::default()),
    ));
    (
        controller,
        BridgeEnv {
            registry,
            channel,
            chrome,
        },
    )
}
