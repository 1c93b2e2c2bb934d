//! Capability seam over navigable surfaces and the new-window
//! delivery handshake.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A navigable content-rendering unit owned by the host engine.
pub trait Surface: Send + Sync {
    /// Navigates the surface to the given URL.
    fn load_url(&self, url: &str);

    /// Installs the shim consulted for every load request on this
    /// surface. Replaces any previously installed shim.
    fn set_navigation_shim(&self, shim: Arc<dyn NavigationShim>);
}

/// Creates new surfaces in the rendering context of an existing one.
pub trait SurfaceFactory: Send + Sync {
    fn create_surface(&self, origin: &dyn Surface) -> Arc<dyn Surface>;
}

/// Structured form of a load request, carrying method and headers in
/// addition to the target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl LoadRequest {
    /// A plain GET request for `url` with no headers.
    pub fn get(url: impl Into<String>) -> Self {
        LoadRequest {
            url: url.into(),
            method: "GET".to_string(),
            headers: HashMap::new(),
        }
    }
}

/// Decides whether the embedder overrides a URL load on a surface.
///
/// Returning `true` means the delegate takes responsibility for the
/// navigation; returning `false` falls back to default handling.
pub trait NavigationDelegate: Send + Sync {
    fn should_override_load_request(
        &self,
        origin: &Arc<dyn Surface>,
        request: &LoadRequest,
    ) -> bool;

    fn should_override_url(&self, origin: &Arc<dyn Surface>, url: &str) -> bool;
}

/// Interception hook a surface consults before performing a load.
///
/// Both forms must be answered; engines report structured requests
/// where available and fall back to the plain-URL form otherwise.
pub trait NavigationShim: Send + Sync {
    /// Returns `true` if the load was intercepted and the surface must
    /// not perform it.
    fn should_override_load_request(&self, surface: &dyn Surface, request: &LoadRequest) -> bool;

    fn should_override_url(&self, surface: &dyn Surface, url: &str) -> bool;
}

/// Slot through which a newly created surface travels back to the
/// engine that asked for a new window.
#[derive(Default)]
pub struct WindowTransport {
    slot: Mutex<Option<Arc<dyn Surface>>>,
}

impl WindowTransport {
    pub fn new() -> Self {
        WindowTransport::default()
    }

    pub fn set_surface(&self, surface: Arc<dyn Surface>) {
        *self.slot.lock() = Some(surface);
    }

    /// The delivered surface, once `set_surface` has run.
    pub fn surface(&self) -> Option<Arc<dyn Surface>> {
        self.slot.lock().clone()
    }
}

/// A one-shot request for a new navigable surface.
///
/// `deliver` consumes the request, so a surface can be handed back at
/// most once. Callers must attach a transport before handing the
/// request to the bridge; delivering without one is a contract
/// violation and panics.
pub struct PendingWindowRequest {
    transport: Option<Arc<WindowTransport>>,
}

impl PendingWindowRequest {
    pub fn new(transport: Arc<WindowTransport>) -> Self {
        PendingWindowRequest {
            transport: Some(transport),
        }
    }

    /// A request whose caller failed to attach a transport. Only the
    /// caller can construct this state; the bridge never recovers
    /// from it.
    pub fn without_transport() -> Self {
        PendingWindowRequest { transport: None }
    }

    /// Delivers `surface` through the transport, synchronously.
    ///
    /// # Panics
    ///
    /// Panics if the request carries no transport.
    pub fn deliver(self, surface: Arc<dyn Surface>) {
        let transport = self
            .transport
            .expect("window request delivered without a transport attached");
        transport.set_surface(surface);
    }
}
