//! Interception of new-window requests.
//!
//! A request to open a new window is answered with a throwaway probe
//! surface. The probe exists only to harvest the URL the new window
//! would load: its navigation shim reports every load as intercepted,
//! so the probe itself never renders anything. When the registered
//! delegate declines to override a load, the shim redirects the
//! origin surface to the harvested URL instead.

use std::sync::Arc;

use log::debug;

use crate::surface::{
    LoadRequest, NavigationDelegate, NavigationShim, PendingWindowRequest, Surface, SurfaceFactory,
};

/// Shim installed on a probe surface during the new-window handshake.
///
/// Reports every probe load as intercepted, even when the delegate
/// would have permitted it; only the origin surface may ever perform
/// the navigation.
pub struct WindowNavigationShim {
    delegate: Arc<dyn NavigationDelegate>,
    origin: Arc<dyn Surface>,
}

impl WindowNavigationShim {
    pub fn new(delegate: Arc<dyn NavigationDelegate>, origin: Arc<dyn Surface>) -> Self {
        WindowNavigationShim { delegate, origin }
    }
}

impl NavigationShim for WindowNavigationShim {
    fn should_override_load_request(&self, _surface: &dyn Surface, request: &LoadRequest) -> bool {
        if !self
            .delegate
            .should_override_load_request(&self.origin, request)
        {
            self.origin.load_url(&request.url);
        }
        true
    }

    fn should_override_url(&self, _surface: &dyn Surface, url: &str) -> bool {
        if !self.delegate.should_override_url(&self.origin, url) {
            self.origin.load_url(url);
        }
        true
    }
}

/// Answers a new-window request from `origin`.
///
/// Builds (or reuses the injected) probe surface, installs the
/// interception shim, and delivers the probe through the request's
/// transport before returning. Always returns `true`: the host is
/// told a new window will be supplied.
pub(crate) fn open_window(
    delegate: Arc<dyn NavigationDelegate>,
    surfaces: &dyn SurfaceFactory,
    origin: Arc<dyn Surface>,
    request: PendingWindowRequest,
    probe: Option<Arc<dyn Surface>>,
) -> bool {
    let probe = probe.unwrap_or_else(|| {
        debug!("[WindowInterceptor] Creating probe surface for new-window request.");
        surfaces.create_surface(origin.as_ref())
    });
    probe.set_navigation_shim(Arc::new(WindowNavigationShim::new(delegate, origin)));
    request.deliver(probe);
    true
}
