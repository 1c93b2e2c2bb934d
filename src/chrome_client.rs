//! The browser-chrome controller exposed to the remote runtime.
//!
//! One controller pairs one host-side chrome client with one remote
//! counterpart. The host engine invokes the `on_*` callbacks; the
//! controller forwards progress updates over its remote link, runs the
//! full-screen presentation state machine, and answers new-window
//! requests locally.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::chrome::{HostChrome, ViewHandle};
use crate::events::ChromeClientEventApi;
use crate::presentation::{FullScreenPresenter, ViewHiddenCallback};
use crate::surface::{NavigationDelegate, PendingWindowRequest, Surface, SurfaceFactory};
use crate::window;

pub struct ChromeClientController {
    /// Severed on `release`; forwarding without it is a silent no-op.
    remote_link: Mutex<Option<Arc<ChromeClientEventApi>>>,
    delegate: Mutex<Arc<dyn NavigationDelegate>>,
    surfaces: Arc<dyn SurfaceFactory>,
    presenter: FullScreenPresenter,
}

impl ChromeClientController {
    pub fn new(
        remote_link: Arc<ChromeClientEventApi>,
        delegate: Arc<dyn NavigationDelegate>,
        chrome: Arc<dyn HostChrome>,
        surfaces: Arc<dyn SurfaceFactory>,
    ) -> Self {
        ChromeClientController {
            remote_link: Mutex::new(Some(remote_link)),
            delegate: Mutex::new(delegate),
            surfaces,
            presenter: FullScreenPresenter::new(chrome),
        }
    }

    /// Forwards a load-progress update to the remote runtime.
    ///
    /// Dropped silently once the controller has been released.
    pub fn on_progress_changed(self: &Arc<Self>, _surface: &Arc<dyn Surface>, percent: i64) {
        let link = self.remote_link.lock().clone();
        if let Some(link) = link {
            link.progress_changed(self, percent);
        }
    }

    /// Presents `view` as exclusive full-screen content.
    pub fn on_show_custom_view(&self, view: ViewHandle, on_hidden: ViewHiddenCallback) {
        self.presenter.show(view, on_hidden);
    }

    /// Dismisses the presented full-screen content, if any.
    pub fn on_hide_custom_view(&self) {
        self.presenter.hide();
    }

    /// Answers a request from `origin` to open a new window.
    ///
    /// `probe` lets tests inject the throwaway surface; production
    /// callers pass `None` and the factory supplies one.
    pub fn on_create_window(
        &self,
        origin: Arc<dyn Surface>,
        request: PendingWindowRequest,
        probe: Option<Arc<dyn Surface>>,
    ) -> bool {
        window::open_window(
            self.delegate.lock().clone(),
            self.surfaces.as_ref(),
            origin,
            request,
            probe,
        )
    }

    /// Swaps the navigation delegate consulted for new-window loads.
    pub fn set_navigation_delegate(&self, delegate: Arc<dyn NavigationDelegate>) {
        *self.delegate.lock() = delegate;
    }

    /// Handle of the view currently presented full-screen, if any.
    pub fn active_view(&self) -> Option<ViewHandle> {
        self.presenter.active_view()
    }

    /// Tells the remote runtime this controller's counterpart may be
    /// discarded and severs the link. Idempotent.
    pub fn release(self: &Arc<Self>) {
        let link = self.remote_link.lock().take();
        if let Some(link) = link {
            link.dispose(self);
        }
    }
}
