//! Bridges a host-side web-rendering surface to a remote application
//! runtime living in a separate memory space.
//!
//! - Shares mutable object identity through an id↔object registry
//! - Forwards rendering-engine callbacks (load progress, disposal) to
//!   the remote runtime as fire-and-forget events
//! - Runs the full-screen presentation state machine against the host
//!   chrome, restoring UI-visibility and orientation on exit
//! - Intercepts new-window requests with a probe surface so the
//!   navigation decision happens before any content loads
//!
//! The platform sits behind small capability traits ([`HostChrome`],
//! [`Surface`], [`MessageTransport`]); every collaborator is injected
//! at construction, so the whole bridge runs against in-memory fakes
//! in tests.

pub mod chrome;
pub mod chrome_client;
pub mod constants;
pub mod events;
pub mod host_api;
pub mod presentation;
pub mod registry;
pub mod surface;
pub mod window;

#[cfg(test)]
mod testing;

pub use chrome::{HostChrome, ViewContainer, ViewHandle};
pub use chrome_client::ChromeClientController;
pub use events::{ChromeClientEventApi, EventChannel, JsonEventChannel, MessageTransport};
pub use host_api::ChromeClientHostApi;
pub use presentation::{
    FullScreenPresenter, PresentationState, SavedChromeState, ViewHiddenCallback,
    fullscreen_ui_visibility,
};
pub use registry::{ChromeBridgeError, Instance, InstanceId, InstanceRegistry};
pub use surface::{
    LoadRequest, NavigationDelegate, NavigationShim, PendingWindowRequest, Surface,
    SurfaceFactory, WindowTransport,
};
pub use window::WindowNavigationShim;

use std::sync::Once;

use env_logger::{Builder, Env};

// A host can bring the bridge up more than once per process, and
// env_logger refuses a second init, so the guard is static.
static LOGGER_INIT: Once = Once::new();

/// Initializes diagnostic logging. Safe to call repeatedly.
pub fn init_logging() {
    LOGGER_INIT.call_once(|| {
        Builder::from_env(Env::default().default_filter_or("debug")).init();
    });
}
