//! Capability seam over the hosting window and its system UI state.

use std::sync::Arc;

/// Opaque handle naming a native view node supplied by the host.
///
/// The bridge never inspects the node behind the handle; it only
/// attaches it to and detaches it from the host's root container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewHandle(pub u64);

/// A container view that full-screen content can be parented into.
///
/// Attached views are expected to be sized to fill the container.
pub trait ViewContainer: Send + Sync {
    fn add_view(&self, view: ViewHandle);
    fn remove_view(&self, view: &ViewHandle);
}

/// Host chrome manipulation primitives.
///
/// Everything here is UI-thread-affine on real hosts; the bridge only
/// touches it from the callbacks the host itself invokes.
pub trait HostChrome: Send + Sync {
    /// Root container for full-screen content, or `None` when the
    /// hosting activity has been torn down.
    fn root_container(&self) -> Option<Arc<dyn ViewContainer>>;

    fn ui_visibility(&self) -> i32;

    fn set_ui_visibility(&self, flags: i32);

    fn orientation(&self) -> i32;

    fn set_orientation(&self, orientation: i32);

    /// Suspends (or restores) layout-size limits on the host window so
    /// presented content may draw outside the normal insets.
    fn set_layout_no_limits(&self, enabled: bool);

    /// Whether the host platform reports at least the given version.
    fn version_at_least(&self, version: u32) -> bool;
}
