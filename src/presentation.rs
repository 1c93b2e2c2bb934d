//! Entry and exit of exclusive full-screen content.
//!
//! The presenter owns the only mutable presentation state of a
//! controller. Chrome state saved on entry is restored on exit, with
//! one deliberate exception: the terminal orientation is always the
//! portrait constant, not whatever was saved.

use std::mem;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::Mutex;

use crate::chrome::{HostChrome, ViewHandle};
use crate::constants::{
    FULLSCREEN_UI_VISIBILITY, FULLSCREEN_UI_VISIBILITY_IMMERSIVE, IMMERSIVE_UI_MIN_VERSION,
    ORIENTATION_LANDSCAPE, ORIENTATION_PORTRAIT,
};

/// Invoked exactly once when the presented view has been dismissed.
pub type ViewHiddenCallback = Box<dyn FnOnce() + Send>;

/// Chrome state captured on entry and restored on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedChromeState {
    pub ui_visibility: i32,
    pub orientation: i32,
}

/// Presentation state. The view, the saved chrome state, and the
/// completion callback exist together or not at all.
pub enum PresentationState {
    Normal,
    Presenting {
        view: ViewHandle,
        saved: SavedChromeState,
        on_hidden: ViewHiddenCallback,
    },
}

/// Selects the UI-visibility flag set for full-screen presentation.
pub fn fullscreen_ui_visibility(immersive: bool) -> i32 {
    if immersive {
        FULLSCREEN_UI_VISIBILITY_IMMERSIVE
    } else {
        FULLSCREEN_UI_VISIBILITY
    }
}

/// State machine driving full-screen entry and exit against the host
/// chrome capability.
pub struct FullScreenPresenter {
    chrome: Arc<dyn HostChrome>,
    state: Mutex<PresentationState>,
}

impl FullScreenPresenter {
    pub fn new(chrome: Arc<dyn HostChrome>) -> Self {
        FullScreenPresenter {
            chrome,
            state: Mutex::new(PresentationState::Normal),
        }
    }

    pub fn is_presenting(&self) -> bool {
        matches!(*self.state.lock(), PresentationState::Presenting { .. })
    }

    /// Handle of the view currently presented, if any.
    pub fn active_view(&self) -> Option<ViewHandle> {
        match &*self.state.lock() {
            PresentationState::Normal => None,
            PresentationState::Presenting { view, .. } => Some(view.clone()),
        }
    }

    /// Presents `view` full-screen.
    ///
    /// A show while already presenting performs an implicit [`hide`]
    /// and ignores the new request; re-entrant shows never stack. A
    /// show with no resolvable root container is a logged no-op and
    /// the callback is dropped uninvoked.
    ///
    /// [`hide`]: FullScreenPresenter::hide
    pub fn show(&self, view: ViewHandle, on_hidden: ViewHiddenCallback) {
        if self.is_presenting() {
            warn!(
                "[FullScreenPresenter] Show requested while already presenting. Hiding instead."
            );
            self.hide();
            return;
        }

        let Some(container) = self.chrome.root_container() else {
            warn!("[FullScreenPresenter] No root container available. Show request ignored.");
            return;
        };

        let saved = SavedChromeState {
            ui_visibility: self.chrome.ui_visibility(),
            orientation: self.chrome.orientation(),
        };
        *self.state.lock() = PresentationState::Presenting {
            view: view.clone(),
            saved,
            on_hidden,
        };

        let immersive = self.chrome.version_at_least(IMMERSIVE_UI_MIN_VERSION);
        self.chrome
            .set_ui_visibility(fullscreen_ui_visibility(immersive));
        self.chrome.set_layout_no_limits(true);
        container.add_view(view);
        self.chrome.set_orientation(ORIENTATION_LANDSCAPE);
    }

    /// Dismisses the presented view and restores the host chrome.
    ///
    /// Idempotent: a hide with nothing presented is a no-op. A hide
    /// while the root container is unresolvable keeps the presenting
    /// state untouched, modelling a torn-down hosting context.
    pub fn hide(&self) {
        let mut state = self.state.lock();
        if matches!(*state, PresentationState::Normal) {
            debug!("[FullScreenPresenter] Hide with nothing presented. No-op.");
            return;
        }

        let Some(container) = self.chrome.root_container() else {
            warn!(
                "[FullScreenPresenter] No root container available. Presentation state kept as is."
            );
            return;
        };

        let taken = mem::replace(&mut *state, PresentationState::Normal);
        drop(state);
        let PresentationState::Presenting {
            view,
            saved,
            on_hidden,
        } = taken
        else {
            return;
        };

        container.remove_view(&view);
        self.chrome.set_ui_visibility(saved.ui_visibility);
        self.chrome.set_orientation(saved.orientation);
        on_hidden();
        self.chrome.set_layout_no_limits(false);
        self.chrome.set_orientation(ORIENTATION_PORTRAIT);
    }
}
