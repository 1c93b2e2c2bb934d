/// UI-visibility flag: hide the navigation bar.
pub const UI_FLAG_HIDE_NAVIGATION: i32 = 0x0000_0002;

/// UI-visibility flag: hide the status bar.
pub const UI_FLAG_FULLSCREEN: i32 = 0x0000_0004;

/// UI-visibility flag: keep the layout stable while bars toggle.
pub const UI_FLAG_LAYOUT_STABLE: i32 = 0x0000_0100;

/// UI-visibility flag: lay out as if the navigation bar were hidden.
pub const UI_FLAG_LAYOUT_HIDE_NAVIGATION: i32 = 0x0000_0200;

/// UI-visibility flag: lay out as if the status bar were hidden.
pub const UI_FLAG_LAYOUT_FULLSCREEN: i32 = 0x0000_0400;

/// UI-visibility flag: bars stay hidden until the user swipes.
pub const UI_FLAG_IMMERSIVE: i32 = 0x0000_0800;

/// UI-visibility flag: bars re-hide themselves after a swipe.
pub const UI_FLAG_IMMERSIVE_STICKY: i32 = 0x0000_1000;

/// Flag set applied to the root container while presenting full-screen
/// content on hosts without per-flag immersive support.
pub const FULLSCREEN_UI_VISIBILITY: i32 = UI_FLAG_LAYOUT_HIDE_NAVIGATION
    | UI_FLAG_LAYOUT_FULLSCREEN
    | UI_FLAG_LAYOUT_STABLE
    | UI_FLAG_HIDE_NAVIGATION
    | UI_FLAG_FULLSCREEN;

/// Broader flag set used once the host supports sticky immersive mode.
pub const FULLSCREEN_UI_VISIBILITY_IMMERSIVE: i32 = FULLSCREEN_UI_VISIBILITY
    | UI_FLAG_IMMERSIVE
    | UI_FLAG_IMMERSIVE_STICKY;

/// Lowest host version that understands the immersive flag set.
pub const IMMERSIVE_UI_MIN_VERSION: u32 = 19;

/// Orientation value requested while full-screen content is showing.
pub const ORIENTATION_LANDSCAPE: i32 = 0;

/// Orientation value the host is left in after full-screen content is
/// dismissed, regardless of what was saved on entry.
pub const ORIENTATION_PORTRAIT: i32 = 1;

/// Channel name carrying controller events to the remote runtime.
pub const EVENT_CHANNEL_NAME: &str = "webview_chrome_bridge/events";
