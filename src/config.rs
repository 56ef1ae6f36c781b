/// Fixed values shared by the background and page contexts

/// Keyboard command that copies the active tab's URL
pub const COPY_COMMAND: &str = "share-current-page-url";

/// Message shown in the toast after a successful copy
pub const COPIED_TOAST_TEXT: &str = "URL Copied to Clipboard";

/// Time a toast stays visible before it starts fading out (ms)
pub const TOAST_DISMISS_MS: u32 = 3000;

/// Duration of the fade-out transition (ms)
pub const TOAST_FADE_MS: u32 = 150;

/// Marker attribute placed on the toast host element
pub const TOAST_MARKER_ATTR: &str = "data-toast-id";
pub const TOAST_MARKER_VALUE: &str = "url-copy-toast";

/// Script injected ahead of every page entry point; it loads the wasm module
pub const PAGE_BOOTSTRAP_FILE: &str = "js/page.js";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// CSS selector matching an existing toast host
pub fn toast_selector() -> String {
    format!("div[{}=\"{}\"]", TOAST_MARKER_ATTR, TOAST_MARKER_VALUE)
}
