/// Share URL - Chrome extension for sharing and copying page URLs
/// Built with Rust + WASM + Yew
///
/// The same module runs in the background service worker and, injected on
/// demand, inside the page of the target tab.

mod background;
mod clipboard;
mod compose;
mod config;
mod context;
mod dispatcher;
mod interop;
pub mod page;
mod tab_data;
mod toast;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::interop::{from_js, js_error};
use crate::tab_data::{CopyArgs, ToastArgs};

pub use crate::clipboard::{ClipboardError, ClipboardSink, CopyError, FocusSignal};
pub use crate::compose::{compose_url, encode_uri_component};
pub use crate::config::{TOAST_DISMISS_MS, TOAST_FADE_MS, toast_selector};
pub use crate::tab_data::ClickInfo;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Background entry point: keyboard command
#[wasm_bindgen]
pub async fn on_command(command: String) {
    background::handle_command(&command).await;
}

// Background entry point: context menu click
#[wasm_bindgen]
pub async fn on_menu_click(info: JsValue, tab: JsValue) {
    background::handle_menu_click(info, tab).await;
}

// Background entry point: extension installed or browser started
#[wasm_bindgen]
pub async fn on_installed() {
    background::handle_installed().await;
}

// Page entry point: copy the page URL, resolving with the copied text
#[wasm_bindgen]
pub async fn copy_page_url(args: JsValue) -> Result<String, JsValue> {
    let args: CopyArgs = from_js(args).map_err(|e| js_error(&e))?;
    page::copy_page_url(&args).await.map_err(|e| {
        log::error!("{}: {}", e, e.cause);
        js_error(&format!("{}: {}", e, e.cause))
    })
}

// Page entry point: open the native share sheet for a menu click
#[wasm_bindgen]
pub async fn share_from_menu(info: JsValue) -> Result<(), JsValue> {
    let info: ClickInfo = from_js(info).map_err(|e| js_error(&e))?;
    page::share_from_menu(&info).await;
    Ok(())
}

// Page entry point: show the confirmation toast
#[wasm_bindgen]
pub fn show_toast(args: JsValue) -> Result<bool, JsValue> {
    let args: ToastArgs = from_js(args).map_err(|e| js_error(&e))?;
    ui::show_toast(&args.text)
}
