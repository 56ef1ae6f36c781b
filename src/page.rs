/// Action runners executed inside the target page's isolated world
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, DomException};

use crate::clipboard::{self, ClipboardError, ClipboardSink, CopyError, FocusSignal};
use crate::context::ShareTarget;
use crate::interop::{describe_js_error, to_js};
use crate::tab_data::{ClickInfo, CopyArgs};

const PLAIN_TEXT: &str = "text/plain";

#[wasm_bindgen]
extern "C" {
    type ClipboardItem;

    #[wasm_bindgen(constructor)]
    fn new(items: &js_sys::Object) -> ClipboardItem;

    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = write)]
    async fn clipboard_write(items: js_sys::Array) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = navigator, js_name = share)]
    async fn navigator_share(data: JsValue) -> Result<JsValue, JsValue>;
}

/// Current text selection of the window, empty when there is none
pub fn selection_text() -> String {
    web_sys::window()
        .and_then(|window| window.get_selection().ok().flatten())
        .map(|selection| String::from(selection.to_string()))
        .unwrap_or_default()
}

pub fn document_has_focus() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.has_focus().ok())
        .unwrap_or(false)
}

/// Clipboard of the page's navigator, written with a `text/plain` ClipboardItem
pub struct WebClipboard;

impl WebClipboard {
    fn item(text: &str) -> Result<ClipboardItem, JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(text));
        let options = BlobPropertyBag::new();
        options.set_type(PLAIN_TEXT);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

        let record = js_sys::Object::new();
        js_sys::Reflect::set(&record, &JsValue::from_str(PLAIN_TEXT), &blob)?;
        Ok(ClipboardItem::new(&record))
    }

    /// Sort a rejected write into focus errors and everything else
    pub fn classify(err: JsValue) -> ClipboardError {
        if err.is_instance_of::<DomException>() && !document_has_focus() {
            ClipboardError::NotFocused
        } else {
            ClipboardError::Platform(describe_js_error(&err))
        }
    }
}

impl ClipboardSink for WebClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        let item = Self::item(text);
        async move {
            let item = item.map_err(Self::classify)?;
            clipboard_write(js_sys::Array::of1(&item))
                .await
                .map(|_| ())
                .map_err(Self::classify)
        }
    }
}

/// Focus events of the page's window
#[derive(Default)]
pub struct WindowFocus {
    armed: Rc<Cell<u32>>,
}

impl WindowFocus {
    /// Number of focus listeners currently attached to the window
    pub fn armed_listeners(&self) -> u32 {
        self.armed.get()
    }
}

/// A focus listener on the window; detached when dropped
struct FocusWait {
    _listener: EventListener,
    armed: Rc<Cell<u32>>,
}

impl FocusWait {
    fn attach(window: &web_sys::Window, armed: Rc<Cell<u32>>, on_focus: oneshot::Sender<()>) -> FocusWait {
        let mut on_focus = Some(on_focus);
        let listener = EventListener::new(window, "focus", move |_| {
            if let Some(tx) = on_focus.take() {
                let _ = tx.send(());
            }
        });
        armed.set(armed.get() + 1);
        FocusWait {
            _listener: listener,
            armed,
        }
    }
}

impl Drop for FocusWait {
    fn drop(&mut self) {
        self.armed.set(self.armed.get().saturating_sub(1));
    }
}

impl FocusSignal for WindowFocus {
    fn focused(&self) -> impl Future<Output = ()> {
        let armed = self.armed.clone();
        async move {
            let Some(window) = web_sys::window() else {
                return futures::future::pending::<()>().await;
            };

            let (focus_tx, focus_rx) = oneshot::channel();
            // Lives until focus arrives or the wait is abandoned
            let _wait = FocusWait::attach(&window, armed, focus_tx);

            let _ = focus_rx.await;
        }
    }
}

/// Copy the shareable URL of the current page, see `clipboard::copy_page_url`
pub async fn copy_page_url(args: &CopyArgs) -> Result<String, CopyError> {
    let selection = selection_text();
    clipboard::copy_page_url(&WebClipboard, &WindowFocus::default(), args, &selection).await
}

/// Open the native share sheet for a context menu click. Errors are logged, never returned.
pub async fn share_from_menu(info: &ClickInfo) {
    let Some(target) = ShareTarget::resolve(info) else {
        log::warn!("Nothing to share for menu item '{}'", info.menu_item_id);
        return;
    };

    let data = match to_js(&target.to_share_data()) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Error sharing: {}", e);
            return;
        }
    };

    match navigator_share(data).await {
        Ok(_) => log::info!("Shared {:?}", target),
        Err(e) => log::error!("Error sharing: {}", describe_js_error(&e)),
    }
}
